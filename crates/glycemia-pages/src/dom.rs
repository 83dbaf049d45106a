//! `web-sys` implementations of the validator seams (WASM only)

use glycemia_forms::{FormDocument, FormError, FormResult, SubmitControl};
use wasm_bindgen::JsCast;

/// A live browser document seen through [`FormDocument`].
#[derive(Debug, Clone)]
pub struct BrowserDocument {
	document: web_sys::Document,
}

impl BrowserDocument {
	/// Wrap an existing document
	pub fn new(document: web_sys::Document) -> Self {
		Self { document }
	}

	/// The wrapped document
	pub fn inner(&self) -> &web_sys::Document {
		&self.document
	}
}

impl FormDocument for BrowserDocument {
	fn has_element(&self, id: &str) -> bool {
		self.document.get_element_by_id(id).is_some()
	}

	fn input_value(&self, id: &str) -> FormResult<Option<String>> {
		let Some(element) = self.document.get_element_by_id(id) else {
			return Ok(None);
		};
		element
			.dyn_into::<web_sys::HtmlInputElement>()
			.map(|input| Some(input.value()))
			.map_err(|_| FormError::NotAnInput { id: id.to_string() })
	}

	fn set_error_text(&mut self, id: &str, text: &str) -> FormResult<bool> {
		match self.document.get_element_by_id(id) {
			Some(element) => {
				element.set_text_content(Some(text));
				Ok(true)
			}
			None => Ok(false),
		}
	}

	fn clear_marked(&mut self, class: &str) -> FormResult<()> {
		// Live collection; clearing text does not change membership.
		let marked = self.document.get_elements_by_class_name(class);
		for i in 0..marked.length() {
			if let Some(element) = marked.item(i) {
				element.set_text_content(Some(""));
			}
		}
		Ok(())
	}
}

/// A dispatched `submit` event seen through [`SubmitControl`].
#[derive(Debug, Clone)]
pub struct BrowserSubmit {
	event: web_sys::Event,
}

impl BrowserSubmit {
	/// Wrap a dispatched event
	pub fn new(event: web_sys::Event) -> Self {
		Self { event }
	}

	/// The wrapped event
	pub fn event(&self) -> &web_sys::Event {
		&self.event
	}
}

impl SubmitControl for BrowserSubmit {
	fn prevent_default(&mut self) {
		self.event.prevent_default();
	}

	fn default_prevented(&self) -> bool {
		self.event.default_prevented()
	}
}
