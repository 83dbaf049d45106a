//! Document and event seams
//!
//! The validator never touches a browser directly. It reads inputs and writes
//! error slots through [`FormDocument`] and cancels submission through
//! [`SubmitControl`]. `glycemia-pages` implements both over `web-sys`; the
//! in-memory versions here back the tests and native callers.

use crate::error::{FormError, FormResult};
use crate::field::FieldMap;
use crate::settings::ValidatorSettings;
use std::collections::HashMap;

/// Element access needed by the validator.
pub trait FormDocument {
	/// Whether an element with this id exists
	fn has_element(&self, id: &str) -> bool;

	/// Current value of the input control with this id.
	///
	/// Returns `Ok(None)` when no element has this id and
	/// [`FormError::NotAnInput`] when the element is not an input control.
	fn input_value(&self, id: &str) -> FormResult<Option<String>>;

	/// Replace the text content of the element with this id.
	///
	/// Returns `Ok(false)` when no element has this id.
	fn set_error_text(&mut self, id: &str, text: &str) -> FormResult<bool>;

	/// Clear the text content of every element carrying `class`
	fn clear_marked(&mut self, class: &str) -> FormResult<()>;
}

/// Control over the default action of a submit event.
pub trait SubmitControl {
	/// Cancel the default submission
	fn prevent_default(&mut self);

	/// Whether the default submission has been cancelled
	fn default_prevented(&self) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct MemoryElement {
	value: Option<String>,
	text: String,
	classes: Vec<String>,
}

/// In-memory document holding inputs and text elements by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
	elements: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
	pub fn new() -> Self {
		Self::default()
	}

	/// Document with all eight inputs (empty) and their error slots.
	///
	/// # Examples
	///
	/// ```
	/// use glycemia_forms::{MemoryDocument, ValidatorSettings};
	///
	/// let doc = MemoryDocument::prediction_form(&ValidatorSettings::default());
	/// assert_eq!(doc.value("Glucose"), Some(""));
	/// assert_eq!(doc.text("GlucoseError"), Some(""));
	/// ```
	pub fn prediction_form(settings: &ValidatorSettings) -> Self {
		let mut doc = Self::new();
		for descriptor in &FieldMap::conventional(settings) {
			doc.insert_input(&descriptor.input_id, "");
			doc.insert_text(&descriptor.error_id, [settings.error_class.as_str()]);
		}
		doc
	}

	/// Add (or replace) an input control
	pub fn insert_input(&mut self, id: impl Into<String>, value: impl Into<String>) {
		self.elements.insert(
			id.into(),
			MemoryElement {
				value: Some(value.into()),
				..Default::default()
			},
		);
	}

	/// Add (or replace) a text element carrying the given classes
	pub fn insert_text<'a>(
		&mut self,
		id: impl Into<String>,
		classes: impl IntoIterator<Item = &'a str>,
	) {
		self.elements.insert(
			id.into(),
			MemoryElement {
				classes: classes.into_iter().map(str::to_string).collect(),
				..Default::default()
			},
		);
	}

	/// Set the value of an existing input; returns false if there is none.
	pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
		match self.elements.get_mut(id) {
			Some(element) if element.value.is_some() => {
				element.value = Some(value.into());
				true
			}
			_ => false,
		}
	}

	/// Overwrite the text of an element directly, bypassing the validator
	pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
		match self.elements.get_mut(id) {
			Some(element) => {
				element.text = text.into();
				true
			}
			None => false,
		}
	}

	pub fn remove(&mut self, id: &str) -> bool {
		self.elements.remove(id).is_some()
	}

	/// Input value, if the element exists and is an input
	pub fn value(&self, id: &str) -> Option<&str> {
		self.elements.get(id).and_then(|e| e.value.as_deref())
	}

	/// Text content, if the element exists
	pub fn text(&self, id: &str) -> Option<&str> {
		self.elements.get(id).map(|e| e.text.as_str())
	}
}

impl FormDocument for MemoryDocument {
	fn has_element(&self, id: &str) -> bool {
		self.elements.contains_key(id)
	}

	fn input_value(&self, id: &str) -> FormResult<Option<String>> {
		match self.elements.get(id) {
			None => Ok(None),
			Some(element) => element
				.value
				.clone()
				.map(Some)
				.ok_or_else(|| FormError::NotAnInput { id: id.to_string() }),
		}
	}

	fn set_error_text(&mut self, id: &str, text: &str) -> FormResult<bool> {
		Ok(self.set_text(id, text))
	}

	fn clear_marked(&mut self, class: &str) -> FormResult<()> {
		self.elements
			.values_mut()
			.filter(|e| e.classes.iter().any(|c| c == class))
			.for_each(|e| e.text.clear());
		Ok(())
	}
}

/// Submit event stand-in that records cancellation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordedSubmit {
	prevented: bool,
}

impl RecordedSubmit {
	pub fn new() -> Self {
		Self::default()
	}
}

impl SubmitControl for RecordedSubmit {
	fn prevent_default(&mut self) {
		self.prevented = true;
	}

	fn default_prevented(&self) -> bool {
		self.prevented
	}
}
