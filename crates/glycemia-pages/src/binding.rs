//! Submit listener binding
//!
//! Attaches a [`FormValidator`] to the `submit` event of the prediction form.
//!
//! ## Lifecycle
//!
//! ```text
//! attach(settings)
//!   ├─ resolve window, document, form
//!   ├─ check_bindings()        fail fast on a missing input or error slot
//!   └─ add "submit" listener ──▶ SubmitBinding
//!                                  ├─ forget()  keep for page lifetime
//!                                  └─ drop      detach the listener
//! ```
//!
//! Each submit event runs [`FormValidator::handle_submit`]. If the page lost
//! an element after binding, the error is logged and the submission is
//! cancelled.
//!
//! ## Example
//!
//! ```ignore
//! use glycemia_pages::binding::attach;
//! use glycemia_forms::ValidatorSettings;
//!
//! attach(ValidatorSettings::default())?.forget();
//! ```

use glycemia_forms::FormError;
#[cfg(target_arch = "wasm32")]
use glycemia_forms::{FormValidator, SubmitControl, ValidatorSettings};

#[cfg(target_arch = "wasm32")]
use crate::dom::{BrowserDocument, BrowserSubmit};
#[cfg(target_arch = "wasm32")]
use crate::{debug_log, error_log, info_log, warn_log};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Errors raised while attaching the validator to a page.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
	/// Not running in a browser window
	#[error("No global window is available")]
	NoWindow,
	/// The window has no document
	#[error("The window has no document")]
	NoDocument,
	/// No element carries the configured form id
	#[error("Form element '{0}' not found")]
	FormNotFound(String),
	/// `addEventListener` threw
	#[error("Failed to attach submit listener: {0}")]
	Listener(String),
	/// The page does not satisfy the field map
	#[error(transparent)]
	Form(#[from] FormError),
}

/// A submit listener attached to a form element (WASM only).
///
/// Dropping the binding removes the listener.
#[cfg(target_arch = "wasm32")]
pub struct SubmitBinding {
	form: web_sys::Element,
	closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[cfg(target_arch = "wasm32")]
impl SubmitBinding {
	/// The form element the listener is attached to
	pub fn form(&self) -> &web_sys::Element {
		&self.form
	}

	/// Keep the listener attached for the lifetime of the page
	pub fn forget(mut self) {
		if let Some(closure) = self.closure.take() {
			closure.forget();
		}
	}
}

#[cfg(target_arch = "wasm32")]
impl Drop for SubmitBinding {
	fn drop(&mut self) {
		if let Some(closure) = self.closure.take() {
			let _ = self
				.form
				.remove_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
		}
	}
}

/// Attach a conventional validator for `settings` to the global document.
#[cfg(target_arch = "wasm32")]
pub fn attach(settings: ValidatorSettings) -> Result<SubmitBinding, BindError> {
	let window = web_sys::window().ok_or(BindError::NoWindow)?;
	let document = window.document().ok_or(BindError::NoDocument)?;
	attach_to(
		BrowserDocument::new(document),
		FormValidator::with_settings(settings),
	)
}

/// Attach `validator` to the form of `document` named by its settings.
#[cfg(target_arch = "wasm32")]
pub fn attach_to(
	mut document: BrowserDocument,
	validator: FormValidator,
) -> Result<SubmitBinding, BindError> {
	let form_id = validator.settings().form_id.clone();
	let form = document
		.inner()
		.get_element_by_id(&form_id)
		.ok_or_else(|| BindError::FormNotFound(form_id.clone()))?;

	validator.check_bindings(&document)?;

	let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
		let mut submit = BrowserSubmit::new(event);
		match validator.handle_submit(&mut document, &mut submit) {
			Ok(report) if report.is_valid() => {
				debug_log!(
					"Feature row: {:?}",
					report.prediction_input().map(|input| input.features())
				);
				info_log!("Submission of #{} allowed", validator.settings().form_id);
			}
			Ok(report) => {
				debug_log!("Parsed values: {:?}", report);
				warn_log!(
					"Submission of #{} blocked: {:?}",
					validator.settings().form_id,
					report.invalid_fields()
				);
			}
			Err(err) => {
				error_log!("Form validation failed: {}", err);
				submit.prevent_default();
			}
		}
	}) as Box<dyn FnMut(_)>);

	form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
		.map_err(|e| BindError::Listener(format!("{:?}", e)))?;

	info_log!("Submit listener attached to #{}", form_id);

	Ok(SubmitBinding {
		form,
		closure: Some(closure),
	})
}

/// Attach the validator with default settings and keep it for the page
/// lifetime.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = initPredictionForm)]
pub fn init_prediction_form() -> Result<(), JsValue> {
	install_panic_hook();
	attach(ValidatorSettings::default())
		.map(SubmitBinding::forget)
		.map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Same as [`init_prediction_form`], with settings given as JSON.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = initPredictionFormWith)]
pub fn init_prediction_form_with(settings_json: &str) -> Result<(), JsValue> {
	install_panic_hook();
	ValidatorSettings::from_json(settings_json)
		.map_err(BindError::from)
		.and_then(attach)
		.map(SubmitBinding::forget)
		.map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Module start hook attaching the validator with default settings.
#[cfg(all(target_arch = "wasm32", feature = "autostart"))]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	init_prediction_form()
}

#[cfg(target_arch = "wasm32")]
fn install_panic_hook() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();
}
