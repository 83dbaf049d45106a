//! Browser tests for the submit listener binding
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/glycemia-pages

#![cfg(target_arch = "wasm32")]

use glycemia_forms::settings::DEFAULT_MESSAGE;
use glycemia_forms::{ElementRole, FieldName, FormError, FormValidator, ValidatorSettings};
use glycemia_pages::{BindError, BrowserDocument, attach_to};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Mount a prediction form with all inputs and error slots
fn mount(form_id: &str) -> web_sys::Element {
	let doc = document();
	let form = doc.create_element("form").unwrap();
	form.set_id(form_id);

	for name in FieldName::ALL {
		let input = doc.create_element("input").unwrap();
		input.set_id(name.as_str());
		form.append_child(&input).unwrap();

		let slot = doc.create_element("span").unwrap();
		slot.set_id(&format!("{name}Error"));
		slot.set_class_name("error");
		form.append_child(&slot).unwrap();
	}

	doc.body().unwrap().append_child(&form).unwrap();
	form
}

fn set_value(id: &str, value: &str) {
	document()
		.get_element_by_id(id)
		.unwrap()
		.dyn_into::<web_sys::HtmlInputElement>()
		.unwrap()
		.set_value(value);
}

fn slot_text(name: FieldName) -> String {
	document()
		.get_element_by_id(&format!("{name}Error"))
		.unwrap()
		.text_content()
		.unwrap_or_default()
}

fn submit(form: &web_sys::Element) -> web_sys::Event {
	let init = web_sys::EventInit::new();
	init.set_bubbles(true);
	init.set_cancelable(true);
	let event = web_sys::Event::new_with_event_init_dict("submit", &init).unwrap();
	form.dispatch_event(&event).unwrap();
	event
}

fn bind(form_id: &str) -> Result<glycemia_pages::SubmitBinding, BindError> {
	let settings = ValidatorSettings::default().with_form_id(form_id);
	attach_to(
		BrowserDocument::new(document()),
		FormValidator::with_settings(settings),
	)
}

#[wasm_bindgen_test]
fn test_mixed_values_block_submission() {
	let form = mount("mixedForm");
	let binding = bind("mixedForm").unwrap();

	for (name, value) in [
		(FieldName::Pregnancies, "2"),
		(FieldName::Glucose, ""),
		(FieldName::BloodPressure, "70"),
		(FieldName::SkinThickness, "30"),
		(FieldName::Insulin, "100"),
		(FieldName::Bmi, "28.5"),
		(FieldName::DiabetesPedigreeFunction, "0.5"),
		(FieldName::Age, "x"),
	] {
		set_value(name.as_str(), value);
	}

	let event = submit(&form);

	assert!(event.default_prevented());
	for name in FieldName::ALL {
		let expected = match name {
			FieldName::Glucose | FieldName::Age => DEFAULT_MESSAGE,
			_ => "",
		};
		assert_eq!(slot_text(name), expected);
	}

	drop(binding);
	form.remove();
}

#[wasm_bindgen_test]
fn test_valid_values_allow_submission() {
	let form = mount("validForm");
	let binding = bind("validForm").unwrap();

	for (name, value) in [
		(FieldName::Pregnancies, "0"),
		(FieldName::Glucose, "120"),
		(FieldName::BloodPressure, "80"),
		(FieldName::SkinThickness, "20"),
		(FieldName::Insulin, "85"),
		(FieldName::Bmi, "22.1"),
		(FieldName::DiabetesPedigreeFunction, "0.3"),
		(FieldName::Age, "45"),
	] {
		set_value(name.as_str(), value);
	}

	let event = submit(&form);

	assert!(!event.default_prevented());
	for name in FieldName::ALL {
		assert_eq!(slot_text(name), "");
	}

	drop(binding);
	form.remove();
}

#[wasm_bindgen_test]
fn test_missing_form_is_reported() {
	assert!(matches!(
		bind("noSuchForm"),
		Err(BindError::FormNotFound(id)) if id == "noSuchForm"
	));
}

#[wasm_bindgen_test]
fn test_missing_error_slot_fails_fast() {
	let form = mount("brokenForm");
	document().get_element_by_id("InsulinError").unwrap().remove();

	assert!(matches!(
		bind("brokenForm"),
		Err(BindError::Form(FormError::MissingElement {
			field: FieldName::Insulin,
			role: ElementRole::ErrorSlot,
			..
		}))
	));

	form.remove();
}

#[wasm_bindgen_test]
fn test_non_input_under_field_id_fails_fast() {
	let form = mount("labelForm");
	let doc = document();
	doc.get_element_by_id("Glucose").unwrap().remove();
	let label = doc.create_element("span").unwrap();
	label.set_id("Glucose");
	form.append_child(&label).unwrap();

	assert!(matches!(
		bind("labelForm"),
		Err(BindError::Form(FormError::NotAnInput { id })) if id == "Glucose"
	));

	form.remove();
}

#[wasm_bindgen_test]
fn test_dropping_binding_detaches_listener() {
	let form = mount("detachForm");
	let binding = bind("detachForm").unwrap();
	drop(binding);

	let event = submit(&form);

	assert!(!event.default_prevented());
	assert_eq!(slot_text(FieldName::Glucose), "");

	form.remove();
}
