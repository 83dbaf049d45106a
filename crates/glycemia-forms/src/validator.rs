//! Submission validator for the prediction form
//!
//! Each submission attempt is handled from scratch:
//!
//! 1. every element carrying the error class is cleared,
//! 2. each field value is trimmed and checked against the numeric policy,
//! 3. each invalid field gets the error message in its own slot,
//! 4. the default submission is cancelled if any field was invalid.
//!
//! ## Example
//!
//! ```
//! use glycemia_forms::{FormValidator, MemoryDocument, RecordedSubmit, SubmitControl, ValidatorSettings};
//!
//! let validator = FormValidator::default();
//! let mut doc = MemoryDocument::prediction_form(&ValidatorSettings::default());
//! let mut event = RecordedSubmit::new();
//!
//! validator.check_bindings(&doc).unwrap();
//! let report = validator.handle_submit(&mut doc, &mut event).unwrap();
//!
//! assert!(!report.is_valid());
//! assert!(event.default_prevented());
//! ```

use crate::document::{FormDocument, SubmitControl};
use crate::error::{ElementRole, FormError, FormResult};
use crate::field::{FieldDescriptor, FieldMap, FieldName};
use crate::numeric::parse_number;
use crate::report::ValidationReport;
use crate::settings::ValidatorSettings;

/// Stateless validator for the eight required numeric fields.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
	fields: FieldMap,
	settings: ValidatorSettings,
}

impl FormValidator {
	/// Create a validator from an explicit field map and settings
	pub fn new(fields: FieldMap, settings: ValidatorSettings) -> Self {
		Self { fields, settings }
	}

	/// Create a validator using the conventional field map for `settings`
	pub fn with_settings(settings: ValidatorSettings) -> Self {
		Self {
			fields: FieldMap::conventional(&settings),
			settings,
		}
	}

	pub fn fields(&self) -> &FieldMap {
		&self.fields
	}

	pub fn settings(&self) -> &ValidatorSettings {
		&self.settings
	}

	/// Verify that every input and error slot resolves in `doc`.
	///
	/// Returns the first missing element in canonical field order, or
	/// [`FormError::NotAnInput`] when an input id names some other element.
	pub fn check_bindings<D: FormDocument + ?Sized>(&self, doc: &D) -> FormResult<()> {
		for descriptor in &self.fields {
			if doc.input_value(&descriptor.input_id)?.is_none() {
				return Err(missing(descriptor, ElementRole::Input));
			}
			if !doc.has_element(&descriptor.error_id) {
				return Err(missing(descriptor, ElementRole::ErrorSlot));
			}
		}
		Ok(())
	}

	/// Classify raw values without touching any document.
	///
	/// `lookup` returns the raw value of a field; `None` counts as empty.
	///
	/// # Examples
	///
	/// ```
	/// use glycemia_forms::{FieldName, FormValidator};
	///
	/// let validator = FormValidator::default();
	/// let report = validator.check(|name| match name {
	///     FieldName::Age => Some("x"),
	///     _ => Some("1"),
	/// });
	/// assert_eq!(report.invalid_fields(), vec![FieldName::Age]);
	/// ```
	pub fn check<'a, F>(&self, mut lookup: F) -> ValidationReport
	where
		F: FnMut(FieldName) -> Option<&'a str>,
	{
		let mut values = [None; 8];
		for name in FieldName::ALL {
			values[name.index()] = lookup(name).and_then(parse_number);
		}
		ValidationReport::new(values)
	}

	/// Clear every error slot, classify every field and write the message
	/// into the slot of each invalid field.
	///
	/// Every invalid field whose slot exists gets its message before the
	/// first missing slot is reported.
	pub fn validate<D: FormDocument + ?Sized>(&self, doc: &mut D) -> FormResult<ValidationReport> {
		doc.clear_marked(&self.settings.error_class)?;

		let mut values = [None; 8];
		for descriptor in &self.fields {
			let raw = doc
				.input_value(&descriptor.input_id)?
				.ok_or_else(|| missing(descriptor, ElementRole::Input))?;
			values[descriptor.name.index()] = parse_number(&raw);
		}
		let report = ValidationReport::new(values);

		let mut unwritten = None;
		for name in report.invalid_fields() {
			let descriptor = self.fields.get(name);
			if !doc.set_error_text(&descriptor.error_id, &self.settings.message)? {
				unwritten.get_or_insert(descriptor);
			}
		}
		if let Some(descriptor) = unwritten {
			return Err(missing(descriptor, ElementRole::ErrorSlot));
		}

		tracing::debug!(
			form = %self.settings.form_id,
			invalid = ?report.invalid_fields(),
			"validated submission"
		);

		Ok(report)
	}

	/// Handle one submit event: validate, then cancel the default
	/// submission if any field is invalid.
	pub fn handle_submit<D, E>(&self, doc: &mut D, event: &mut E) -> FormResult<ValidationReport>
	where
		D: FormDocument + ?Sized,
		E: SubmitControl + ?Sized,
	{
		let report = self.validate(doc)?;
		if !report.is_valid() {
			event.prevent_default();
		}
		Ok(report)
	}
}

fn missing(descriptor: &FieldDescriptor, role: ElementRole) -> FormError {
	let id = match role {
		ElementRole::Input => &descriptor.input_id,
		ElementRole::ErrorSlot => &descriptor.error_id,
	};
	FormError::MissingElement {
		field: descriptor.name,
		id: id.clone(),
		role,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::document::{MemoryDocument, RecordedSubmit};
	use crate::settings::DEFAULT_MESSAGE;
	use rstest::{fixture, rstest};

	#[fixture]
	fn doc() -> MemoryDocument {
		MemoryDocument::prediction_form(&ValidatorSettings::default())
	}

	fn fill(doc: &mut MemoryDocument, value: &str) {
		for name in FieldName::ALL {
			doc.set_value(name.as_str(), value);
		}
	}

	#[rstest]
	fn test_all_empty_fields_are_invalid(mut doc: MemoryDocument) {
		let validator = FormValidator::default();
		let mut event = RecordedSubmit::new();

		let report = validator.handle_submit(&mut doc, &mut event).unwrap();

		assert_eq!(report.invalid_fields(), FieldName::ALL.to_vec());
		assert!(event.default_prevented());
		for name in FieldName::ALL {
			assert_eq!(doc.text(&format!("{name}Error")), Some(DEFAULT_MESSAGE));
		}
	}

	#[rstest]
	fn test_all_valid_leaves_event_untouched(mut doc: MemoryDocument) {
		fill(&mut doc, "1");
		let validator = FormValidator::default();
		let mut event = RecordedSubmit::new();

		let report = validator.handle_submit(&mut doc, &mut event).unwrap();

		assert!(report.is_valid());
		assert!(!event.default_prevented());
		for name in FieldName::ALL {
			assert_eq!(doc.text(&format!("{name}Error")), Some(""));
		}
	}

	#[rstest]
	fn test_validate_clears_stale_messages(mut doc: MemoryDocument) {
		fill(&mut doc, "3");
		doc.set_text("InsulinError", "stale");
		let validator = FormValidator::default();

		validator.validate(&mut doc).unwrap();

		assert_eq!(doc.text("InsulinError"), Some(""));
	}

	#[rstest]
	fn test_check_bindings_reports_missing_input(mut doc: MemoryDocument) {
		doc.remove("SkinThickness");
		let validator = FormValidator::default();

		match validator.check_bindings(&doc) {
			Err(FormError::MissingElement { field, id, role }) => {
				assert_eq!(field, FieldName::SkinThickness);
				assert_eq!(id, "SkinThickness");
				assert_eq!(role, ElementRole::Input);
			}
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[rstest]
	fn test_check_bindings_reports_missing_error_slot(mut doc: MemoryDocument) {
		doc.remove("AgeError");
		let validator = FormValidator::default();

		assert!(matches!(
			validator.check_bindings(&doc),
			Err(FormError::MissingElement {
				field: FieldName::Age,
				role: ElementRole::ErrorSlot,
				..
			})
		));
	}

	#[rstest]
	fn test_check_bindings_rejects_non_input_under_input_id(mut doc: MemoryDocument) {
		fill(&mut doc, "1");
		doc.insert_text("Glucose", ["label"]);
		let validator = FormValidator::default();

		match validator.check_bindings(&doc) {
			Err(FormError::NotAnInput { id }) => assert_eq!(id, "Glucose"),
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[rstest]
	fn test_validate_fails_when_invalid_field_has_no_slot(mut doc: MemoryDocument) {
		doc.remove("GlucoseError");
		let validator = FormValidator::default();

		assert!(matches!(
			validator.validate(&mut doc),
			Err(FormError::MissingElement {
				field: FieldName::Glucose,
				role: ElementRole::ErrorSlot,
				..
			})
		));
	}

	#[rstest]
	fn test_validate_writes_remaining_slots_before_reporting(mut doc: MemoryDocument) {
		fill(&mut doc, "1");
		doc.set_value("Glucose", "");
		doc.set_value("Age", "x");
		doc.remove("GlucoseError");
		let validator = FormValidator::default();

		let result = validator.validate(&mut doc);

		assert!(matches!(
			result,
			Err(FormError::MissingElement {
				field: FieldName::Glucose,
				..
			})
		));
		assert_eq!(doc.text("AgeError"), Some(DEFAULT_MESSAGE));
		assert_eq!(doc.text("BMIError"), Some(""));
	}

	#[rstest]
	fn test_check_treats_absent_value_as_empty() {
		let validator = FormValidator::default();

		let report = validator.check(|name| (name != FieldName::Insulin).then_some("7"));

		assert_eq!(report.invalid_fields(), vec![FieldName::Insulin]);
	}

	#[rstest]
	fn test_custom_settings_and_map() {
		let settings = ValidatorSettings::default()
			.with_error_class("field-error")
			.with_message("Enter a number.");
		let descriptors = FieldName::ALL
			.iter()
			.map(|name| FieldDescriptor::new(*name, format!("id_{name}"), format!("err_{name}")))
			.collect();
		let validator =
			FormValidator::new(FieldMap::from_descriptors(descriptors).unwrap(), settings);

		let mut doc = MemoryDocument::new();
		for name in FieldName::ALL {
			doc.insert_input(format!("id_{name}"), "4");
			doc.insert_text(format!("err_{name}"), ["field-error"]);
		}
		doc.set_value("id_Insulin", "n/a");

		validator.check_bindings(&doc).unwrap();
		let report = validator.validate(&mut doc).unwrap();

		assert_eq!(report.invalid_fields(), vec![FieldName::Insulin]);
		assert_eq!(doc.text("err_Insulin"), Some("Enter a number."));
		assert_eq!(doc.text("err_Age"), Some(""));
	}
}
