//! # Glycemia
//!
//! Client-side validation for the diabetes risk prediction form.
//!
//! The prediction page asks for eight numeric measurements. Before the form is
//! submitted, every field is trimmed and checked; a missing or non-numeric
//! value blocks the submission and shows an inline message next to the field.
//!
//! ## Feature Flags
//!
//! - `forms` (default) - the platform-independent validator
//! - `pages` - the `wasm-bindgen` binding that attaches it to the page
//!
//! ## Quick Example
//!
//! ```rust
//! use glycemia::forms::{FieldName, FormValidator, MemoryDocument, RecordedSubmit, SubmitControl, ValidatorSettings};
//!
//! let validator = FormValidator::default();
//! let mut page = MemoryDocument::prediction_form(&ValidatorSettings::default());
//! for name in FieldName::ALL {
//!     page.set_value(name.as_str(), "1");
//! }
//! page.set_value("Age", "x");
//!
//! let mut event = RecordedSubmit::new();
//! let report = validator.handle_submit(&mut page, &mut event).unwrap();
//!
//! assert!(event.default_prevented());
//! assert_eq!(report.invalid_fields(), vec![FieldName::Age]);
//! assert_eq!(page.text("AgeError"), Some("This field is required and must be a valid number."));
//! ```

#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "forms")]
pub use glycemia_forms::{
	FieldName, FormError, FormResult, FormValidator, PredictionInput, ValidationReport,
	ValidatorSettings,
};
