//! Submission validation for the Glycemia prediction form
//!
//! This crate provides the platform-independent half of the validator:
//! - The closed set of eight numeric fields and their element mapping
//! - The numeric policy applied to every field value
//! - [`FormValidator`], which clears, checks and annotates a document and
//!   cancels submission when any field is invalid
//! - [`FormDocument`] and [`SubmitControl`], the seams a browser binding
//!   implements, with in-memory implementations for tests
//! - [`PredictionInput`], the typed feature row produced by a valid form
//!
//! Browser wiring lives in `glycemia-pages`.

pub mod document;
pub mod error;
pub mod field;
pub mod numeric;
pub mod report;
pub mod settings;
pub mod validator;

pub use document::{FormDocument, MemoryDocument, RecordedSubmit, SubmitControl};
pub use error::{ElementRole, FormError, FormResult};
pub use field::{FieldDescriptor, FieldMap, FieldName};
pub use report::{PredictionInput, ValidationReport};
pub use settings::ValidatorSettings;
pub use validator::FormValidator;
