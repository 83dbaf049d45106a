use crate::field::FieldName;
use std::fmt;

/// Which element of a field could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
	Input,
	ErrorSlot,
}

impl fmt::Display for ElementRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ElementRole::Input => f.write_str("input"),
			ElementRole::ErrorSlot => f.write_str("error slot"),
		}
	}
}

/// Integration defects between the validator and the page it is bound to.
///
/// A field holding a missing or non-numeric value is not an error here; it is
/// reported inline through the field's error slot.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Missing {role} element '{id}' for field {field}")]
	MissingElement {
		field: FieldName,
		id: String,
		role: ElementRole,
	},
	#[error("Element '{id}' is not an input control")]
	NotAnInput { id: String },
	#[error("Field {0} is mapped more than once")]
	DuplicateField(FieldName),
	#[error("Field {0} has no descriptor")]
	MissingField(FieldName),
	#[error("Unknown field name '{0}'")]
	UnknownField(String),
	#[error("Invalid validator settings: {0}")]
	Settings(#[from] serde_json::Error),
}

pub type FormResult<T> = Result<T, FormError>;
