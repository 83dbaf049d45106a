//! Validator settings
//!
//! Every setting has a default matching the prediction page markup, so an
//! empty JSON object is a valid configuration.

use crate::error::FormResult;
use serde::{Deserialize, Serialize};

/// Inline message written into the error slot of every invalid field.
pub const DEFAULT_MESSAGE: &str = "This field is required and must be a valid number.";

/// Id of the form whose submission is validated.
pub const DEFAULT_FORM_ID: &str = "predictionForm";

/// Class shared by every error slot, used for the bulk clear.
pub const DEFAULT_ERROR_CLASS: &str = "error";

/// Suffix appended to a field identifier to get its error slot id.
pub const DEFAULT_ERROR_SUFFIX: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorSettings {
	pub form_id: String,
	pub error_class: String,
	pub error_suffix: String,
	pub message: String,
}

impl Default for ValidatorSettings {
	fn default() -> Self {
		Self {
			form_id: DEFAULT_FORM_ID.to_string(),
			error_class: DEFAULT_ERROR_CLASS.to_string(),
			error_suffix: DEFAULT_ERROR_SUFFIX.to_string(),
			message: DEFAULT_MESSAGE.to_string(),
		}
	}
}

impl ValidatorSettings {
	/// Parse settings from JSON, filling absent keys with defaults.
	///
	/// # Examples
	///
	/// ```
	/// use glycemia_forms::ValidatorSettings;
	///
	/// let settings = ValidatorSettings::from_json(r#"{"form_id": "riskForm"}"#).unwrap();
	/// assert_eq!(settings.form_id, "riskForm");
	/// assert_eq!(settings.error_class, "error");
	/// ```
	pub fn from_json(json: &str) -> FormResult<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn with_form_id(mut self, form_id: impl Into<String>) -> Self {
		self.form_id = form_id.into();
		self
	}

	pub fn with_error_class(mut self, error_class: impl Into<String>) -> Self {
		self.error_class = error_class.into();
		self
	}

	pub fn with_error_suffix(mut self, error_suffix: impl Into<String>) -> Self {
		self.error_suffix = error_suffix.into();
		self
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = message.into();
		self
	}
}
