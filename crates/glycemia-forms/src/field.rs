//! Field identifiers and the field map
//!
//! The prediction form has a closed set of eight numeric inputs. Each one is
//! paired with an input control and an error slot; [`FieldMap`] holds that
//! pairing explicitly so nothing downstream re-derives element ids.

use crate::error::{FormError, FormResult};
use crate::settings::ValidatorSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight required numeric inputs of the prediction form.
///
/// Variant order is the canonical field order, which is also the feature
/// order expected by the downstream model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldName {
	/// Number of pregnancies
	Pregnancies,
	/// Plasma glucose concentration
	Glucose,
	/// Diastolic blood pressure
	BloodPressure,
	/// Triceps skin fold thickness
	SkinThickness,
	/// Serum insulin
	Insulin,
	/// Body mass index
	#[serde(rename = "BMI")]
	Bmi,
	/// Diabetes pedigree function
	DiabetesPedigreeFunction,
	/// Age in years
	Age,
}

impl FieldName {
	/// All fields in canonical order.
	pub const ALL: [FieldName; 8] = [
		FieldName::Pregnancies,
		FieldName::Glucose,
		FieldName::BloodPressure,
		FieldName::SkinThickness,
		FieldName::Insulin,
		FieldName::Bmi,
		FieldName::DiabetesPedigreeFunction,
		FieldName::Age,
	];

	/// Returns the exact identifier used in the page markup.
	///
	/// # Examples
	///
	/// ```
	/// use glycemia_forms::FieldName;
	///
	/// assert_eq!(FieldName::Bmi.as_str(), "BMI");
	/// assert_eq!(FieldName::DiabetesPedigreeFunction.as_str(), "DiabetesPedigreeFunction");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldName::Pregnancies => "Pregnancies",
			FieldName::Glucose => "Glucose",
			FieldName::BloodPressure => "BloodPressure",
			FieldName::SkinThickness => "SkinThickness",
			FieldName::Insulin => "Insulin",
			FieldName::Bmi => "BMI",
			FieldName::DiabetesPedigreeFunction => "DiabetesPedigreeFunction",
			FieldName::Age => "Age",
		}
	}

	/// Position of the field in canonical order.
	pub fn index(&self) -> usize {
		*self as usize
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FieldName {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		FieldName::ALL
			.into_iter()
			.find(|field| field.as_str() == s)
			.ok_or_else(|| FormError::UnknownField(s.to_string()))
	}
}

/// Locates the input control and the error slot of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
	pub name: FieldName,
	pub input_id: String,
	pub error_id: String,
}

impl FieldDescriptor {
	/// Create a descriptor with explicit element ids
	pub fn new(name: FieldName, input_id: impl Into<String>, error_id: impl Into<String>) -> Self {
		Self {
			name,
			input_id: input_id.into(),
			error_id: error_id.into(),
		}
	}

	/// Create a descriptor following the `<name>` / `<name><suffix>` convention
	///
	/// # Examples
	///
	/// ```
	/// use glycemia_forms::{FieldDescriptor, FieldName};
	///
	/// let descriptor = FieldDescriptor::conventional(FieldName::Glucose, "Error");
	/// assert_eq!(descriptor.input_id, "Glucose");
	/// assert_eq!(descriptor.error_id, "GlucoseError");
	/// ```
	pub fn conventional(name: FieldName, error_suffix: &str) -> Self {
		Self::new(name, name.as_str(), format!("{}{}", name.as_str(), error_suffix))
	}
}

/// Exactly one [`FieldDescriptor`] per [`FieldName`], in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
	descriptors: Vec<FieldDescriptor>,
}

impl FieldMap {
	/// Build the map from arbitrary descriptors.
	///
	/// Fails if a field appears twice or is absent. The input order does not
	/// matter; the map is always stored in canonical order.
	///
	/// # Examples
	///
	/// ```
	/// use glycemia_forms::{FieldDescriptor, FieldMap, FieldName};
	///
	/// let descriptors = FieldName::ALL
	///     .iter()
	///     .rev()
	///     .map(|name| FieldDescriptor::new(*name, format!("in-{name}"), format!("err-{name}")))
	///     .collect();
	/// let map = FieldMap::from_descriptors(descriptors).unwrap();
	/// assert_eq!(map.get(FieldName::Age).input_id, "in-Age");
	/// ```
	pub fn from_descriptors(descriptors: Vec<FieldDescriptor>) -> FormResult<Self> {
		let mut slots: [Option<FieldDescriptor>; 8] = Default::default();

		for descriptor in descriptors {
			let slot = &mut slots[descriptor.name.index()];
			if slot.is_some() {
				return Err(FormError::DuplicateField(descriptor.name));
			}
			*slot = Some(descriptor);
		}

		let mut ordered = Vec::with_capacity(slots.len());
		for (name, slot) in FieldName::ALL.into_iter().zip(slots) {
			ordered.push(slot.ok_or(FormError::MissingField(name))?);
		}

		Ok(Self {
			descriptors: ordered,
		})
	}

	/// Build the conventional map for the given settings.
	pub fn conventional(settings: &ValidatorSettings) -> Self {
		Self {
			descriptors: FieldName::ALL
				.iter()
				.map(|name| FieldDescriptor::conventional(*name, &settings.error_suffix))
				.collect(),
		}
	}

	/// Descriptor of the given field
	pub fn get(&self, name: FieldName) -> &FieldDescriptor {
		// Construction guarantees one descriptor per field at its canonical index.
		&self.descriptors[name.index()]
	}

	/// Iterate descriptors in canonical order
	pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
		self.descriptors.iter()
	}
}

impl Default for FieldMap {
	fn default() -> Self {
		Self::conventional(&ValidatorSettings::default())
	}
}

impl<'a> IntoIterator for &'a FieldMap {
	type Item = &'a FieldDescriptor;
	type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

	fn into_iter(self) -> Self::IntoIter {
		self.descriptors.iter()
	}
}
