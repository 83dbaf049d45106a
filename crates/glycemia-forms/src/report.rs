//! Outcome of one submission attempt

use crate::field::FieldName;
use serde::{Deserialize, Serialize};

/// Classification of all eight fields for one submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
	values: [Option<f64>; 8],
}

impl ValidationReport {
	pub(crate) fn new(values: [Option<f64>; 8]) -> Self {
		Self { values }
	}

	/// True when every field holds a number
	pub fn is_valid(&self) -> bool {
		self.values.iter().all(Option::is_some)
	}

	/// Invalid fields in canonical order
	pub fn invalid_fields(&self) -> Vec<FieldName> {
		FieldName::ALL
			.into_iter()
			.filter(|name| self.values[name.index()].is_none())
			.collect()
	}

	pub fn is_invalid(&self, name: FieldName) -> bool {
		self.values[name.index()].is_none()
	}

	/// Parsed value of a valid field
	pub fn value(&self, name: FieldName) -> Option<f64> {
		self.values[name.index()]
	}

	/// Typed input for the prediction model, if every field is valid.
	pub fn prediction_input(&self) -> Option<PredictionInput> {
		let [
			pregnancies,
			glucose,
			blood_pressure,
			skin_thickness,
			insulin,
			bmi,
			diabetes_pedigree_function,
			age,
		] = self.values;

		Some(PredictionInput {
			pregnancies: pregnancies?,
			glucose: glucose?,
			blood_pressure: blood_pressure?,
			skin_thickness: skin_thickness?,
			insulin: insulin?,
			bmi: bmi?,
			diabetes_pedigree_function: diabetes_pedigree_function?,
			age: age?,
		})
	}
}

/// The eight validated values, keyed by their form identifiers when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredictionInput {
	pub pregnancies: f64,
	pub glucose: f64,
	pub blood_pressure: f64,
	pub skin_thickness: f64,
	pub insulin: f64,
	#[serde(rename = "BMI")]
	pub bmi: f64,
	pub diabetes_pedigree_function: f64,
	pub age: f64,
}

impl PredictionInput {
	/// Feature row in canonical field order.
	///
	/// # Examples
	///
	/// ```
	/// use glycemia_forms::{FieldName, PredictionInput};
	///
	/// let input = PredictionInput {
	///     pregnancies: 0.0,
	///     glucose: 120.0,
	///     blood_pressure: 80.0,
	///     skin_thickness: 20.0,
	///     insulin: 85.0,
	///     bmi: 22.1,
	///     diabetes_pedigree_function: 0.3,
	///     age: 45.0,
	/// };
	/// assert_eq!(input.features()[FieldName::Bmi.index()], 22.1);
	/// ```
	pub fn features(&self) -> [f64; 8] {
		[
			self.pregnancies,
			self.glucose,
			self.blood_pressure,
			self.skin_thickness,
			self.insulin,
			self.bmi,
			self.diabetes_pedigree_function,
			self.age,
		]
	}

	/// Value of one field
	pub fn get(&self, name: FieldName) -> f64 {
		self.features()[name.index()]
	}
}
