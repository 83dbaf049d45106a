//! Browser binding
//!
//! Attaches the validator to the `submit` event of the prediction form when
//! compiled for `wasm32`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use glycemia::pages::{ValidatorSettings, attach};
//!
//! attach(ValidatorSettings::default().with_form_id("predictionForm"))?.forget();
//! ```

// Re-export all glycemia-pages functionality
pub use glycemia_pages::*;
