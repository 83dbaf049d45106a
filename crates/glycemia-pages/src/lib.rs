//! Glycemia Pages - browser binding for the prediction form validator
//!
//! Wires [`glycemia_forms::FormValidator`] into a live page through
//! `wasm-bindgen` and `web-sys`.
//!
//! ## Modules
//!
//! - [`logging`]: console logging macros, no-ops in release builds
//! - `dom`: `web-sys` implementations of the validator seams (WASM only)
//! - [`binding`]: submit listener attachment and the exported entry points
//!
//! ## Usage from JavaScript
//!
//! ```text
//! import init, { initPredictionForm } from "./glycemia_pages.js";
//!
//! await init();
//! initPredictionForm();
//! ```
//!
//! With the `autostart` feature the listener is attached as soon as the
//! module is instantiated.

#![warn(missing_docs)]

pub mod binding;
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use binding::BindError;
#[cfg(target_arch = "wasm32")]
pub use binding::{SubmitBinding, attach, attach_to, init_prediction_form};
#[cfg(target_arch = "wasm32")]
pub use dom::{BrowserDocument, BrowserSubmit};

pub use glycemia_forms::{FormValidator, ValidatorSettings};
