//! Form validation
//!
//! Field map, numeric policy, validator and the document/event seams. See
//! [`glycemia_forms`] for details.

// Re-export all glycemia-forms functionality
pub use glycemia_forms::*;
