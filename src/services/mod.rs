//! Service layer for business logic.
//!
//! Resolution and validation of color tokens sit between the loaders in
//! `parser` and the emitters in `export`.

pub mod resolver;
pub mod validator;

// Re-export commonly used types and functions
pub use resolver::{ColorRef, ResolvedColor, ResolvedPalette};
pub use validator::{validate_color_model, ValidationReport};
