//! brandkit library
//!
//! Resolves brand design tokens (colors, typography, theme overrides) into a
//! set of style sheets, an HTML font include and a plotting theme script that
//! always agree with each other.

// Module declarations
pub mod branding;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;
pub mod parser;
pub mod services;

pub use error::{GenerateError, Result};
pub use generator::{GenerationReport, Generator};
