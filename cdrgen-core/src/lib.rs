//! Core utilities and types for the cdrgen source generator.
//!
//! This crate provides the file emission primitives and error types shared
//! by the generator and its language backends.

mod error;
mod file;
mod utils;

// Errors
pub use error::{GenError, RenderError, Result};
// File operations
pub use file::{File, Overwrite, WriteResult, ensure_dir};
// String utilities
pub use utils::{to_pascal_case, to_screaming_snake_case};
