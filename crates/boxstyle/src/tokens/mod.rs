//! Token dictionaries for sizes and breakpoints.
//!
//! This module provides:
//!
//! - [`Tokens`]: The size and breakpoint dictionaries, passed into every resolver
//! - [`TokenTable`]: An ordered name → value table
//! - [`TokenError`] / [`TokenValidationError`]: Loading and validation errors
//!
//! Tokens are plain values. Overriding one for a theme or a test means
//! building a new `Tokens` and passing it to the next style computation.

mod error;
#[allow(clippy::module_inception)]
mod tokens;
mod validate;

pub use error::{TokenError, TokenValidationError};
pub use tokens::{TokenTable, Tokens, BREAKPOINTS, DEFAULT_SIZE, SIZES};
