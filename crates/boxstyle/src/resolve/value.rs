//! Scalar property values.

use serde::Deserialize;

use crate::tokens::Tokens;
use crate::util::{format_number, px};

/// A string or a number, as a host hands them over.
///
/// Strings are either token names or raw CSS text. How a number is written
/// depends on the property: lengths get a `px` unit, factors do not.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Resolves through the size table; numbers become pixel lengths.
    pub fn length(&self, tokens: &Tokens) -> String {
        match self {
            Scalar::Number(n) => px(*n),
            Scalar::Text(text) => tokens.resolve_size(text),
        }
    }

    /// The value as a CSS length with no token lookup; numbers become pixels.
    pub fn css_length(&self) -> String {
        match self {
            Scalar::Number(n) => px(*n),
            Scalar::Text(text) => text.clone(),
        }
    }

    /// The value verbatim; numbers are written without a unit.
    pub fn literal(&self) -> String {
        match self {
            Scalar::Number(n) => format_number(*n),
            Scalar::Text(text) => text.clone(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(text) => Some(text),
            Scalar::Number(_) => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(f64::from(value))
    }
}
