//! Style engine abstraction.
//!
//! This module defines the [`StyleEngine`] trait, the capability a host
//! provides to turn a computed [`Style`] into something an element can
//! reference. The default implementation is [`StyleSheet`], which keeps the
//! rules in memory and hands out sequential class names.

use std::collections::HashMap;

use super::rule::Style;

/// Class name prefix used by [`StyleSheet::new`].
pub const DEFAULT_CLASS_PREFIX: &str = "css";

/// Injects styles and returns the class name that applies them.
///
/// Implementations are expected to return the same class for equal styles
/// so repeated renders of an unchanged box do not grow the sheet.
pub trait StyleEngine {
    /// Registers `style` and returns the class name that applies it.
    fn insert(&mut self, style: &Style) -> String;
}

/// In-memory stylesheet.
///
/// # Example
///
/// ```rust
/// use boxstyle::{Style, StyleEngine, StyleSheet};
///
/// let mut sheet = StyleSheet::new();
/// let a = sheet.insert(&Style::new().with("display", "flex"));
/// let b = sheet.insert(&Style::new().with("display", "flex"));
///
/// assert_eq!(a, "css-0");
/// assert_eq!(a, b);
/// assert_eq!(sheet.to_css(), ".css-0 {\n  display: flex;\n}");
/// ```
#[derive(Debug, Clone)]
pub struct StyleSheet {
    prefix: String,
    classes: HashMap<Style, String>,
    rules: Vec<(String, Style)>,
}

impl StyleSheet {
    /// Creates an empty sheet using [`DEFAULT_CLASS_PREFIX`].
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_CLASS_PREFIX)
    }

    /// Creates an empty sheet whose class names start with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            classes: HashMap::new(),
            rules: Vec::new(),
        }
    }

    /// Returns the class already assigned to `style`, if any.
    pub fn class_for(&self, style: &Style) -> Option<&str> {
        self.classes.get(style).map(String::as_str)
    }

    /// Iterates over `(class, style)` pairs in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.rules
            .iter()
            .map(|(class, style)| (class.as_str(), style))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Renders every registered rule as CSS text.
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(|(class, style)| style.to_rule(&format!(".{}", class)))
            .filter(|rule| !rule.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleEngine for StyleSheet {
    fn insert(&mut self, style: &Style) -> String {
        if let Some(class) = self.classes.get(style) {
            return class.clone();
        }
        let class = format!("{}-{}", self.prefix, self.rules.len());
        log::trace!("registering rule .{} ({} entries)", class, style.len());
        self.classes.insert(style.clone(), class.clone());
        self.rules.push((class.clone(), style.clone()));
        class
    }
}
