//! Size and breakpoint dictionaries.

use std::fmt;

use once_cell::sync::Lazy;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use super::error::{TokenError, TokenValidationError};
use super::validate::{is_length_like, is_media_feature};

/// Default size tokens.
pub const SIZES: &[(&str, &str)] = &[
    ("small", ".2rem"),
    ("default", ".5rem"),
    ("medium", ".8rem"),
    ("large", "1rem"),
    ("xlarge", "2.5rem"),
    ("xxlarge", "4rem"),
];

/// Default breakpoint tokens, smallest first.
pub const BREAKPOINTS: &[(&str, &str)] = &[
    ("sm", "min-width: 576px"),
    ("md", "min-width: 768px"),
    ("lg", "min-width: 992px"),
    ("xl", "min-width: 1200px"),
];

/// Name of the size token used when a side or gap is given without a magnitude.
pub const DEFAULT_SIZE: &str = "default";

static DEFAULT_TOKENS: Lazy<Tokens> = Lazy::new(|| Tokens {
    sizes: TokenTable::from_pairs(SIZES),
    breakpoints: TokenTable::from_pairs(BREAKPOINTS),
});

/// An ordered name → value table.
///
/// Setting an existing name replaces its value in place; new names are
/// appended, so iteration order is definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    entries: Vec<(String, String)>,
}

impl TokenTable {
    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Position of `name` in definition order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn merge(&mut self, other: TokenTable) {
        for (name, value) in other.entries {
            self.set(name, value);
        }
    }
}

impl<'de> Deserialize<'de> for TokenTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = TokenTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of token names to CSS values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<TokenTable, A::Error> {
                let mut table = TokenTable::default();
                while let Some((name, value)) = map.next_entry::<String, String>()? {
                    table.set(name, value);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct TokenDocument {
    #[serde(default)]
    sizes: TokenTable,
    #[serde(default)]
    breakpoints: TokenTable,
}

/// The size and breakpoint dictionaries every resolver reads from.
///
/// `Tokens` is passed explicitly into style resolution, so theming or
/// overriding a token is a matter of handing a different value to the next
/// call. Breakpoint conditions are looked up when a style is computed, not
/// when props are built.
///
/// # Example
///
/// ```rust
/// use boxstyle::Tokens;
///
/// let tokens = Tokens::new()
///     .with_size("large", "100px")
///     .with_breakpoint("lg", "min-width: 1001px");
///
/// assert_eq!(tokens.size("large"), Some("100px"));
/// assert_eq!(tokens.size("small"), Some(".2rem"));
/// assert_eq!(tokens.breakpoint("lg"), Some("min-width: 1001px"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    sizes: TokenTable,
    breakpoints: TokenTable,
}

impl Tokens {
    /// Creates the default dictionaries ([`SIZES`] and [`BREAKPOINTS`]).
    pub fn new() -> Self {
        DEFAULT_TOKENS.clone()
    }

    /// Creates dictionaries with no tokens at all.
    ///
    /// Every size and breakpoint name then passes through verbatim.
    pub fn empty() -> Self {
        Self {
            sizes: TokenTable::default(),
            breakpoints: TokenTable::default(),
        }
    }

    /// Loads overrides from a YAML document on top of the defaults.
    ///
    /// ```rust
    /// use boxstyle::Tokens;
    ///
    /// let tokens = Tokens::from_yaml("sizes:\n  large: 100px\n").unwrap();
    /// assert_eq!(tokens.size("large"), Some("100px"));
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, TokenError> {
        let document: TokenDocument = serde_yaml::from_str(source)?;
        Ok(Self::new().merged(document))
    }

    /// Loads overrides from a JSON document on top of the defaults.
    pub fn from_json(source: &str) -> Result<Self, TokenError> {
        let document: TokenDocument = serde_json::from_str(source)?;
        Ok(Self::new().merged(document))
    }

    fn merged(mut self, document: TokenDocument) -> Self {
        self.sizes.merge(document.sizes);
        self.breakpoints.merge(document.breakpoints);
        self
    }

    /// Sets a size token, returning the updated tokens for chaining.
    pub fn with_size(mut self, name: &str, value: &str) -> Self {
        self.set_size(name, value);
        self
    }

    /// Sets a breakpoint token, returning the updated tokens for chaining.
    pub fn with_breakpoint(mut self, name: &str, condition: &str) -> Self {
        self.set_breakpoint(name, condition);
        self
    }

    pub fn set_size(&mut self, name: &str, value: &str) {
        self.sizes.set(name, value);
    }

    pub fn set_breakpoint(&mut self, name: &str, condition: &str) {
        self.breakpoints.set(name, condition);
    }

    /// Looks up a size token.
    pub fn size(&self, name: &str) -> Option<&str> {
        self.sizes.get(name)
    }

    /// Looks up a breakpoint's media condition.
    pub fn breakpoint(&self, name: &str) -> Option<&str> {
        self.breakpoints.get(name)
    }

    pub fn sizes(&self) -> &TokenTable {
        &self.sizes
    }

    pub fn breakpoints(&self) -> &TokenTable {
        &self.breakpoints
    }

    /// Resolves `value` through the size table.
    ///
    /// Unknown names are not an error: the value itself is returned so it
    /// can be used as a literal CSS length.
    pub fn resolve_size(&self, value: &str) -> String {
        match self.size(value) {
            Some(size) => size.to_string(),
            None => {
                log::trace!("'{}' is not a size token, using it verbatim", value);
                value.to_string()
            }
        }
    }

    /// Resolves a breakpoint name to its media condition.
    ///
    /// Unknown names pass through as the condition text.
    pub fn media_condition(&self, name: &str) -> String {
        match self.breakpoint(name) {
            Some(condition) => condition.to_string(),
            None => {
                log::debug!("unknown breakpoint '{}', using it as the media condition", name);
                name.to_string()
            }
        }
    }

    /// Checks every token value with a CSS parser.
    ///
    /// Sizes must be a single length-like value and breakpoints a single
    /// `feature: value` pair. Resolution never calls this; it is for
    /// catching typos in configuration early.
    pub fn validate(&self) -> Result<(), TokenValidationError> {
        for (name, value) in self.sizes.iter() {
            if !is_length_like(value) {
                return Err(TokenValidationError::InvalidSize {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
        for (name, condition) in self.breakpoints.iter() {
            if !is_media_feature(condition) {
                return Err(TokenValidationError::InvalidBreakpoint {
                    name: name.to_string(),
                    condition: condition.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Tokens {
    fn default() -> Self {
        Self::new()
    }
}
