//! Breakpoint-gated prop values.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::style::Style;
use crate::tokens::Tokens;

/// A prop value that is either fixed or given per breakpoint.
///
/// Breakpoint names are resolved against the [`Tokens`] passed at style
/// time, so the same props render different media conditions under
/// different tokens.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Responsive<T> {
    Value(T),
    Breakpoints(BTreeMap<String, T>),
}

impl<T> Responsive<T> {
    /// A single-breakpoint value, e.g. `Responsive::at("lg", Align::Center)`.
    pub fn at(breakpoint: &str, value: T) -> Self {
        let mut map = BTreeMap::new();
        map.insert(breakpoint.to_string(), value);
        Responsive::Breakpoints(map)
    }

    /// Adds or replaces the value for `breakpoint`.
    ///
    /// A fixed value is discarded when a breakpoint is added.
    pub fn and(self, breakpoint: &str, value: T) -> Self {
        let mut map = match self {
            Responsive::Breakpoints(map) => map,
            Responsive::Value(_) => BTreeMap::new(),
        };
        map.insert(breakpoint.to_string(), value);
        Responsive::Breakpoints(map)
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Value(value)
    }
}

/// Resolves a responsive value with `resolve`.
///
/// A fixed value produces `resolve(value)` directly. A breakpoint map
/// produces one media block per entry: dictionary breakpoints first, in
/// dictionary order, then unknown names in name order with the name used as
/// the condition.
pub fn responsive_style<T, F>(value: &Responsive<T>, tokens: &Tokens, resolve: F) -> Style
where
    F: Fn(&T) -> Style,
{
    match value {
        Responsive::Value(value) => resolve(value),
        Responsive::Breakpoints(map) => {
            let mut entries: Vec<(&String, &T)> = map.iter().collect();
            entries.sort_by_key(|(name, _)| {
                tokens
                    .breakpoints()
                    .position(name)
                    .unwrap_or(usize::MAX)
            });

            let mut style = Style::new();
            for (name, value) in entries {
                style.push_media(tokens.media_condition(name), resolve(value));
            }
            style
        }
    }
}
