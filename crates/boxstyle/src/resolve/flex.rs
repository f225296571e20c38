//! Flex shorthand and flex-basis resolution.

use serde::Deserialize;

use super::value::Scalar;
use crate::style::Style;
use crate::util::format_number;

/// Fractional and keyword basis tokens.
pub const BASIS: &[(&str, &str)] = &[
    ("1/2", "50%"),
    ("1/4", "25%"),
    ("2/4", "50%"),
    ("3/4", "75%"),
    ("auto", "auto"),
    ("full", "100%"),
    ("1/3", "33.33%"),
    ("2/3", "66.66%"),
];

/// Named grow/shrink presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexPreset {
    /// `1 0`: grow, never shrink.
    Grow,
    /// `0 1`: shrink, never grow.
    Shrink,
}

impl FlexPreset {
    pub fn from_name(name: &str) -> Option<FlexPreset> {
        match name {
            "grow" => Some(FlexPreset::Grow),
            "shrink" => Some(FlexPreset::Shrink),
            _ => None,
        }
    }

    fn factors(&self) -> &'static str {
        match self {
            FlexPreset::Grow => "1 0",
            FlexPreset::Shrink => "0 1",
        }
    }
}

/// A grow or shrink factor. `false` is 0 and `true` is 1.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FlexFactor {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FlexFactor {
    fn css(&self) -> String {
        match self {
            FlexFactor::Bool(true) => "1".to_string(),
            FlexFactor::Bool(false) => "0".to_string(),
            FlexFactor::Number(n) => format_number(*n),
            FlexFactor::Text(text) => text.clone(),
        }
    }
}

impl From<bool> for FlexFactor {
    fn from(value: bool) -> Self {
        FlexFactor::Bool(value)
    }
}

impl From<f64> for FlexFactor {
    fn from(value: f64) -> Self {
        FlexFactor::Number(value)
    }
}

impl From<i32> for FlexFactor {
    fn from(value: i32) -> Self {
        FlexFactor::Number(f64::from(value))
    }
}

/// Explicit grow, shrink and basis. Missing factors default to 1.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FlexGrowShrink {
    pub grow: Option<FlexFactor>,
    pub shrink: Option<FlexFactor>,
    pub basis: Option<Scalar>,
}

impl FlexGrowShrink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grow(mut self, grow: impl Into<FlexFactor>) -> Self {
        self.grow = Some(grow.into());
        self
    }

    pub fn shrink(mut self, shrink: impl Into<FlexFactor>) -> Self {
        self.shrink = Some(shrink.into());
        self
    }

    pub fn basis(mut self, basis: impl Into<Scalar>) -> Self {
        self.basis = Some(basis.into());
        self
    }
}

/// How a box participates in its parent's flex layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawFlex")]
pub enum Flex {
    /// `true` grows and shrinks; `false` emits nothing.
    Enabled(bool),
    Preset(FlexPreset),
    Custom(FlexGrowShrink),
    /// An unrecognized preset name, emitted verbatim as the whole shorthand.
    Raw(String),
}

impl Flex {
    /// Returns true if this value produces a `flex` declaration.
    pub fn is_active(&self) -> bool {
        !matches!(self, Flex::Enabled(false))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlex {
    Bool(bool),
    Text(String),
    Custom(FlexGrowShrink),
}

impl From<RawFlex> for Flex {
    fn from(raw: RawFlex) -> Self {
        match raw {
            RawFlex::Bool(enabled) => Flex::Enabled(enabled),
            RawFlex::Text(text) => Flex::from(text.as_str()),
            RawFlex::Custom(custom) => Flex::Custom(custom),
        }
    }
}

impl From<bool> for Flex {
    fn from(enabled: bool) -> Self {
        Flex::Enabled(enabled)
    }
}

impl From<&str> for Flex {
    fn from(name: &str) -> Self {
        match FlexPreset::from_name(name) {
            Some(preset) => Flex::Preset(preset),
            None => Flex::Raw(name.to_string()),
        }
    }
}

impl From<FlexPreset> for Flex {
    fn from(preset: FlexPreset) -> Self {
        Flex::Preset(preset)
    }
}

impl From<FlexGrowShrink> for Flex {
    fn from(custom: FlexGrowShrink) -> Self {
        Flex::Custom(custom)
    }
}

/// Resolves a basis token to its percentage; anything else is returned as is.
pub fn basis_value(basis: &Scalar) -> String {
    if let Some(text) = basis.as_text() {
        if let Some((_, value)) = BASIS.iter().find(|(name, _)| *name == text) {
            return value.to_string();
        }
        log::trace!("'{}' is not a basis token, using it verbatim", text);
    }
    basis.literal()
}

/// Resolves a standalone `flex-basis` declaration.
pub fn basis_style(basis: &Scalar) -> Style {
    Style::new().with("flex-basis", basis_value(basis))
}

/// Resolves the `flex` shorthand.
///
/// `outer_basis` is the box's own `basis` prop; it takes precedence over a
/// basis given inside the flex value. Without either, the basis is `auto`.
///
/// # Example
///
/// ```rust
/// use boxstyle::{flex_style, Flex, FlexGrowShrink};
///
/// let flex = Flex::from(FlexGrowShrink::new().grow(3).shrink(false).basis("1/2"));
/// assert_eq!(flex_style(&flex, None).get("flex"), Some("3 0 50%"));
/// ```
pub fn flex_style(flex: &Flex, outer_basis: Option<&Scalar>) -> Style {
    let (factors, inner_basis) = match flex {
        Flex::Enabled(false) => return Style::new(),
        Flex::Raw(value) => return Style::new().with("flex", value.as_str()),
        Flex::Enabled(true) => ("1 1".to_string(), None),
        Flex::Preset(preset) => (preset.factors().to_string(), None),
        Flex::Custom(custom) => {
            let grow = custom.grow.as_ref().map_or_else(|| "1".to_string(), FlexFactor::css);
            let shrink = custom
                .shrink
                .as_ref()
                .map_or_else(|| "1".to_string(), FlexFactor::css);
            (format!("{} {}", grow, shrink), custom.basis.as_ref())
        }
    };

    let basis = outer_basis
        .or(inner_basis)
        .map_or_else(|| "auto".to_string(), basis_value);

    Style::new().with("flex", format!("{} {}", factors, basis))
}
