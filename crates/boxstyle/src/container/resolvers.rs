//! Resolvers for props only a box understands.

use serde::Deserialize;

use crate::resolve::keyword::keyword_enum;
use crate::resolve::Scalar;
use crate::style::Style;
use crate::tokens::{Tokens, DEFAULT_SIZE};

keyword_enum! {
    /// Main-axis flow.
    Direction {
        Column = "column" => "column",
        Row = "row" => "row",
        ColumnReverse = "columnReverse" => "column-reverse",
        RowReverse = "rowReverse" => "row-reverse",
    }
}

/// `flex-direction`, with min sizes zeroed so flex children can shrink
/// below their content instead of overflowing.
pub fn direction_style(direction: &Direction) -> Style {
    Style::new()
        .with("min-width", "0")
        .with("min-height", "0")
        .with("flex-direction", direction.as_css())
}

/// Stretch the box to its container on one or both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawFill")]
pub enum Fill {
    Off,
    Both,
    Horizontal,
    Vertical,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFill {
    Bool(bool),
    Text(String),
}

impl From<RawFill> for Fill {
    fn from(raw: RawFill) -> Self {
        match raw {
            RawFill::Bool(enabled) => Fill::from(enabled),
            RawFill::Text(text) => Fill::from(text.as_str()),
        }
    }
}

impl From<bool> for Fill {
    fn from(enabled: bool) -> Self {
        if enabled {
            Fill::Both
        } else {
            Fill::Off
        }
    }
}

impl From<&str> for Fill {
    /// `"horizontal"` and `"vertical"` select one axis; any other non-empty
    /// string fills both.
    fn from(value: &str) -> Self {
        match value {
            "horizontal" => Fill::Horizontal,
            "vertical" => Fill::Vertical,
            "" => Fill::Off,
            _ => Fill::Both,
        }
    }
}

pub fn fill_style(fill: Fill) -> Style {
    match fill {
        Fill::Off => Style::new(),
        Fill::Horizontal => Style::new().with("width", "100%"),
        Fill::Vertical => Style::new().with("height", "100%"),
        Fill::Both => Style::new().with("width", "100%").with("height", "100%"),
    }
}

/// Space between children.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Gap {
    /// `true` uses the `default` size token.
    Enabled(bool),
    Size(Scalar),
}

impl From<bool> for Gap {
    fn from(enabled: bool) -> Self {
        Gap::Enabled(enabled)
    }
}

impl From<&str> for Gap {
    fn from(size: &str) -> Self {
        Gap::Size(Scalar::from(size))
    }
}

impl From<i32> for Gap {
    fn from(size: i32) -> Self {
        Gap::Size(Scalar::from(size))
    }
}

pub fn gap_style(gap: &Gap, tokens: &Tokens) -> Style {
    match gap {
        Gap::Enabled(false) => Style::new(),
        Gap::Enabled(true) => Style::new().with("gap", tokens.resolve_size(DEFAULT_SIZE)),
        Gap::Size(size) => Style::new().with("gap", size.length(tokens)),
    }
}

/// Whether children wrap onto new lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawWrap")]
pub enum Wrap {
    Enabled(bool),
    Reverse,
    /// An unrecognized variant, emitted as the `flex-wrap` value unchanged.
    Custom(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWrap {
    Bool(bool),
    Text(String),
}

impl From<RawWrap> for Wrap {
    fn from(raw: RawWrap) -> Self {
        match raw {
            RawWrap::Bool(enabled) => Wrap::Enabled(enabled),
            RawWrap::Text(text) => Wrap::from(text.as_str()),
        }
    }
}

impl From<bool> for Wrap {
    fn from(enabled: bool) -> Self {
        Wrap::Enabled(enabled)
    }
}

impl From<&str> for Wrap {
    fn from(value: &str) -> Self {
        match value {
            "reverse" => Wrap::Reverse,
            other => Wrap::Custom(other.to_string()),
        }
    }
}

pub fn wrap_style(wrap: &Wrap) -> Style {
    match wrap {
        Wrap::Enabled(false) => Style::new(),
        Wrap::Enabled(true) => Style::new().with("flex-wrap", "wrap"),
        Wrap::Reverse => Style::new().with("flex-wrap", "wrap-reverse"),
        Wrap::Custom(value) => Style::new().with("flex-wrap", value.as_str()),
    }
}

/// A width or height: an exact length, or min/max bounds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Exact(Scalar),
    Bounds {
        #[serde(default)]
        min: Option<Scalar>,
        #[serde(default)]
        max: Option<Scalar>,
    },
}

impl Dimension {
    pub fn min(value: impl Into<Scalar>) -> Self {
        Dimension::Bounds {
            min: Some(value.into()),
            max: None,
        }
    }

    pub fn max(value: impl Into<Scalar>) -> Self {
        Dimension::Bounds {
            min: None,
            max: Some(value.into()),
        }
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Exact(Scalar::from(value))
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        Dimension::Exact(Scalar::from(value))
    }
}

/// Resolves a dimension for `property` (`width` or `height`).
///
/// Values are raw CSS lengths; size tokens do not apply here.
pub fn dimension_style(property: &str, dimension: &Dimension) -> Style {
    match dimension {
        Dimension::Exact(value) => Style::new().with(property, value.css_length()),
        Dimension::Bounds { min, max } => {
            let mut style = Style::new();
            if let Some(max) = max {
                style.push(format!("max-{}", property), max.css_length());
            }
            if let Some(min) = min {
                style.push(format!("min-{}", property), min.css_length());
            }
            style
        }
    }
}
