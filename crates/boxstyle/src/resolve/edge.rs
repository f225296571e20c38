//! Edge (margin, border, padding) resolution.

use serde::Deserialize;

use super::value::Scalar;
use crate::style::Style;
use crate::tokens::{Tokens, DEFAULT_SIZE};

/// Which box edge a value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Margin,
    Border,
    Padding,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Margin => "margin",
            EdgeKind::Border => "border",
            EdgeKind::Padding => "padding",
        }
    }

    fn side(&self, side: &str) -> String {
        format!("{}-{}", self.as_str(), side)
    }
}

/// A named side or pair of sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
    Horizontal,
    Vertical,
}

impl Side {
    /// Parses a side name; `None` for anything else.
    pub fn from_name(name: &str) -> Option<Side> {
        match name {
            "top" => Some(Side::Top),
            "bottom" => Some(Side::Bottom),
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            "horizontal" => Some(Side::Horizontal),
            "vertical" => Some(Side::Vertical),
            _ => None,
        }
    }
}

/// Per-side values. `horizontal` and `vertical` set both sides of their
/// axis; the explicit sides are applied afterwards and win.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Area {
    pub horizontal: Option<Scalar>,
    pub vertical: Option<Scalar>,
    pub top: Option<Scalar>,
    pub bottom: Option<Scalar>,
    pub left: Option<Scalar>,
    pub right: Option<Scalar>,
}

impl Area {
    pub fn new() -> Self {
        Self::default()
    }

    /// An area with only `side` set to `value`.
    pub fn from_side(side: Side, value: Scalar) -> Self {
        let area = Area::new();
        match side {
            Side::Top => area.top(value),
            Side::Bottom => area.bottom(value),
            Side::Left => area.left(value),
            Side::Right => area.right(value),
            Side::Horizontal => area.horizontal(value),
            Side::Vertical => area.vertical(value),
        }
    }

    pub fn horizontal(mut self, value: impl Into<Scalar>) -> Self {
        self.horizontal = Some(value.into());
        self
    }

    pub fn vertical(mut self, value: impl Into<Scalar>) -> Self {
        self.vertical = Some(value.into());
        self
    }

    pub fn top(mut self, value: impl Into<Scalar>) -> Self {
        self.top = Some(value.into());
        self
    }

    pub fn bottom(mut self, value: impl Into<Scalar>) -> Self {
        self.bottom = Some(value.into());
        self
    }

    pub fn left(mut self, value: impl Into<Scalar>) -> Self {
        self.left = Some(value.into());
        self
    }

    pub fn right(mut self, value: impl Into<Scalar>) -> Self {
        self.right = Some(value.into());
        self
    }
}

/// Spacing on one or more sides of a box.
///
/// A string that names a side (`"top"`, `"horizontal"`, ...) means that side
/// at the `default` size; any other string is a size token or a raw length.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEdge")]
pub enum Edge {
    Uniform(Scalar),
    Side(Side),
    Area(Area),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEdge {
    Number(f64),
    Text(String),
    Area(Area),
}

impl From<RawEdge> for Edge {
    fn from(raw: RawEdge) -> Self {
        match raw {
            RawEdge::Number(n) => Edge::Uniform(Scalar::Number(n)),
            RawEdge::Text(text) => Edge::from(text),
            RawEdge::Area(area) => Edge::Area(area),
        }
    }
}

impl From<String> for Edge {
    fn from(text: String) -> Self {
        match Side::from_name(&text) {
            Some(side) => Edge::Side(side),
            None => Edge::Uniform(Scalar::Text(text)),
        }
    }
}

impl From<&str> for Edge {
    fn from(text: &str) -> Self {
        Edge::from(text.to_string())
    }
}

impl From<f64> for Edge {
    fn from(n: f64) -> Self {
        Edge::Uniform(Scalar::Number(n))
    }
}

impl From<i32> for Edge {
    fn from(n: i32) -> Self {
        Edge::Uniform(Scalar::from(n))
    }
}

impl From<Side> for Edge {
    fn from(side: Side) -> Self {
        Edge::Side(side)
    }
}

impl From<Area> for Edge {
    fn from(area: Area) -> Self {
        Edge::Area(area)
    }
}

/// Resolves an edge value into longhand (or shorthand) declarations.
///
/// # Example
///
/// ```rust
/// use boxstyle::{edge_style, Area, EdgeKind, Tokens};
///
/// let tokens = Tokens::new();
///
/// let style = edge_style(EdgeKind::Margin, &"small".into(), &tokens);
/// assert_eq!(style.get("margin"), Some(".2rem"));
///
/// let style = edge_style(EdgeKind::Margin, &Area::new().left(11).right("1rem").into(), &tokens);
/// assert_eq!(style.get("margin-left"), Some("11px"));
/// assert_eq!(style.get("margin-right"), Some("1rem"));
/// ```
pub fn edge_style(kind: EdgeKind, edge: &Edge, tokens: &Tokens) -> Style {
    match edge {
        Edge::Uniform(value) => Style::new().with(kind.as_str(), value.length(tokens)),
        Edge::Side(side) => area_style(kind, &Area::from_side(*side, DEFAULT_SIZE.into()), tokens),
        Edge::Area(area) => area_style(kind, area, tokens),
    }
}

fn area_style(kind: EdgeKind, area: &Area, tokens: &Tokens) -> Style {
    let mut style = Style::new();

    if let Some(value) = &area.horizontal {
        let value = value.length(tokens);
        style.push(kind.side("left"), value.clone());
        style.push(kind.side("right"), value);
    }
    if let Some(value) = &area.vertical {
        let value = value.length(tokens);
        style.push(kind.side("bottom"), value.clone());
        style.push(kind.side("top"), value);
    }

    let sides = [
        ("top", &area.top),
        ("right", &area.right),
        ("bottom", &area.bottom),
        ("left", &area.left),
    ];
    for (side, value) in sides {
        if let Some(value) = value {
            style.push(kind.side(side), value.length(tokens));
        }
    }

    style
}
