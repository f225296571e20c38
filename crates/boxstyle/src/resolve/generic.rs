//! Props shared by every layout primitive.

use serde::Deserialize;

use super::align::AlignSelf;
use super::edge::{edge_style, Edge, EdgeKind};
use crate::style::Style;
use crate::tokens::Tokens;

/// Placement and spacing props common to all box-like components.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericProps {
    pub align_self: Option<AlignSelf>,
    pub grid_area: Option<String>,
    pub margin: Option<Edge>,
    pub padding: Option<Edge>,
}

/// Resolves the generic props: align-self, grid-area, margin, padding.
pub fn generic_style(props: &GenericProps, tokens: &Tokens) -> Style {
    let mut style = Style::new();
    if let Some(align_self) = &props.align_self {
        style.push("align-self", align_self.as_css());
    }
    if let Some(area) = &props.grid_area {
        style.push("grid-area", area.as_str());
    }
    if let Some(margin) = &props.margin {
        style.extend(edge_style(EdgeKind::Margin, margin, tokens));
    }
    if let Some(padding) = &props.padding {
        style.extend(edge_style(EdgeKind::Padding, padding, tokens));
    }
    style
}
