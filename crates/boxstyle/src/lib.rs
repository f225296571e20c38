//! # Boxstyle - Flexbox layout props resolved into CSS
//!
//! Boxstyle implements a "Box" layout primitive: a flex container whose
//! layout is described by props (alignment, direction, flex, spacing,
//! sizing, wrapping) and turned into CSS declarations, with per-breakpoint
//! values expanded into media blocks.
//!
//! ## Concepts
//!
//! * [`Tokens`]: Size and breakpoint dictionaries. Passed into every
//!   resolution, so theming is a matter of passing different tokens.
//! * [`BoxProps`]: The typed layout props. Build them in Rust or decode a
//!   host property bag with [`BoxProps::from_bag`].
//! * [`Style`]: The output, an ordered list of declarations and media blocks.
//! * [`StyleEngine`]: Where styles go to become class names. [`StyleSheet`]
//!   is the in-memory implementation.
//!
//! Token names that are not in the dictionaries are not rejected: they are
//! emitted as literal CSS values. [`Tokens::validate`] checks the
//! dictionaries themselves.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxstyle::{box_style, Align, BoxProps, Edge, Responsive, Tokens};
//!
//! let props = BoxProps {
//!     align: Some(Responsive::at("lg", Align::Center)),
//!     pad: Some(Edge::from("small")),
//!     ..Default::default()
//! };
//!
//! let style = box_style(&props, &Tokens::new());
//! assert_eq!(style.get("padding"), Some(".2rem"));
//!
//! let media: Vec<_> = style.media().collect();
//! assert_eq!(media[0].condition, "min-width: 992px");
//! ```
//!
//! ## Rendering a property bag
//!
//! ```rust
//! use boxstyle::{StyleSheet, StyledBox, Tokens};
//! use serde_json::json;
//!
//! let tokens = Tokens::new().with_size("large", "100px");
//! let mut sheet = StyleSheet::new();
//!
//! let bag = json!({"margin": "large", "className": "card", "id": "1"});
//! let rendered = StyledBox::new()
//!     .render(bag.as_object().unwrap(), &tokens, &mut sheet)
//!     .unwrap();
//!
//! assert_eq!(rendered.open_tag(), r#"<div class="css-0 card" id="1">"#);
//! assert!(sheet.to_css().contains("margin: 100px;"));
//! ```

pub mod container;
pub mod resolve;
pub mod style;
pub mod tokens;
mod util;

pub use container::{
    box_style, extract_box_props, partition, should_forward_prop, BoxProps, Dimension, Direction,
    Fill, Gap, PropBag, PropsError, RenderedBox, Responsive, StyledBox, Wrap, BOX_PROPS,
};
pub use resolve::{
    basis_style, basis_value, edge_style, flex_style, generic_style, overflow_style, Align,
    AlignContent, AlignSelf, Area, Edge, EdgeKind, Flex, FlexFactor, FlexGrowShrink, FlexPreset,
    GenericProps, Justify, Overflow, Scalar, Side,
};
pub use style::{Declaration, MediaRule, Rule, Style, StyleEngine, StyleSheet};
pub use tokens::{TokenError, TokenTable, TokenValidationError, Tokens};
pub use util::format_number;
