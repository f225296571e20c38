//! Style resolvers: pure functions from typed prop values to [`Style`](crate::Style) fragments.
//!
//! - [`edge_style`]: margin, border and padding on one or more sides
//! - [`overflow_style`]: overflow for both axes or per axis
//! - [`flex_style`] / [`basis_style`]: the `flex` shorthand and `flex-basis`
//! - [`generic_style`]: align-self, grid-area, margin and padding
//!
//! Token names are looked up in the [`Tokens`](crate::Tokens) passed in.
//! Names that are not tokens are used as literal CSS values.

mod align;
mod edge;
mod flex;
mod generic;
pub(crate) mod keyword;
mod overflow;
mod value;

pub use align::{Align, AlignContent, AlignSelf, Justify};
pub use edge::{edge_style, Area, Edge, EdgeKind, Side};
pub use flex::{
    basis_style, basis_value, flex_style, Flex, FlexFactor, FlexGrowShrink, FlexPreset, BASIS,
};
pub use generic::{generic_style, GenericProps};
pub use overflow::{overflow_style, Overflow};
pub use value::Scalar;
