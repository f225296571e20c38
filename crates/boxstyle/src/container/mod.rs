//! The Box component: a flex container driven by layout props.
//!
//! - [`BoxProps`]: The typed prop set, decodable from a host [`PropBag`]
//! - [`box_style`]: Resolves props into a [`Style`](crate::Style) in a fixed order
//! - [`StyledBox`]: `box_style` bound to an element, rendering through a [`StyleEngine`](crate::StyleEngine)
//! - [`extract_box_props`] / [`partition`]: Split a bag into layout props and the rest
//! - [`Responsive`]: Values given per breakpoint
//!
//! # Evaluation order
//!
//! | Step | Props |
//! |------|-------|
//! | 1 | `centered`, `align`, `alignContent`, `justify`, `justifySelf` |
//! | 2 | `direction` |
//! | 3 | `overflowProp`, else `overflow` |
//! | 4 | `flex` (absorbs `basis`) |
//! | 5 | `basis` (only without an active `flex`) |
//! | 6 | `gap`, `height`, `width`, `fill`, `wrap` |
//! | 7 | `pad` |
//! | 8 | `alignSelf`, `gridArea`, `margin`, `padding` |

mod builder;
mod extract;
mod props;
mod resolvers;
mod responsive;

pub use builder::{box_style, RenderedBox, StyledBox, DEFAULT_ELEMENT};
pub use extract::{extract_box_props, partition, should_forward_prop, PropBag, BOX_PROPS, CLASS_NAME};
pub use props::{BoxProps, PropsError};
pub use resolvers::{
    dimension_style, direction_style, fill_style, gap_style, wrap_style, Dimension, Direction,
    Fill, Gap, Wrap,
};
pub use responsive::{responsive_style, Responsive};
