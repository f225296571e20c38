//! The box property set.

use serde::Deserialize;

use super::extract::PropBag;
use super::resolvers::{Dimension, Direction, Fill, Gap, Wrap};
use super::responsive::Responsive;
use crate::resolve::{
    Align, AlignContent, AlignSelf, Edge, Flex, GenericProps, Justify, Overflow, Scalar,
};

/// Error returned when a property bag cannot be read as [`BoxProps`].
#[derive(Debug, thiserror::Error)]
pub enum PropsError {
    /// A recognized prop holds a value of the wrong shape, e.g. `margin: true`.
    #[error("invalid box props: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Layout props understood by a box.
///
/// Every field is optional. Unknown token names inside a field are kept and
/// emitted verbatim; only values of an impossible shape fail to decode.
///
/// # Example
///
/// ```rust
/// use boxstyle::{Align, BoxProps, Responsive};
///
/// let props = BoxProps {
///     align: Some(Responsive::at("lg", Align::Center)),
///     centered: true,
///     ..Default::default()
/// };
/// assert!(props.align.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxProps {
    pub align: Option<Responsive<Align>>,
    pub align_content: Option<Responsive<AlignContent>>,
    pub justify: Option<Responsive<Justify>>,
    pub justify_self: Option<AlignSelf>,
    pub direction: Option<Responsive<Direction>>,
    pub overflow: Option<Overflow>,
    /// Takes precedence over `overflow` when both are set.
    pub overflow_prop: Option<Overflow>,
    pub flex: Option<Flex>,
    pub basis: Option<Scalar>,
    pub gap: Option<Responsive<Gap>>,
    pub height: Option<Dimension>,
    pub width: Option<Dimension>,
    pub fill: Option<Fill>,
    pub wrap: Option<Wrap>,
    /// Box-level padding, applied before the generic `padding`.
    pub pad: Option<Edge>,
    /// Centers children on both axes.
    #[serde(default)]
    pub centered: bool,
    /// Element type override for this instance.
    #[serde(rename = "as")]
    pub element: Option<String>,
    pub class_name: Option<String>,
    #[serde(flatten)]
    pub generic: GenericProps,
}

impl BoxProps {
    /// Decodes props from a host property bag. Keys that are not box props
    /// are ignored.
    pub fn from_bag(bag: &PropBag) -> Result<Self, PropsError> {
        serde_json::from_value(serde_json::Value::Object(bag.clone())).map_err(|err| {
            log::debug!("failed to decode box props: {}", err);
            PropsError::Decode(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{Area, FlexGrowShrink, FlexPreset};
    use serde_json::json;

    fn bag(value: serde_json::Value) -> PropBag {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_from_bag_full_surface() {
        let props = BoxProps::from_bag(&bag(json!({
            "align": "stretch",
            "alignContent": "end",
            "alignSelf": "center",
            "justify": "evenly",
            "justifySelf": "start",
            "direction": "column",
            "overflowProp": "hidden",
            "flex": {"grow": 2, "shrink": 1},
            "basis": "1/2",
            "gap": "medium",
            "height": {"min": "20%"},
            "width": {"max": "80%"},
            "fill": "vertical",
            "wrap": true,
            "pad": "large",
            "margin": "small",
            "padding": {"top": "small"},
            "gridArea": "main",
            "centered": true,
            "as": "section",
            "className": "a-box-for-testing",
            "id": "1"
        })))
        .unwrap();

        assert_eq!(props.align, Some(Responsive::Value(Align::Stretch)));
        assert_eq!(props.align_content, Some(Responsive::Value(AlignContent::End)));
        assert_eq!(props.justify, Some(Responsive::Value(Justify::Evenly)));
        assert_eq!(props.justify_self, Some(AlignSelf::Start));
        assert_eq!(props.direction, Some(Responsive::Value(Direction::Column)));
        assert_eq!(props.overflow_prop, Some(Overflow::from("hidden")));
        assert_eq!(props.overflow, None);
        assert_eq!(
            props.flex,
            Some(Flex::Custom(FlexGrowShrink::new().grow(2).shrink(1)))
        );
        assert_eq!(props.basis, Some(Scalar::from("1/2")));
        assert_eq!(props.gap, Some(Responsive::Value(Gap::from("medium"))));
        assert_eq!(props.height, Some(Dimension::min("20%")));
        assert_eq!(props.width, Some(Dimension::max("80%")));
        assert_eq!(props.fill, Some(Fill::Vertical));
        assert_eq!(props.wrap, Some(Wrap::Enabled(true)));
        assert_eq!(props.pad, Some(Edge::from("large")));
        assert!(props.centered);
        assert_eq!(props.element.as_deref(), Some("section"));
        assert_eq!(props.class_name.as_deref(), Some("a-box-for-testing"));
        assert_eq!(props.generic.align_self, Some(AlignSelf::Center));
        assert_eq!(props.generic.grid_area.as_deref(), Some("main"));
        assert_eq!(props.generic.margin, Some(Edge::from("small")));
        assert_eq!(props.generic.padding, Some(Edge::from(Area::new().top("small"))));
    }

    #[test]
    fn test_from_bag_empty() {
        let props = BoxProps::from_bag(&PropBag::new()).unwrap();
        assert_eq!(props, BoxProps::default());
    }

    #[test]
    fn test_from_bag_responsive() {
        let props = BoxProps::from_bag(&bag(json!({
            "direction": {"sm": "column", "lg": "row"},
            "gap": {"md": true}
        })))
        .unwrap();
        assert_eq!(
            props.direction,
            Some(Responsive::at("sm", Direction::Column).and("lg", Direction::Row))
        );
        assert_eq!(props.gap, Some(Responsive::at("md", Gap::Enabled(true))));
    }

    #[test]
    fn test_from_bag_flex_preset() {
        let props = BoxProps::from_bag(&bag(json!({"flex": "grow"}))).unwrap();
        assert_eq!(props.flex, Some(Flex::Preset(FlexPreset::Grow)));
    }

    #[test]
    fn test_from_bag_both_overflow_keys() {
        let props = BoxProps::from_bag(&bag(json!({
            "overflow": "auto",
            "overflowProp": "hidden"
        })))
        .unwrap();
        assert_eq!(props.overflow, Some(Overflow::from("auto")));
        assert_eq!(props.overflow_prop, Some(Overflow::from("hidden")));
    }

    #[test]
    fn test_from_bag_wrong_shape() {
        let result = BoxProps::from_bag(&bag(json!({"margin": true})));
        assert!(matches!(result, Err(PropsError::Decode(_))));
    }
}
