//! Composes the resolvers into the box style and binds it to an element.

use serde_json::Value;

use super::extract::{should_forward_prop, PropBag, CLASS_NAME};
use super::props::{BoxProps, PropsError};
use super::resolvers::{dimension_style, direction_style, fill_style, gap_style, wrap_style};
use super::responsive::responsive_style;
use crate::resolve::{basis_style, edge_style, flex_style, generic_style, overflow_style, EdgeKind};
use crate::style::{Style, StyleEngine};
use crate::tokens::Tokens;
use crate::util::{escape_attribute, is_attribute_name};

/// Element a [`StyledBox`] renders when none is given.
pub const DEFAULT_ELEMENT: &str = "div";

/// Computes the full style for a box.
///
/// The evaluation order is fixed. `flex` must come before `basis`: a box
/// with an active `flex` folds `basis` into the shorthand and emits no
/// separate `flex-basis`.
///
/// # Example
///
/// ```rust
/// use boxstyle::{box_style, BoxProps, Tokens, Wrap};
///
/// let props = BoxProps {
///     wrap: Some(Wrap::Reverse),
///     ..Default::default()
/// };
/// let style = box_style(&props, &Tokens::new());
///
/// assert_eq!(style.get("display"), Some("flex"));
/// assert_eq!(style.get("flex-wrap"), Some("wrap-reverse"));
/// ```
pub fn box_style(props: &BoxProps, tokens: &Tokens) -> Style {
    let mut style = Style::new()
        .with("display", "flex")
        .with("box-sizing", "border-box")
        .with("outline", "none");

    if props.centered {
        style.push("align-items", "center");
        style.push("justify-content", "center");
    }
    if let Some(align) = &props.align {
        style.extend(responsive_style(align, tokens, |align| {
            Style::new().with("align-items", align.as_css())
        }));
    }
    if let Some(align_content) = &props.align_content {
        style.extend(responsive_style(align_content, tokens, |align| {
            Style::new().with("align-content", align.as_css())
        }));
    }
    if let Some(justify) = &props.justify {
        style.extend(responsive_style(justify, tokens, |justify| {
            Style::new().with("justify-content", justify.as_css())
        }));
    }
    if let Some(justify_self) = &props.justify_self {
        style.push("justify-self", justify_self.as_css());
    }
    if let Some(direction) = &props.direction {
        style.extend(responsive_style(direction, tokens, direction_style));
    }
    if let Some(overflow) = props.overflow_prop.as_ref().or(props.overflow.as_ref()) {
        style.extend(overflow_style(overflow));
    }

    let flex = props.flex.as_ref().filter(|flex| flex.is_active());
    match (flex, &props.basis) {
        (Some(flex), basis) => style.extend(flex_style(flex, basis.as_ref())),
        (None, Some(basis)) => style.extend(basis_style(basis)),
        (None, None) => {}
    }

    if let Some(gap) = &props.gap {
        style.extend(responsive_style(gap, tokens, |gap| gap_style(gap, tokens)));
    }
    if let Some(height) = &props.height {
        style.extend(dimension_style("height", height));
    }
    if let Some(width) = &props.width {
        style.extend(dimension_style("width", width));
    }
    if let Some(fill) = props.fill {
        style.extend(fill_style(fill));
    }
    if let Some(wrap) = &props.wrap {
        style.extend(wrap_style(wrap));
    }
    if let Some(pad) = &props.pad {
        style.extend(edge_style(EdgeKind::Padding, pad, tokens));
    }
    style.extend(generic_style(&props.generic, tokens));

    style
}

/// A box rendered for one set of props.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBox {
    /// Element tag, after any `as` override.
    pub element: String,
    /// Engine class followed by the caller's `className`, space separated.
    pub class_name: String,
    /// Props forwarded to the element.
    pub attributes: PropBag,
    pub style: Style,
}

impl RenderedBox {
    /// The element's opening tag, e.g. `<div class="css-0" id="1">`.
    ///
    /// String attributes are written as is; other JSON values are written
    /// as their JSON text. Attribute values are escaped. Attributes whose
    /// names cannot appear in a tag are left out.
    pub fn open_tag(&self) -> String {
        let mut tag = format!(
            "<{} class=\"{}\"",
            self.element,
            escape_attribute(&self.class_name)
        );
        for (name, value) in &self.attributes {
            if !is_attribute_name(name) {
                log::debug!("skipping attribute with invalid name {:?}", name);
                continue;
            }
            let text = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            tag.push_str(&format!(" {}=\"{}\"", name, escape_attribute(&text)));
        }
        tag.push('>');
        tag
    }
}

/// The box component: [`box_style`] bound to a base element.
///
/// # Example
///
/// ```rust
/// use boxstyle::{StyleSheet, StyledBox, Tokens};
/// use serde_json::json;
///
/// let mut sheet = StyleSheet::new();
/// let bag = json!({"gap": true, "id": "main"});
///
/// let rendered = StyledBox::new()
///     .render(bag.as_object().unwrap(), &Tokens::new(), &mut sheet)
///     .unwrap();
///
/// assert_eq!(rendered.open_tag(), r#"<div class="css-0" id="main">"#);
/// assert_eq!(rendered.style.get("gap"), Some(".5rem"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledBox {
    element: String,
}

impl StyledBox {
    /// Creates a box rendering [`DEFAULT_ELEMENT`].
    pub fn new() -> Self {
        Self::with_element(DEFAULT_ELEMENT)
    }

    /// Creates a box rendering `element`.
    pub fn with_element(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
        }
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    /// Computes the style for `props`. See [`box_style`].
    pub fn style(&self, props: &BoxProps, tokens: &Tokens) -> Style {
        box_style(props, tokens)
    }

    /// Returns true if `prop` is passed through to the element.
    pub fn should_forward_prop(&self, prop: &str) -> bool {
        should_forward_prop(prop)
    }

    /// Renders a host property bag.
    ///
    /// Layout props are consumed, the style is registered with `engine`,
    /// and every other prop except `className` is forwarded.
    pub fn render(
        &self,
        bag: &PropBag,
        tokens: &Tokens,
        engine: &mut dyn StyleEngine,
    ) -> Result<RenderedBox, PropsError> {
        let props = BoxProps::from_bag(bag)?;
        let style = self.style(&props, tokens);

        let mut classes = vec![engine.insert(&style)];
        if let Some(class_name) = &props.class_name {
            classes.push(class_name.clone());
        }

        let attributes = bag
            .iter()
            .filter(|(key, _)| self.should_forward_prop(key) && key.as_str() != CLASS_NAME)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(RenderedBox {
            element: props.element.unwrap_or_else(|| self.element.clone()),
            class_name: classes.join(" "),
            attributes,
            style,
        })
    }
}

impl Default for StyledBox {
    fn default() -> Self {
        Self::new()
    }
}
