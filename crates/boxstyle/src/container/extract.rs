//! Splitting a property bag into layout props and everything else.

use serde_json::{Map, Value};

/// A host's untyped property bag.
pub type PropBag = Map<String, Value>;

/// Bag keys a box consumes. None of these reach the underlying element.
pub const BOX_PROPS: &[&str] = &[
    "basis",
    "align",
    "alignContent",
    "direction",
    "overflow",
    "overflowProp",
    "flex",
    "justify",
    "justifySelf",
    "as",
    "gap",
    "height",
    "width",
    "fill",
    "wrap",
    "margin",
    "pad",
    "padding",
    "alignSelf",
    "gridArea",
    "centered",
];

/// The class name key, extracted together with the layout props.
pub const CLASS_NAME: &str = "className";

/// Returns true if `prop` should be passed to the underlying element.
pub fn should_forward_prop(prop: &str) -> bool {
    !BOX_PROPS.contains(&prop)
}

/// Splits `bag` into the keys in `allow` and the rest.
///
/// The input is left untouched; both halves are copies.
pub fn partition(bag: &PropBag, allow: &[&str]) -> (PropBag, PropBag) {
    let mut picked = PropBag::new();
    let mut rest = PropBag::new();
    for (key, value) in bag {
        if allow.contains(&key.as_str()) {
            picked.insert(key.clone(), value.clone());
        } else {
            rest.insert(key.clone(), value.clone());
        }
    }
    (picked, rest)
}

/// Splits `bag` into box layout props (plus `className`) and the rest.
///
/// Composite components use this to forward only the non-layout props to
/// an inner element.
///
/// # Example
///
/// ```rust
/// use boxstyle::extract_box_props;
/// use serde_json::json;
///
/// let bag = json!({"gap": "small", "className": "x", "id": "main"});
/// let (layout, rest) = extract_box_props(bag.as_object().unwrap());
///
/// assert_eq!(layout.len(), 2);
/// assert_eq!(rest.get("id"), Some(&json!("main")));
/// ```
pub fn extract_box_props(bag: &PropBag) -> (PropBag, PropBag) {
    let mut allow: Vec<&str> = BOX_PROPS.to_vec();
    allow.push(CLASS_NAME);
    partition(bag, &allow)
}
