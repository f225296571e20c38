//! Integration tests rendering whole boxes from host property bags.

use boxstyle::{StyleSheet, StyledBox, Tokens};
use serde_json::{json, Value};

fn render(bag: Value, tokens: &Tokens, sheet: &mut StyleSheet) -> boxstyle::RenderedBox {
    StyledBox::new()
        .render(bag.as_object().expect("bag is an object"), tokens, sheet)
        .expect("props decode")
}

#[test]
fn test_full_prop_surface_snapshot() {
    let mut sheet = StyleSheet::new();
    let rendered = render(
        json!({
            "align": "stretch",
            "alignContent": "end",
            "direction": "column",
            "flex": {"grow": "2", "shrink": "1"},
            "basis": "1/2",
            "justify": "evenly",
            "gap": "medium",
            "height": {"min": "20%"},
            "width": {"max": "80%"},
            "fill": "vertical",
            "wrap": true,
            "className": "a-box-for-testing",
            "id": "1",
            "pad": "large",
            "margin": "small"
        }),
        &Tokens::new(),
        &mut sheet,
    );

    assert_eq!(
        rendered.open_tag(),
        r#"<div class="css-0 a-box-for-testing" id="1">"#
    );
    insta::assert_snapshot!(sheet.to_css(), @r"
    .css-0 {
      display: flex;
      box-sizing: border-box;
      outline: none;
      align-items: stretch;
      align-content: flex-end;
      justify-content: space-evenly;
      min-width: 0;
      min-height: 0;
      flex-direction: column;
      flex: 2 1 50%;
      gap: .8rem;
      min-height: 20%;
      max-width: 80%;
      height: 100%;
      flex-wrap: wrap;
      padding: 1rem;
      margin: .2rem;
    }
    ");
}

#[test]
fn test_overridden_sizes() {
    let tokens = Tokens::new().with_size("large", "100px");
    let mut sheet = StyleSheet::new();
    let rendered = render(
        json!({"margin": "medium", "pad": {"top": "large"}}),
        &tokens,
        &mut sheet,
    );

    assert_eq!(rendered.style.get("margin"), Some(".8rem"));
    assert_eq!(rendered.style.get("padding-top"), Some("100px"));
}

#[test]
fn test_spacing_examples() {
    let tokens = Tokens::new();
    let mut sheet = StyleSheet::new();

    let rendered = render(json!({"margin": "small"}), &tokens, &mut sheet);
    assert_eq!(rendered.style.get("margin"), Some(".2rem"));

    let rendered = render(
        json!({"margin": {"left": 11, "right": "1rem"}}),
        &tokens,
        &mut sheet,
    );
    assert_eq!(rendered.style.get("margin-left"), Some("11px"));
    assert_eq!(rendered.style.get("margin-right"), Some("1rem"));
}

#[test]
fn test_flex_example() {
    let mut sheet = StyleSheet::new();
    let rendered = render(
        json!({"flex": {"grow": 3, "shrink": false, "basis": "1/2"}}),
        &Tokens::new(),
        &mut sheet,
    );
    assert_eq!(rendered.style.get("flex"), Some("3 0 50%"));
}

#[test]
fn test_breakpoint_change_between_renders() {
    let bag = json!({"align": {"lg": "center"}});
    let mut tokens = Tokens::new();
    let mut sheet = StyleSheet::new();

    let first = render(bag.clone(), &tokens, &mut sheet);
    tokens.set_breakpoint("lg", "min-width: 1001px");
    let second = render(bag, &tokens, &mut sheet);

    let first: Vec<_> = first.style.media().cloned().collect();
    let second: Vec<_> = second.style.media().cloned().collect();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].condition, "min-width: 992px");
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].condition, "min-width: 1001px");
    assert_eq!(sheet.len(), 2);
}

#[test]
fn test_responsive_media_rules() {
    let mut sheet = StyleSheet::new();
    render(
        json!({"direction": {"md": "row"}, "gap": {"sm": true}}),
        &Tokens::new(),
        &mut sheet,
    );

    insta::assert_snapshot!(sheet.to_css(), @r"
    .css-0 {
      display: flex;
      box-sizing: border-box;
      outline: none;
    }
    @media (min-width: 768px) {
      .css-0 {
        min-width: 0;
        min-height: 0;
        flex-direction: row;
      }
    }
    @media (min-width: 576px) {
      .css-0 {
        gap: .5rem;
      }
    }
    ");
}

#[test]
fn test_wrap_examples() {
    let tokens = Tokens::new();
    let mut sheet = StyleSheet::new();

    let on = render(json!({"wrap": true}), &tokens, &mut sheet);
    let reverse = render(json!({"wrap": "reverse"}), &tokens, &mut sheet);
    let off = render(json!({"wrap": false}), &tokens, &mut sheet);
    let omitted = render(json!({}), &tokens, &mut sheet);

    assert_eq!(on.style.get("flex-wrap"), Some("wrap"));
    assert_eq!(reverse.style.get("flex-wrap"), Some("wrap-reverse"));
    assert!(!off.style.has("flex-wrap"));
    assert!(!omitted.style.has("flex-wrap"));
    assert_eq!(off.class_name, omitted.class_name);
}

#[test]
fn test_unknown_tokens_pass_through() {
    let mut sheet = StyleSheet::new();
    let rendered = render(
        json!({
            "margin": "mediun",
            "justify": "space-around",
            "basis": "12rem",
            "gap": {"wide": "small"}
        }),
        &Tokens::new(),
        &mut sheet,
    );

    assert_eq!(rendered.style.get("margin"), Some("mediun"));
    assert_eq!(rendered.style.get("justify-content"), Some("space-around"));
    assert_eq!(rendered.style.get("flex-basis"), Some("12rem"));
    let media: Vec<_> = rendered.style.media().collect();
    assert_eq!(media[0].condition, "wide");
}

#[test]
fn test_tokens_from_yaml_drive_rendering() {
    let tokens = Tokens::from_yaml(
        "sizes:\n  small: 3px\nbreakpoints:\n  lg: \"min-width: 1001px\"\n",
    )
    .unwrap();
    assert!(tokens.validate().is_ok());

    let mut sheet = StyleSheet::new();
    let rendered = render(
        json!({"pad": "small", "justify": {"lg": "center"}}),
        &tokens,
        &mut sheet,
    );
    assert_eq!(rendered.style.get("padding"), Some("3px"));
    assert_eq!(
        rendered.style.media().next().map(|m| m.condition.as_str()),
        Some("min-width: 1001px")
    );
}
