//! Declarations, media blocks and the [`Style`] container.

use std::fmt;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    /// CSS property name in kebab case, e.g. `margin-left`.
    pub property: String,
    /// CSS value text, emitted verbatim.
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Declarations gated by a media condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaRule {
    /// The condition without surrounding parentheses, e.g. `min-width: 992px`.
    pub condition: String,
    pub declarations: Vec<Declaration>,
}

/// One entry of a [`Style`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    Declaration(Declaration),
    Media(MediaRule),
}

/// A style declaration: the fragment type every resolver produces and the
/// final value handed to a [`StyleEngine`](super::StyleEngine).
///
/// # Example
///
/// ```rust
/// use boxstyle::Style;
///
/// let style = Style::new()
///     .with("display", "flex")
///     .with("gap", ".5rem");
///
/// assert_eq!(style.get("gap"), Some(".5rem"));
/// assert_eq!(style.to_string(), "display: flex;\ngap: .5rem;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    rules: Vec<Rule>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a declaration, returning the updated style for chaining.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(property, value);
        self
    }

    /// Appends a declaration.
    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.rules
            .push(Rule::Declaration(Declaration::new(property, value)));
    }

    /// Wraps the top-level declarations of `fragment` in a media block.
    ///
    /// Media blocks inside `fragment` are dropped; media queries do not nest.
    /// An empty fragment adds nothing.
    pub fn push_media(&mut self, condition: impl Into<String>, fragment: Style) {
        let declarations: Vec<Declaration> = fragment.declarations().cloned().collect();
        if declarations.is_empty() {
            return;
        }
        self.rules.push(Rule::Media(MediaRule {
            condition: condition.into(),
            declarations,
        }));
    }

    /// Appends every rule of `other`, preserving order.
    pub fn extend(&mut self, other: Style) {
        self.rules.extend(other.rules);
    }

    /// Returns the effective top-level value of `property` (the last one set).
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations()
            .filter(|decl| decl.property == property)
            .last()
            .map(|decl| decl.value.as_str())
    }

    /// Returns true if a top-level declaration sets `property`.
    pub fn has(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Iterates over the top-level declarations in order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.rules.iter().filter_map(|rule| match rule {
            Rule::Declaration(decl) => Some(decl),
            Rule::Media(_) => None,
        })
    }

    /// Iterates over the media blocks in order.
    pub fn media(&self) -> impl Iterator<Item = &MediaRule> {
        self.rules.iter().filter_map(|rule| match rule {
            Rule::Media(media) => Some(media),
            Rule::Declaration(_) => None,
        })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Renders the style as a complete rule set for `selector`.
    ///
    /// Top-level declarations go into one block; each media block becomes
    /// an `@media` rule wrapping the same selector.
    ///
    /// ```rust
    /// use boxstyle::Style;
    ///
    /// let mut style = Style::new().with("display", "flex");
    /// style.push_media("min-width: 992px", Style::new().with("gap", "1rem"));
    ///
    /// assert_eq!(
    ///     style.to_rule(".b"),
    ///     ".b {\n  display: flex;\n}\n@media (min-width: 992px) {\n  .b {\n    gap: 1rem;\n  }\n}"
    /// );
    /// ```
    pub fn to_rule(&self, selector: &str) -> String {
        let mut blocks = Vec::new();

        let top: Vec<String> = self
            .declarations()
            .map(|decl| format!("  {}", decl))
            .collect();
        if !top.is_empty() {
            blocks.push(format!("{} {{\n{}\n}}", selector, top.join("\n")));
        }

        for media in self.media() {
            let inner: Vec<String> = media
                .declarations
                .iter()
                .map(|decl| format!("    {}", decl))
                .collect();
            blocks.push(format!(
                "@media ({}) {{\n  {} {{\n{}\n  }}\n}}",
                media.condition,
                selector,
                inner.join("\n")
            ));
        }

        blocks.join("\n")
    }
}

impl fmt::Display for Style {
    /// Writes the declarations one per line, media blocks inline in order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match rule {
                Rule::Declaration(decl) => write!(f, "{}", decl)?,
                Rule::Media(media) => {
                    writeln!(f, "@media ({}) {{", media.condition)?;
                    for decl in &media.declarations {
                        writeln!(f, "  {}", decl)?;
                    }
                    write!(f, "}}")?;
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<Declaration> for Style {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(Rule::Declaration).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_last_value() {
        let style = Style::new().with("flex", "1 1 auto").with("flex", "0 1 auto");
        assert_eq!(style.get("flex"), Some("0 1 auto"));
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn test_get_ignores_media_blocks() {
        let mut style = Style::new();
        style.push_media("min-width: 992px", Style::new().with("gap", "1rem"));
        assert_eq!(style.get("gap"), None);
        assert_eq!(style.media().count(), 1);
    }

    #[test]
    fn test_push_media_skips_empty_fragment() {
        let mut style = Style::new();
        style.push_media("min-width: 992px", Style::new());
        assert!(style.is_empty());
    }

    #[test]
    fn test_push_media_flattens_nested_media() {
        let mut inner = Style::new().with("gap", "1rem");
        inner.push_media("min-width: 1px", Style::new().with("gap", "2rem"));

        let mut style = Style::new();
        style.push_media("min-width: 992px", inner);

        let media: Vec<_> = style.media().collect();
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].declarations, vec![Declaration::new("gap", "1rem")]);
    }

    #[test]
    fn test_display_with_media() {
        let mut style = Style::new().with("display", "flex");
        style.push_media("min-width: 576px", Style::new().with("flex-direction", "row"));
        assert_eq!(
            style.to_string(),
            "display: flex;\n@media (min-width: 576px) {\n  flex-direction: row;\n}"
        );
    }

    #[test]
    fn test_to_rule_without_top_level_declarations() {
        let mut style = Style::new();
        style.push_media("min-width: 576px", Style::new().with("gap", "1rem"));
        assert_eq!(
            style.to_rule(".x"),
            "@media (min-width: 576px) {\n  .x {\n    gap: 1rem;\n  }\n}"
        );
    }

    #[test]
    fn test_from_iterator() {
        let style: Style = vec![Declaration::new("a", "1"), Declaration::new("b", "2")]
            .into_iter()
            .collect();
        assert_eq!(style.get("b"), Some("2"));
    }
}
