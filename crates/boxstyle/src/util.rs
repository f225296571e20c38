//! Small formatting helpers shared by the resolvers.

/// Formats a number the way it should appear in a CSS value.
///
/// Integral values drop the fractional part so that `11.0` reads as `11`.
///
/// # Example
///
/// ```rust
/// use boxstyle::format_number;
///
/// assert_eq!(format_number(11.0), "11");
/// assert_eq!(format_number(0.5), "0.5");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Formats a number as a pixel length, e.g. `11` → `11px`.
pub fn px(n: f64) -> String {
    format!("{}px", format_number(n))
}

/// Escapes text for use inside a double-quoted HTML attribute.
pub fn escape_attribute(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Returns true if `name` can be written as an HTML attribute name.
///
/// Rejects empty names, whitespace, quotes, `>`, `/`, `=`, `<` and control
/// characters.
pub fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("plain"), "plain");
        assert_eq!(escape_attribute(r#"a "b" & <c>"#), "a &quot;b&quot; &amp; &lt;c&gt;");
    }

    #[test]
    fn test_is_attribute_name() {
        assert!(is_attribute_name("id"));
        assert!(is_attribute_name("data-role"));
        assert!(is_attribute_name("aria-label"));
        assert!(!is_attribute_name(""));
        assert!(!is_attribute_name("a b"));
        assert!(!is_attribute_name("x\" onclick=\"y"));
        assert!(!is_attribute_name("a'b"));
        assert!(!is_attribute_name("a>b"));
        assert!(!is_attribute_name("a/b"));
        assert!(!is_attribute_name("a=b"));
    }

    #[test]
    fn test_format_number_integral() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-2.0), "-2");
    }

    #[test]
    fn test_format_number_fractional() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn test_px() {
        assert_eq!(px(11.0), "11px");
        assert_eq!(px(0.5), "0.5px");
    }
}
