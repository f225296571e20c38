//! Overflow resolution.

use serde::Deserialize;

use crate::style::Style;

/// Overflow for both axes, or per axis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Overflow {
    All(String),
    Axes {
        #[serde(default)]
        horizontal: Option<String>,
        #[serde(default)]
        vertical: Option<String>,
    },
}

impl From<&str> for Overflow {
    fn from(value: &str) -> Self {
        Overflow::All(value.to_string())
    }
}

/// Resolves overflow into `overflow`, or `overflow-x` / `overflow-y`.
pub fn overflow_style(overflow: &Overflow) -> Style {
    match overflow {
        Overflow::All(value) => Style::new().with("overflow", value.as_str()),
        Overflow::Axes {
            horizontal,
            vertical,
        } => {
            let mut style = Style::new();
            if let Some(value) = horizontal {
                style.push("overflow-x", value.as_str());
            }
            if let Some(value) = vertical {
                style.push("overflow-y", value.as_str());
            }
            style
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        let style = overflow_style(&Overflow::from("hidden"));
        assert_eq!(style.get("overflow"), Some("hidden"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn test_per_axis() {
        let style = overflow_style(&Overflow::Axes {
            horizontal: Some("auto".to_string()),
            vertical: Some("scroll".to_string()),
        });
        assert_eq!(style.get("overflow-x"), Some("auto"));
        assert_eq!(style.get("overflow-y"), Some("scroll"));
        assert!(!style.has("overflow"));
    }

    #[test]
    fn test_single_axis() {
        let overflow: Overflow = serde_json::from_str(r#"{"vertical": "hidden"}"#).unwrap();
        let style = overflow_style(&overflow);
        assert_eq!(style.get("overflow-y"), Some("hidden"));
        assert_eq!(style.len(), 1);
    }
}
