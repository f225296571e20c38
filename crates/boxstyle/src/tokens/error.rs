//! Token configuration errors.

/// Error returned when a token document cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The YAML document is malformed or has the wrong shape.
    #[error("invalid token YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The JSON document is malformed or has the wrong shape.
    #[error("invalid token JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned when token validation fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenValidationError {
    /// A size token does not hold a single CSS length-like value
    #[error("size '{name}' has invalid value '{value}'")]
    InvalidSize { name: String, value: String },
    /// A breakpoint token is not a `feature: value` media feature
    #[error("breakpoint '{name}' has invalid media condition '{condition}'")]
    InvalidBreakpoint { name: String, condition: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_error_display() {
        let err = TokenValidationError::InvalidSize {
            name: "large".to_string(),
            value: "1 rem".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("large"));
        assert!(msg.contains("1 rem"));
    }

    #[test]
    fn test_invalid_breakpoint_error_display() {
        let err = TokenValidationError::InvalidBreakpoint {
            name: "lg".to_string(),
            condition: "wide".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("breakpoint 'lg'"));
        assert!(msg.contains("'wide'"));
    }

    #[test]
    fn test_json_error_wraps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = TokenError::from(source);
        assert!(err.to_string().starts_with("invalid token JSON"));
    }
}
