//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing or blank
    Required { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_display() {
        let err = ValidationError::Required { field: "title" };
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn too_long_display() {
        let err = ValidationError::TooLong {
            field: "title",
            max: 200,
        };
        assert_eq!(
            err.to_string(),
            "title exceeds maximum length of 200 characters"
        );
    }
}
