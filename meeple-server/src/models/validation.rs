//! Validation error types

use std::fmt;

/// Input rejected before it reaches the database.
///
/// The `Display` text is the exact message clients receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `sort_by` is not one of the sortable columns
    InvalidSortQuery { value: String },

    /// `order` is not `ASC` or `DESC`
    InvalidSortOrder { value: String },

    /// Value could not be read as the expected type (e.g. non-numeric id)
    InvalidInputType { field: &'static str },

    /// Numeric value was zero or negative where a positive one is required
    NotPositive { field: &'static str },

    /// Request body lacks a required key
    MissingKeys { field: &'static str },

    /// Request body refers to rows that do not exist
    InvalidValues,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSortQuery { .. } => write!(f, "invalid sort query"),
            Self::InvalidSortOrder { .. } => write!(f, "invalid sort order"),
            Self::InvalidInputType { .. } => write!(f, "invalid input type"),
            Self::NotPositive { .. } => write!(f, "input must be positive"),
            Self::MissingKeys { .. } => write!(f, "object missing required keys"),
            Self::InvalidValues => write!(f, "object contains invalid values"),
        }
    }
}

impl ValidationError {
    /// The offending field or value, for logs; clients only see `Display`.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::InvalidSortQuery { value } | Self::InvalidSortOrder { value } => {
                Some(value.as_str())
            }
            Self::InvalidInputType { field }
            | Self::NotPositive { field }
            | Self::MissingKeys { field } => Some(*field),
            Self::InvalidValues => None,
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidSortQuery {
            value: "bananas".into(),
        };
        assert_eq!(err.to_string(), "invalid sort query");

        let err = ValidationError::NotPositive { field: "limit" };
        assert_eq!(err.to_string(), "input must be positive");

        let err = ValidationError::MissingKeys { field: "inc_votes" };
        assert_eq!(err.to_string(), "object missing required keys");
    }

    #[test]
    fn detail_names_the_offending_input() {
        let err = ValidationError::InvalidSortOrder { value: "sideways".into() };
        assert_eq!(err.detail(), Some("sideways"));

        let err = ValidationError::InvalidInputType { field: "limit" };
        assert_eq!(err.detail(), Some("limit"));

        assert_eq!(ValidationError::InvalidValues.detail(), None);
    }
}
