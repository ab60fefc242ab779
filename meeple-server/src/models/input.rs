//! Request input validated at construction
//!
//! Request bodies deserialize into all-optional DTOs; these types decide
//! which keys are required and what shape their values must have.

use serde_json::Value;

use super::ValidationError;

/// Parse a numeric path id (`review_id`, `comment_id`).
///
/// Only the type is checked here; ids that do not exist are a 404 from the
/// data layer.
pub fn parse_id(field: &'static str, raw: &str) -> Result<i32, ValidationError> {
    raw.parse()
        .map_err(|_| ValidationError::InvalidInputType { field })
}

/// Unwrap a required body key.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingKeys { field })
}

/// Signed vote delta from a PATCH body.
///
/// An absent (or null) `inc_votes` is rejected rather than read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncVotes(i32);

impl IncVotes {
    pub fn new(value: Option<Value>) -> Result<Self, ValidationError> {
        let value = required("inc_votes", value)?;

        value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Self)
            .ok_or(ValidationError::InvalidInputType { field: "inc_votes" })
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

/// Validated body for `POST /api/reviews`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub owner: String,
    pub title: String,
    pub review_body: String,
    pub designer: String,
    pub category: String,
    /// Falls back to the column default when absent
    pub review_img_url: Option<String>,
}

/// Validated body for `POST /api/reviews/{review_id}/comments`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub review_id: i32,
    pub author: String,
    pub body: String,
}

/// Body for `POST /api/categories`
///
/// Only `description` is checked up front; a missing `slug` is left to the
/// column's NOT NULL constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub slug: Option<String>,
    pub description: String,
}

impl NewCategory {
    pub fn new(slug: Option<String>, description: Option<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            slug,
            description: required("description", description)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids() {
        assert_eq!(parse_id("review_id", "7"), Ok(7));
        assert_eq!(parse_id("review_id", "-7"), Ok(-7));
        assert_eq!(
            parse_id("review_id", "seven"),
            Err(ValidationError::InvalidInputType { field: "review_id" })
        );
        // wider than the SERIAL column
        assert!(parse_id("comment_id", "99999999999").is_err());
    }

    #[test]
    fn inc_votes_accepts_signed_integers() {
        assert_eq!(IncVotes::new(Some(json!(10))).unwrap().get(), 10);
        assert_eq!(IncVotes::new(Some(json!(-100))).unwrap().get(), -100);
    }

    #[test]
    fn inc_votes_missing() {
        let err = IncVotes::new(None).unwrap_err();
        assert_eq!(err.to_string(), "object missing required keys");
    }

    #[test]
    fn inc_votes_wrong_type() {
        for value in [json!("ten"), json!(1.5), json!(true), json!([1]), json!(i64::MAX)] {
            let err = IncVotes::new(Some(value)).unwrap_err();
            assert_eq!(err.to_string(), "invalid input type");
        }
    }

    #[test]
    fn category_requires_description() {
        let err = NewCategory::new(Some("strategy".into()), None).unwrap_err();
        assert_eq!(err, ValidationError::MissingKeys { field: "description" });

        let category = NewCategory::new(None, Some("Long games".into())).unwrap();
        assert_eq!(category.slug, None);
    }
}
