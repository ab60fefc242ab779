//! Pagination types
//!
//! `limit` and `page` arrive as raw query-string values so that the
//! "non-numeric" and "not positive" failures can be told apart.

use serde::Deserialize;

use super::ValidationError;

/// Default items per page
pub const DEFAULT_LIMIT: i64 = 10;

/// Validated pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum rows returned
    pub limit: i64,
    /// Page number (1-indexed). `None` means no offset at all.
    pub page: Option<i64>,
}

impl Pagination {
    /// Validate raw `limit` / `page` values.
    ///
    /// Both must be positive integers when present; `limit` falls back to
    /// [`DEFAULT_LIMIT`].
    pub fn parse(limit: Option<&str>, page: Option<&str>) -> Result<Self, ValidationError> {
        let limit = match limit {
            Some(raw) => parse_positive("limit", raw)?,
            None => DEFAULT_LIMIT,
        };
        let page = page.map(|raw| parse_positive("page", raw)).transpose()?;

        Ok(Self { limit, page })
    }

    /// SQL OFFSET value, only when a page was requested.
    pub fn offset(&self) -> Option<i64> {
        self.page.map(|page| (page - 1).saturating_mul(self.limit))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: None,
        }
    }
}

/// Query parameters for paginated comment lists
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ValidationError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        Self::parse(params.limit.as_deref(), params.page.as_deref())
    }
}

/// Parse a strictly positive integer.
///
/// Anything that is not an integer literal is `InvalidInputType`; zero and
/// negatives are `NotPositive`.
pub fn parse_positive(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let value: i64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidInputType { field })?;

    if value <= 0 {
        return Err(ValidationError::NotPositive { field });
    }

    Ok(value)
}
