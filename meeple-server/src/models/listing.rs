//! Review list query parameters
//!
//! `sort_by` and `order` are parsed into closed enums whose SQL fragments are
//! static strings, so user input never becomes query text.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::{Pagination, ValidationError};

/// Columns a review list may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSortColumn {
    ReviewId,
    Owner,
    Title,
    Category,
    ReviewImgUrl,
    #[default]
    CreatedAt,
    Votes,
    Designer,
    CommentCount,
}

impl ReviewSortColumn {
    /// Every sortable column, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::ReviewId,
        Self::Owner,
        Self::Title,
        Self::Category,
        Self::ReviewImgUrl,
        Self::CreatedAt,
        Self::Votes,
        Self::Designer,
        Self::CommentCount,
    ];

    /// Query-string spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReviewId => "review_id",
            Self::Owner => "owner",
            Self::Title => "title",
            Self::Category => "category",
            Self::ReviewImgUrl => "review_img_url",
            Self::CreatedAt => "created_at",
            Self::Votes => "votes",
            Self::Designer => "designer",
            Self::CommentCount => "comment_count",
        }
    }

    /// Column reference used in ORDER BY.
    ///
    /// `comment_count` is the aggregate's output alias.
    pub fn sql_column(&self) -> &'static str {
        match self {
            Self::ReviewId => "r.review_id",
            Self::Owner => "r.owner",
            Self::Title => "r.title",
            Self::Category => "r.category",
            Self::ReviewImgUrl => "r.review_img_url",
            Self::CreatedAt => "r.created_at",
            Self::Votes => "r.votes",
            Self::Designer => "r.designer",
            Self::CommentCount => "comment_count",
        }
    }
}

impl FromStr for ReviewSortColumn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidSortQuery {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for ReviewSortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction. Parsing is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            other => Err(ValidationError::InvalidSortOrder {
                value: other.to_owned(),
            }),
        }
    }
}

/// Raw query string for `GET /api/reviews`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewListParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub category: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

/// Validated review list request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewListQuery {
    pub sort_by: ReviewSortColumn,
    pub order: SortOrder,
    /// Exact-match category slug filter
    pub category: Option<String>,
    pub pagination: Pagination,
}

impl TryFrom<ReviewListParams> for ReviewListQuery {
    type Error = ValidationError;

    /// Validation order: sort column, direction, then limit and page.
    fn try_from(params: ReviewListParams) -> Result<Self, Self::Error> {
        let sort_by = params
            .sort_by
            .as_deref()
            .map(str::parse::<ReviewSortColumn>)
            .transpose()?
            .unwrap_or_default();
        let order = params
            .order
            .as_deref()
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();
        let pagination = Pagination::parse(params.limit.as_deref(), params.page.as_deref())?;
        let category = params.category.filter(|slug| !slug.is_empty());

        Ok(Self {
            sort_by,
            order,
            category,
            pagination,
        })
    }
}
