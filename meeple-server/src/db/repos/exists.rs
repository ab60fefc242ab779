//! Existence checks for referenced rows
//!
//! Used to turn a missing parent (a category filter, the review a comment
//! hangs off) into a domain 404 instead of an empty list or a raw
//! foreign-key error.

use sqlx::PgPool;

use super::DbError;

/// A row identified by table, column and value.
///
/// Table and column names are fixed per variant; only the value is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference<'a> {
    CategorySlug(&'a str),
    ReviewId(i32),
}

impl Reference<'_> {
    pub fn table(&self) -> &'static str {
        match self {
            Self::CategorySlug(_) => "categories",
            Self::ReviewId(_) => "reviews",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::CategorySlug(_) => "slug",
            Self::ReviewId(_) => "review_id",
        }
    }

    /// "<table> <column>", the subject of the not-found message
    fn resource(&self) -> &'static str {
        match self {
            Self::CategorySlug(_) => "categories slug",
            Self::ReviewId(_) => "reviews review_id",
        }
    }

    fn exists_sql(&self) -> &'static str {
        match self {
            Self::CategorySlug(_) => "SELECT EXISTS(SELECT 1 FROM categories WHERE slug = $1)",
            Self::ReviewId(_) => "SELECT EXISTS(SELECT 1 FROM reviews WHERE review_id = $1)",
        }
    }

    fn value(&self) -> String {
        match self {
            Self::CategorySlug(slug) => (*slug).to_owned(),
            Self::ReviewId(id) => id.to_string(),
        }
    }
}

/// Fail with `DbError::NotFound` unless the referenced row exists.
pub async fn check_exists(pool: &PgPool, reference: Reference<'_>) -> Result<(), DbError> {
    let query = sqlx::query_scalar::<_, bool>(reference.exists_sql());
    let query = match reference {
        Reference::CategorySlug(slug) => query.bind(slug),
        Reference::ReviewId(id) => query.bind(id),
    };

    if query.fetch_one(pool).await? {
        Ok(())
    } else {
        Err(DbError::not_found(reference.resource(), reference.value()))
    }
}
