//! Category repository

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::NewCategory;
use super::DbError;

/// Category record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub slug: String,
    pub description: String,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT slug, description FROM categories ORDER BY slug",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Insert a category.
    ///
    /// A NULL slug is rejected by the NOT NULL constraint, a duplicate one by
    /// the primary key.
    pub async fn create(&self, category: &NewCategory) -> Result<Category, DbError> {
        let category: Category = sqlx::query_as(
            r#"
            INSERT INTO categories (slug, description)
            VALUES ($1, $2)
            RETURNING slug, description
            "#,
        )
        .bind(category.slug.as_deref())
        .bind(&category.description)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }
}
