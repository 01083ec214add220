//! Author queries on Repository

use super::{Repository, StoreError, StoreResult};
use crate::models::{author::AuthorRow, Author};

impl Repository {
    /// Get an author by ID
    pub async fn authors_get_by_id(&self, id: i32) -> StoreResult<Author> {
        sqlx::query_as::<_, AuthorRow>("SELECT authorid, surname, name FROM author WHERE authorid = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Author::from)
            .ok_or(StoreError::NotFound { entity: "Author", id })
    }

    /// List all authors
    pub async fn authors_list(&self) -> StoreResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>("SELECT authorid, surname, name FROM author")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Author::from).collect())
    }
}
