use antenne_common::{ARTICLES_TABLE, Article, NewArticle};
use chrono::Utc;

use super::{PostgresStore, storage_error};
use crate::domain::repository::{ArticleRepository, ContentFilter, RepositoryError};

impl ArticleRepository for PostgresStore {
    async fn list(&self, filter: ContentFilter) -> Result<Vec<Article>, RepositoryError> {
        let rows = match (filter.only_published, filter.category) {
            (true, Some(category)) => {
                sqlx::query_as::<_, Article>(&format!(
                    "SELECT * FROM {ARTICLES_TABLE} WHERE status = 2 AND category = $1 ORDER BY date DESC"
                ))
                .bind(category.as_str())
                .fetch_all(self.pool())
                .await
            }
            (true, None) => {
                sqlx::query_as::<_, Article>(&format!(
                    "SELECT * FROM {ARTICLES_TABLE} WHERE status = 2 ORDER BY date DESC"
                ))
                .fetch_all(self.pool())
                .await
            }
            (false, Some(category)) => {
                sqlx::query_as::<_, Article>(&format!(
                    "SELECT * FROM {ARTICLES_TABLE} WHERE category = $1 ORDER BY date DESC"
                ))
                .bind(category.as_str())
                .fetch_all(self.pool())
                .await
            }
            (false, None) => {
                sqlx::query_as::<_, Article>(&format!(
                    "SELECT * FROM {ARTICLES_TABLE} ORDER BY date DESC"
                ))
                .fetch_all(self.pool())
                .await
            }
        };
        rows.map_err(storage_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, RepositoryError> {
        sqlx::query_as::<_, Article>(&format!("SELECT * FROM {ARTICLES_TABLE} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(storage_error)
    }

    async fn find_latest(&self) -> Result<Option<Article>, RepositoryError> {
        sqlx::query_as::<_, Article>(&format!(
            "SELECT * FROM {ARTICLES_TABLE} ORDER BY id DESC LIMIT 1"
        ))
        .fetch_optional(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn create(&self, new: NewArticle) -> Result<i64, RepositoryError> {
        let date = new.date.unwrap_or_else(Utc::now);
        sqlx::query_scalar::<_, i64>(&format!(
            "INSERT INTO {ARTICLES_TABLE}
                 (title, body, thumbnail, thumbnail_src, category, author, views, date, status)
             VALUES ($1, $2, $3, $4, $5, $6, 0, $7, $8)
             RETURNING id"
        ))
        .bind(&new.title)
        .bind(&new.body)
        .bind(&new.thumbnail)
        .bind(&new.thumbnail_src)
        .bind(new.category.as_str())
        .bind(&new.author)
        .bind(date)
        .bind(new.status)
        .fetch_one(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn update(&self, article: &Article) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "UPDATE {ARTICLES_TABLE}
                SET title = $1, body = $2, thumbnail = $3, thumbnail_src = $4,
                    category = $5, author = $6, date = $7, status = $8
              WHERE id = $9"
        ))
        .bind(&article.title)
        .bind(&article.body)
        .bind(&article.thumbnail)
        .bind(&article.thumbnail_src)
        .bind(&article.category)
        .bind(&article.author)
        .bind(article.date)
        .bind(article.status)
        .bind(article.id)
        .execute(self.pool())
        .await
        .map_err(storage_error)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query(&format!("DELETE FROM {ARTICLES_TABLE} WHERE id = $1"))
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(storage_error)?;
        Ok(())
    }

    async fn record_view(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "UPDATE {ARTICLES_TABLE} SET views = views + 1 WHERE id = $1"
        ))
        .bind(id)
        .execute(self.pool())
        .await
        .map_err(storage_error)?;
        Ok(())
    }

    async fn category_counts(&self) -> Result<Vec<(String, i64)>, RepositoryError> {
        sqlx::query_as::<_, (String, i64)>(&format!(
            "SELECT category, COUNT(*) FROM {ARTICLES_TABLE} GROUP BY category"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(storage_error)
    }
}
