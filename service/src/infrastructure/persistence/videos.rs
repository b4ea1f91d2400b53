use antenne_common::{NewVideo, VIDEOS_TABLE, Video};
use chrono::Utc;

use super::{PostgresStore, storage_error};
use crate::domain::repository::{ContentFilter, RepositoryError, VideoRepository};

impl VideoRepository for PostgresStore {
    async fn list(&self, filter: ContentFilter) -> Result<Vec<Video>, RepositoryError> {
        let rows = match (filter.only_published, filter.category) {
            (true, Some(category)) => {
                sqlx::query_as::<_, Video>(&format!(
                    "SELECT * FROM {VIDEOS_TABLE} WHERE status = 2 AND category = $1 ORDER BY date DESC"
                ))
                .bind(category.as_str())
                .fetch_all(self.pool())
                .await
            }
            (true, None) => {
                sqlx::query_as::<_, Video>(&format!(
                    "SELECT * FROM {VIDEOS_TABLE} WHERE status = 2 ORDER BY date DESC"
                ))
                .fetch_all(self.pool())
                .await
            }
            (false, Some(category)) => {
                sqlx::query_as::<_, Video>(&format!(
                    "SELECT * FROM {VIDEOS_TABLE} WHERE category = $1 ORDER BY date DESC"
                ))
                .bind(category.as_str())
                .fetch_all(self.pool())
                .await
            }
            (false, None) => {
                sqlx::query_as::<_, Video>(&format!(
                    "SELECT * FROM {VIDEOS_TABLE} ORDER BY date DESC"
                ))
                .fetch_all(self.pool())
                .await
            }
        };
        rows.map_err(storage_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Video>, RepositoryError> {
        sqlx::query_as::<_, Video>(&format!("SELECT * FROM {VIDEOS_TABLE} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(storage_error)
    }

    async fn find_latest(&self) -> Result<Option<Video>, RepositoryError> {
        sqlx::query_as::<_, Video>(&format!(
            "SELECT * FROM {VIDEOS_TABLE} ORDER BY id DESC LIMIT 1"
        ))
        .fetch_optional(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn create(&self, new: NewVideo) -> Result<i64, RepositoryError> {
        let date = new.date.unwrap_or_else(Utc::now);
        sqlx::query_scalar::<_, i64>(&format!(
            "INSERT INTO {VIDEOS_TABLE}
                 (title, description, thumbnail, video_id, platform, category, author, date, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id"
        ))
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.thumbnail)
        .bind(&new.video_id)
        .bind(new.platform.as_str())
        .bind(new.category.as_str())
        .bind(&new.author)
        .bind(date)
        .bind(new.status)
        .fetch_one(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn update(&self, video: &Video) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "UPDATE {VIDEOS_TABLE}
                SET title = $1, description = $2, thumbnail = $3, video_id = $4,
                    platform = $5, category = $6, author = $7, date = $8, status = $9
              WHERE id = $10"
        ))
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail)
        .bind(&video.video_id)
        .bind(&video.platform)
        .bind(&video.category)
        .bind(&video.author)
        .bind(video.date)
        .bind(video.status)
        .bind(video.id)
        .execute(self.pool())
        .await
        .map_err(storage_error)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query(&format!("DELETE FROM {VIDEOS_TABLE} WHERE id = $1"))
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(storage_error)?;
        Ok(())
    }

    async fn category_counts(&self) -> Result<Vec<(String, i64)>, RepositoryError> {
        sqlx::query_as::<_, (String, i64)>(&format!(
            "SELECT category, COUNT(*) FROM {VIDEOS_TABLE} GROUP BY category"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn platform_counts(&self) -> Result<Vec<(String, i64)>, RepositoryError> {
        sqlx::query_as::<_, (String, i64)>(&format!(
            "SELECT platform, COUNT(*) FROM {VIDEOS_TABLE} GROUP BY platform"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(storage_error)
    }
}
