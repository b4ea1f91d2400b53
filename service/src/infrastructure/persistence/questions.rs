use antenne_common::{NewQuestion, QUESTIONS_TABLE, WebradioQuestion};
use chrono::Utc;

use super::{PostgresStore, storage_error};
use crate::domain::repository::{QuestionRepository, RepositoryError};

impl QuestionRepository for PostgresStore {
    async fn for_show(&self, show_id: i64) -> Result<Vec<WebradioQuestion>, RepositoryError> {
        sqlx::query_as::<_, WebradioQuestion>(&format!(
            "SELECT * FROM {QUESTIONS_TABLE} WHERE show_id = $1 ORDER BY date ASC"
        ))
        .bind(show_id)
        .fetch_all(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn create(&self, new: NewQuestion) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>(&format!(
            "INSERT INTO {QUESTIONS_TABLE} (show_id, question, date)
             VALUES ($1, $2, $3)
             RETURNING id"
        ))
        .bind(new.show_id)
        .bind(new.question.as_ref())
        .bind(Utc::now())
        .fetch_one(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query(&format!("DELETE FROM {QUESTIONS_TABLE} WHERE id = $1"))
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}
