use antenne_common::{AGENDA_TABLE, AgendaEvent, NewEvent};

use super::{PostgresStore, storage_error};
use crate::domain::repository::{AgendaRepository, RepositoryError};

impl AgendaRepository for PostgresStore {
    async fn list(&self) -> Result<Vec<AgendaEvent>, RepositoryError> {
        sqlx::query_as::<_, AgendaEvent>(&format!(
            "SELECT * FROM {AGENDA_TABLE} ORDER BY date DESC"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<AgendaEvent>, RepositoryError> {
        sqlx::query_as::<_, AgendaEvent>(&format!("SELECT * FROM {AGENDA_TABLE} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(storage_error)
    }

    async fn create(&self, new: NewEvent) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>(&format!(
            "INSERT INTO {AGENDA_TABLE} (title, content, thumbnail, color, date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id"
        ))
        .bind(&new.title)
        .bind(&new.content)
        .bind(&new.thumbnail)
        .bind(new.color.as_ref())
        .bind(new.date)
        .fetch_one(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn update(&self, event: &AgendaEvent) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "UPDATE {AGENDA_TABLE}
                SET title = $1, content = $2, thumbnail = $3, color = $4, date = $5
              WHERE id = $6"
        ))
        .bind(&event.title)
        .bind(&event.content)
        .bind(&event.thumbnail)
        .bind(&event.color)
        .bind(event.date)
        .bind(event.id)
        .execute(self.pool())
        .await
        .map_err(storage_error)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query(&format!("DELETE FROM {AGENDA_TABLE} WHERE id = $1"))
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}
