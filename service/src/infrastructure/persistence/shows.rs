use antenne_common::{LIVE_FAMILY_CODES, NewShow, SHOWS_TABLE, ShowStatus, WebradioShow};
use chrono::Utc;
use sqlx::{Postgres, Transaction};

use super::{PostgresStore, storage_error, write_error};
use crate::domain::repository::{RepositoryError, ShowRepository, ShowStatusCounts};

const LIVE_CONFLICT: &str = "A show is already live";

fn live_family_sql() -> String {
    LIVE_FAMILY_CODES
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Mutual-exclusion check, run under the same transaction as the write so
/// two concurrent go-live requests serialize on the occupant row. The
/// partial unique index catches the remaining insert/insert race.
async fn ensure_antenna_free(
    tx: &mut Transaction<'_, Postgres>,
    current_id: Option<i64>,
) -> Result<(), RepositoryError> {
    let occupant: Option<i64> = sqlx::query_scalar(&format!(
        "SELECT id FROM {SHOWS_TABLE} WHERE status IN ({}) AND id <> $1 LIMIT 1 FOR UPDATE",
        live_family_sql()
    ))
    .bind(current_id.unwrap_or(0))
    .fetch_optional(&mut **tx)
    .await
    .map_err(storage_error)?;

    if occupant.is_some() {
        return Err(RepositoryError::UniqueViolation(LIVE_CONFLICT.to_string()));
    }
    Ok(())
}

impl ShowRepository for PostgresStore {
    async fn list(&self) -> Result<Vec<WebradioShow>, RepositoryError> {
        sqlx::query_as::<_, WebradioShow>(&format!(
            "SELECT * FROM {SHOWS_TABLE} ORDER BY date DESC"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn published(&self) -> Result<Vec<WebradioShow>, RepositoryError> {
        sqlx::query_as::<_, WebradioShow>(&format!(
            "SELECT * FROM {SHOWS_TABLE} WHERE status = 2 ORDER BY date DESC"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<WebradioShow>, RepositoryError> {
        sqlx::query_as::<_, WebradioShow>(&format!("SELECT * FROM {SHOWS_TABLE} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(storage_error)
    }

    async fn find_latest(&self) -> Result<Option<WebradioShow>, RepositoryError> {
        sqlx::query_as::<_, WebradioShow>(&format!(
            "SELECT * FROM {SHOWS_TABLE} ORDER BY id DESC LIMIT 1"
        ))
        .fetch_optional(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn current(&self) -> Result<Option<WebradioShow>, RepositoryError> {
        sqlx::query_as::<_, WebradioShow>(&format!(
            "SELECT * FROM {SHOWS_TABLE} WHERE status IN ({}) ORDER BY date DESC LIMIT 1",
            live_family_sql()
        ))
        .fetch_optional(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn create(&self, new: NewShow) -> Result<i64, RepositoryError> {
        let date = new.date.unwrap_or_else(Utc::now);
        let mut tx = self.pool().begin().await.map_err(storage_error)?;

        if new.status.is_live_family() {
            ensure_antenna_free(&mut tx, None).await?;
        }

        let id = sqlx::query_scalar::<_, i64>(&format!(
            "INSERT INTO {SHOWS_TABLE}
                 (title, description, thumbnail, stream_id, podcast_id, prompter, date, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id"
        ))
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.thumbnail)
        .bind(&new.stream_id)
        .bind(&new.podcast_id)
        .bind(&new.prompter)
        .bind(date)
        .bind(new.status)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| write_error(e, LIVE_CONFLICT))?;

        tx.commit().await.map_err(storage_error)?;
        Ok(id)
    }

    async fn update(&self, show: &WebradioShow) -> Result<(), RepositoryError> {
        let mut tx = self.pool().begin().await.map_err(storage_error)?;

        if show.status.is_live_family() {
            ensure_antenna_free(&mut tx, Some(show.id)).await?;
        }

        sqlx::query(&format!(
            "UPDATE {SHOWS_TABLE}
                SET title = $1, description = $2, thumbnail = $3, stream_id = $4,
                    podcast_id = $5, prompter = $6, date = $7, status = $8
              WHERE id = $9"
        ))
        .bind(&show.title)
        .bind(&show.description)
        .bind(&show.thumbnail)
        .bind(&show.stream_id)
        .bind(&show.podcast_id)
        .bind(&show.prompter)
        .bind(show.date)
        .bind(show.status)
        .bind(show.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| write_error(e, LIVE_CONFLICT))?;

        tx.commit().await.map_err(storage_error)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query(&format!("DELETE FROM {SHOWS_TABLE} WHERE id = $1"))
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(storage_error)?;
        Ok(())
    }

    async fn status_counts(&self) -> Result<ShowStatusCounts, RepositoryError> {
        let rows: Vec<(f64, i64)> = sqlx::query_as(&format!(
            "SELECT status, COUNT(*) FROM {SHOWS_TABLE} GROUP BY status"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(storage_error)?;

        let mut counts = ShowStatusCounts::default();
        for (code, count) in rows {
            // rows with a code outside the enumeration would predate the
            // validation layer; they are not counted anywhere
            let Ok(status) = ShowStatus::try_from(code) else {
                continue;
            };
            match status {
                ShowStatus::Draft(_) => counts.draft += count,
                ShowStatus::Waiting(_) => counts.waiting += count,
                ShowStatus::Live(_) => counts.live += count,
                ShowStatus::WaitingPodcast => counts.waiting_podcast += count,
                ShowStatus::Published => counts.published += count,
            }
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_family_sql_lists_the_four_codes() {
        assert_eq!(live_family_sql(), "-1, -1.5, 0, 0.5");
    }
}
