use antenne_common::{INFO_TABLE, InfoBlock};

use super::{PostgresStore, storage_error};
use crate::domain::repository::{InfoRepository, RepositoryError};

impl InfoRepository for PostgresStore {
    async fn list(&self, include_disabled: bool) -> Result<Vec<InfoBlock>, RepositoryError> {
        let sql = if include_disabled {
            format!("SELECT * FROM {INFO_TABLE} ORDER BY id DESC")
        } else {
            format!("SELECT * FROM {INFO_TABLE} WHERE enabled ORDER BY id DESC")
        };
        sqlx::query_as::<_, InfoBlock>(&sql)
            .fetch_all(self.pool())
            .await
            .map_err(storage_error)
    }

    async fn create(&self, html: String, css: String) -> Result<i64, RepositoryError> {
        // new blocks start disabled so they can be previewed before going up
        sqlx::query_scalar::<_, i64>(&format!(
            "INSERT INTO {INFO_TABLE} (html, css, enabled) VALUES ($1, $2, FALSE) RETURNING id"
        ))
        .bind(html)
        .bind(css)
        .fetch_one(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn update(&self, info: &InfoBlock) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "UPDATE {INFO_TABLE} SET html = $1, css = $2, enabled = $3 WHERE id = $4"
        ))
        .bind(&info.html)
        .bind(&info.css)
        .bind(info.enabled)
        .bind(info.id)
        .execute(self.pool())
        .await
        .map_err(storage_error)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query(&format!("DELETE FROM {INFO_TABLE} WHERE id = $1"))
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}
