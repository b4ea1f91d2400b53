use antenne_common::{AUTHORIZATIONS_TABLE, Authorization, NewAuthorization};

use super::{PostgresStore, storage_error, write_error};
use crate::domain::authorizations::SignedDecision;
use crate::domain::repository::{AuthorizationRepository, RepositoryError};

const DUPLICATE: &str = "Authorization already exists";

impl AuthorizationRepository for PostgresStore {
    async fn list(&self) -> Result<Vec<Authorization>, RepositoryError> {
        sqlx::query_as::<_, Authorization>(&format!(
            "SELECT * FROM {AUTHORIZATIONS_TABLE} ORDER BY submit_date DESC, id DESC"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Authorization>, RepositoryError> {
        sqlx::query_as::<_, Authorization>(&format!(
            "SELECT * FROM {AUTHORIZATIONS_TABLE} WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(storage_error)
    }

    async fn create(&self, new: NewAuthorization) -> Result<i64, RepositoryError> {
        // check and insert under one transaction; the partial unique index
        // on open records catches the concurrent-insert window the check
        // cannot see
        let mut tx = self.pool().begin().await.map_err(storage_error)?;

        let open: Option<i64> = sqlx::query_scalar(&format!(
            "SELECT id FROM {AUTHORIZATIONS_TABLE}
              WHERE element_type = $1 AND element_id = $2 AND status < 0
              LIMIT 1 FOR UPDATE"
        ))
        .bind(new.element_type.as_str())
        .bind(new.element_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(storage_error)?;

        if open.is_some() {
            return Err(RepositoryError::UniqueViolation(DUPLICATE.to_string()));
        }

        let id = sqlx::query_scalar::<_, i64>(&format!(
            "INSERT INTO {AUTHORIZATIONS_TABLE}
                 (element_type, element_id, content, status, submit_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id"
        ))
        .bind(new.element_type.as_str())
        .bind(new.element_id)
        .bind(&new.content)
        .bind(new.status)
        .bind(new.submit_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| write_error(e, DUPLICATE))?;

        tx.commit().await.map_err(storage_error)?;
        Ok(id)
    }

    async fn update_submission(
        &self,
        authorization: &Authorization,
    ) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "UPDATE {AUTHORIZATIONS_TABLE}
                SET element_type = $1, element_id = $2, content = $3,
                    submit_date = $4, status = $5
              WHERE id = $6"
        ))
        .bind(&authorization.element_type)
        .bind(authorization.element_id)
        .bind(&authorization.content)
        .bind(authorization.submit_date)
        .bind(authorization.status)
        .bind(authorization.id)
        .execute(self.pool())
        .await
        // an owner edit may repoint the record at another element; the
        // open-record index still applies
        .map_err(|e| write_error(e, DUPLICATE))?;
        Ok(())
    }

    async fn respond(&self, id: i64, decision: &SignedDecision) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "UPDATE {AUTHORIZATIONS_TABLE}
                SET status = $1, manager = $2, comments = $3,
                    response_date = $4, signature = $5
              WHERE id = $6"
        ))
        .bind(decision.decision.status)
        .bind(&decision.decision.manager)
        .bind(&decision.decision.comments)
        .bind(decision.decision.response_date)
        .bind(&decision.signature)
        .bind(id)
        .execute(self.pool())
        .await
        .map_err(storage_error)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query(&format!("DELETE FROM {AUTHORIZATIONS_TABLE} WHERE id = $1"))
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(storage_error)?;
        Ok(())
    }

    async fn delete_for_element(
        &self,
        element_type: &str,
        element_id: i64,
    ) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "DELETE FROM {AUTHORIZATIONS_TABLE} WHERE element_type = $1 AND element_id = $2"
        ))
        .bind(element_type)
        .bind(element_id)
        .execute(self.pool())
        .await
        .map_err(storage_error)?;
        Ok(())
    }
}
