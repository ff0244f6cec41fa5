use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Requirement;

pub struct RequirementRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RequirementRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Requirements linked to a rank, ascending by requirement id for a
    /// stable display order
    pub async fn list_for_rank(&self, rank_id: Uuid) -> Result<Vec<Requirement>> {
        let requirements = sqlx::query_as::<_, Requirement>(
            "SELECT r.requirement_id, r.name, r.description
             FROM rank_requirements rr
             JOIN requirements r ON r.requirement_id = rr.requirement_id
             WHERE rr.rank_id = $1
             ORDER BY r.requirement_id ASC",
        )
        .bind(rank_id)
        .fetch_all(self.pool)
        .await?;

        Ok(requirements)
    }

    /// Ids of every requirement the cadet has completed
    pub async fn completed_for_cadet(&self, cadet_id: Uuid) -> Result<HashSet<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT requirement_id FROM requirement_completions WHERE cadet_id = $1",
        )
        .bind(cadet_id)
        .fetch_all(self.pool)
        .await?;

        Ok(ids.into_iter().collect())
    }

    /// Set-membership toggle. Marking complete inserts today's completion;
    /// the primary key on `(cadet_id, requirement_id)` turns a re-mark into a
    /// no-op rather than a duplicate row. Unmarking deletes whatever record
    /// exists and is a no-op otherwise.
    pub async fn set_completion(
        &self,
        cadet_id: Uuid,
        requirement_id: Uuid,
        completed: bool,
    ) -> Result<()> {
        if completed {
            sqlx::query(
                "INSERT INTO requirement_completions (cadet_id, requirement_id)
                 VALUES ($1, $2)
                 ON CONFLICT (cadet_id, requirement_id) DO NOTHING",
            )
            .bind(cadet_id)
            .bind(requirement_id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                let err = StorageError::from(e);
                if err.is_foreign_key_violation() {
                    StorageError::not_found("requirement", requirement_id)
                } else {
                    err
                }
            })?;
        } else {
            sqlx::query(
                "DELETE FROM requirement_completions
                 WHERE cadet_id = $1 AND requirement_id = $2",
            )
            .bind(cadet_id)
            .bind(requirement_id)
            .execute(self.pool)
            .await?;
        }

        Ok(())
    }
}
