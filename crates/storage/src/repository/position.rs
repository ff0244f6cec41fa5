use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::position::{CreatePositionRequest, UpdatePositionRequest};
use crate::error::{Result, StorageError};
use crate::models::Position;

pub struct PositionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PositionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Position>> {
        let positions = sqlx::query_as::<_, Position>(
            "SELECT position_id, name, is_line, level
             FROM positions
             ORDER BY is_line DESC, level DESC, name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(positions)
    }

    pub async fn find_by_id(&self, position_id: Uuid) -> Result<Position> {
        let position = sqlx::query_as::<_, Position>(
            "SELECT position_id, name, is_line, level FROM positions WHERE position_id = $1",
        )
        .bind(position_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("position", position_id))?;

        Ok(position)
    }

    pub async fn create(&self, req: &CreatePositionRequest) -> Result<Position> {
        let position = sqlx::query_as::<_, Position>(
            "INSERT INTO positions (name, is_line, level)
             VALUES ($1, $2, $3)
             RETURNING position_id, name, is_line, level",
        )
        .bind(&req.name)
        .bind(req.is_line)
        .bind(req.level)
        .fetch_one(self.pool)
        .await?;

        Ok(position)
    }

    pub async fn update(&self, position_id: Uuid, req: &UpdatePositionRequest) -> Result<Position> {
        let existing = self.find_by_id(position_id).await?;

        let name = req.name.as_ref().unwrap_or(&existing.name);
        let is_line = req.is_line.unwrap_or(existing.is_line);
        let level = req.level.unwrap_or(existing.level);

        let position = sqlx::query_as::<_, Position>(
            "UPDATE positions
             SET name = $2, is_line = $3, level = $4
             WHERE position_id = $1
             RETURNING position_id, name, is_line, level",
        )
        .bind(position_id)
        .bind(name)
        .bind(is_line)
        .bind(level)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("position", position_id))?;

        Ok(position)
    }

    pub async fn delete(&self, position_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM positions WHERE position_id = $1")
            .bind(position_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("position", position_id));
        }

        Ok(())
    }

    /// Assign a cadet to a position. Re-assigning an already-held position is
    /// a no-op.
    pub async fn assign(
        &self,
        position_id: Uuid,
        cadet_id: Uuid,
        notes: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO position_assignments (position_id, cadet_id, notes)
             VALUES ($1, $2, $3)
             ON CONFLICT (position_id, cadet_id) DO NOTHING",
        )
        .bind(position_id)
        .bind(cadet_id)
        .bind(notes)
        .execute(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                StorageError::not_found("position", position_id)
            } else {
                err
            }
        })?;

        Ok(())
    }

    /// Remove an assignment; no error when none exists
    pub async fn unassign(&self, position_id: Uuid, cadet_id: Uuid) -> Result<()> {
        sqlx::query(
            "DELETE FROM position_assignments WHERE position_id = $1 AND cadet_id = $2",
        )
        .bind(position_id)
        .bind(cadet_id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Positions currently held by a cadet
    pub async fn for_cadet(&self, cadet_id: Uuid) -> Result<Vec<Position>> {
        let positions = sqlx::query_as::<_, Position>(
            "SELECT p.position_id, p.name, p.is_line, p.level
             FROM position_assignments pa
             JOIN positions p ON p.position_id = pa.position_id
             WHERE pa.cadet_id = $1 AND pa.end_date IS NULL
             ORDER BY p.level DESC, p.name",
        )
        .bind(cadet_id)
        .fetch_all(self.pool)
        .await?;

        Ok(positions)
    }
}
