use sqlx::PgPool;

use crate::dto::cadet::{
    CadetDetailResponse, CreateCadetRequest, InspectionSummary, RankAwardSummary,
    UpdateCadetRequest,
};
use crate::error::{Result, StorageError};
use crate::models::{Cadet, Position};

const CADET_COLUMNS: &str = "cadet_id, cap_id, first_name, last_name, date_of_birth, created_at";

pub struct CadetRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CadetRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all cadets
    pub async fn list(&self) -> Result<Vec<Cadet>> {
        let cadets = sqlx::query_as::<_, Cadet>(&format!(
            "SELECT {CADET_COLUMNS} FROM cadets ORDER BY last_name, first_name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(cadets)
    }

    /// Search cadets by name or CAP id fragment
    pub async fn search(&self, term: &str) -> Result<Vec<Cadet>> {
        let pattern = format!("%{}%", term);

        let cadets = sqlx::query_as::<_, Cadet>(&format!(
            "SELECT {CADET_COLUMNS}
             FROM cadets
             WHERE first_name || ' ' || last_name ILIKE $1
                OR CAST(cap_id AS TEXT) LIKE $1
             ORDER BY last_name, first_name"
        ))
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(cadets)
    }

    /// Find a cadet by their organization-wide CAP id
    pub async fn find_by_cap_id(&self, cap_id: i64) -> Result<Cadet> {
        let cadet = sqlx::query_as::<_, Cadet>(&format!(
            "SELECT {CADET_COLUMNS} FROM cadets WHERE cap_id = $1"
        ))
        .bind(cap_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("cadet", cap_id))?;

        Ok(cadet)
    }

    /// Register a new cadet
    pub async fn create(&self, req: &CreateCadetRequest) -> Result<Cadet> {
        let cadet = sqlx::query_as::<_, Cadet>(&format!(
            "INSERT INTO cadets (cap_id, first_name, last_name, date_of_birth)
             VALUES ($1, $2, $3, $4)
             RETURNING {CADET_COLUMNS}"
        ))
        .bind(req.cap_id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.date_of_birth)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation(format!(
                    "CAP id {} is already registered",
                    req.cap_id
                ))
            } else {
                err
            }
        })?;

        Ok(cadet)
    }

    /// Update an existing cadet; absent fields keep their current values
    pub async fn update(&self, cap_id: i64, req: &UpdateCadetRequest) -> Result<Cadet> {
        let existing = self.find_by_cap_id(cap_id).await?;

        let first_name = req.first_name.as_ref().unwrap_or(&existing.first_name);
        let last_name = req.last_name.as_ref().unwrap_or(&existing.last_name);
        let date_of_birth = req.date_of_birth.or(existing.date_of_birth);

        let cadet = sqlx::query_as::<_, Cadet>(&format!(
            "UPDATE cadets
             SET first_name = $2, last_name = $3, date_of_birth = $4
             WHERE cap_id = $1
             RETURNING {CADET_COLUMNS}"
        ))
        .bind(cap_id)
        .bind(first_name)
        .bind(last_name)
        .bind(date_of_birth)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("cadet", cap_id))?;

        Ok(cadet)
    }

    /// Delete a cadet by CAP id
    pub async fn delete(&self, cap_id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM cadets WHERE cap_id = $1")
            .bind(cap_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("cadet", cap_id));
        }

        Ok(())
    }

    /// Full profile view: rank history, current positions, recent inspections
    /// and the report count
    pub async fn find_by_cap_id_detailed(&self, cap_id: i64) -> Result<CadetDetailResponse> {
        let cadet = self.find_by_cap_id(cap_id).await?;

        let ranks = sqlx::query_as::<_, RankAwardSummary>(
            "SELECT r.rank_id, r.name AS rank_name, r.rank_order, cr.awarded_on
             FROM cadet_ranks cr
             JOIN ranks r ON r.rank_id = cr.rank_id
             WHERE cr.cadet_id = $1
             ORDER BY r.rank_order DESC",
        )
        .bind(cadet.cadet_id)
        .fetch_all(self.pool)
        .await?;

        let positions = sqlx::query_as::<_, Position>(
            "SELECT p.position_id, p.name, p.is_line, p.level
             FROM position_assignments pa
             JOIN positions p ON p.position_id = pa.position_id
             WHERE pa.cadet_id = $1 AND pa.end_date IS NULL
             ORDER BY p.level DESC, p.name",
        )
        .bind(cadet.cadet_id)
        .fetch_all(self.pool)
        .await?;

        let recent_inspections = sqlx::query_as::<_, InspectionSummary>(
            "SELECT inspection_id, inspection_date, total_score, rating
             FROM inspections
             WHERE cadet_id = $1
             ORDER BY inspection_date DESC
             LIMIT 10",
        )
        .bind(cadet.cadet_id)
        .fetch_all(self.pool)
        .await?;

        let report_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports WHERE cadet_id = $1")
                .bind(cadet.cadet_id)
                .fetch_one(self.pool)
                .await?;

        Ok(CadetDetailResponse {
            cadet_id: cadet.cadet_id,
            cap_id: cadet.cap_id,
            first_name: cadet.first_name,
            last_name: cadet.last_name,
            date_of_birth: cadet.date_of_birth,
            created_at: cadet.created_at,
            ranks,
            positions,
            recent_inspections,
            report_count,
        })
    }
}
