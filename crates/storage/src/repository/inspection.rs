use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::inspection::ChecklistItemInput;
use crate::error::Result;
use crate::models::{Inspection, InspectionItemScore};
use crate::services::scoring::InspectionResult;

const INSPECTION_COLUMNS: &str = "inspection_id, cadet_id, inspector_cap_id, inspection_date, \
     total_score, rating, comments, created_at";

pub struct InspectionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InspectionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The inspection recorded for a cadet on a given date, if any
    pub async fn find_by_cadet_and_date(
        &self,
        cadet_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<Inspection>> {
        let inspection = sqlx::query_as::<_, Inspection>(&format!(
            "SELECT {INSPECTION_COLUMNS}
             FROM inspections
             WHERE cadet_id = $1 AND inspection_date = $2"
        ))
        .bind(cadet_id)
        .bind(date)
        .fetch_optional(self.pool)
        .await?;

        Ok(inspection)
    }

    /// All inspections for a cadet, newest first
    pub async fn list_for_cadet(&self, cadet_id: Uuid) -> Result<Vec<Inspection>> {
        let inspections = sqlx::query_as::<_, Inspection>(&format!(
            "SELECT {INSPECTION_COLUMNS}
             FROM inspections
             WHERE cadet_id = $1
             ORDER BY inspection_date DESC"
        ))
        .bind(cadet_id)
        .fetch_all(self.pool)
        .await?;

        Ok(inspections)
    }

    /// Per-item rows of a stored inspection (empty on schemas without the
    /// breakdown table)
    pub async fn item_scores(&self, inspection_id: Uuid) -> Result<Vec<InspectionItemScore>> {
        let items = sqlx::query_as::<_, InspectionItemScore>(
            "SELECT inspection_id, section, item_name, score, comment
             FROM inspection_item_scores
             WHERE inspection_id = $1
             ORDER BY section, item_name",
        )
        .bind(inspection_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Write an inspection and its per-item breakdown in one transaction.
    ///
    /// An existing inspection for the same cadet and date is updated in place
    /// and its breakdown rows replaced, so either every row of the submission
    /// lands or none of it does.
    pub async fn upsert(
        &self,
        cadet_id: Uuid,
        inspector_cap_id: Option<i64>,
        date: NaiveDate,
        result: &InspectionResult,
        breakdown: Option<&[ChecklistItemInput]>,
    ) -> Result<Uuid> {
        let mut tx = self.pool.begin().await?;

        let inspection_id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO inspections
                 (cadet_id, inspector_cap_id, inspection_date, total_score, rating, comments)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (cadet_id, inspection_date)
             DO UPDATE SET
                 inspector_cap_id = EXCLUDED.inspector_cap_id,
                 total_score = EXCLUDED.total_score,
                 rating = EXCLUDED.rating,
                 comments = EXCLUDED.comments
             RETURNING inspection_id",
        )
        .bind(cadet_id)
        .bind(inspector_cap_id)
        .bind(date)
        .bind(result.total)
        .bind(result.rating.as_str())
        .bind(&result.comments)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(items) = breakdown {
            sqlx::query("DELETE FROM inspection_item_scores WHERE inspection_id = $1")
                .bind(inspection_id)
                .execute(&mut *tx)
                .await?;

            for item in items {
                sqlx::query(
                    "INSERT INTO inspection_item_scores
                         (inspection_id, section, item_name, score, comment)
                     VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(inspection_id)
                .bind(&item.section)
                .bind(&item.name)
                .bind(item.score)
                .bind(item.comment.trim())
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(inspection_id)
    }
}
