use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::report::UpdateReportRequest;
use crate::error::{Result, StorageError};
use crate::models::Report;

const REPORT_COLUMNS: &str =
    "report_id, cadet_id, report_type, description, incident_date, resolved, resolved_by";

pub struct ReportRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReportRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All reports, newest incident first
    pub async fn list(&self) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports ORDER BY incident_date DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(reports)
    }

    pub async fn for_cadet(&self, cadet_id: Uuid) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(&format!(
            "SELECT {REPORT_COLUMNS}
             FROM reports
             WHERE cadet_id = $1
             ORDER BY incident_date DESC"
        ))
        .bind(cadet_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reports)
    }

    pub async fn find_by_id(&self, report_id: Uuid) -> Result<Report> {
        let report = sqlx::query_as::<_, Report>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE report_id = $1"
        ))
        .bind(report_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("report", report_id))?;

        Ok(report)
    }

    pub async fn create(
        &self,
        cadet_id: Uuid,
        report_type: &str,
        description: &str,
        incident_date: chrono::NaiveDate,
    ) -> Result<Report> {
        let report = sqlx::query_as::<_, Report>(&format!(
            "INSERT INTO reports (cadet_id, report_type, description, incident_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {REPORT_COLUMNS}"
        ))
        .bind(cadet_id)
        .bind(report_type)
        .bind(description)
        .bind(incident_date)
        .fetch_one(self.pool)
        .await?;

        Ok(report)
    }

    /// Update a report; absent fields keep their current values
    pub async fn update(&self, report_id: Uuid, req: &UpdateReportRequest) -> Result<Report> {
        let existing = self.find_by_id(report_id).await?;

        let report_type = req.report_type.as_ref().unwrap_or(&existing.report_type);
        let description = req.description.as_ref().unwrap_or(&existing.description);
        let incident_date = req.incident_date.unwrap_or(existing.incident_date);
        let resolved = req.resolved.unwrap_or(existing.resolved);
        let resolved_by = req.resolved_by.as_ref().or(existing.resolved_by.as_ref());

        let report = sqlx::query_as::<_, Report>(&format!(
            "UPDATE reports
             SET report_type = $2, description = $3, incident_date = $4,
                 resolved = $5, resolved_by = $6
             WHERE report_id = $1
             RETURNING {REPORT_COLUMNS}"
        ))
        .bind(report_id)
        .bind(report_type)
        .bind(description)
        .bind(incident_date)
        .bind(resolved)
        .bind(resolved_by)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("report", report_id))?;

        Ok(report)
    }

    pub async fn delete(&self, report_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM reports WHERE report_id = $1")
            .bind(report_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("report", report_id));
        }

        Ok(())
    }
}
