use sqlx::PgPool;
use storage::{
    dto::report::{CreateReportRequest, UpdateReportRequest},
    error::Result,
    models::Report,
    repository::{cadet::CadetRepository, report::ReportRepository},
};
use uuid::Uuid;

/// All reports, newest incident first
pub async fn list_reports(pool: &PgPool) -> Result<Vec<Report>> {
    let repo = ReportRepository::new(pool);
    repo.list().await
}

/// Reports filed against one cadet
pub async fn list_cadet_reports(pool: &PgPool, cap_id: i64) -> Result<Vec<Report>> {
    let cadet = CadetRepository::new(pool).find_by_cap_id(cap_id).await?;

    let repo = ReportRepository::new(pool);
    repo.for_cadet(cadet.cadet_id).await
}

/// File a new report against a cadet (by CAP id)
pub async fn create_report(pool: &PgPool, request: &CreateReportRequest) -> Result<Report> {
    let cadet = CadetRepository::new(pool)
        .find_by_cap_id(request.cap_id)
        .await?;

    let repo = ReportRepository::new(pool);
    repo.create(
        cadet.cadet_id,
        &request.report_type,
        &request.description,
        request.incident_date,
    )
    .await
}

/// Update a report
pub async fn update_report(
    pool: &PgPool,
    report_id: Uuid,
    request: &UpdateReportRequest,
) -> Result<Report> {
    let repo = ReportRepository::new(pool);
    repo.update(report_id, request).await
}

/// Delete a report
pub async fn delete_report(pool: &PgPool, report_id: Uuid) -> Result<()> {
    let repo = ReportRepository::new(pool);
    repo.delete(report_id).await
}
