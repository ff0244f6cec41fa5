use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::cadets::handlers::list_cadets,
        features::cadets::handlers::search_cadets,
        features::cadets::handlers::get_cadet,
        features::cadets::handlers::get_cadet_detailed,
        features::cadets::handlers::create_cadet,
        features::cadets::handlers::update_cadet,
        features::cadets::handlers::delete_cadet,
        features::inspections::handlers::submit_inspection,
        features::inspections::handlers::list_cadet_inspections,
        features::inspections::handlers::get_inspection,
        features::promotion::handlers::list_ranks,
        features::promotion::handlers::get_promotion_outlook,
        features::promotion::handlers::toggle_requirement,
        features::promotion::handlers::set_cadet_rank,
        features::positions::handlers::list_positions,
        features::positions::handlers::create_position,
        features::positions::handlers::update_position,
        features::positions::handlers::delete_position,
        features::positions::handlers::assign_position,
        features::positions::handlers::unassign_position,
        features::positions::handlers::list_cadet_positions,
        features::reports::handlers::list_reports,
        features::reports::handlers::list_cadet_reports,
        features::reports::handlers::create_report,
        features::reports::handlers::update_report,
        features::reports::handlers::delete_report,
    ),
    components(
        schemas(
            storage::dto::cadet::CreateCadetRequest,
            storage::dto::cadet::UpdateCadetRequest,
            storage::dto::cadet::CadetDetailResponse,
            storage::dto::cadet::RankAwardSummary,
            storage::dto::cadet::InspectionSummary,
            storage::dto::inspection::ChecklistItemInput,
            storage::dto::inspection::InspectionSubmission,
            storage::dto::inspection::InspectionDetailResponse,
            storage::dto::promotion::PromotionOutlook,
            storage::dto::promotion::RequirementStatus,
            storage::dto::promotion::ToggleRequirementRequest,
            storage::dto::promotion::SetRankRequest,
            storage::dto::position::CreatePositionRequest,
            storage::dto::position::UpdatePositionRequest,
            storage::dto::position::AssignPositionRequest,
            storage::dto::report::CreateReportRequest,
            storage::dto::report::UpdateReportRequest,
            storage::models::Cadet,
            storage::models::Rank,
            storage::models::Requirement,
            storage::models::Inspection,
            storage::models::InspectionItemScore,
            storage::models::Position,
            storage::models::Report,
        )
    ),
    tags(
        (name = "cadets", description = "Cadet roster endpoints"),
        (name = "inspections", description = "Uniform inspection scoring endpoints"),
        (name = "promotion", description = "Rank and promotion requirement endpoints"),
        (name = "positions", description = "Duty position endpoints"),
        (name = "reports", description = "Incident report endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Cadet Tracker API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let mut db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/cadets", features::cadets::routes::routes())
        .nest("/api/inspections", features::inspections::routes::routes())
        .nest("/api/promotion", features::promotion::routes::routes())
        .nest("/api/positions", features::positions::routes::routes())
        .nest("/api/reports", features::reports::routes::routes())
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listener")?;

    axum::serve(listener, app).await?;

    Ok(())
}
