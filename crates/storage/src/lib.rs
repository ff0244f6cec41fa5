pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::Result;

/// What the connected schema supports, resolved once at connect time.
///
/// Deployments that predate the `inspection_item_scores` migration only hold
/// the aggregate inspection row; submissions against them skip the per-item
/// breakdown instead of probing the schema on every write.
#[derive(Debug, Clone, Copy)]
pub struct SchemaCapabilities {
    pub per_item_scores: bool,
}

impl SchemaCapabilities {
    pub async fn detect(pool: &PgPool) -> Result<Self> {
        let per_item_scores =
            sqlx::query_scalar::<_, bool>("SELECT to_regclass('inspection_item_scores') IS NOT NULL")
                .fetch_one(pool)
                .await?;

        Ok(Self { per_item_scores })
    }
}

#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
    capabilities: SchemaCapabilities,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let capabilities = SchemaCapabilities::detect(&pool).await?;

        Ok(Self { pool, capabilities })
    }

    /// Apply pending migrations, then refresh the capability flags since a
    /// migration may have just created the tables they describe.
    pub async fn run_migrations(&mut self) -> Result<()> {
        sqlx::migrate!().run(&self.pool).await?;
        self.capabilities = SchemaCapabilities::detect(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn capabilities(&self) -> SchemaCapabilities {
        self.capabilities
    }
}
