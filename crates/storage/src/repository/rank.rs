use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Rank;

pub struct RankRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RankRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The full rank catalog, ascending by order
    pub async fn list_ordered(&self) -> Result<Vec<Rank>> {
        let ranks = sqlx::query_as::<_, Rank>(
            "SELECT rank_id, name, rank_order FROM ranks ORDER BY rank_order ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(ranks)
    }

    pub async fn find_by_id(&self, rank_id: Uuid) -> Result<Rank> {
        let rank = sqlx::query_as::<_, Rank>(
            "SELECT rank_id, name, rank_order FROM ranks WHERE rank_id = $1",
        )
        .bind(rank_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("rank", rank_id))?;

        Ok(rank)
    }

    /// Ranks ever awarded to a cadet
    pub async fn member_rank_ids(&self, cadet_id: Uuid) -> Result<Vec<Uuid>> {
        let ids =
            sqlx::query_scalar::<_, Uuid>("SELECT rank_id FROM cadet_ranks WHERE cadet_id = $1")
                .bind(cadet_id)
                .fetch_all(self.pool)
                .await?;

        Ok(ids)
    }

    /// Replace a cadet's rank: clear prior awards, then insert the new one,
    /// in a single transaction so the cadet can never end up with two
    /// current ranks.
    pub async fn set_cadet_rank(&self, cadet_id: Uuid, rank_id: Uuid) -> Result<()> {
        self.find_by_id(rank_id).await?;

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM cadet_ranks WHERE cadet_id = $1")
            .bind(cadet_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO cadet_ranks (cadet_id, rank_id) VALUES ($1, $2)")
            .bind(cadet_id)
            .bind(rank_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
