use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::featured::models::{
    CandidateStatsUpdate, FeaturedCandidate, FeaturedCategory,
};

/// Persistent store the rotation reads candidates from and writes stats to
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Active candidates never featured or last featured before `freshness_cutoff`,
    /// least-featured first
    async fn query_fresh_candidates(
        &self,
        category: FeaturedCategory,
        freshness_cutoff: DateTime<Utc>,
    ) -> Result<Vec<FeaturedCandidate>>;

    /// All active candidates, least-featured first
    async fn query_all_active_candidates(
        &self,
        category: FeaturedCategory,
    ) -> Result<Vec<FeaturedCandidate>>;

    /// Record a selection on one candidate
    async fn update_candidate_stats(&self, id: Uuid, stats: CandidateStatsUpdate) -> Result<()>;

    /// Page through every candidate of a category (active or not) with its stats
    async fn list_candidates(
        &self,
        category: FeaturedCategory,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<FeaturedCandidate>, i64)>;
}

const CANDIDATE_COLUMNS: &str = r#"
    id, category, name, description, image_url, location, is_active,
    selection_weight, last_featured_date, featured_count, created_at, updated_at
"#;

/// Postgres-backed candidate store
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn query_fresh_candidates(
        &self,
        category: FeaturedCategory,
        freshness_cutoff: DateTime<Utc>,
    ) -> Result<Vec<FeaturedCandidate>> {
        let query = format!(
            r#"
            SELECT {}
            FROM featured_candidates
            WHERE category = $1
              AND is_active = TRUE
              AND (last_featured_date IS NULL OR last_featured_date < $2)
            ORDER BY featured_count ASC
            "#,
            CANDIDATE_COLUMNS
        );

        sqlx::query_as::<_, FeaturedCandidate>(&query)
            .bind(category)
            .bind(freshness_cutoff)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query fresh {} candidates: {:?}", category, e);
                AppError::Database(e)
            })
    }

    async fn query_all_active_candidates(
        &self,
        category: FeaturedCategory,
    ) -> Result<Vec<FeaturedCandidate>> {
        let query = format!(
            r#"
            SELECT {}
            FROM featured_candidates
            WHERE category = $1 AND is_active = TRUE
            ORDER BY featured_count ASC
            "#,
            CANDIDATE_COLUMNS
        );

        sqlx::query_as::<_, FeaturedCandidate>(&query)
            .bind(category)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query active {} candidates: {:?}", category, e);
                AppError::Database(e)
            })
    }

    async fn update_candidate_stats(&self, id: Uuid, stats: CandidateStatsUpdate) -> Result<()> {
        // GREATEST keeps featured_count monotonic when a stale snapshot lands late
        let result = sqlx::query(
            r#"
            UPDATE featured_candidates
            SET last_featured_date = $2,
                featured_count = GREATEST(featured_count, $3),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(stats.last_featured_date)
        .bind(stats.featured_count)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update stats for candidate {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Candidate {} not found", id)));
        }

        Ok(())
    }

    async fn list_candidates(
        &self,
        category: FeaturedCategory,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<FeaturedCandidate>, i64)> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM featured_candidates WHERE category = $1")
                .bind(category)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count {} candidates: {:?}", category, e);
                    AppError::Database(e)
                })?;

        let query = format!(
            r#"
            SELECT {}
            FROM featured_candidates
            WHERE category = $1
            ORDER BY is_active DESC, featured_count DESC, name ASC
            LIMIT $2 OFFSET $3
            "#,
            CANDIDATE_COLUMNS
        );

        let candidates = sqlx::query_as::<_, FeaturedCandidate>(&query)
            .bind(category)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list {} candidates: {:?}", category, e);
                AppError::Database(e)
            })?;

        Ok((candidates, total))
    }
}
