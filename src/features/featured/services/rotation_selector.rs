use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

use crate::core::error::Result;
use crate::features::featured::models::{
    CandidateStatsUpdate, FeaturedCandidate, FeaturedCategory,
};
use crate::features::featured::services::candidate_store::CandidateStore;
use crate::features::featured::services::freshness::FreshnessWindow;
use crate::features::featured::services::weighted_sampler;

/// Result of a rotation pass for one category
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// Snapshot of the chosen candidate as read, before its stats were bumped
    Selected(FeaturedCandidate),
    /// No active candidate exists in the category
    NoCandidates,
}

impl SelectionOutcome {
    pub fn into_candidate(self) -> Option<FeaturedCandidate> {
        match self {
            SelectionOutcome::Selected(candidate) => Some(candidate),
            SelectionOutcome::NoCandidates => None,
        }
    }
}

/// Picks the featured candidate for a category: freshness filter, then
/// weighted draw, then a best-effort stats write for the winner.
pub struct RotationSelector {
    store: Arc<dyn CandidateStore>,
    window: FreshnessWindow,
}

impl RotationSelector {
    pub fn new(store: Arc<dyn CandidateStore>, window: FreshnessWindow) -> Self {
        Self { store, window }
    }

    /// Select the featured candidate for `category`.
    ///
    /// Read failures are returned as errors. The stats write runs in the
    /// background and its failure is only logged.
    pub async fn select(&self, category: FeaturedCategory) -> Result<SelectionOutcome> {
        let (outcome, _bookkeeping) = self.select_at(category, Utc::now()).await?;
        Ok(outcome)
    }

    /// Same as [`select`](Self::select) with an explicit clock, also handing
    /// back the stats write task so callers can wait on it.
    pub(crate) async fn select_at(
        &self,
        category: FeaturedCategory,
        now: DateTime<Utc>,
    ) -> Result<(SelectionOutcome, Option<JoinHandle<()>>)> {
        let mut pool = self
            .store
            .query_fresh_candidates(category, self.window.cutoff(now))
            .await?;

        if pool.is_empty() {
            tracing::debug!(
                "No fresh {} candidates, falling back to all active candidates",
                category
            );
            pool = self.store.query_all_active_candidates(category).await?;
        }

        pool.retain(|c| c.is_active && c.category == category);
        let pool = self.window.apply(pool, now);

        let chosen = {
            let mut rng = rand::rng();
            weighted_sampler::sample(&pool, |c| c.selection_weight, &mut rng).cloned()
        };

        let Some(chosen) = chosen else {
            tracing::debug!("No active {} candidates to feature", category);
            return Ok((SelectionOutcome::NoCandidates, None));
        };

        tracing::info!(
            "Selected featured {}: {} ({}) from {} candidates",
            category,
            chosen.name,
            chosen.id,
            pool.len()
        );

        let bookkeeping = self.record_selection(&chosen, now);
        Ok((SelectionOutcome::Selected(chosen), Some(bookkeeping)))
    }

    fn record_selection(
        &self,
        candidate: &FeaturedCandidate,
        now: DateTime<Utc>,
    ) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let id = candidate.id;
        let stats = CandidateStatsUpdate::for_selection(candidate, now);

        tokio::spawn(async move {
            match store.update_candidate_stats(id, stats).await {
                Ok(()) => tracing::debug!(
                    "Recorded featured selection for candidate {} (count={})",
                    id,
                    stats.featured_count
                ),
                Err(e) => tracing::warn!(
                    "Failed to record featured selection for candidate {}: {}",
                    id,
                    e
                ),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{candidate, InMemoryCandidateStore};
    use chrono::Duration;

    fn selector(store: &Arc<InMemoryCandidateStore>) -> RotationSelector {
        RotationSelector::new(store.clone(), FreshnessWindow::default())
    }

    async fn select_and_wait(
        selector: &RotationSelector,
        category: FeaturedCategory,
        now: DateTime<Utc>,
    ) -> SelectionOutcome {
        let (outcome, bookkeeping) = selector.select_at(category, now).await.unwrap();
        if let Some(handle) = bookkeeping {
            handle.await.unwrap();
        }
        outcome
    }

    #[tokio::test]
    async fn test_empty_category_returns_no_candidates() {
        let store = Arc::new(InMemoryCandidateStore::new(vec![]));

        let outcome = selector(&store).select(FeaturedCategory::Bar).await;

        assert_eq!(tokio_test::assert_ok!(outcome), SelectionOutcome::NoCandidates);
        assert_eq!(store.update_count(), 0);
    }

    #[tokio::test]
    async fn test_inactive_candidates_are_never_selected() {
        let mut inactive = candidate(FeaturedCategory::Player);
        inactive.is_active = false;
        let store = Arc::new(InMemoryCandidateStore::new(vec![inactive]));

        let outcome = selector(&store).select(FeaturedCategory::Player).await.unwrap();

        assert_eq!(outcome, SelectionOutcome::NoCandidates);
    }

    #[tokio::test]
    async fn test_other_category_is_ignored() {
        let player = candidate(FeaturedCategory::Player);
        let store = Arc::new(InMemoryCandidateStore::new(vec![player]));

        let outcome = selector(&store).select(FeaturedCategory::Bar).await.unwrap();

        assert_eq!(outcome, SelectionOutcome::NoCandidates);
    }

    #[tokio::test]
    async fn test_recently_featured_is_skipped_while_fresh_exists() {
        let now = Utc::now();
        let mut stale = candidate(FeaturedCategory::Bar);
        stale.last_featured_date = Some(now - Duration::days(10));
        let mut recent = candidate(FeaturedCategory::Bar);
        recent.last_featured_date = Some(now - Duration::days(1));
        let store = Arc::new(InMemoryCandidateStore::new(vec![
            stale.clone(),
            recent.clone(),
        ]));
        // Keep the data static so every pass sees the same dates
        store.set_fail_updates(true);
        let selector = selector(&store);

        for _ in 0..200 {
            let outcome = select_and_wait(&selector, FeaturedCategory::Bar, now).await;
            assert_eq!(outcome.into_candidate().map(|c| c.id), Some(stale.id));
        }
    }

    #[tokio::test]
    async fn test_all_recent_still_selects() {
        let now = Utc::now();
        let mut a = candidate(FeaturedCategory::Player);
        a.last_featured_date = Some(now - Duration::hours(1));
        let mut b = candidate(FeaturedCategory::Player);
        b.last_featured_date = Some(now - Duration::days(2));
        let store = Arc::new(InMemoryCandidateStore::new(vec![a, b]));

        let outcome = select_and_wait(&selector(&store), FeaturedCategory::Player, now).await;

        assert!(matches!(outcome, SelectionOutcome::Selected(_)));
    }

    #[tokio::test]
    async fn test_only_selected_candidate_is_updated() {
        let now = Utc::now();
        let candidates: Vec<_> = (0..4).map(|_| candidate(FeaturedCategory::Bar)).collect();
        let store = Arc::new(InMemoryCandidateStore::new(candidates.clone()));

        let chosen = select_and_wait(&selector(&store), FeaturedCategory::Bar, now)
            .await
            .into_candidate()
            .unwrap();

        for original in &candidates {
            let current = store.get(original.id).unwrap();
            if original.id == chosen.id {
                assert_eq!(current.featured_count, original.featured_count + 1);
                assert_eq!(current.last_featured_date, Some(now));
            } else {
                assert_eq!(&current, original);
            }
        }
        assert_eq!(store.update_count(), 1);
    }

    #[tokio::test]
    async fn test_returns_pre_increment_snapshot() {
        let mut only = candidate(FeaturedCategory::Bar);
        only.featured_count = 3;
        let store = Arc::new(InMemoryCandidateStore::new(vec![only.clone()]));

        let chosen = select_and_wait(&selector(&store), FeaturedCategory::Bar, Utc::now())
            .await
            .into_candidate()
            .unwrap();

        assert_eq!(chosen, only);
        assert_eq!(store.get(only.id).unwrap().featured_count, 4);
    }

    #[tokio::test]
    async fn test_repeated_selection_increments_count_exactly() {
        let only = candidate(FeaturedCategory::Player);
        let store = Arc::new(InMemoryCandidateStore::new(vec![only.clone()]));
        let selector = selector(&store);

        for _ in 0..5 {
            select_and_wait(&selector, FeaturedCategory::Player, Utc::now()).await;
        }

        assert_eq!(store.get(only.id).unwrap().featured_count, 5);
    }

    #[tokio::test]
    async fn test_read_failure_is_returned_without_writes() {
        let store = Arc::new(InMemoryCandidateStore::new(vec![candidate(
            FeaturedCategory::Bar,
        )]));
        store.set_fail_reads(true);

        let result = selector(&store).select(FeaturedCategory::Bar).await;

        assert!(result.is_err());
        assert_eq!(store.update_count(), 0);
    }

    #[tokio::test]
    async fn test_write_failure_does_not_fail_selection() {
        let only = candidate(FeaturedCategory::Bar);
        let store = Arc::new(InMemoryCandidateStore::new(vec![only.clone()]));
        store.set_fail_updates(true);

        let outcome = select_and_wait(&selector(&store), FeaturedCategory::Bar, Utc::now()).await;

        assert_eq!(outcome, SelectionOutcome::Selected(only.clone()));
        assert_eq!(store.get(only.id).unwrap().featured_count, 0);
    }

    #[tokio::test]
    async fn test_weighted_rotation_end_to_end() {
        let now = Utc::now();
        let mut never = candidate(FeaturedCategory::Bar);
        never.selection_weight = Some(1.0);
        let mut heavy = candidate(FeaturedCategory::Bar);
        heavy.selection_weight = Some(3.0);
        heavy.last_featured_date = Some(now - Duration::days(8));
        let store = Arc::new(InMemoryCandidateStore::new(vec![never, heavy.clone()]));
        store.set_fail_updates(true);
        let selector = selector(&store);

        let trials = 4_000;
        let mut heavy_hits = 0;
        for _ in 0..trials {
            let outcome = select_and_wait(&selector, FeaturedCategory::Bar, now).await;
            if outcome.into_candidate().map(|c| c.id) == Some(heavy.id) {
                heavy_hits += 1;
            }
        }

        let share = heavy_hits as f64 / trials as f64;
        assert!((share - 0.75).abs() < 0.04, "heavy share was {}", share);
    }
}
