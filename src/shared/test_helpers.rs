use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::featured::models::{
    CandidateStatsUpdate, FeaturedCandidate, FeaturedCategory,
};
use crate::features::featured::services::{CandidateStore, FreshnessWindow};

/// Active, never-featured candidate with weight 1 and fake display data
pub fn candidate(category: FeaturedCategory) -> FeaturedCandidate {
    let now = Utc::now();
    FeaturedCandidate {
        id: Uuid::new_v4(),
        category,
        name: CompanyName().fake(),
        description: Some(Sentence(3..8).fake()),
        image_url: None,
        location: None,
        is_active: true,
        selection_weight: Some(1.0),
        last_featured_date: None,
        featured_count: 0,
        created_at: now,
        updated_at: now,
    }
}

/// In-memory candidate store with switchable read/write failures
#[derive(Default)]
pub struct InMemoryCandidateStore {
    candidates: Mutex<Vec<FeaturedCandidate>>,
    fail_reads: AtomicBool,
    fail_updates: AtomicBool,
    updates: AtomicUsize,
}

impl InMemoryCandidateStore {
    pub fn new(candidates: Vec<FeaturedCandidate>) -> Self {
        Self {
            candidates: Mutex::new(candidates),
            ..Default::default()
        }
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    /// Number of stats writes that were applied
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: Uuid) -> Option<FeaturedCandidate> {
        self.candidates
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Overwrite the stored row with the same id
    pub fn replace(&self, candidate: FeaturedCandidate) {
        let mut candidates = self.candidates.lock().unwrap();
        if let Some(existing) = candidates.iter_mut().find(|c| c.id == candidate.id) {
            *existing = candidate;
        }
    }

    fn check_reads(&self) -> Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn active(&self, category: FeaturedCategory) -> Vec<FeaturedCandidate> {
        let mut active: Vec<FeaturedCandidate> = self
            .candidates
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.category == category && c.is_active)
            .cloned()
            .collect();
        active.sort_by_key(|c| c.featured_count);
        active
    }
}

#[async_trait]
impl CandidateStore for InMemoryCandidateStore {
    async fn query_fresh_candidates(
        &self,
        category: FeaturedCategory,
        freshness_cutoff: DateTime<Utc>,
    ) -> Result<Vec<FeaturedCandidate>> {
        self.check_reads()?;
        Ok(self
            .active(category)
            .into_iter()
            .filter(|c| FreshnessWindow::is_fresh(c, freshness_cutoff))
            .collect())
    }

    async fn query_all_active_candidates(
        &self,
        category: FeaturedCategory,
    ) -> Result<Vec<FeaturedCandidate>> {
        self.check_reads()?;
        Ok(self.active(category))
    }

    async fn update_candidate_stats(&self, id: Uuid, stats: CandidateStatsUpdate) -> Result<()> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }

        let mut candidates = self.candidates.lock().unwrap();
        let candidate = candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Candidate {} not found", id)))?;

        candidate.last_featured_date = Some(stats.last_featured_date);
        candidate.featured_count = candidate.featured_count.max(stats.featured_count);
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn list_candidates(
        &self,
        category: FeaturedCategory,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<FeaturedCandidate>, i64)> {
        self.check_reads()?;
        let all: Vec<FeaturedCandidate> = self
            .candidates
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect();
        let total = all.len() as i64;
        let page = all
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();
        Ok((page, total))
    }
}
