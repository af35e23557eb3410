use chrono::{DateTime, Duration, Utc};

use crate::features::featured::models::FeaturedCandidate;
use crate::shared::constants::DEFAULT_FRESHNESS_WINDOW_DAYS;

/// Period within which a previously featured candidate is passed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessWindow {
    window: Duration,
}

impl FreshnessWindow {
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    /// Window of `days` days, saturating at `Duration::MAX` for huge values
    pub fn from_days(days: i64) -> Self {
        Self::new(Duration::try_days(days).unwrap_or(Duration::MAX))
    }

    /// Candidates featured at or after this instant are not fresh.
    ///
    /// Clamps to the earliest representable instant when the window reaches
    /// past it.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_signed(self.window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn is_fresh(candidate: &FeaturedCandidate, cutoff: DateTime<Utc>) -> bool {
        candidate
            .last_featured_date
            .map_or(true, |featured_at| featured_at < cutoff)
    }

    /// Narrow active candidates to the fresh ones, least-featured first.
    ///
    /// When every candidate was featured inside the window, all of them are
    /// returned unchanged so a selection is still possible.
    pub fn apply(
        &self,
        active: Vec<FeaturedCandidate>,
        now: DateTime<Utc>,
    ) -> Vec<FeaturedCandidate> {
        let cutoff = self.cutoff(now);
        let mut fresh: Vec<FeaturedCandidate> = active
            .iter()
            .filter(|c| Self::is_fresh(c, cutoff))
            .cloned()
            .collect();

        if fresh.is_empty() {
            return active;
        }

        fresh.sort_by_key(|c| c.featured_count);
        fresh
    }
}

impl Default for FreshnessWindow {
    fn default() -> Self {
        Self::from_days(DEFAULT_FRESHNESS_WINDOW_DAYS)
    }
}
