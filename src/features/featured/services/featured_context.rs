use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::featured::models::{FeaturedCandidate, FeaturedCategory};
use crate::features::featured::services::rotation_selector::RotationSelector;

/// Holds the currently featured bar and player.
///
/// Shared through axum state and the refresher worker. A failed refresh keeps
/// the previous value in its slot.
pub struct FeaturedContext {
    selector: Arc<RotationSelector>,
    featured_bar: RwLock<Option<FeaturedCandidate>>,
    featured_player: RwLock<Option<FeaturedCandidate>>,
}

impl FeaturedContext {
    pub fn new(selector: Arc<RotationSelector>) -> Self {
        Self {
            selector,
            featured_bar: RwLock::new(None),
            featured_player: RwLock::new(None),
        }
    }

    fn slot(&self, category: FeaturedCategory) -> &RwLock<Option<FeaturedCandidate>> {
        match category {
            FeaturedCategory::Bar => &self.featured_bar,
            FeaturedCategory::Player => &self.featured_player,
        }
    }

    /// Currently featured candidate for a category, if any has been loaded
    pub async fn current(&self, category: FeaturedCategory) -> Option<FeaturedCandidate> {
        self.slot(category).read().await.clone()
    }

    /// Both slots as (bar, player)
    pub async fn snapshot(&self) -> (Option<FeaturedCandidate>, Option<FeaturedCandidate>) {
        (
            self.current(FeaturedCategory::Bar).await,
            self.current(FeaturedCategory::Player).await,
        )
    }

    /// Run a rotation pass for `category` and store the result.
    ///
    /// An empty category clears the slot. On error the slot is left untouched.
    pub async fn refresh(&self, category: FeaturedCategory) -> Result<Option<FeaturedCandidate>> {
        let outcome = self.selector.select(category).await.map_err(|e| {
            tracing::error!("Failed to refresh featured {}: {}", category, e);
            e
        })?;

        let selected = outcome.into_candidate();
        if selected.is_none() {
            tracing::info!("No featured {} available, clearing slot", category);
        }

        *self.slot(category).write().await = selected.clone();
        Ok(selected)
    }

    /// Refresh both categories concurrently. Failures are logged per category.
    pub async fn refresh_all(&self) {
        let (bar, player) = futures::join!(
            self.refresh(FeaturedCategory::Bar),
            self.refresh(FeaturedCategory::Player)
        );

        let results = [
            (FeaturedCategory::Bar, bar),
            (FeaturedCategory::Player, player),
        ];
        for (category, result) in results {
            if let Err(e) = result {
                tracing::warn!("Keeping previous featured {} after error: {}", category, e);
            }
        }
    }
}
