use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;

use crate::features::featured::services::FeaturedContext;

/// Background worker that rotates both featured slots on a fixed cadence
pub struct FeaturedRefresher {
    context: Arc<FeaturedContext>,
    period: Duration,
}

impl FeaturedRefresher {
    pub fn new(context: Arc<FeaturedContext>, period: Duration) -> Self {
        Self { context, period }
    }

    /// Run the refresher in a background loop
    pub async fn run(self) {
        tracing::info!(
            "Starting featured refresher worker (every {}s)",
            self.period.as_secs()
        );

        let mut ticker = interval(self.period);
        // Skip the immediate first tick; startup already did the initial load
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.context.refresh_all().await;
        }
    }
}
