use axum::{
    routing::{get, post},
    Router,
};

use crate::features::featured::handlers::{self, FeaturedState};

/// Create routes for the featured feature
///
/// Note: This feature is public (no authentication required); clients poll
/// the featured slots on app open.
pub fn routes(state: FeaturedState) -> Router {
    Router::new()
        .route("/api/featured", get(handlers::get_featured))
        .route(
            "/api/featured/{category}",
            get(handlers::get_featured_by_category),
        )
        .route(
            "/api/featured/{category}/refresh",
            post(handlers::refresh_featured),
        )
        .route(
            "/api/featured/{category}/candidates",
            get(handlers::list_candidates),
        )
        .with_state(state)
}
