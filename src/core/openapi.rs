use utoipa::{Modify, OpenApi};

use crate::features::featured::{dtos as featured_dtos, handlers as featured_handlers, models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Featured (public)
        featured_handlers::get_featured,
        featured_handlers::get_featured_by_category,
        featured_handlers::refresh_featured,
        featured_handlers::list_candidates,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Featured
            models::FeaturedCategory,
            featured_dtos::FeaturedCandidateDto,
            featured_dtos::FeaturedSnapshotDto,
            featured_dtos::CandidateStatsDto,
            ApiResponse<featured_dtos::FeaturedCandidateDto>,
            ApiResponse<featured_dtos::FeaturedSnapshotDto>,
            ApiResponse<Vec<featured_dtos::CandidateStatsDto>>,
        )
    ),
    tags(
        (name = "featured", description = "Featured bar and player rotation (public)"),
    ),
    info(
        title = "Compete API",
        version = "0.1.0",
        description = "Featured bar and player rotation for Compete",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
