use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::featured::dtos::{
    CandidateStatsDto, FeaturedCandidateDto, FeaturedSnapshotDto,
};
use crate::features::featured::models::FeaturedCategory;
use crate::features::featured::services::{CandidateStore, FeaturedContext};
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

const NO_CANDIDATES_MESSAGE: &str = "No active candidates";

/// State shared by the featured handlers
#[derive(Clone)]
pub struct FeaturedState {
    pub context: Arc<FeaturedContext>,
    pub store: Arc<dyn CandidateStore>,
}

/// Get both featured slots
///
/// Slots are null until the first rotation pass for that category succeeds.
#[utoipa::path(
    get,
    path = "/api/featured",
    responses(
        (status = 200, description = "Currently featured bar and player", body = ApiResponse<FeaturedSnapshotDto>),
    ),
    tag = "featured"
)]
pub async fn get_featured(
    State(state): State<FeaturedState>,
) -> Result<Json<ApiResponse<FeaturedSnapshotDto>>> {
    let (bar, player) = state.context.snapshot().await;
    let snapshot = FeaturedSnapshotDto {
        featured_bar: bar.map(Into::into),
        featured_player: player.map(Into::into),
    };

    Ok(Json(ApiResponse::success(Some(snapshot), None, None)))
}

/// Get the featured candidate of one category
#[utoipa::path(
    get,
    path = "/api/featured/{category}",
    params(
        ("category" = FeaturedCategory, Path, description = "Featured category (bar or player)")
    ),
    responses(
        (status = 200, description = "Featured candidate, null when none is featured", body = ApiResponse<FeaturedCandidateDto>),
        (status = 400, description = "Unknown category")
    ),
    tag = "featured"
)]
pub async fn get_featured_by_category(
    State(state): State<FeaturedState>,
    AppPath(category): AppPath<FeaturedCategory>,
) -> Result<Json<ApiResponse<FeaturedCandidateDto>>> {
    let current = state.context.current(category).await;
    Ok(Json(slot_response(current.map(Into::into))))
}

/// Rotate the featured candidate of one category
///
/// Runs a rotation pass and returns the newly featured candidate. When the
/// category has no active candidates the slot is cleared and `data` is null.
/// On a read failure the previous candidate stays featured.
#[utoipa::path(
    post,
    path = "/api/featured/{category}/refresh",
    params(
        ("category" = FeaturedCategory, Path, description = "Featured category (bar or player)")
    ),
    responses(
        (status = 200, description = "Newly featured candidate", body = ApiResponse<FeaturedCandidateDto>),
        (status = 400, description = "Unknown category"),
        (status = 500, description = "Candidates could not be read")
    ),
    tag = "featured"
)]
pub async fn refresh_featured(
    State(state): State<FeaturedState>,
    AppPath(category): AppPath<FeaturedCategory>,
) -> Result<Json<ApiResponse<FeaturedCandidateDto>>> {
    let selected = state.context.refresh(category).await?;
    Ok(Json(slot_response(selected.map(Into::into))))
}

/// List candidates of a category with their rotation stats (paginated)
#[utoipa::path(
    get,
    path = "/api/featured/{category}/candidates",
    params(
        ("category" = FeaturedCategory, Path, description = "Featured category (bar or player)"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Candidates with rotation stats", body = ApiResponse<Vec<CandidateStatsDto>>),
        (status = 400, description = "Unknown category or malformed pagination")
    ),
    tag = "featured"
)]
pub async fn list_candidates(
    State(state): State<FeaturedState>,
    AppPath(category): AppPath<FeaturedCategory>,
    AppQuery(params): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<CandidateStatsDto>>>> {
    let (candidates, total) = state
        .store
        .list_candidates(category, params.offset(), params.limit())
        .await?;
    let items: Vec<CandidateStatsDto> = candidates.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

fn slot_response(slot: Option<FeaturedCandidateDto>) -> ApiResponse<FeaturedCandidateDto> {
    let message = slot.is_none().then(|| NO_CANDIDATES_MESSAGE.to_string());
    ApiResponse::success(slot, message, None)
}
