use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::featured::models::{FeaturedCandidate, FeaturedCategory};
use crate::features::featured::services::weighted_sampler::normalize_weight;

/// Response DTO for a featured candidate as shown to clients
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedCandidateDto {
    pub id: Uuid,
    pub category: FeaturedCategory,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl From<FeaturedCandidate> for FeaturedCandidateDto {
    fn from(c: FeaturedCandidate) -> Self {
        Self {
            id: c.id,
            category: c.category,
            name: c.name,
            description: c.description,
            image_url: c.image_url,
            location: c.location,
        }
    }
}

/// Both featured slots currently held by the service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedSnapshotDto {
    pub featured_bar: Option<FeaturedCandidateDto>,
    pub featured_player: Option<FeaturedCandidateDto>,
}

/// Candidate with rotation stats, for observing rotation fairness
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateStatsDto {
    pub id: Uuid,
    pub category: FeaturedCategory,
    pub name: String,
    pub is_active: bool,
    /// Weight used by the sampler after normalization (missing or non-positive becomes 1)
    pub effective_weight: f64,
    pub last_featured_date: Option<DateTime<Utc>>,
    pub featured_count: i32,
}

impl From<FeaturedCandidate> for CandidateStatsDto {
    fn from(c: FeaturedCandidate) -> Self {
        Self {
            id: c.id,
            category: c.category,
            name: c.name,
            is_active: c.is_active,
            effective_weight: normalize_weight(c.selection_weight),
            last_featured_date: c.last_featured_date,
            featured_count: c.featured_count,
        }
    }
}
