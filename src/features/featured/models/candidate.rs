use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Featured category enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "featured_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FeaturedCategory {
    Bar,
    Player,
}

impl std::fmt::Display for FeaturedCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeaturedCategory::Bar => write!(f, "bar"),
            FeaturedCategory::Player => write!(f, "player"),
        }
    }
}

/// Database model for a featured rotation candidate
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FeaturedCandidate {
    pub id: Uuid,
    pub category: FeaturedCategory,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub is_active: bool,
    pub selection_weight: Option<f64>,
    pub last_featured_date: Option<DateTime<Utc>>,
    pub featured_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stats written back for a candidate after it was selected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateStatsUpdate {
    pub last_featured_date: DateTime<Utc>,
    pub featured_count: i32,
}

impl CandidateStatsUpdate {
    /// Stats for a candidate chosen at `now`, based on its pre-selection snapshot
    pub fn for_selection(candidate: &FeaturedCandidate, now: DateTime<Utc>) -> Self {
        Self {
            last_featured_date: now,
            featured_count: candidate.featured_count.saturating_add(1),
        }
    }
}
