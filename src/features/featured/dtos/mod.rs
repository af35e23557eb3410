mod featured_dto;

pub use featured_dto::{CandidateStatsDto, FeaturedCandidateDto, FeaturedSnapshotDto};
