mod candidate;

pub use candidate::{CandidateStatsUpdate, FeaturedCandidate, FeaturedCategory};
