pub mod candidate_store;
pub mod featured_context;
pub mod freshness;
pub mod rotation_selector;
pub mod weighted_sampler;

pub use candidate_store::{CandidateStore, PgCandidateStore};
pub use featured_context::FeaturedContext;
pub use freshness::FreshnessWindow;
pub use rotation_selector::{RotationSelector, SelectionOutcome};
