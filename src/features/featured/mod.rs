//! Featured content rotation for bars and players.
//!
//! Picks which sponsored bar and player are shown to users. Candidates not
//! featured within the freshness window are preferred, then one is drawn by
//! selection weight and its stats are recorded in the background. The current
//! picks live in a [`FeaturedContext`] shared with the HTTP handlers and the
//! periodic refresher.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/featured` | No | Both featured slots |
//! | GET | `/api/featured/{category}` | No | One featured slot |
//! | POST | `/api/featured/{category}/refresh` | No | Rotate one slot |
//! | GET | `/api/featured/{category}/candidates` | No | Candidates with rotation stats |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod workers;

pub use handlers::FeaturedState;
pub use services::{
    CandidateStore, FeaturedContext, FreshnessWindow, PgCandidateStore, RotationSelector,
};
pub use workers::FeaturedRefresher;
