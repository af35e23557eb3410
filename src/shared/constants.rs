/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// FEATURED ROTATION
// =============================================================================

/// Days a featured candidate sits out before it counts as fresh again
pub const DEFAULT_FRESHNESS_WINDOW_DAYS: i64 = 7;

/// Seconds between background rotations of the featured slots
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;

/// Upper bound on the freshness window (about a century)
pub const MAX_FRESHNESS_WINDOW_DAYS: i64 = 36_500;
