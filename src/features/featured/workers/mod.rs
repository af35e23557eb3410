mod featured_refresher;

pub use featured_refresher::FeaturedRefresher;
