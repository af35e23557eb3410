mod featured_handler;

pub use featured_handler::*;
