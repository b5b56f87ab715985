//! Remote fetcher boundary: the EuroLeague feeds JSON API.
//!
//! Everything returned here is a transport record without persistence
//! identity; [`crate::mapper`] turns it into domain and persisted shapes.

pub mod http;
pub mod types;

pub use http::{FeedClient, FeedSource, FEEDS_BASE_URL, REGULAR_SEASON_ROUNDS};
