//! Type-safe wrappers for EuroLeague identifiers and seasons.

pub mod ids;
pub mod season;

pub use ids::{GameId, TeamCode};
pub use season::SeasonCode;
