//! Pure conversions between transport records, domain records, and
//! persisted rows.
//!
//! Every function here is deterministic and side-effect free: `from_feed`
//! builds domain records out of wire DTOs (dropping transport-only fields),
//! `to_row`/`from_row` shuttle between domain records and the SQL rows in
//! [`crate::storage::models`]. Round-tripping a row through the domain and
//! back reproduces it exactly.

pub mod game;
pub mod player;
pub mod standing;
pub mod team;
