//! sprout-core
//!
//! Pure domain types for developmental assessments: score records,
//! evaluations and their summary snapshots. No scoring logic lives here.

pub mod error;
pub mod models;
