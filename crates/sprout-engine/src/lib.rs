//! sprout-engine
//!
//! Scoring and progress engine for developmental assessments. Synchronous,
//! in-memory and side-effect free apart from logging: persistence belongs
//! to the caller.

pub mod aggregate;
pub mod ceiling;
pub mod error;
pub mod events;
pub mod interpret;
pub mod lifecycle;
pub mod render;
pub mod session;
pub mod trend;

pub use aggregate::compute_summaries;
pub use ceiling::has_reached_ceiling;
pub use error::{EngineError, TransitionFault};
pub use session::ScoringSession;
pub use trend::ProgressTrend;
