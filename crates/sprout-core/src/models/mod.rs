pub mod evaluation;
pub mod score;
pub mod summary;
