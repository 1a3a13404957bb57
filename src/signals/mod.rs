//! Signal evaluation interfaces.

pub mod engine;
pub mod news;
pub mod scorer;

pub use engine::{EngineError, ScanEngine};
pub use news::{assess, NewsAction, NewsAssessment, Trigger};
pub use scorer::{score, ScoreError};
