pub mod calculator;
pub mod error;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volume;

pub use calculator::compute_indicators;
pub use error::{DataError, InvalidSeries};
