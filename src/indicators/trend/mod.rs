pub mod ema;

pub use ema::{ema_series, ema_slope_series, SLOPE_WINDOW};
