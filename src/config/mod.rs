//! Engine configuration
//!
//! Every tunable the scanner exposes lives in an explicit struct passed by
//! the caller; there is no process-wide state. All structs deserialize with
//! per-field defaults so a partial JSON document overrides only what it
//! names.

use serde::{Deserialize, Serialize};

use crate::indicators::trend::SLOPE_WINDOW;

/// Lookback windows for the indicator calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub fast_span: usize,
    pub slow_span: usize,
    pub trend_span: Option<usize>,
    pub rsi_period: usize,
    pub volume_window: usize,
    pub breakout_window: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            fast_span: 21,
            slow_span: 50,
            trend_span: None,
            rsi_period: 14,
            volume_window: 20,
            breakout_window: 20,
        }
    }
}

impl IndicatorConfig {
    /// Minimum series length for every configured column to be defined on
    /// the final bar. The `+1` terms cover the columns whose decision-time
    /// reads reach one bar further back (RSI deltas, prior rolling high);
    /// the slope tail covers the 5-bar mean slope of the fast EMA.
    pub fn min_bars(&self) -> usize {
        [
            self.fast_span,
            self.slow_span,
            self.trend_span.unwrap_or(0),
            self.rsi_period + 1,
            self.volume_window,
            self.breakout_window + 1,
            self.fast_span + SLOPE_WINDOW - 1,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// Weights and thresholds for the additive rule table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub trend_weight: i32,
    pub trend_penalty: i32,
    pub momentum_weight: i32,
    pub momentum_penalty: i32,
    pub volume_weight: i32,
    pub breakout_weight: i32,
    pub oversold: f64,
    pub overbought: f64,
    pub healthy_low: f64,
    pub healthy_high: f64,
    /// When set, the total is clamped from above after summing.
    pub max_score: Option<i32>,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            trend_weight: 40,
            trend_penalty: 20,
            momentum_weight: 20,
            momentum_penalty: 20,
            volume_weight: 20,
            breakout_weight: 20,
            oversold: 35.0,
            overbought: 70.0,
            healthy_low: 40.0,
            healthy_high: 65.0,
            max_score: None,
        }
    }
}

/// Weights and windows for the news/event scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub earnings_window_days: i64,
    pub earnings_weight: i32,
    pub dividend_window_days: i64,
    pub dividend_weight: i32,
    pub headline_weight: i32,
    pub news_points_cap: i32,
    pub buy_threshold: i32,
    pub monitor_threshold: i32,
    pub max_score: i32,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            earnings_window_days: 15,
            earnings_weight: 50,
            dividend_window_days: 10,
            dividend_weight: 30,
            headline_weight: 5,
            news_points_cap: 20,
            buy_threshold: 60,
            monitor_threshold: 40,
            max_score: 100,
        }
    }
}

/// Top-level scanner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub indicators: IndicatorConfig,
    pub score: ScoreConfig,
    pub news: NewsConfig,
    /// Assets scoring below this are dropped from scan reports.
    pub min_score: i32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            indicators: IndicatorConfig::default(),
            score: ScoreConfig::default(),
            news: NewsConfig::default(),
            min_score: 40,
        }
    }
}

impl ScanConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Deployment environment name, used to pick the log formatter.
pub fn get_environment() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}
