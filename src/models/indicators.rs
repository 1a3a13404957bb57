//! Bar-aligned derived indicator columns

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::bar::DailyBar;

/// Derived values for one bar. Every column is `None` until its lookback
/// window has enough history behind it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_fast: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_slow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_trend: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_avg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling_high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_slope: Option<f64>,
}

impl IndicatorRow {
    /// True once every configured column carries a value. `ema_trend` only
    /// counts when a trend window was configured at all.
    pub fn is_complete(&self, trend_configured: bool) -> bool {
        self.ema_fast.is_some()
            && self.ema_slow.is_some()
            && (!trend_configured || self.ema_trend.is_some())
            && self.rsi.is_some()
            && self.volume_avg.is_some()
            && self.rolling_high.is_some()
            && self.ema_slope.is_some()
    }
}

/// A price series augmented with its derived columns, one row per bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    bars: Vec<DailyBar>,
    rows: Vec<IndicatorRow>,
    trend_configured: bool,
}

impl IndicatorSeries {
    pub fn new(bars: Vec<DailyBar>, rows: Vec<IndicatorRow>, trend_configured: bool) -> Self {
        debug_assert_eq!(bars.len(), rows.len());
        Self {
            bars,
            rows,
            trend_configured,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn bar(&self, index: usize) -> Option<&DailyBar> {
        self.bars.get(index)
    }

    pub fn row(&self, index: usize) -> Option<&IndicatorRow> {
        self.rows.get(index)
    }

    pub fn trend_configured(&self) -> bool {
        self.trend_configured
    }

    /// Latest bar together with its derived row.
    pub fn latest(&self) -> Option<(&DailyBar, &IndicatorRow)> {
        Some((self.bars.last()?, self.rows.last()?))
    }
}

/// The decision row flattened for reporting. Only built from a row where
/// every required column was defined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: u64,
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub rsi: f64,
    pub volume_avg: f64,
    pub rolling_high: f64,
}
