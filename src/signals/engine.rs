//! Calculate-then-score pipeline for one asset

use thiserror::Error;

use crate::config::ScanConfig;
use crate::indicators::{compute_indicators, DataError};
use crate::models::bar::PriceSeries;
use crate::models::indicators::IndicatorSeries;
use crate::models::score::ScoreResult;
use crate::signals::scorer::{score, ScoreError};

/// Either stage of the pipeline failing for one asset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

pub struct ScanEngine;

impl ScanEngine {
    /// Run one calculate→score cycle. Stateless; safe to call concurrently
    /// across independent assets.
    pub fn evaluate(series: &PriceSeries, config: &ScanConfig) -> Result<ScoreResult, EngineError> {
        let indicators = compute_indicators(series, &config.indicators)?;
        Ok(score(&indicators, &config.score)?)
    }

    /// Same cycle, also returning the derived series (for charting or
    /// debugging callers).
    pub fn evaluate_with_indicators(
        series: &PriceSeries,
        config: &ScanConfig,
    ) -> Result<(ScoreResult, IndicatorSeries), EngineError> {
        let indicators = compute_indicators(series, &config.indicators)?;
        let result = score(&indicators, &config.score)?;
        Ok((result, indicators))
    }
}
