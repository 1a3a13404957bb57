//! Batch scan: fan out per ticker, fan in ranked reports

pub mod universe;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScanConfig;
use crate::models::bar::PriceSeries;
use crate::models::score::ScoreResult;
use crate::signals::engine::ScanEngine;

pub use universe::{filter_bdr_universe, is_bdr_ticker, to_bdr_ticker, to_us_ticker};

/// One asset that cleared the minimum score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetReport {
    pub ticker: String,
    pub result: ScoreResult,
}

/// Evaluate every asset, keep those at or above `config.min_score`, and
/// rank them by score descending.
///
/// Assets that fail either pipeline stage are skipped with a debug log of
/// the typed error; a bad series never aborts the scan.
pub fn scan(assets: &[(String, PriceSeries)], config: &ScanConfig) -> Vec<AssetReport> {
    let mut reports = Vec::new();

    for (ticker, series) in assets {
        match ScanEngine::evaluate(series, config) {
            Ok(result) if result.total_score >= config.min_score => {
                reports.push(AssetReport {
                    ticker: ticker.clone(),
                    result,
                });
            }
            Ok(result) => {
                debug!(%ticker, score = result.total_score, "below minimum score");
            }
            Err(error) => {
                debug!(%ticker, %error, "skipping asset");
            }
        }
    }

    reports.sort_by(|a, b| b.result.total_score.cmp(&a.result.total_score));
    reports
}
