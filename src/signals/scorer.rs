//! Additive rule scoring over the latest indicator row

use thiserror::Error;

use crate::config::ScoreConfig;
use crate::models::indicators::{IndicatorSeries, Snapshot};
use crate::models::score::{ReasonTag, ScoreReason, ScoreResult};

/// Scoring failures. A row with any undefined column is refused outright
/// rather than treated as zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("indicator series is empty")]
    EmptySeries,

    #[error("indicator `{0}` undefined on the decision row")]
    MissingIndicator(&'static str),
}

/// Score the most recent fully-defined row of `series`.
///
/// Each rule contributes an independent delta; the total is their plain sum,
/// clamped from above only when `config.max_score` is set. Deterministic and
/// side-effect free.
pub fn score(series: &IndicatorSeries, config: &ScoreConfig) -> Result<ScoreResult, ScoreError> {
    let (bar, row) = series.latest().ok_or(ScoreError::EmptySeries)?;

    let close = bar.close;
    let volume = bar.volume;
    let ema_fast = row.ema_fast.ok_or(ScoreError::MissingIndicator("ema_fast"))?;
    let ema_slow = row.ema_slow.ok_or(ScoreError::MissingIndicator("ema_slow"))?;
    let ema_slope = row.ema_slope.ok_or(ScoreError::MissingIndicator("ema_slope"))?;
    let rsi = row.rsi.ok_or(ScoreError::MissingIndicator("rsi"))?;
    let volume_avg = row
        .volume_avg
        .ok_or(ScoreError::MissingIndicator("volume_avg"))?;
    let rolling_high = row
        .rolling_high
        .ok_or(ScoreError::MissingIndicator("rolling_high"))?;

    // Breakout and the healthy-momentum band both read one bar back.
    let prev = series
        .row(series.len().wrapping_sub(2))
        .ok_or(ScoreError::MissingIndicator("prior bar"))?;
    let prev_rsi = prev.rsi.ok_or(ScoreError::MissingIndicator("rsi[-1]"))?;
    let prev_rolling_high = prev
        .rolling_high
        .ok_or(ScoreError::MissingIndicator("rolling_high[-1]"))?;

    let mut total = 0;
    let mut reasons = Vec::new();

    // Trend: either the full uptrend stack, or the below-fast-EMA penalty.
    let uptrend = close > ema_fast && ema_fast > ema_slow && ema_slope > 0.0;
    if uptrend {
        total += config.trend_weight;
        reasons.push(ScoreReason {
            tag: ReasonTag::Uptrend,
            description: format!(
                "uptrend: close {:.2} > fast EMA {:.2} > slow EMA {:.2}, slope {:+.4}",
                close, ema_fast, ema_slow, ema_slope
            ),
            delta: config.trend_weight,
        });
    } else if close < ema_fast {
        total -= config.trend_penalty;
    }

    // Momentum: the three RSI bands are alternatives, checked in this order.
    if rsi < config.oversold {
        total += config.momentum_weight;
        reasons.push(ScoreReason {
            tag: ReasonTag::Oversold,
            description: format!("RSI oversold: {:.1}", rsi),
            delta: config.momentum_weight,
        });
    } else if rsi > config.overbought {
        total -= config.momentum_penalty;
    } else if rsi >= config.healthy_low && rsi <= config.healthy_high && rsi > prev_rsi {
        total += config.momentum_weight;
        reasons.push(ScoreReason {
            tag: ReasonTag::HealthyMomentum,
            description: format!("RSI healthy and rising: {:.1} (prev {:.1})", rsi, prev_rsi),
            delta: config.momentum_weight,
        });
    }

    // Volume must be strictly above its average.
    let volume_confirmed = (volume as f64) > volume_avg;
    if volume_confirmed {
        total += config.volume_weight;
        reasons.push(ScoreReason {
            tag: ReasonTag::AboveAverageVolume,
            description: format!("volume {} above average {:.0}", volume, volume_avg),
            delta: config.volume_weight,
        });
    }

    // Breakout compares against the prior bar's rolling high and only
    // counts with volume confirmation.
    if volume_confirmed && close > prev_rolling_high {
        total += config.breakout_weight;
        reasons.push(ScoreReason {
            tag: ReasonTag::Breakout,
            description: format!(
                "breakout: close {:.2} above prior rolling high {:.2}",
                close, prev_rolling_high
            ),
            delta: config.breakout_weight,
        });
    }

    if let Some(cap) = config.max_score {
        total = total.min(cap);
    }

    Ok(ScoreResult {
        total_score: total,
        reasons,
        snapshot: Snapshot {
            date: bar.date,
            close,
            volume,
            ema_fast,
            ema_slow,
            rsi,
            volume_avg,
            rolling_high,
        },
    })
}
