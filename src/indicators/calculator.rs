//! Full-series indicator calculation
//!
//! Validates the input series, then derives every configured column in one
//! pass. Pure: same series and config always produce the same output.

use crate::config::IndicatorConfig;
use crate::indicators::error::{DataError, InvalidSeries};
use crate::indicators::momentum::rsi_series;
use crate::indicators::structure::rolling_max_series;
use crate::indicators::trend::{ema_series, ema_slope_series};
use crate::indicators::volume::sma_series;
use crate::models::bar::PriceSeries;
use crate::models::indicators::{IndicatorRow, IndicatorSeries};

/// Derive the indicator columns for one asset's daily series.
///
/// Fails with [`DataError::Invalid`] on malformed input (unsorted or
/// duplicate dates, non-finite prices) and [`DataError::Insufficient`] when
/// the series is shorter than the largest configured lookback. Never
/// produces partial results.
pub fn compute_indicators(
    series: &PriceSeries,
    config: &IndicatorConfig,
) -> Result<IndicatorSeries, DataError> {
    validate(series)?;

    let required = config.min_bars();
    if series.len() < required {
        return Err(DataError::Insufficient {
            required,
            actual: series.len(),
        });
    }

    let closes = series.closes();
    let highs = series.highs();
    let volumes = series.volumes();

    let ema_fast = ema_series(&closes, config.fast_span);
    let ema_slow = ema_series(&closes, config.slow_span);
    let ema_trend = config.trend_span.map(|span| ema_series(&closes, span));
    let ema_slope = ema_slope_series(&ema_fast, crate::indicators::trend::SLOPE_WINDOW);
    let rsi = rsi_series(&closes, config.rsi_period);
    let volume_avg = sma_series(&volumes, config.volume_window);
    let rolling_high = rolling_max_series(&highs, config.breakout_window);

    let rows: Vec<IndicatorRow> = (0..series.len())
        .map(|t| IndicatorRow {
            ema_fast: ema_fast[t],
            ema_slow: ema_slow[t],
            ema_trend: ema_trend.as_ref().and_then(|col| col[t]),
            rsi: rsi[t],
            volume_avg: volume_avg[t],
            rolling_high: rolling_high[t],
            ema_slope: ema_slope[t],
        })
        .collect();

    Ok(IndicatorSeries::new(
        series.bars().to_vec(),
        rows,
        config.trend_span.is_some(),
    ))
}

fn validate(series: &PriceSeries) -> Result<(), DataError> {
    let mut prev_date = None;
    for bar in series.bars() {
        for price in [bar.open, bar.high, bar.low, bar.close] {
            if !price.is_finite() {
                return Err(InvalidSeries::NonFinitePrice { date: bar.date }.into());
            }
        }
        if let Some(prev) = prev_date {
            if bar.date == prev {
                return Err(InvalidSeries::DuplicateDate { date: bar.date }.into());
            }
            if bar.date < prev {
                return Err(InvalidSeries::UnsortedDates { date: bar.date }.into());
            }
        }
        prev_date = Some(bar.date);
    }
    Ok(())
}
