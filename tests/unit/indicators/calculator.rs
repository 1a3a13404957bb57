//! Unit tests for full-series indicator calculation

use bdrscan::config::IndicatorConfig;
use bdrscan::indicators::{compute_indicators, DataError, InvalidSeries};
use bdrscan::models::bar::{DailyBar, PriceSeries};
use chrono::{Days, NaiveDate};

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
}

fn uptrend_series(len: usize) -> PriceSeries {
    let bars = (0..len)
        .map(|i| {
            let close = 100.0 + i as f64 * 0.5;
            DailyBar::new(
                start_date() + Days::new(i as u64),
                close - 0.2,
                close + 0.3,
                close - 0.4,
                close,
                1_000_000 + (i as u64 % 5) * 10_000,
            )
        })
        .collect();
    PriceSeries::new(bars)
}

#[test]
fn all_columns_defined_from_min_bars_onward() {
    let config = IndicatorConfig::default();
    let series = uptrend_series(80);
    let out = compute_indicators(&series, &config).unwrap();

    let min_bars = config.min_bars();
    for (t, row) in out.rows().iter().enumerate() {
        if t + 1 >= min_bars {
            assert!(
                row.is_complete(false),
                "row {} should be complete from bar {}",
                t,
                min_bars - 1
            );
        }
    }
    // the slow EMA is the last column to warm up under the default config
    assert!(out.rows()[min_bars - 2].ema_slow.is_none());
}

#[test]
fn trend_column_present_only_when_configured() {
    let series = uptrend_series(220);
    let without = compute_indicators(&series, &IndicatorConfig::default()).unwrap();
    assert!(without.rows().last().unwrap().ema_trend.is_none());

    let config = IndicatorConfig {
        trend_span: Some(200),
        ..IndicatorConfig::default()
    };
    let with = compute_indicators(&series, &config).unwrap();
    assert!(with.rows().last().unwrap().ema_trend.is_some());
    assert!(with.trend_configured());
}

#[test]
fn short_series_is_rejected_before_computation() {
    let config = IndicatorConfig {
        slow_span: 60,
        ..IndicatorConfig::default()
    };
    let series = uptrend_series(40);
    assert_eq!(
        compute_indicators(&series, &config),
        Err(DataError::Insufficient {
            required: 60,
            actual: 40
        })
    );
}

#[test]
fn unsorted_dates_are_rejected() {
    let mut bars: Vec<DailyBar> = uptrend_series(80).bars().to_vec();
    bars.swap(10, 11);
    let date = bars[11].date;
    assert_eq!(
        compute_indicators(&PriceSeries::new(bars), &IndicatorConfig::default()),
        Err(DataError::Invalid(InvalidSeries::UnsortedDates { date }))
    );
}

#[test]
fn duplicate_dates_are_rejected() {
    let mut bars: Vec<DailyBar> = uptrend_series(80).bars().to_vec();
    bars[11].date = bars[10].date;
    let date = bars[10].date;
    assert_eq!(
        compute_indicators(&PriceSeries::new(bars), &IndicatorConfig::default()),
        Err(DataError::Invalid(InvalidSeries::DuplicateDate { date }))
    );
}

#[test]
fn non_finite_price_is_rejected() {
    let mut bars: Vec<DailyBar> = uptrend_series(80).bars().to_vec();
    bars[5].close = f64::NAN;
    let date = bars[5].date;
    assert_eq!(
        compute_indicators(&PriceSeries::new(bars), &IndicatorConfig::default()),
        Err(DataError::Invalid(InvalidSeries::NonFinitePrice { date }))
    );
}

#[test]
fn computation_is_idempotent() {
    let config = IndicatorConfig::default();
    let series = uptrend_series(80);
    let first = compute_indicators(&series, &config).unwrap();
    let second = compute_indicators(&series, &config).unwrap();
    assert_eq!(first.rows(), second.rows());
    assert_eq!(first.bars(), second.bars());
}

#[test]
fn rolling_high_tracks_the_window_maximum() {
    let config = IndicatorConfig::default();
    let series = uptrend_series(80);
    let out = compute_indicators(&series, &config).unwrap();

    // monotone rising highs: the rolling max is the bar's own high
    let last = out.rows().last().unwrap();
    let last_high = series.bars().last().unwrap().high;
    assert!((last.rolling_high.unwrap() - last_high).abs() < 1e-12);
}
