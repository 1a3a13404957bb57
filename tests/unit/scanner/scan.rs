//! Unit tests for the batch scanner

use bdrscan::config::ScanConfig;
use bdrscan::models::bar::{DailyBar, PriceSeries};
use bdrscan::scanner::scan;
use chrono::{Days, NaiveDate};

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
}

/// Rising closes with shallow pullbacks and a late volume surge: fires the
/// trend, volume, and breakout rules.
fn strong_series(len: usize) -> PriceSeries {
    let mut close = 100.0;
    let bars = (0..len)
        .map(|i| {
            if i > 0 {
                close += if i % 4 == 0 { -1.8 } else { 0.9 };
            }
            let volume = if i + 10 >= len { 1_500_000 } else { 900_000 };
            DailyBar::new(
                start_date() + Days::new(i as u64),
                close - 0.3,
                close + 0.5,
                close - 0.6,
                close,
                volume,
            )
        })
        .collect();
    PriceSeries::new(bars)
}

fn flat_series(len: usize) -> PriceSeries {
    let bars = (0..len)
        .map(|i| DailyBar::new(start_date() + Days::new(i as u64), 45.0, 45.0, 45.0, 45.0, 1_000_000))
        .collect();
    PriceSeries::new(bars)
}

#[test]
fn scan_filters_ranks_and_skips() {
    let assets = vec![
        ("FLAT34".to_string(), flat_series(80)),
        ("AAPL34".to_string(), strong_series(80)),
        ("SHRT34".to_string(), strong_series(30)),
    ];
    let reports = scan(&assets, &ScanConfig::default());

    // flat scores 0 (below minimum), short fails with DataInsufficient
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].ticker, "AAPL34");
    assert!(reports[0].result.total_score >= 40);
}

#[test]
fn scan_orders_by_score_descending() {
    let mut weak_bars: Vec<DailyBar> = strong_series(80).bars().to_vec();
    // remove the volume surge so the weaker asset loses those rules
    for bar in weak_bars.iter_mut() {
        bar.volume = 900_000;
    }
    let assets = vec![
        ("WEAK34".to_string(), PriceSeries::new(weak_bars)),
        ("STRG34".to_string(), strong_series(80)),
    ];

    let mut config = ScanConfig::default();
    config.min_score = 0;
    let reports = scan(&assets, &config);

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].ticker, "STRG34");
    assert!(reports[0].result.total_score >= reports[1].result.total_score);
}

#[test]
fn empty_universe_yields_no_reports() {
    assert!(scan(&[], &ScanConfig::default()).is_empty());
}
