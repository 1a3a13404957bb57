use chrono::{Days, NaiveDate};
use tracing::info;

use bdrscan::config::ScanConfig;
use bdrscan::models::bar::{DailyBar, PriceSeries};
use bdrscan::scanner::{scan, AssetReport};

fn main() {
    dotenvy::dotenv().ok();
    bdrscan::logging::init_logging();

    let config = ScanConfig::default();
    let assets = vec![
        ("AAPL34".to_string(), trending_series(80, 100.0)),
        ("MSFT34".to_string(), trending_series(80, 250.0)),
        ("COCA34".to_string(), flat_series(80, 45.0)),
        ("NVDC34".to_string(), trending_series(30, 70.0)),
    ];

    info!(assets = assets.len(), min_score = config.min_score, "running demo scan");
    let reports = scan(&assets, &config);

    if reports.is_empty() {
        println!("No asset reached the minimum score today.");
        return;
    }

    println!("{} asset(s) found\n", reports.len());
    for report in &reports {
        print_report(report);
        println!();
    }
}

fn print_report(report: &AssetReport) {
    let result = &report.result;
    println!("{} — score {}", report.ticker, result.total_score);
    println!("  Close: R$ {:.2}", result.snapshot.close);
    println!("  RSI: {:.1}", result.snapshot.rsi);
    println!("  Volume: {}", result.snapshot.volume);
    println!("  Reasons:");
    for (i, reason) in result.reasons.iter().enumerate() {
        println!("    {}. {} ({:+})", i + 1, reason.description, reason.delta);
    }
}

/// Rising closes with periodic pullbacks and a late volume surge.
fn trending_series(len: usize, base: f64) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2025, 1, 2).expect("valid date");
    let mut close = base;
    let bars = (0..len)
        .map(|i| {
            if i > 0 {
                close += if i % 4 == 0 { -1.8 } else { 0.9 };
            }
            let volume = if i + 10 >= len { 1_500_000 } else { 900_000 };
            DailyBar::new(
                start + Days::new(i as u64),
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

fn flat_series(len: usize, price: f64) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2025, 1, 2).expect("valid date");
    let bars = (0..len)
        .map(|i| DailyBar::new(start + Days::new(i as u64), price, price, price, price, 1_000_000))
        .collect();
    PriceSeries::new(bars)
}
