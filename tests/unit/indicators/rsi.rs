//! Unit tests for the RSI series

use bdrscan::indicators::momentum::rsi_series;

#[test]
fn undefined_until_period_deltas_exist() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i % 3) as f64).collect();
    let rsi = rsi_series(&closes, 14);
    for t in 0..14 {
        assert!(rsi[t].is_none(), "bar {} should be warming up", t);
    }
    for t in 14..30 {
        assert!(rsi[t].is_some(), "bar {} should be defined", t);
    }
}

#[test]
fn always_within_bounds() {
    let closes: Vec<f64> = (0..60)
        .map(|i| 100.0 + ((i * 7) % 13) as f64 - ((i * 5) % 11) as f64)
        .collect();
    for value in rsi_series(&closes, 14).into_iter().flatten() {
        assert!((0.0..=100.0).contains(&value), "rsi {} out of bounds", value);
    }
}

#[test]
fn zero_loss_reads_one_hundred() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let rsi = rsi_series(&closes, 14);
    assert_eq!(rsi[29], Some(100.0));
}

#[test]
fn flat_tape_reads_neutral() {
    let closes = vec![42.0; 30];
    let rsi = rsi_series(&closes, 14);
    assert_eq!(rsi[29], Some(50.0));
}

#[test]
fn all_losses_read_zero() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
    let rsi = rsi_series(&closes, 14);
    assert_eq!(rsi[29], Some(0.0));
}

#[test]
fn series_shorter_than_period_is_all_undefined() {
    let closes = vec![100.0; 10];
    assert!(rsi_series(&closes, 14).iter().all(Option::is_none));
}
