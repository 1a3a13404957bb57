//! RSI (Relative Strength Index) series
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = average gain / average loss over the trailing period

/// Rolling-mean RSI over closing prices. `out[t]` is `None` until `period`
/// deltas exist behind bar `t`.
///
/// A window with zero average loss reads 100; a window with no movement at
/// all reads a neutral 50. Neither divides by zero.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut out = vec![None; n];
    if period == 0 || n < period + 1 {
        return out;
    }

    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for t in 1..n {
        let delta = closes[t] - closes[t - 1];
        if delta > 0.0 {
            gains[t] = delta;
        } else {
            losses[t] = -delta;
        }
    }

    for t in period..n {
        let start = t + 1 - period;
        let avg_gain: f64 = gains[start..=t].iter().sum::<f64>() / period as f64;
        let avg_loss: f64 = losses[start..=t].iter().sum::<f64>() / period as f64;

        let value = if avg_loss == 0.0 {
            if avg_gain == 0.0 {
                50.0
            } else {
                100.0
            }
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        };

        out[t] = Some(value);
    }

    out
}
