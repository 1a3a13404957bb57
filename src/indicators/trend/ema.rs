//! EMA (Exponential Moving Average) series

/// Number of trailing bars used for the slope estimate.
pub const SLOPE_WINDOW: usize = 5;

/// Exponentially weighted moving average of `values` with the given span.
///
/// Recurrence: `ema[t] = alpha * v[t] + (1 - alpha) * ema[t-1]`,
/// `alpha = 2 / (span + 1)`, seeded from the first value. The column is
/// reported as defined only once `span` bars have passed.
pub fn ema_series(values: &[f64], span: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if span == 0 || values.is_empty() {
        return out;
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut ema = values[0];

    for (t, &value) in values.iter().enumerate() {
        if t > 0 {
            ema = alpha * value + (1.0 - alpha) * ema;
        }
        if t + 1 >= span {
            out[t] = Some(ema);
        }
    }

    out
}

/// Trend-direction estimate: mean first difference of an EMA column over
/// its trailing `window` values. Positive means the average is rising.
pub fn ema_slope_series(ema: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; ema.len()];
    if window < 2 {
        return out;
    }

    for t in 0..ema.len() {
        if t + 1 < window {
            continue;
        }
        let start = t + 1 - window;
        let mut sum = 0.0;
        let mut defined = true;
        for k in start + 1..=t {
            match (ema[k - 1], ema[k]) {
                (Some(prev), Some(curr)) => sum += curr - prev,
                _ => {
                    defined = false;
                    break;
                }
            }
        }
        if defined {
            out[t] = Some(sum / (window - 1) as f64);
        }
    }

    out
}
