//! Trailing rolling maximum of the high column

/// `out[t]` is the maximum of `values[t-window+1..=t]`, `None` until the
/// window is full. Breakout checks compare against the prior bar's value so
/// a bar never confirms a breakout with its own high.
pub fn rolling_max_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut out = vec![None; n];
    if window == 0 {
        return out;
    }

    for t in (window - 1)..n {
        let start = t + 1 - window;
        let mut max = values[start];
        for &value in &values[start + 1..=t] {
            if value > max {
                max = value;
            }
        }
        out[t] = Some(max);
    }

    out
}
