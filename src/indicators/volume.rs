//! Rolling volume average

/// Trailing simple mean over `window` values. `out[t]` is `None` until the
/// window is full.
pub fn sma_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut out = vec![None; n];
    if window == 0 {
        return out;
    }

    let mut running = 0.0;
    for t in 0..n {
        running += values[t];
        if t >= window {
            running -= values[t - window];
        }
        if t + 1 >= window {
            out[t] = Some(running / window as f64);
        }
    }

    out
}
