/// Trailing simple moving average over a fixed window.
///
/// Output has the same length as the input. The first `window - 1` positions
/// are NaN because the window is not yet full; a series shorter than the
/// window is therefore entirely NaN. A zero window is treated as degenerate
/// and yields all NaN as well.
#[must_use]
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return vec![f64::NAN; values.len()];
    }

    let mut out = vec![f64::NAN; values.len()];
    let mut sum: f64 = values[..window].iter().sum();
    #[allow(clippy::cast_precision_loss)]
    let divisor = window as f64;
    out[window - 1] = sum / divisor;
    for i in window..values.len() {
        sum += values[i] - values[i - window];
        out[i] = sum / divisor;
    }
    out
}
