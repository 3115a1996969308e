/// Rescale a column to [0, 1] via min-max, then shift so the first value is 0.
///
/// The shift anchors every normalized series at zero on its first
/// observation, which keeps multi-symbol line charts directly comparable:
/// the span (max - min) of the output is always 1 and the first value is
/// always 0, while min/max land at `-first` and `1 - first` respectively.
///
/// Degenerate input (all values equal, so min == max) has no meaningful
/// rescale; the output is all NaN. Empty input yields an empty vector.
#[must_use]
pub fn normalize_anchored(values: &[f64]) -> Vec<f64> {
    let Some(min) = fold_finite(values, f64::min) else {
        return vec![f64::NAN; values.len()];
    };
    let Some(max) = fold_finite(values, f64::max) else {
        return vec![f64::NAN; values.len()];
    };
    let span = max - min;
    if span == 0.0 {
        return vec![f64::NAN; values.len()];
    }

    let scaled: Vec<f64> = values.iter().map(|v| (v - min) / span).collect();
    let first = scaled.first().copied().unwrap_or(0.0);
    scaled.into_iter().map(|v| v - first).collect()
}

fn fold_finite(values: &[f64], f: impl Fn(f64, f64) -> f64) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .reduce(f)
}
