use crate::core::types::SummaryPolicy;

/// Combines all raw values that landed in one downsample bucket.
///
/// # Panics
///
/// Panics when `values` is empty. The resampler never forwards an empty
/// bucket here; it decides between `None` and extrapolation first, so an
/// empty slice is a bucketing bug that must surface immediately.
#[must_use]
pub fn aggregate(policy: SummaryPolicy, values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "aggregate called with an empty bucket");

    match policy {
        SummaryPolicy::Sum => values.iter().sum(),
        SummaryPolicy::Avg => values.iter().sum::<f64>() / values.len() as f64,
        SummaryPolicy::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        SummaryPolicy::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
    }
}
