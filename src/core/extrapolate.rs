use crate::core::types::Sample;

/// Evaluates the line through `a` and `b` at `at_ms`.
///
/// Callers guarantee the two anchor timestamps differ; the slope division
/// is undefined otherwise.
#[must_use]
pub fn linear_extrapolate(a: Sample, b: Sample, at_ms: i64) -> f64 {
    debug_assert_ne!(
        a.timestamp_ms, b.timestamp_ms,
        "extrapolation anchors share a timestamp"
    );

    let slope = (b.value - a.value) / (b.timestamp_ms - a.timestamp_ms) as f64;
    a.value + slope * (at_ms - a.timestamp_ms) as f64
}
