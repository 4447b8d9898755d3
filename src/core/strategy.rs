use crate::core::grid::TargetGrid;
use crate::core::types::{RawSeries, SamplingDecision};

/// Gap-irregularity threshold above which hold upsampling would fabricate
/// long stale plateaus.
const STEP_RATIO_LIMIT: f64 = 3.0;

/// Picks the resampling strategy for a series against a target grid.
///
/// The 99th-percentile consecutive gap is compared to the smallest gap; a
/// large ratio means intermittent holes where hold upsampling would repeat
/// stale values, so bucketed downsampling degrades more gracefully. More
/// raw samples than grid slots forces downsampling outright.
#[must_use]
pub fn select_strategy(series: &RawSeries, grid: &TargetGrid) -> SamplingDecision {
    let samples = series.samples();
    if samples.len() <= 1 {
        // No gap statistics to consult; holding a lone value is safe.
        return SamplingDecision::Upsample;
    }

    let mut gaps: Vec<i64> = samples
        .windows(2)
        .map(|pair| pair[1].timestamp_ms - pair[0].timestamp_ms)
        .collect();
    gaps.sort_unstable();

    let p99_index = ((0.99 * gaps.len() as f64).ceil() as usize).saturating_sub(1);
    let p99 = gaps[p99_index.min(gaps.len() - 1)] as f64;
    let min_gap = gaps[0] as f64;
    // A zero minimum gap (duplicate timestamps) pushes the ratio to
    // infinity, which lands on the downsample side as intended.
    let step_ratio = p99 / min_gap;

    if step_ratio > STEP_RATIO_LIMIT || samples.len() > grid.len() {
        SamplingDecision::Downsample
    } else {
        SamplingDecision::Upsample
    }
}
