use smallvec::SmallVec;

use crate::core::aggregate::aggregate;
use crate::core::extrapolate::linear_extrapolate;
use crate::core::grid::TargetGrid;
use crate::core::types::{RawSeries, Sample, SummaryPolicy};

/// Output of one resampling pass: one value per grid timestamp, `None`
/// where the series has no usable data for that slot.
pub type AggregatedSeries = Vec<Option<f64>>;

/// Zero-order-hold upsampling onto a finer grid.
///
/// A single forward cursor walks the samples once: it advances while the
/// next sample's timestamp is `<=` the grid timestamp, then the sample
/// under the cursor is emitted. Grid points before the first sample repeat
/// the first value and points after the last sample repeat the last value,
/// so a non-empty series never produces `None`.
#[must_use]
pub fn upsample(series: &RawSeries, grid: &TargetGrid) -> AggregatedSeries {
    let samples = series.samples();
    if samples.is_empty() {
        return vec![None; grid.len()];
    }

    let mut out = Vec::with_capacity(grid.len());
    let mut cursor = 0usize;
    for &ts in grid.timestamps() {
        while cursor + 1 < samples.len() && samples[cursor + 1].timestamp_ms <= ts {
            cursor += 1;
        }
        out.push(Some(samples[cursor].value));
    }

    out
}

/// Bucketed downsampling onto a coarser grid.
///
/// Each grid slot owns the half-open bucket `[ts, next_ts)`; the final slot
/// is open-ended. Populated buckets aggregate under `policy`. Empty buckets
/// are bridged by linear extrapolation only while the surrounding raw gap
/// stays within `interval_ms`; a larger gap means the source genuinely
/// stopped reporting and the slot stays `None`.
#[must_use]
pub fn downsample(
    series: &RawSeries,
    grid: &TargetGrid,
    policy: SummaryPolicy,
    interval_ms: i64,
) -> AggregatedSeries {
    let samples = series.samples();
    let grid_ts = grid.timestamps();

    let mut out = Vec::with_capacity(grid_ts.len());
    let mut cursor = 0usize;

    for (index, &ts) in grid_ts.iter().enumerate() {
        let next_ts = grid_ts.get(index + 1).copied();

        while cursor < samples.len() && samples[cursor].timestamp_ms < ts {
            cursor += 1;
        }

        let mut bucket: SmallVec<[f64; 8]> = SmallVec::new();
        let mut end = cursor;
        while end < samples.len() && next_ts.is_none_or(|next| samples[end].timestamp_ms < next) {
            bucket.push(samples[end].value);
            end += 1;
        }

        if bucket.is_empty() {
            let bridged = if next_ts.is_none() {
                bridge_trailing_gap(samples, ts, interval_ms)
            } else {
                bridge_interior_gap(samples, cursor, ts, interval_ms)
            };
            out.push(bridged);
        } else {
            out.push(Some(aggregate(policy, &bucket)));
            cursor = end;
        }
    }

    out
}

/// Bridges an empty interior bucket at `ts`, or reports absence.
///
/// `cursor` points at the first sample at or past the bucket start. The
/// bucket is bridged only when samples exist on both sides of it and the
/// raw gap between them stays within the tolerance (inclusive). A cursor
/// past the end of data means the series stopped reporting before this
/// slot; that is absence, never a bridge.
fn bridge_interior_gap(samples: &[Sample], cursor: usize, ts: i64, interval_ms: i64) -> Option<f64> {
    if cursor == 0 || cursor >= samples.len() {
        return None;
    }

    let next = samples[cursor];
    let prev = samples[cursor - 1];
    if next.timestamp_ms == prev.timestamp_ms || next.timestamp_ms - prev.timestamp_ms > interval_ms
    {
        return None;
    }
    Some(linear_extrapolate(prev, next, ts))
}

/// Bridges the open-ended final bucket when it starts past the last sample.
///
/// The closing trend is projected forward through the last two samples, but
/// only while the final slot sits strictly within one tolerance interval of
/// the last sample. The strict comparison here, against the inclusive one
/// used for interior gaps, is long-standing observed behavior downstream
/// panels depend on; both are kept as-is.
fn bridge_trailing_gap(samples: &[Sample], ts: i64, interval_ms: i64) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }

    let last = samples[samples.len() - 1];
    let prev = samples[samples.len() - 2];
    if last.timestamp_ms == prev.timestamp_ms || ts - last.timestamp_ms >= interval_ms {
        return None;
    }
    Some(linear_extrapolate(prev, last, ts))
}
