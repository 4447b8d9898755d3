use tracing::{debug, trace};

use crate::core::{
    AggregatedSeries, RawSeries, SamplingDecision, SummaryPolicy, TargetGrid, downsample,
    select_strategy, upsample,
};
use crate::error::HorizonResult;

use super::request::ResampleRequest;
use super::source::{SeriesSource, raw_series_from_source};

#[cfg(feature = "parallel-batch")]
use rayon::prelude::*;

/// Outcome of one batch alignment pass.
///
/// `values` holds one entry per input source, in input order: `None` for
/// unusable sources, otherwise one value-or-null per grid timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    decision: SamplingDecision,
    values: Vec<Option<AggregatedSeries>>,
}

impl BatchResult {
    #[must_use]
    pub fn decision(&self) -> SamplingDecision {
        self.decision
    }

    #[must_use]
    pub fn values(&self) -> &[Option<AggregatedSeries>] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Option<AggregatedSeries>> {
        self.values
    }
}

/// Resamples one validated series under an already-resolved decision.
#[must_use]
pub fn resample_series(
    series: &RawSeries,
    grid: &TargetGrid,
    decision: SamplingDecision,
    policy: SummaryPolicy,
    interval_ms: i64,
) -> AggregatedSeries {
    match decision {
        SamplingDecision::Upsample => upsample(series, grid),
        SamplingDecision::Downsample => downsample(series, grid, policy, interval_ms),
    }
}

/// Aligns every source in a batch onto the target grid.
///
/// The sampling decision is resolved once per batch: an explicit mode wins,
/// otherwise the selector runs on the usable series with the most samples
/// and its verdict applies uniformly to the whole batch. An empty batch
/// yields the single-`None` sentinel the rendering side keys its no-data
/// branch on.
pub fn resample_batch<S: SeriesSource>(
    sources: &[S],
    grid: &TargetGrid,
    request: &ResampleRequest,
) -> HorizonResult<BatchResult> {
    if sources.is_empty() {
        return Ok(BatchResult {
            decision: SamplingDecision::Upsample,
            values: vec![None],
        });
    }

    let mut prepared: Vec<(Option<RawSeries>, i64)> = Vec::with_capacity(sources.len());
    for source in sources {
        let raw = raw_series_from_source(source)?;
        let interval_ms = source.interval_hint_ms().unwrap_or(grid.step_ms());
        trace!(
            label = source.label(),
            samples = raw.as_ref().map_or(0, RawSeries::len),
            interval_ms,
            "prepared series"
        );
        prepared.push((raw, interval_ms));
    }

    let decision = request.mode.fixed_decision().unwrap_or_else(|| {
        prepared
            .iter()
            .filter_map(|(raw, _)| raw.as_ref())
            .max_by_key(|raw| raw.len())
            .map_or(SamplingDecision::Upsample, |longest| {
                select_strategy(longest, grid)
            })
    });
    debug!(
        series = sources.len(),
        grid_len = grid.len(),
        step_ms = grid.step_ms(),
        ?decision,
        "resampling batch"
    );

    #[cfg(feature = "parallel-batch")]
    let prepared_iter = prepared.par_iter();
    #[cfg(not(feature = "parallel-batch"))]
    let prepared_iter = prepared.iter();

    let values = prepared_iter
        .map(|(raw, interval_ms)| {
            raw.as_ref()
                .map(|series| resample_series(series, grid, decision, request.policy, *interval_ms))
        })
        .collect();

    Ok(BatchResult { decision, values })
}

/// [`resample_batch`] reduced to the per-series value arrays.
pub fn resample_all<S: SeriesSource>(
    sources: &[S],
    grid: &TargetGrid,
    request: &ResampleRequest,
) -> HorizonResult<Vec<Option<AggregatedSeries>>> {
    Ok(resample_batch(sources, grid, request)?.into_values())
}
