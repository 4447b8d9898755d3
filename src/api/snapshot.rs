use serde::{Deserialize, Serialize};

use crate::core::{AggregatedSeries, SamplingDecision, TargetGrid};
use crate::error::HorizonResult;

use super::batch::resample_batch;
use super::request::ResampleRequest;
use super::source::SeriesSource;

/// Per-series slice of a [`BatchSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub label: String,
    pub values: Option<AggregatedSeries>,
}

/// Serializable deterministic record of one batch run, used by regression
/// tests and capture tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSnapshot {
    pub decision: SamplingDecision,
    pub grid_timestamps_ms: Vec<i64>,
    pub series: Vec<SeriesSnapshot>,
}

impl BatchSnapshot {
    /// Runs the batch and records its inputs-to-outputs mapping.
    pub fn capture<S: SeriesSource>(
        sources: &[S],
        grid: &TargetGrid,
        request: &ResampleRequest,
    ) -> HorizonResult<Self> {
        let result = resample_batch(sources, grid, request)?;
        let decision = result.decision();

        let series = if sources.is_empty() {
            vec![SeriesSnapshot {
                label: String::new(),
                values: None,
            }]
        } else {
            sources
                .iter()
                .zip(result.into_values())
                .map(|(source, values)| SeriesSnapshot {
                    label: source.label().to_owned(),
                    values,
                })
                .collect()
        };

        Ok(Self {
            decision,
            grid_timestamps_ms: grid.timestamps().to_vec(),
            series,
        })
    }
}
