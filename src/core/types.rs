use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::{HorizonError, HorizonResult};

/// One raw observation: millisecond epoch timestamp plus measured value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp_ms: i64,
    pub value: f64,
}

impl Sample {
    #[must_use]
    pub fn new(timestamp_ms: i64, value: f64) -> Self {
        Self {
            timestamp_ms,
            value,
        }
    }

    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, value: f64) -> Self {
        Self {
            timestamp_ms: datetime_to_unix_millis(time),
            value,
        }
    }

    pub fn from_decimal(timestamp_ms: i64, value: Decimal) -> HorizonResult<Self> {
        Ok(Self {
            timestamp_ms,
            value: decimal_to_f64(value, "sample value")?,
        })
    }
}

/// Raw input series, validated once at construction.
///
/// Timestamps are non-decreasing; duplicate timestamps are permitted and
/// kept as distinct observations.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSeries {
    samples: Vec<Sample>,
}

impl RawSeries {
    pub fn new(samples: Vec<Sample>) -> HorizonResult<Self> {
        for pair in samples.windows(2) {
            if pair[1].timestamp_ms < pair[0].timestamp_ms {
                return Err(HorizonError::InvalidSeries(
                    "timestamps must be non-decreasing".to_owned(),
                ));
            }
        }

        Ok(Self { samples })
    }

    /// Builds a series from parallel timestamp/value columns.
    pub fn from_columns(timestamps_ms: &[i64], values: &[f64]) -> HorizonResult<Self> {
        if timestamps_ms.len() != values.len() {
            return Err(HorizonError::InvalidSeries(format!(
                "timestamp column has {} entries, value column has {}",
                timestamps_ms.len(),
                values.len()
            )));
        }

        let samples = timestamps_ms
            .iter()
            .zip(values)
            .map(|(&timestamp_ms, &value)| Sample::new(timestamp_ms, value))
            .collect();
        Self::new(samples)
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Host-facing sampling mode option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMode {
    #[default]
    Auto,
    Upsample,
    Downsample,
}

impl SamplingMode {
    /// Fixed decision carried by the mode, or `None` for `Auto`.
    #[must_use]
    pub fn fixed_decision(self) -> Option<SamplingDecision> {
        match self {
            Self::Auto => None,
            Self::Upsample => Some(SamplingDecision::Upsample),
            Self::Downsample => Some(SamplingDecision::Downsample),
        }
    }
}

/// Strategy resolved for one batch of series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingDecision {
    Upsample,
    Downsample,
}

/// How multiple raw points landing in one downsample bucket are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryPolicy {
    Sum,
    Min,
    Max,
    #[default]
    Avg,
}
