use crate::core::RawSeries;
use crate::error::{HorizonError, HorizonResult};

/// Narrow capability a host data frame exposes to the resampler.
///
/// The host owns arbitrary frame shapes; the engine only ever needs a
/// label, the timestamp column, the value column and an optional reporting
/// cadence hint.
pub trait SeriesSource {
    fn label(&self) -> &str;

    fn timestamps_ms(&self) -> &[i64];

    /// Value column, or `None` when the frame carries no usable value field.
    fn values(&self) -> Option<&[f64]>;

    /// Nominal reporting cadence in milliseconds. Used only as the
    /// downsample gap tolerance; `None` falls back to the grid step.
    fn interval_hint_ms(&self) -> Option<i64> {
        None
    }
}

/// Owned in-memory series, the simplest [`SeriesSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySeries {
    label: String,
    timestamps_ms: Vec<i64>,
    values: Option<Vec<f64>>,
    interval_hint_ms: Option<i64>,
}

impl MemorySeries {
    #[must_use]
    pub fn new(label: impl Into<String>, timestamps_ms: Vec<i64>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            timestamps_ms,
            values: Some(values),
            interval_hint_ms: None,
        }
    }

    /// A frame without a value column; the orchestrator reports it as an
    /// unusable series.
    #[must_use]
    pub fn without_values(label: impl Into<String>, timestamps_ms: Vec<i64>) -> Self {
        Self {
            label: label.into(),
            timestamps_ms,
            values: None,
            interval_hint_ms: None,
        }
    }

    #[must_use]
    pub fn with_interval_hint(mut self, interval_ms: i64) -> Self {
        self.interval_hint_ms = Some(interval_ms);
        self
    }
}

impl SeriesSource for MemorySeries {
    fn label(&self) -> &str {
        &self.label
    }

    fn timestamps_ms(&self) -> &[i64] {
        &self.timestamps_ms
    }

    fn values(&self) -> Option<&[f64]> {
        self.values.as_deref()
    }

    fn interval_hint_ms(&self) -> Option<i64> {
        self.interval_hint_ms
    }
}

/// Validates a source's columns into a [`RawSeries`].
///
/// Returns `None` for frames with no value column or no samples; malformed
/// columns surface as an error carrying the series label.
pub(crate) fn raw_series_from_source<S: SeriesSource>(
    source: &S,
) -> HorizonResult<Option<RawSeries>> {
    let Some(values) = source.values() else {
        return Ok(None);
    };

    match RawSeries::from_columns(source.timestamps_ms(), values) {
        Ok(series) if series.is_empty() => Ok(None),
        Ok(series) => Ok(Some(series)),
        Err(HorizonError::InvalidSeries(message)) => Err(HorizonError::InvalidSeries(format!(
            "{label}: {message}",
            label = source.label()
        ))),
        Err(other) => Err(other),
    }
}
