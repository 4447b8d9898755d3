use crate::error::{HorizonError, HorizonResult};

/// Target timestamp grid the resampler aligns onto.
///
/// Timestamps are strictly increasing. `step_ms` is the nominal spacing and
/// doubles as the default gap tolerance for downsampling.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetGrid {
    timestamps: Vec<i64>,
    step_ms: i64,
}

impl TargetGrid {
    /// Derives the grid from a time range and the panel width in pixels.
    ///
    /// `step = floor(span / width)`; points run from `start_ms` up to and
    /// including the first point at or past `end_ms`. A degenerate step
    /// (zero width, or a span shorter than one millisecond per pixel)
    /// clamps to a single-point grid instead of looping.
    pub fn from_range(start_ms: i64, end_ms: i64, pixel_width: u32) -> HorizonResult<Self> {
        if end_ms < start_ms {
            return Err(HorizonError::InvalidGrid(format!(
                "range end {end_ms} precedes range start {start_ms}"
            )));
        }

        let span = end_ms - start_ms;
        let step_ms = if pixel_width == 0 {
            0
        } else {
            span / i64::from(pixel_width)
        };
        if step_ms <= 0 {
            return Ok(Self {
                timestamps: vec![start_ms],
                step_ms: 0,
            });
        }

        let mut timestamps = vec![start_ms];
        let mut ts = start_ms;
        while ts < end_ms {
            ts += step_ms;
            timestamps.push(ts);
        }

        Ok(Self { timestamps, step_ms })
    }

    /// Wraps an explicit timestamp sequence, e.g. one dictated by the host.
    pub fn from_timestamps(timestamps: Vec<i64>) -> HorizonResult<Self> {
        if timestamps.is_empty() {
            return Err(HorizonError::InvalidGrid(
                "grid needs at least one point".to_owned(),
            ));
        }
        for pair in timestamps.windows(2) {
            if pair[1] <= pair[0] {
                return Err(HorizonError::InvalidGrid(
                    "grid timestamps must be strictly increasing".to_owned(),
                ));
            }
        }

        let step_ms = if timestamps.len() >= 2 {
            timestamps[1] - timestamps[0]
        } else {
            0
        };
        Ok(Self { timestamps, step_ms })
    }

    #[must_use]
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    #[must_use]
    pub fn step_ms(&self) -> i64 {
        self.step_ms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
