pub mod aggregate;
pub mod extrapolate;
pub mod grid;
pub mod primitives;
pub mod resample;
pub mod strategy;
pub mod types;

pub use aggregate::aggregate;
pub use extrapolate::linear_extrapolate;
pub use grid::TargetGrid;
pub use resample::{AggregatedSeries, downsample, upsample};
pub use strategy::select_strategy;
pub use types::{RawSeries, Sample, SamplingDecision, SamplingMode, SummaryPolicy};
