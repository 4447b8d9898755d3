//! horizon-rs: time-series resampling engine for horizon-chart panels.
//!
//! This crate provides the alignment core of a cubism-style dashboard panel:
//! pure functions that map irregularly sampled raw series onto an evenly
//! spaced target grid via hold upsampling, bucketed downsampling and
//! gap-tolerant linear extrapolation.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{BatchResult, ResampleRequest, resample_all, resample_batch};
pub use error::{HorizonError, HorizonResult};
