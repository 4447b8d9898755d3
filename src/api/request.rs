use serde::{Deserialize, Serialize};

use crate::core::{SamplingMode, SummaryPolicy};

/// Per-request resampling options, mirroring the host panel configuration.
///
/// Both fields default to the panel defaults: automatic strategy selection
/// and average bucket summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResampleRequest {
    #[serde(default)]
    pub mode: SamplingMode,
    #[serde(default)]
    pub policy: SummaryPolicy,
}

impl ResampleRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mut self, mode: SamplingMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SummaryPolicy) -> Self {
        self.policy = policy;
        self
    }
}
