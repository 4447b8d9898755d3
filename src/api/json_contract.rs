use serde::{Deserialize, Serialize};

use crate::core::{SamplingMode, SummaryPolicy};
use crate::error::{HorizonError, HorizonResult};

use super::request::ResampleRequest;
use super::snapshot::BatchSnapshot;

pub const RESAMPLE_REQUEST_JSON_SCHEMA_V1: u32 = 1;
pub const BATCH_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned wire form of [`ResampleRequest`], using the host panel's
/// camelCase option names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResampleRequestJsonContractV1 {
    pub schema_version: u32,
    #[serde(default)]
    pub sample_type: SamplingMode,
    #[serde(default)]
    pub summary_type: SummaryPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: BatchSnapshot,
}

impl ResampleRequest {
    pub fn to_json_contract_v1_pretty(self) -> HorizonResult<String> {
        let payload = ResampleRequestJsonContractV1 {
            schema_version: RESAMPLE_REQUEST_JSON_SCHEMA_V1,
            sample_type: self.mode,
            summary_type: self.policy,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            HorizonError::InvalidData(format!("failed to serialize request contract v1: {e}"))
        })
    }

    /// Accepts either the versioned contract payload or a bare request.
    ///
    /// The contract form is tried first: the bare form has defaults for
    /// every field and would otherwise swallow any object, schema version
    /// included.
    pub fn from_json_compat_str(input: &str) -> HorizonResult<Self> {
        if let Ok(payload) = serde_json::from_str::<ResampleRequestJsonContractV1>(input) {
            if payload.schema_version != RESAMPLE_REQUEST_JSON_SCHEMA_V1 {
                return Err(HorizonError::InvalidData(format!(
                    "unsupported request schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(ResampleRequest::new()
                .with_mode(payload.sample_type)
                .with_policy(payload.summary_type));
        }

        serde_json::from_str::<ResampleRequest>(input).map_err(|e| {
            HorizonError::InvalidData(format!("failed to parse request json payload: {e}"))
        })
    }
}

impl BatchSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> HorizonResult<String> {
        let payload = BatchSnapshotJsonContractV1 {
            schema_version: BATCH_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            HorizonError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> HorizonResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<BatchSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: BatchSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            HorizonError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != BATCH_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(HorizonError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
