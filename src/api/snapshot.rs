//! Serializable dashboard state snapshot.
//!
//! Deterministic shape used by regression tests and debugging tooling. The
//! versioned JSON contract lets stored fixtures survive additive changes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::record::Category;
use crate::error::{DashError, DashResult};
use crate::interaction::SelectionState;

use super::view_phase::ViewPhase;

pub const DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub phase: ViewPhase,
    pub mark_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub record_count: usize,
    pub filtered_count: usize,
    pub selection: SelectionState,
    pub category_trend: ViewSnapshot,
    pub cluster: ViewSnapshot,
    pub unit_grid: ViewSnapshot,
    pub flow: ViewSnapshot,
    pub region: ViewSnapshot,
    /// Full-data reason counts behind the region view.
    pub region_counts: IndexMap<Category, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: DashboardSnapshot,
}

impl DashboardSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> DashResult<String> {
        let payload = DashboardSnapshotJsonContractV1 {
            schema_version: DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or the versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> DashResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<DashboardSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: DashboardSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DashError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(DashError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
