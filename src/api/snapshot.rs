use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::PixelInterval;
use crate::render::Renderer;

use super::FocusChart;

pub const SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub nav_viewport: Viewport,
    pub detail_viewport: Viewport,
    pub time_full_range: (f64, f64),
    pub detail_visible_range: (f64, f64),
    pub value_domain: (f64, f64),
    pub brush_selection: Option<PixelInterval>,
    pub zoom_scale: f64,
    pub zoom_translate_x: f64,
    /// Series name to palette index, in draw order.
    pub legend: IndexMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> FocusChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            nav_viewport: self.config.nav_viewport,
            detail_viewport: self.config.detail_viewport,
            time_full_range: self.nav_time.full_range(),
            detail_visible_range: self.detail_time.visible_range(),
            value_domain: self.value_scale.domain(),
            brush_selection: self.brush.selection(),
            zoom_scale: self.zoom.scale(),
            zoom_translate_x: self.zoom.translate_x(),
            legend: self
                .legend
                .entries()
                .iter()
                .map(|entry| (entry.series.clone(), entry.palette_index))
                .collect(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
