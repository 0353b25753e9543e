use serde::{Deserialize, Serialize};

use crate::core::{AxisPosition, AxisRange, Viewport, WaterfallBar};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::WaterfallChart;

pub const WATERFALL_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Projected bars of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    pub label: String,
    pub bars: Vec<WaterfallBar>,
}

/// Deterministic capture of one layout pass, for regression fixtures and
/// host-side debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallSnapshot {
    pub viewport: Viewport,
    pub value_axis_position: AxisPosition,
    pub range: AxisRange,
    pub tick_labels: Vec<String>,
    pub zero_line_index: Option<usize>,
    pub datasets: Vec<DatasetSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: WaterfallSnapshot,
}

impl WaterfallSnapshot {
    pub(super) fn capture<R: Renderer>(chart: &WaterfallChart<R>) -> ChartResult<Self> {
        let scale = chart.layout();
        let datasets = chart
            .datasets()
            .iter()
            .enumerate()
            .map(|(index, series)| {
                Ok(DatasetSnapshot {
                    label: series.label.clone(),
                    bars: chart.project_bars_with_scale(index, &scale)?,
                })
            })
            .collect::<ChartResult<Vec<_>>>()?;

        Ok(Self {
            viewport: chart.config().viewport,
            value_axis_position: scale.position(),
            tick_labels: chart.tick_labels(&scale),
            zero_line_index: scale.zero_line_index(),
            range: scale.range().clone(),
            datasets,
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = WaterfallSnapshotJsonContractV1 {
            schema_version: WATERFALL_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<WaterfallSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: WaterfallSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != WATERFALL_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
