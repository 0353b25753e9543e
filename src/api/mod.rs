mod chart_config;
mod engine;
mod label_formatter;
mod render_frame_builder;
mod snapshot;

pub use chart_config::{CategoryAxisConfig, ValueAxisConfig, WaterfallChartConfig};
pub use engine::WaterfallChart;
pub use label_formatter::TickLabelFormatterFn;
pub use snapshot::{
    DatasetSnapshot, WATERFALL_SNAPSHOT_JSON_SCHEMA_V1, WaterfallSnapshot,
    WaterfallSnapshotJsonContractV1,
};
