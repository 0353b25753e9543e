pub mod bar_geometry;
pub mod series;
pub mod tick_config;
pub mod ticks;
pub mod types;
pub mod waterfall_scale;

pub use bar_geometry::{
    BarSegment, CategoryBand, PixelSegment, WaterfallBar, project_waterfall_bars,
    resolve_baseline, resolve_pixel_segment, resolve_segment, resolve_segments,
};
pub use series::Series;
pub use tick_config::TickConfig;
pub use ticks::{LinearTickRequest, format_linear_tick, generate_linear_ticks, nice_number, tick_limit};
pub use types::{AxisGeometry, AxisPosition, PlotInsets, Viewport};
pub use waterfall_scale::{
    AxisRange, WaterfallScale, determine_range, determine_range_for_datasets,
    handle_tick_range_options,
};
