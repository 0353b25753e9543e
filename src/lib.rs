//! waterfall-chart: cumulative value axis and floating-bar geometry.
//!
//! The value axis derives its range and ticks from the running total of a
//! series, and each category becomes a bar spanning
//! `[total before it, total including it]`. Drawing is left to a
//! [`render::Renderer`] backend that consumes the computed pixels.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{WaterfallChart, WaterfallChartConfig};
pub use error::{ChartError, ChartResult};
