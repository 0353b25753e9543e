use tracing::{debug, trace};

use crate::core::{
    AxisGeometry, CategoryBand, Series, Viewport, WaterfallBar, WaterfallScale,
    project_waterfall_bars,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::{TickLabelFormatterFn, WaterfallChartConfig, WaterfallSnapshot};

/// Orchestration facade consumed by host applications.
///
/// The chart keeps datasets and configuration only; the value axis and every
/// bar are derived from scratch on each layout call.
pub struct WaterfallChart<R: Renderer> {
    renderer: R,
    config: WaterfallChartConfig,
    datasets: Vec<Series>,
    tick_label_formatter: Option<TickLabelFormatterFn>,
}

impl<R: Renderer> WaterfallChart<R> {
    pub fn new(renderer: R, config: WaterfallChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            datasets: Vec::new(),
            tick_label_formatter: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &WaterfallChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: WaterfallChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Applies a host resize.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        trace!(width = viewport.width, height = viewport.height, "set viewport");
        self.config.viewport = viewport;
        Ok(())
    }

    pub fn set_datasets(&mut self, datasets: Vec<Series>) {
        debug!(dataset_count = datasets.len(), "set waterfall datasets");
        self.datasets = datasets;
    }

    pub fn push_series(&mut self, series: Series) {
        trace!(category_count = series.len(), "push waterfall series");
        self.datasets.push(series);
    }

    #[must_use]
    pub fn datasets(&self) -> &[Series] {
        &self.datasets
    }

    pub fn set_tick_label_formatter(&mut self, formatter: TickLabelFormatterFn) {
        self.tick_label_formatter = Some(formatter);
    }

    pub fn clear_tick_label_formatter(&mut self) {
        self.tick_label_formatter = None;
    }

    /// Drawable plot area for the current viewport.
    #[must_use]
    pub fn plot_area(&self) -> AxisGeometry {
        AxisGeometry::plot_area(self.config.viewport, self.config.plot_insets)
    }

    /// Number of category slots: the longest dataset.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.datasets.iter().map(Series::len).max().unwrap_or(0)
    }

    /// Fits the value axis to the current datasets and plot area.
    #[must_use]
    pub fn layout(&self) -> WaterfallScale {
        WaterfallScale::fit_datasets(
            &self.datasets,
            &self.config.value_axis.ticks,
            self.plot_area(),
            self.config.value_axis.position,
        )
    }

    pub fn category_band(&self, dataset_index: usize) -> ChartResult<CategoryBand> {
        self.dataset(dataset_index)?;
        let area = self.plot_area();
        let horizontal = self.config.value_axis.position.is_horizontal();
        // Categories run across the value axis.
        let (origin, length) = if horizontal {
            (area.top, area.height)
        } else {
            (area.left, area.width)
        };
        let category_axis = self.config.category_axis;
        Ok(CategoryBand::single(
            origin,
            length,
            self.category_count(),
            category_axis.category_percentage,
            category_axis.bar_percentage,
        )
        .for_dataset(dataset_index, self.datasets.len()))
    }

    /// Bar geometry of every category of one dataset against a fresh layout.
    pub fn project_bars(&self, dataset_index: usize) -> ChartResult<Vec<WaterfallBar>> {
        let scale = self.layout();
        self.project_bars_with_scale(dataset_index, &scale)
    }

    pub(super) fn project_bars_with_scale(
        &self,
        dataset_index: usize,
        scale: &WaterfallScale,
    ) -> ChartResult<Vec<WaterfallBar>> {
        let series = self.dataset(dataset_index)?;
        let band = self.category_band(dataset_index)?;
        let bars = project_waterfall_bars(series, scale, band);
        trace!(dataset_index, bar_count = bars.len(), "projected waterfall bars");
        Ok(bars)
    }

    /// Raw numeric value shown for one category, `None` for non-numeric entries.
    pub fn label_for_index(&self, dataset_index: usize, index: usize) -> ChartResult<Option<f64>> {
        let series = self.dataset(dataset_index)?;
        if index >= series.len() {
            return Err(ChartError::InvalidData(format!(
                "category index {index} out of range for {} categories",
                series.len()
            )));
        }
        Ok(series.label_value(index))
    }

    /// Tick labels for `scale`, using the custom formatter when one is set.
    #[must_use]
    pub fn tick_labels(&self, scale: &WaterfallScale) -> Vec<String> {
        match &self.tick_label_formatter {
            Some(formatter) => scale.tick_labels_with(|value| formatter(value)),
            None => scale.tick_labels(),
        }
    }

    pub fn snapshot(&self) -> ChartResult<WaterfallSnapshot> {
        WaterfallSnapshot::capture(self)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        super::render_frame_builder::build_render_frame(self)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn dataset(&self, dataset_index: usize) -> ChartResult<&Series> {
        self.datasets.get(dataset_index).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "dataset index {dataset_index} out of range for {} datasets",
                self.datasets.len()
            ))
        })
    }
}
