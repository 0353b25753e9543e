use serde::{Deserialize, Serialize};

use crate::core::{AxisPosition, PlotInsets, TickConfig, Viewport};
use crate::error::{ChartError, ChartResult};

/// Value (cumulative) axis options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisConfig {
    #[serde(default = "default_value_axis_position")]
    pub position: AxisPosition,
    #[serde(default)]
    pub ticks: TickConfig,
}

impl Default for ValueAxisConfig {
    fn default() -> Self {
        Self {
            position: default_value_axis_position(),
            ticks: TickConfig::default(),
        }
    }
}

/// Category axis options used to place bars across their slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxisConfig {
    #[serde(default = "default_category_percentage")]
    pub category_percentage: f64,
    #[serde(default = "default_bar_percentage")]
    pub bar_percentage: f64,
    #[serde(default = "default_offset_grid_lines")]
    pub offset_grid_lines: bool,
}

impl Default for CategoryAxisConfig {
    fn default() -> Self {
        Self {
            category_percentage: default_category_percentage(),
            bar_percentage: default_bar_percentage(),
            offset_grid_lines: default_offset_grid_lines(),
        }
    }
}

/// Immutable waterfall chart configuration, threaded into every layout pass.
///
/// Serializable so hosts can persist chart setup as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub plot_insets: PlotInsets,
    #[serde(default)]
    pub value_axis: ValueAxisConfig,
    #[serde(default)]
    pub category_axis: CategoryAxisConfig,
}

impl WaterfallChartConfig {
    /// Horizontal waterfall: value axis at the bottom, categories top to bottom.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            plot_insets: PlotInsets::default(),
            value_axis: ValueAxisConfig::default(),
            category_axis: CategoryAxisConfig::default(),
        }
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: TickConfig) -> Self {
        self.value_axis.ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_value_axis_position(mut self, position: AxisPosition) -> Self {
        self.value_axis.position = position;
        self
    }

    #[must_use]
    pub fn with_plot_insets(mut self, plot_insets: PlotInsets) -> Self {
        self.plot_insets = plot_insets;
        self
    }

    #[must_use]
    pub fn with_category_axis(mut self, category_axis: CategoryAxisConfig) -> Self {
        self.category_axis = category_axis;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let insets = self.plot_insets;
        if [insets.left, insets.right, insets.top, insets.bottom]
            .iter()
            .any(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(ChartError::InvalidConfig(
                "plot insets must be finite and >= 0".to_owned(),
            ));
        }

        for (name, value) in [
            ("category percentage", self.category_axis.category_percentage),
            ("bar percentage", self.category_axis.bar_percentage),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and in (0, 1]"
                )));
            }
        }

        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_value_axis_position() -> AxisPosition {
    AxisPosition::Bottom
}

fn default_category_percentage() -> f64 {
    0.8
}

fn default_bar_percentage() -> f64 {
    0.9
}

fn default_offset_grid_lines() -> bool {
    true
}
