use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::ticks::{LinearTickRequest, format_linear_tick, generate_linear_ticks, tick_limit};
use crate::core::{AxisGeometry, AxisPosition, Series, TickConfig};

pub const DEFAULT_RANGE_MIN: f64 = 0.0;
pub const DEFAULT_RANGE_MAX: f64 = 1.0;

/// Value-axis snapshot derived from cumulative series totals.
///
/// Invariants:
/// - `(start, end)` is `(min, max)`, or `(max, min)` when `reversed`
/// - `min`/`max` are the extremes of `ticks`, which may extend past the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub start: f64,
    pub end: f64,
    pub ticks: Vec<f64>,
    pub reversed: bool,
}

impl AxisRange {
    /// Signed distance from `start` to `end`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Index of the tick sitting exactly on zero, if any.
    #[must_use]
    pub fn zero_line_index(&self) -> Option<usize> {
        self.ticks.iter().position(|tick| *tick == 0.0)
    }
}

/// Derives the value-axis range of a single series.
///
/// The natural range is always `[0, total]`: the waterfall is drawn from a
/// zero baseline whatever the sign of individual deltas. A series without
/// numeric entries falls back to `[0, 1]`.
#[must_use]
pub fn determine_range(
    series: &Series,
    config: &TickConfig,
    axis_length: f64,
    is_horizontal: bool,
) -> AxisRange {
    determine_range_for_datasets(std::slice::from_ref(series), config, axis_length, is_horizontal)
}

/// Derives one shared value-axis range for several series.
///
/// The natural maximum is the largest series total.
#[must_use]
pub fn determine_range_for_datasets(
    datasets: &[Series],
    config: &TickConfig,
    axis_length: f64,
    is_horizontal: bool,
) -> AxisRange {
    let (natural_min, natural_max) = natural_range(datasets);
    let (min, max) = handle_tick_range_options(natural_min, natural_max, config);

    let max_ticks = tick_limit(axis_length, is_horizontal, config);
    let mut request = LinearTickRequest::from_config(config, max_ticks);
    // Explicit bounds go through the degenerate-range expansion too.
    request.min = request.min.map(|_| min);
    request.max = request.max.map(|_| max);

    let mut ticks = generate_linear_ticks(request, min, max);
    if !is_horizontal {
        // Largest value first so it renders at the top.
        ticks.reverse();
    }

    let (min, max) = ticks
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), tick| {
            (low.min(*tick), high.max(*tick))
        });

    let (start, end) = if config.reverse {
        ticks.reverse();
        (max, min)
    } else {
        (min, max)
    };

    debug!(
        min,
        max,
        tick_count = ticks.len(),
        max_ticks,
        reversed = config.reverse,
        "derived waterfall axis range"
    );

    AxisRange {
        min,
        max,
        start,
        end,
        ticks,
        reversed: config.reverse,
    }
}

/// Applies `beginAtZero`, explicit and suggested bounds to a natural range.
///
/// - `beginAtZero` only moves the bound nearer to zero, and only when both
///   bounds share a strict sign
/// - explicit `min`/`max` replace the bound unconditionally
/// - `suggestedMin` can only lower `min`, `suggestedMax` only raise `max`
/// - an empty range grows `max` by one, and `min` by one unless `beginAtZero`
#[must_use]
pub fn handle_tick_range_options(min: f64, max: f64, config: &TickConfig) -> (f64, f64) {
    let (mut min, mut max) = (min, max);

    if config.begin_at_zero {
        if min < 0.0 && max < 0.0 {
            max = 0.0;
        } else if min > 0.0 && max > 0.0 {
            min = 0.0;
        }
    }

    if let Some(explicit) = config.min {
        min = explicit;
    } else if let Some(suggested) = config.suggested_min {
        min = min.min(suggested);
    }

    if let Some(explicit) = config.max {
        max = explicit;
    } else if let Some(suggested) = config.suggested_max {
        max = max.max(suggested);
    }

    if min == max {
        max += 1.0;
        if !config.begin_at_zero {
            min -= 1.0;
        }
    }

    (min, max)
}

fn natural_range(datasets: &[Series]) -> (f64, f64) {
    let max = datasets
        .iter()
        .filter(|series| series.has_numeric())
        .map(Series::total)
        .reduce(f64::max);

    match max {
        Some(max) if max.is_finite() => (0.0, max),
        Some(max) => {
            trace!(total = max, "non-finite series total, using default max");
            (0.0, DEFAULT_RANGE_MAX)
        }
        None => {
            trace!("no numeric deltas, using default range");
            (DEFAULT_RANGE_MIN, DEFAULT_RANGE_MAX)
        }
    }
}

/// Fitted waterfall value axis bound to the drawable box of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallScale {
    range: AxisRange,
    geometry: AxisGeometry,
    position: AxisPosition,
}

impl WaterfallScale {
    #[must_use]
    pub fn fit(
        series: &Series,
        config: &TickConfig,
        geometry: AxisGeometry,
        position: AxisPosition,
    ) -> Self {
        Self::fit_datasets(std::slice::from_ref(series), config, geometry, position)
    }

    #[must_use]
    pub fn fit_datasets(
        datasets: &[Series],
        config: &TickConfig,
        geometry: AxisGeometry,
        position: AxisPosition,
    ) -> Self {
        let is_horizontal = position.is_horizontal();
        let range = determine_range_for_datasets(
            datasets,
            config,
            geometry.length(is_horizontal),
            is_horizontal,
        );
        Self::from_range(range, geometry, position)
    }

    #[must_use]
    pub fn from_range(range: AxisRange, geometry: AxisGeometry, position: AxisPosition) -> Self {
        Self {
            range,
            geometry,
            position,
        }
    }

    #[must_use]
    pub fn range(&self) -> &AxisRange {
        &self.range
    }

    #[must_use]
    pub fn geometry(&self) -> AxisGeometry {
        self.geometry
    }

    #[must_use]
    pub fn position(&self) -> AxisPosition {
        self.position
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.position.is_horizontal()
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.range.ticks
    }

    /// Value every waterfall starts cumulating from.
    #[must_use]
    pub fn base_value(&self) -> f64 {
        0.0
    }

    /// Maps a value to an integer pixel, extrapolating outside `[start, end]`.
    ///
    /// Horizontal axes grow rightwards from `left`; vertical axes grow upwards
    /// from `bottom`.
    #[must_use]
    pub fn map_value_to_pixel(&self, value: f64) -> i32 {
        let span = self.range.span();
        let offset = if span == 0.0 {
            0.0
        } else {
            (value - self.range.start) / span
        };

        let pixel = if self.is_horizontal() {
            self.geometry.left + self.geometry.width * offset
        } else {
            self.geometry.bottom() - self.geometry.height * offset
        };
        round_half_up(pixel)
    }

    /// Exact inverse of [`Self::map_value_to_pixel`], without rounding.
    #[must_use]
    pub fn map_pixel_to_value(&self, pixel: f64) -> f64 {
        let (inner_length, offset_px) = if self.is_horizontal() {
            (self.geometry.width, pixel - self.geometry.left)
        } else {
            (self.geometry.height, self.geometry.bottom() - pixel)
        };
        if inner_length == 0.0 {
            return self.range.start;
        }
        self.range.start + self.range.span() * (offset_px / inner_length)
    }

    #[must_use]
    pub fn pixel_for_tick(&self, index: usize) -> Option<i32> {
        self.range
            .ticks
            .get(index)
            .map(|tick| self.map_value_to_pixel(*tick))
    }

    #[must_use]
    pub fn zero_line_index(&self) -> Option<usize> {
        self.range.zero_line_index()
    }

    /// Tick labels produced by the default linear formatter.
    #[must_use]
    pub fn tick_labels(&self) -> Vec<String> {
        self.tick_labels_with(|value| format_linear_tick(value, &self.range.ticks))
    }

    /// Tick labels produced by a caller-supplied formatter, one call per tick.
    pub fn tick_labels_with(&self, format: impl Fn(f64) -> String) -> Vec<String> {
        self.range.ticks.iter().map(|tick| format(*tick)).collect()
    }
}

fn round_half_up(pixel: f64) -> i32 {
    (pixel + 0.5).floor() as i32
}
