use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Series, WaterfallScale};

/// Floating bar of one category in value space.
///
/// `base` is the cumulative total of all earlier categories, `extent` adds
/// this category's own delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSegment {
    pub base: f64,
    pub extent: f64,
}

impl BarSegment {
    /// Signed delta this bar represents.
    #[must_use]
    pub fn delta(self) -> f64 {
        self.extent - self.base
    }
}

/// Pixel edges of a [`BarSegment`] along the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSegment {
    pub base_px: i32,
    pub extent_px: i32,
}

/// Baseline value the first bar starts from.
#[must_use]
pub fn resolve_baseline(scale: &WaterfallScale) -> f64 {
    scale.base_value()
}

/// Resolves the value-space segment of `category_index`.
///
/// The prefix sum is recomputed from the first category on every call;
/// non-numeric deltas contribute nothing, so their bar is empty.
#[must_use]
pub fn resolve_segment(series: &Series, category_index: usize, baseline: f64) -> BarSegment {
    let base = baseline + series.prefix_total(category_index);
    BarSegment {
        base,
        extent: base + series.numeric_at(category_index),
    }
}

/// Resolves both pixel edges of `category_index` through `scale`.
#[must_use]
pub fn resolve_pixel_segment(
    series: &Series,
    category_index: usize,
    scale: &WaterfallScale,
) -> PixelSegment {
    let segment = resolve_segment(series, category_index, resolve_baseline(scale));
    to_pixels(segment, scale)
}

fn to_pixels(segment: BarSegment, scale: &WaterfallScale) -> PixelSegment {
    PixelSegment {
        base_px: scale.map_value_to_pixel(segment.base),
        extent_px: scale.map_value_to_pixel(segment.extent),
    }
}

/// Equal-width category slots along the category axis.
///
/// Each slot is `length / count` wide. `category_percentage` of the slot is
/// shared between the datasets; every dataset bar then fills
/// `bar_percentage` of its share, centred in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBand {
    pub origin: f64,
    pub length: f64,
    pub count: usize,
    pub category_percentage: f64,
    pub bar_percentage: f64,
    pub dataset_count: usize,
    pub dataset_index: usize,
}

impl CategoryBand {
    /// Band for a chart showing a single dataset.
    #[must_use]
    pub fn single(
        origin: f64,
        length: f64,
        count: usize,
        category_percentage: f64,
        bar_percentage: f64,
    ) -> Self {
        Self {
            origin,
            length,
            count,
            category_percentage,
            bar_percentage,
            dataset_count: 1,
            dataset_index: 0,
        }
    }

    #[must_use]
    pub fn for_dataset(mut self, dataset_index: usize, dataset_count: usize) -> Self {
        self.dataset_index = dataset_index;
        self.dataset_count = dataset_count;
        self
    }

    #[must_use]
    pub fn slot_width(self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.length / self.count as f64
        }
    }

    fn dataset_share(self) -> f64 {
        self.slot_width() * self.category_percentage / self.dataset_count.max(1) as f64
    }

    #[must_use]
    pub fn center(self, index: usize) -> f64 {
        let slot = self.slot_width();
        let category_size = slot * self.category_percentage;
        let share = self.dataset_share();
        self.origin
            + slot * index as f64
            + (slot - category_size) / 2.0
            + share * self.dataset_index as f64
            + share / 2.0
    }

    #[must_use]
    pub fn bar_thickness(self) -> f64 {
        self.dataset_share() * self.bar_percentage
    }

    /// Start/end of the bar in slot `index`, start <= end.
    #[must_use]
    pub fn bar_span(self, index: usize) -> (f64, f64) {
        let center = self.center(index);
        let half = self.bar_thickness() / 2.0;
        (center - half, center + half)
    }

    /// Slot boundary positions, used for offset grid lines.
    #[must_use]
    pub fn slot_edges(self) -> Vec<f64> {
        let width = self.slot_width();
        (0..=self.count)
            .map(|index| self.origin + width * index as f64)
            .collect()
    }
}

/// Render-ready geometry of one waterfall category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterfallBar {
    pub index: usize,
    pub segment: BarSegment,
    pub pixels: PixelSegment,
    pub band_start: f64,
    pub band_end: f64,
    pub horizontal: bool,
}

impl WaterfallBar {
    /// `(left, top, width, height)` of the bar rectangle.
    #[must_use]
    pub fn rect(self) -> (f64, f64, f64, f64) {
        let low = f64::from(self.pixels.base_px.min(self.pixels.extent_px));
        let high = f64::from(self.pixels.base_px.max(self.pixels.extent_px));
        let thickness = self.band_end - self.band_start;
        if self.horizontal {
            (low, self.band_start, high - low, thickness)
        } else {
            (self.band_start, low, thickness, high - low)
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.pixels.base_px == self.pixels.extent_px
    }
}

/// Projects every category of `series` into bar geometry.
///
/// Categories are independent, so the `parallel-projection` feature spreads
/// them across the rayon pool without changing results.
#[must_use]
pub fn project_waterfall_bars(
    series: &Series,
    scale: &WaterfallScale,
    band: CategoryBand,
) -> Vec<WaterfallBar> {
    let baseline = resolve_baseline(scale);
    let horizontal = scale.is_horizontal();
    let project = |index: usize| {
        let segment = resolve_segment(series, index, baseline);
        let (band_start, band_end) = band.bar_span(index);
        WaterfallBar {
            index,
            segment,
            pixels: to_pixels(segment, scale),
            band_start,
            band_end,
            horizontal,
        }
    };

    #[cfg(feature = "parallel-projection")]
    {
        (0..series.len()).into_par_iter().map(project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        (0..series.len()).map(project).collect()
    }
}

/// Value-space segments of every category, in category order.
#[must_use]
pub fn resolve_segments(series: &Series, baseline: f64) -> Vec<BarSegment> {
    (0..series.len())
        .map(|index| resolve_segment(series, index, baseline))
        .collect()
}
