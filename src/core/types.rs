use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Edge of the plot area an axis is attached to.
///
/// `Top`/`Bottom` axes run along the primary (horizontal) direction,
/// `Left`/`Right` axes along the perpendicular (vertical) one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
    Top,
    #[default]
    Bottom,
}

impl AxisPosition {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Pixel gutters reserved around the plot area for axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotInsets {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self::new(72.0, 24.0, 24.0, 40.0)
    }
}

/// Drawable box of one layout pass, in pixels.
///
/// The renderer owns these values; they are not validated here. A zero-sized
/// box yields a collapsed but still total mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl AxisGeometry {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Plot area left over after removing `insets` from `viewport`.
    ///
    /// Insets larger than the viewport collapse the area to zero size.
    #[must_use]
    pub fn plot_area(viewport: Viewport, insets: PlotInsets) -> Self {
        let width = (f64::from(viewport.width) - insets.left - insets.right).max(0.0);
        let height = (f64::from(viewport.height) - insets.top - insets.bottom).max(0.0);
        Self::new(insets.left, insets.top, width, height)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Length along the axis direction.
    #[must_use]
    pub fn length(self, is_horizontal: bool) -> f64 {
        if is_horizontal {
            self.width
        } else {
            self.height
        }
    }
}
