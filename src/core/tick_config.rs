use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TICKS_LIMIT: usize = 11;
pub const DEFAULT_TICK_FONT_SIZE_PX: f64 = 12.0;

/// Tick and range options of the waterfall value axis.
///
/// Explicit bounds always override suggested bounds; suggested bounds only
/// widen the natural range. Absent fields keep their default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TickConfig {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub suggested_min: Option<f64>,
    pub suggested_max: Option<f64>,
    pub begin_at_zero: bool,
    pub step_size: Option<f64>,
    pub fixed_step_size: Option<f64>,
    pub max_ticks_limit: Option<usize>,
    pub reverse: bool,
    pub font_size: Option<f64>,
}

impl TickConfig {
    #[must_use]
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_suggested_bounds(
        mut self,
        suggested_min: Option<f64>,
        suggested_max: Option<f64>,
    ) -> Self {
        self.suggested_min = suggested_min;
        self.suggested_max = suggested_max;
        self
    }

    #[must_use]
    pub fn with_begin_at_zero(mut self, begin_at_zero: bool) -> Self {
        self.begin_at_zero = begin_at_zero;
        self
    }

    #[must_use]
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = Some(step_size);
        self
    }

    #[must_use]
    pub fn with_fixed_step_size(mut self, fixed_step_size: f64) -> Self {
        self.fixed_step_size = Some(fixed_step_size);
        self
    }

    #[must_use]
    pub fn with_max_ticks_limit(mut self, limit: usize) -> Self {
        self.max_ticks_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Step used by tick generation. `fixed_step_size` wins over `step_size`;
    /// non-positive or non-finite steps are ignored.
    #[must_use]
    pub fn effective_step_size(&self) -> Option<f64> {
        self.fixed_step_size
            .or(self.step_size)
            .filter(|step| step.is_finite() && *step > 0.0)
    }

    /// Upper tick-count bound; a zero limit falls back to the default.
    #[must_use]
    pub fn max_ticks_limit_or_default(&self) -> usize {
        match self.max_ticks_limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_MAX_TICKS_LIMIT,
        }
    }

    #[must_use]
    pub fn font_size_or_default(&self) -> f64 {
        self.font_size
            .filter(|size| size.is_finite() && *size > 0.0)
            .unwrap_or(DEFAULT_TICK_FONT_SIZE_PX)
    }
}
