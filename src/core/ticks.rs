//! Linear tick utilities shared by value axes.
//!
//! Everything here is a pure function of its arguments so layout passes can
//! call it freely during interactive resize.

use crate::core::TickConfig;

/// Minimum pixel distance between ticks along the primary direction.
pub const MIN_TICK_SPACING_PX: f64 = 50.0;
pub const MIN_TICK_COUNT: usize = 2;

const MAX_GENERATED_TICKS: usize = 10_000;
const MAX_SPACING_WIDENINGS: usize = 32;
const MAX_TICK_PRECISION: usize = 12;
const STEP_PRECISION_TOLERANCE: f64 = 1e-6;
const MIN_SPACE_COUNT_TOLERANCE: f64 = 1e-9;

/// Inputs of one linear tick generation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTickRequest {
    pub max_ticks: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step_size: Option<f64>,
}

impl LinearTickRequest {
    #[must_use]
    pub fn from_config(config: &TickConfig, max_ticks: usize) -> Self {
        Self {
            max_ticks,
            min: config.min,
            max: config.max,
            step_size: config.effective_step_size(),
        }
    }
}

/// Rounds `range` to a 1/2/5 multiple of its power of ten.
///
/// With `round` the closest nice fraction is used, otherwise the smallest one
/// that is `>= range`. Non-positive or non-finite ranges yield `0`.
#[must_use]
pub fn nice_number(range: f64, round: bool) -> f64 {
    if !range.is_finite() || range <= 0.0 {
        return 0.0;
    }

    let magnitude = 10_f64.powf(range.log10().floor());
    let fraction = range / magnitude;
    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice_fraction * magnitude
}

/// Maximum tick count an axis of `axis_length_px` can hold.
///
/// Horizontal axes need [`MIN_TICK_SPACING_PX`] per tick; vertical axes stack
/// labels, so they need twice the label font size. The result is capped by
/// `maxTicksLimit` and never drops below [`MIN_TICK_COUNT`].
#[must_use]
pub fn tick_limit(axis_length_px: f64, is_horizontal: bool, config: &TickConfig) -> usize {
    let spacing_px = if is_horizontal {
        MIN_TICK_SPACING_PX
    } else {
        2.0 * config.font_size_or_default()
    };
    let by_length = if axis_length_px.is_finite() && axis_length_px > 0.0 {
        (axis_length_px / spacing_px).ceil() as usize
    } else {
        0
    };
    config
        .max_ticks_limit_or_default()
        .min(by_length)
        .max(MIN_TICK_COUNT)
}

/// Generates ascending, evenly spaced ticks covering `[data_min, data_max]`.
///
/// Interior ticks sit on multiples of the spacing, so the outer ticks may
/// extend past the data range. Explicit `min`/`max` replace the outer ticks.
/// An explicit step is used as-is; otherwise the spacing is widened along the
/// 1/2/5 ladder until the ticks fit in `max_ticks`.
#[must_use]
pub fn generate_linear_ticks(request: LinearTickRequest, data_min: f64, data_max: f64) -> Vec<f64> {
    let (low, high) = if data_min <= data_max {
        (data_min, data_max)
    } else {
        (data_max, data_min)
    };
    let max_ticks = request.max_ticks.max(MIN_TICK_COUNT);

    let mut spacing = match request.step_size {
        Some(step) => step,
        None => {
            let nice_range = nice_number(high - low, false);
            nice_number(nice_range / (max_ticks - 1) as f64, true)
        }
    };
    if !spacing.is_finite() || spacing <= 0.0 {
        return vec![request.min.unwrap_or(low), request.max.unwrap_or(high)];
    }

    for _ in 0..MAX_SPACING_WIDENINGS {
        let ticks = ticks_for_spacing(request, low, high, spacing);
        if request.step_size.is_some() || ticks.len() <= max_ticks {
            return ticks;
        }
        spacing = next_nice_step(spacing);
    }

    vec![request.min.unwrap_or(low), request.max.unwrap_or(high)]
}

fn ticks_for_spacing(request: LinearTickRequest, low: f64, high: f64, spacing: f64) -> Vec<f64> {
    let mut nice_min = (low / spacing).floor() * spacing;
    let mut nice_max = (high / spacing).ceil() * spacing;

    // Explicit bounds that are a whole number of steps apart become the grid.
    if let (Some(min), Some(max), Some(step)) = (request.min, request.max, request.step_size) {
        if almost_whole((max - min) / step, spacing / 1000.0) {
            nice_min = min;
            nice_max = max;
        }
    }

    let raw_spaces = (nice_max - nice_min) / spacing;
    // Tiny spacings still need room for float noise in the space count.
    let tolerance = (spacing / 1000.0).max(MIN_SPACE_COUNT_TOLERANCE);
    let spaces = if almost_equal(raw_spaces, raw_spaces.round(), tolerance) {
        raw_spaces.round()
    } else {
        raw_spaces.ceil()
    };
    let spaces = if spaces.is_finite() && spaces > 0.0 {
        (spaces as usize).min(MAX_GENERATED_TICKS)
    } else {
        0
    };

    let precision = precision_from_step(spacing);
    let round = |value: f64| precision.map_or(value, |digits| round_to_precision(value, digits));
    let mut ticks = Vec::with_capacity(spaces + 1);
    ticks.push(request.min.unwrap_or_else(|| round(nice_min)));
    for index in 1..spaces {
        ticks.push(round(nice_min + index as f64 * spacing));
    }
    ticks.push(request.max.unwrap_or_else(|| round(nice_max)));
    ticks
}

/// Default tick label: decimal count follows the spacing between ticks.
#[must_use]
pub fn format_linear_tick(value: f64, ticks: &[f64]) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let mut delta = match ticks {
        [_, second, third, _, ..] => third - second,
        [first, second, ..] => second - first,
        _ => value,
    };
    if delta.abs() > 1.0 && value != value.floor() {
        delta = value - value.floor();
    }

    let decimals = if delta.is_finite() && delta != 0.0 {
        (-delta.abs().log10().floor()).clamp(0.0, 20.0) as usize
    } else {
        0
    };
    format!("{value:.decimals$}")
}

fn next_nice_step(step: f64) -> f64 {
    let magnitude = 10_f64.powf(step.log10().floor());
    let fraction = step / magnitude;
    let next = if fraction < 1.5 {
        2.0
    } else if fraction < 3.5 {
        5.0
    } else {
        10.0
    };
    next * magnitude
}

/// Decimal digits of `step`, or `None` when no rounding grid reproduces it.
///
/// Steps finer than [`MAX_TICK_PRECISION`] digits would round every tick onto
/// the same value, so their ticks are left unrounded.
fn precision_from_step(step: f64) -> Option<usize> {
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let text = format!("{:.12}", step.abs());
    let precision = text
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.trim_end_matches('0').len())
        .clamp(0, MAX_TICK_PRECISION);
    let represented = round_to_precision(step, precision);
    ((represented - step).abs() <= step * STEP_PRECISION_TOLERANCE).then_some(precision)
}

fn round_to_precision(value: f64, precision: usize) -> f64 {
    let factor = 10_f64.powi(precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn almost_whole(value: f64, epsilon: f64) -> bool {
    let rounded = value.round();
    rounded - epsilon < value && rounded + epsilon > value
}

fn almost_equal(lhs: f64, rhs: f64, epsilon: f64) -> bool {
    (lhs - rhs).abs() < epsilon
}
