use tracing::trace;

use crate::core::{AxisGeometry, AxisPosition};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::WaterfallChart;

const GRID_LINE_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.1);
const ZERO_LINE_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.25);
const LABEL_COLOR: Color = Color::rgb(0.40, 0.40, 0.40);
const INCREASE_FILL: Color = Color::rgb(0.16, 0.65, 0.45);
const DECREASE_FILL: Color = Color::rgb(0.86, 0.26, 0.30);
const GRID_LINE_WIDTH_PX: f64 = 1.0;
const ZERO_LINE_WIDTH_PX: f64 = 2.0;
const LABEL_GAP_PX: f64 = 6.0;

pub(super) fn build_render_frame<R: Renderer>(
    chart: &WaterfallChart<R>,
) -> ChartResult<RenderFrame> {
    let config = chart.config();
    let scale = chart.layout();
    let area = chart.plot_area();
    let position = scale.position();
    let font_size_px = config.value_axis.ticks.font_size_or_default();
    let zero_line_index = scale.zero_line_index();

    let mut frame = RenderFrame::new(config.viewport);

    for (index, tick) in scale.ticks().iter().enumerate() {
        let pixel = f64::from(scale.map_value_to_pixel(*tick));
        let (stroke_width, color) = if zero_line_index == Some(index) {
            (ZERO_LINE_WIDTH_PX, ZERO_LINE_COLOR)
        } else {
            (GRID_LINE_WIDTH_PX, GRID_LINE_COLOR)
        };
        frame.lines.push(value_grid_line(area, position, pixel, stroke_width, color));
    }

    if config.category_axis.offset_grid_lines && !chart.datasets().is_empty() {
        let band = chart.category_band(0)?;
        for edge in band.slot_edges() {
            frame
                .lines
                .push(category_grid_line(area, position, edge));
        }
    }

    for dataset_index in 0..chart.datasets().len() {
        for bar in chart.project_bars_with_scale(dataset_index, &scale)? {
            if bar.is_empty() {
                continue;
            }
            let (x, y, width, height) = bar.rect();
            let fill = if bar.segment.delta() >= 0.0 {
                INCREASE_FILL
            } else {
                DECREASE_FILL
            };
            frame.rects.push(RectPrimitive::new(x, y, width, height, fill));
        }
    }

    for (tick, label) in scale.ticks().iter().zip(chart.tick_labels(&scale)) {
        if label.is_empty() {
            continue;
        }
        let pixel = f64::from(scale.map_value_to_pixel(*tick));
        let (x, y, h_align) = label_anchor(area, position, pixel, font_size_px);
        frame.texts.push(TextPrimitive::new(
            label,
            x,
            y,
            font_size_px,
            LABEL_COLOR,
            h_align,
        ));
    }

    trace!(
        lines = frame.lines.len(),
        rects = frame.rects.len(),
        texts = frame.texts.len(),
        "built waterfall render frame"
    );
    Ok(frame)
}

fn value_grid_line(
    area: AxisGeometry,
    position: AxisPosition,
    pixel: f64,
    stroke_width: f64,
    color: Color,
) -> LinePrimitive {
    if position.is_horizontal() {
        LinePrimitive::new(pixel, area.top, pixel, area.bottom(), stroke_width, color)
    } else {
        LinePrimitive::new(area.left, pixel, area.right(), pixel, stroke_width, color)
    }
}

fn category_grid_line(area: AxisGeometry, position: AxisPosition, edge: f64) -> LinePrimitive {
    if position.is_horizontal() {
        LinePrimitive::new(
            area.left,
            edge,
            area.right(),
            edge,
            GRID_LINE_WIDTH_PX,
            GRID_LINE_COLOR,
        )
    } else {
        LinePrimitive::new(
            edge,
            area.top,
            edge,
            area.bottom(),
            GRID_LINE_WIDTH_PX,
            GRID_LINE_COLOR,
        )
    }
}

fn label_anchor(
    area: AxisGeometry,
    position: AxisPosition,
    pixel: f64,
    font_size_px: f64,
) -> (f64, f64, TextHAlign) {
    match position {
        AxisPosition::Bottom => (
            pixel,
            area.bottom() + LABEL_GAP_PX + font_size_px,
            TextHAlign::Center,
        ),
        AxisPosition::Top => (pixel, area.top - LABEL_GAP_PX, TextHAlign::Center),
        AxisPosition::Left => (
            area.left - LABEL_GAP_PX,
            pixel + font_size_px / 3.0,
            TextHAlign::Right,
        ),
        AxisPosition::Right => (
            area.right() + LABEL_GAP_PX,
            pixel + font_size_px / 3.0,
            TextHAlign::Left,
        ),
    }
}
