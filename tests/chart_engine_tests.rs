use approx::assert_relative_eq;
use std::sync::Arc;
use waterfall_chart::api::{WaterfallChart, WaterfallChartConfig};
use waterfall_chart::core::{AxisPosition, Series, Viewport};
use waterfall_chart::render::{NullRenderer, TextHAlign};
use waterfall_chart::ChartError;

fn profit_chart() -> WaterfallChart<NullRenderer> {
    let config = WaterfallChartConfig::new(Viewport::new(800, 400));
    let mut chart = WaterfallChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_datasets(vec![Series::from_deltas("profit", &[10.0, -3.0, 5.0])]);
    chart
}

#[test]
fn layout_fits_value_axis_to_plot_area() {
    let chart = profit_chart();

    let area = chart.plot_area();
    assert_eq!((area.left, area.top), (72.0, 24.0));
    assert_eq!((area.width, area.height), (704.0, 336.0));

    let scale = chart.layout();
    assert_eq!(scale.ticks(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
    assert_eq!(scale.map_value_to_pixel(0.0), 72);
    assert_eq!(scale.map_value_to_pixel(12.0), 776);
    assert_eq!(scale.zero_line_index(), Some(0));
}

#[test]
fn projected_bars_float_on_running_total() {
    let chart = profit_chart();
    let bars = chart.project_bars(0).expect("bars");

    assert_eq!(bars.len(), 3);
    assert_eq!((bars[0].pixels.base_px, bars[0].pixels.extent_px), (72, 659));
    assert_eq!((bars[1].pixels.base_px, bars[1].pixels.extent_px), (659, 483));
    assert_eq!((bars[2].pixels.base_px, bars[2].pixels.extent_px), (483, 776));

    let (start, end) = (bars[0].band_start, bars[0].band_end);
    assert_relative_eq!((start + end) / 2.0, 80.0, max_relative = 1e-12);
    assert_relative_eq!(end - start, 80.64, max_relative = 1e-12);
}

#[test]
fn render_emits_grid_bars_and_labels() {
    let mut chart = profit_chart();

    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(frame.lines.len(), 7 + 4);
    assert_eq!(frame.rects.len(), 3);
    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["0", "2", "4", "6", "8", "10", "12"]);
    assert!(frame.texts.iter().all(|text| text.h_align == TextHAlign::Center));

    // Zero line is drawn heavier than the other grid lines.
    assert!(frame.lines[0].stroke_width > frame.lines[1].stroke_width);

    chart.render().expect("render");
    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 11);
    assert_eq!(renderer.last_rect_count, 3);
    assert_eq!(renderer.last_text_count, 7);
}

#[test]
fn decreasing_bars_use_a_distinct_fill() {
    let chart = profit_chart();
    let frame = chart.build_render_frame().expect("frame");

    assert_eq!(frame.rects[0].fill_color, frame.rects[2].fill_color);
    assert_ne!(frame.rects[0].fill_color, frame.rects[1].fill_color);
}

#[test]
fn empty_chart_renders_unit_axis_without_bars() {
    let config = WaterfallChartConfig::new(Viewport::new(800, 400));
    let mut chart = WaterfallChart::new(NullRenderer::default(), config).expect("chart init");

    let scale = chart.layout();
    assert_eq!(scale.range().min, 0.0);
    assert_eq!(scale.range().max, 1.0);

    let frame = chart.build_render_frame().expect("frame");
    assert!(frame.rects.is_empty());
    assert_eq!(frame.lines.len(), scale.ticks().len());
    assert!(chart.category_band(0).is_err());

    chart.render().expect("render");
    assert_eq!(chart.renderer().last_rect_count, 0);
}

#[test]
fn non_numeric_categories_leave_empty_slots() {
    let config = WaterfallChartConfig::new(Viewport::new(800, 400));
    let mut chart = WaterfallChart::new(NullRenderer::default(), config).expect("chart init");
    chart.push_series(Series::new(
        "gaps",
        vec![Some(6.0), None, Some(f64::NAN), Some(2.0)],
    ));

    let bars = chart.project_bars(0).expect("bars");
    assert_eq!(bars.len(), 4);
    assert!(bars[1].is_empty());
    assert!(bars[2].is_empty());
    assert_eq!(bars[3].pixels.base_px, bars[2].pixels.extent_px);

    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(frame.rects.len(), 2);
}

#[test]
fn custom_formatter_replaces_default_labels() {
    let mut chart = profit_chart();
    chart.set_tick_label_formatter(Arc::new(|value| format!("${value:.0}k")));

    let scale = chart.layout();
    let labels = chart.tick_labels(&scale);
    assert_eq!(labels.first().map(String::as_str), Some("$0k"));
    assert_eq!(labels.last().map(String::as_str), Some("$12k"));

    chart.clear_tick_label_formatter();
    assert_eq!(chart.tick_labels(&scale)[1], "2");
}

#[test]
fn empty_formatter_output_skips_the_label() {
    let mut chart = profit_chart();
    chart.set_tick_label_formatter(Arc::new(|value| {
        if value == 0.0 {
            String::new()
        } else {
            format!("{value}")
        }
    }));

    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(frame.texts.len(), 6);
    assert_eq!(frame.lines.len(), 11);
}

#[test]
fn vertical_value_axis_stacks_categories_horizontally() {
    let config = WaterfallChartConfig::new(Viewport::new(800, 400))
        .with_value_axis_position(AxisPosition::Left);
    let mut chart = WaterfallChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_datasets(vec![Series::from_deltas("profit", &[10.0, -3.0, 5.0])]);

    let scale = chart.layout();
    assert_eq!(scale.ticks().first(), Some(&12.0));
    assert_eq!(scale.zero_line_index(), Some(scale.ticks().len() - 1));
    assert_eq!(scale.map_value_to_pixel(0.0), 360);
    assert_eq!(scale.map_value_to_pixel(12.0), 24);

    let bars = chart.project_bars(0).expect("bars");
    let (x, y, width, height) = bars[0].rect();
    assert_eq!((y, height), (80.0, 280.0));
    assert!(x > 72.0);
    assert!(width > 0.0);

    let frame = chart.build_render_frame().expect("frame");
    assert!(frame.texts.iter().all(|text| text.h_align == TextHAlign::Right));
}

#[test]
fn set_viewport_rejects_zero_size() {
    let mut chart = profit_chart();

    let err = chart
        .set_viewport(Viewport::new(0, 300))
        .expect_err("zero width must fail");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 300
        }
    ));
    assert_eq!(chart.config().viewport, Viewport::new(800, 400));

    chart
        .set_viewport(Viewport::new(1_000, 600))
        .expect("valid resize");
    assert_eq!(chart.plot_area().width, 904.0);
}

#[test]
fn construction_rejects_invalid_config() {
    let config = WaterfallChartConfig::new(Viewport::new(800, 0));
    assert!(WaterfallChart::new(NullRenderer::default(), config).is_err());
}

#[test]
fn label_for_index_returns_raw_numeric_values() {
    let config = WaterfallChartConfig::new(Viewport::new(800, 400));
    let mut chart = WaterfallChart::new(NullRenderer::default(), config).expect("chart init");
    chart.push_series(Series::new("mixed", vec![Some(-4.5), None, Some(f64::NAN)]));

    assert_eq!(chart.label_for_index(0, 0).expect("label"), Some(-4.5));
    assert_eq!(chart.label_for_index(0, 1).expect("label"), None);
    assert_eq!(chart.label_for_index(0, 2).expect("label"), None);
    assert!(matches!(
        chart.label_for_index(0, 3),
        Err(ChartError::InvalidData(_))
    ));
    assert!(matches!(
        chart.label_for_index(1, 0),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn datasets_share_one_axis_and_split_slots() {
    let mut chart = profit_chart();
    chart.push_series(Series::from_deltas("costs", &[4.0, 4.0]));

    assert_eq!(chart.category_count(), 3);
    assert_eq!(chart.layout().range().max, 12.0);

    let first = chart.project_bars(0).expect("bars");
    let second = chart.project_bars(1).expect("bars");
    assert_eq!(second.len(), 2);

    let first_center = (first[0].band_start + first[0].band_end) / 2.0;
    let second_center = (second[0].band_start + second[0].band_end) / 2.0;
    assert_relative_eq!(first_center, 57.6, max_relative = 1e-12);
    assert_relative_eq!(second_center, 102.4, max_relative = 1e-12);
    assert_relative_eq!(
        second[0].band_end - second[0].band_start,
        40.32,
        max_relative = 1e-12
    );
    assert!(chart.project_bars(2).is_err());
}

#[test]
fn layout_is_recomputed_after_data_changes() {
    let mut chart = profit_chart();
    assert_eq!(chart.layout().range().max, 12.0);

    chart.set_datasets(vec![Series::from_deltas("profit", &[30.0, 20.0])]);
    let scale = chart.layout();
    assert_eq!(scale.range().max, 50.0);
    assert_eq!(chart.project_bars(0).expect("bars")[1].segment.base, 30.0);
}
