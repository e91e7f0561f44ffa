use dash_chart::api::{ChartEngine, ChartEngineConfig, SummaryCard, trend_color};
use dash_chart::core::{SparklineViewBox, Trend, Viewport, project_sparkline};
use dash_chart::render::NullRenderer;

fn engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(240, 96)),
    )
    .expect("engine init")
}

#[test]
fn sparkline_scales_into_view_box() {
    let geometry = project_sparkline(&[2.0, 4.0, 3.0], SparklineViewBox::default());
    assert_eq!(geometry.points, vec![(0.0, 30.0), (50.0, 0.0), (100.0, 15.0)]);
    assert_eq!(geometry.trend(), Trend::Up);
}

#[test]
fn single_value_sparkline_is_a_centered_point() {
    let geometry = project_sparkline(&[42.0], SparklineViewBox::default());
    assert_eq!(geometry.points, vec![(50.0, 15.0)]);
    assert_eq!(geometry.trend(), Trend::Flat);
}

#[test]
fn empty_sparkline_has_no_points() {
    let geometry = project_sparkline(&[], SparklineViewBox::default());
    assert!(geometry.is_empty());
    assert_eq!(geometry.trend(), Trend::Flat);
}

#[test]
fn flat_sparkline_runs_through_middle() {
    let view_box = SparklineViewBox::new(60.0, 20.0).expect("box");
    let geometry = project_sparkline(&[5.0, 5.0, 5.0], view_box);
    assert!(geometry.points.iter().all(|(_, y)| *y == 10.0));
}

#[test]
fn downward_trend_is_detected() {
    let geometry = project_sparkline(&[9.0, 12.0, 4.0], SparklineViewBox::default());
    assert_eq!(geometry.trend(), Trend::Down);
}

#[test]
fn view_box_must_be_positive() {
    assert!(SparklineViewBox::new(0.0, 10.0).is_err());
    assert!(SparklineViewBox::new(10.0, f64::NAN).is_err());
}

#[test]
fn sparkline_frame_is_a_bare_polyline() {
    let engine = engine();
    let frame = engine
        .build_sparkline_frame(&[3.0, 1.0, 4.0, 1.0, 5.0])
        .expect("frame");
    frame.validate().expect("valid frame");
    assert_eq!(frame.viewport, Viewport::new(100, 30));
    assert_eq!(frame.polylines.len(), 1);
    assert!(frame.lines.is_empty());
    assert!(frame.circles.is_empty());
    assert!(frame.texts.is_empty());
}

#[test]
fn one_point_sparkline_frame_renders() {
    let mut engine = engine();
    engine.render_sparkline(&[7.0]).expect("render");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_polyline_count, 1);
}

#[test]
fn empty_sparkline_frame_is_empty() {
    let engine = engine();
    let frame = engine.build_sparkline_frame(&[]).expect("frame");
    assert!(frame.is_empty());
}

#[test]
fn non_finite_sparkline_values_are_rejected() {
    let engine = engine();
    assert!(engine.build_sparkline_frame(&[1.0, f64::NAN]).is_err());
}

#[test]
fn summary_card_places_trend_line_on_the_right() {
    let engine = engine();
    let style = engine.style();
    let card = SummaryCard::new("Revenue", "$12,480").with_trend(vec![10.0, 14.0, 13.0, 18.0]);
    let frame = engine.build_summary_card_frame(&card).expect("frame");
    frame.validate().expect("valid frame");

    let texts: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Revenue", "$12,480"]);
    assert_eq!(frame.rects.len(), 1);
    assert_eq!(frame.rects[0].fill_color, style.card_background_color);

    let polyline = &frame.polylines[0];
    assert_eq!(polyline.color, trend_color(Trend::Up, &style));
    let sparkline_width = (240.0 - 2.0 * style.padding_px) * style.card_sparkline_ratio;
    let sparkline_left = 240.0 - style.padding_px - sparkline_width;
    assert!(polyline.points.iter().all(|(x, _)| *x >= sparkline_left - 1e-9));
    assert!(polyline.points.iter().all(|(x, _)| *x <= 240.0 - style.padding_px + 1e-9));
}

#[test]
fn summary_card_without_trend_has_no_polyline() {
    let mut engine = engine();
    engine
        .render_summary_card(&SummaryCard::new("Low stock", "3"))
        .expect("render");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_polyline_count, 0);
    assert_eq!(renderer.last_text_count, 2);
}

#[test]
fn sparkline_spanning_the_whole_f64_range_stays_in_view_box() {
    let geometry = project_sparkline(&[-1e308, 1e308], SparklineViewBox::default());
    assert_eq!(geometry.points, vec![(0.0, 30.0), (100.0, 0.0)]);
}
