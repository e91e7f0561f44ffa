use dash_chart::api::{ChartEngine, ChartEngineConfig, ChartRequest};
use dash_chart::core::{SeriesEntry, Viewport, project_bars};
use dash_chart::render::{NullRenderer, TextHAlign};

fn series(values: &[(&str, f64)]) -> Vec<SeriesEntry> {
    values
        .iter()
        .map(|(label, value)| SeriesEntry::new(*label, *value))
        .collect()
}

#[test]
fn all_zero_bars_render_with_zero_width() {
    let bars = project_bars(&series(&[("A", 0.0), ("B", 0.0)]));
    assert_eq!(bars.len(), 2);
    assert!(bars.iter().all(|bar| bar.width_pct == 0.0));

    let engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(400, 200)),
    )
    .expect("engine init");
    let frame = engine
        .build_render_frame(&ChartRequest::bar(series(&[("A", 0.0), ("B", 0.0)])))
        .expect("frame");
    frame.validate().expect("valid frame");

    let style = engine.style();
    let filled: Vec<_> = frame
        .rects
        .iter()
        .filter(|rect| rect.fill_color == style.bar_color)
        .collect();
    assert_eq!(filled.len(), 2);
    assert!(filled.iter().all(|rect| rect.width == 0.0));
}

#[test]
fn max_entry_spans_full_width_and_order_is_kept() {
    let bars = project_bars(&series(&[("Tea", 12.0), ("Coffee", 48.0), ("Juice", 24.0)]));
    let labels: Vec<&str> = bars.iter().map(|bar| bar.label.as_str()).collect();
    assert_eq!(labels, vec!["Tea", "Coffee", "Juice"]);
    assert_eq!(bars[1].width_pct, 100.0);
    assert_eq!(bars[0].width_pct, 25.0);
    assert_eq!(bars[2].width_pct, 50.0);
}

#[test]
fn bar_frame_stacks_rows_top_to_bottom_with_right_aligned_values() {
    let engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(500, 300)),
    )
    .expect("engine init");
    let style = engine.style();
    let frame = engine
        .build_render_frame(&ChartRequest::bar(series(&[("A", 30.0), ("B", 10.5)])))
        .expect("frame");

    let bars: Vec<_> = frame
        .rects
        .iter()
        .filter(|rect| rect.fill_color == style.bar_color)
        .collect();
    let tracks: Vec<_> = frame
        .rects
        .iter()
        .filter(|rect| rect.fill_color == style.bar_track_color)
        .collect();
    assert_eq!(bars.len(), 2);
    assert!(bars[0].y < bars[1].y);
    assert!((bars[0].width - tracks[0].width).abs() <= 1e-9);
    assert!((bars[1].width - tracks[1].width * 0.35).abs() <= 1e-9);

    let values: Vec<_> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Right)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(values, vec!["30", "10.5"]);
    assert!(
        frame
            .texts
            .iter()
            .filter(|text| text.h_align == TextHAlign::Right)
            .all(|text| (text.x - (500.0 - style.padding_px)).abs() <= 1e-9)
    );
}

#[test]
fn height_hint_overrides_viewport_height() {
    let engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(400, 200)),
    )
    .expect("engine init");
    let frame = engine
        .build_render_frame(&ChartRequest::bar(series(&[("A", 1.0)])).with_height_hint(120.0))
        .expect("frame");
    assert_eq!(frame.viewport, Viewport::new(400, 120));
}

#[test]
fn negative_bar_values_are_clamped_to_zero_width() {
    let bars = project_bars(&series(&[("Returns", -8.0), ("Sales", 16.0)]));
    assert_eq!(bars[0].fraction, 0.0);
    assert_eq!(bars[0].value, -8.0);
    assert_eq!(bars[1].fraction, 1.0);
}
