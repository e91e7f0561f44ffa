use dash_chart::api::{ChartEngine, ChartEngineConfig, ChartStyle};
use dash_chart::core::Viewport;
use dash_chart::render::{Color, NullRenderer};

#[test]
fn config_json_round_trip_keeps_style() {
    let config = ChartEngineConfig::new(Viewport::new(800, 400))
        .with_padding(12.0)
        .with_slice_tone(0.8, 0.45);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn partial_json_falls_back_to_default_style() {
    let parsed = ChartEngineConfig::from_json_str(
        r#"{ "viewport": { "width": 320, "height": 160 }, "style": { "padding_px": 4.0 } }"#,
    )
    .expect("parse");
    assert_eq!(parsed.viewport, Viewport::new(320, 160));
    assert_eq!(parsed.style.padding_px, 4.0);
    assert_eq!(parsed.style.slice_saturation, ChartStyle::default().slice_saturation);

    let minimal =
        ChartEngineConfig::from_json_str(r#"{ "viewport": { "width": 10, "height": 10 } }"#)
            .expect("parse");
    assert_eq!(minimal.style, ChartStyle::default());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(ChartEngineConfig::from_json_str("{ not json").is_err());
}

#[test]
fn invalid_style_is_rejected_at_construction() {
    let style = ChartStyle {
        donut_inner_radius_ratio: 1.0,
        ..ChartStyle::default()
    };
    let result = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(100, 100)).with_style(style),
    );
    assert!(result.is_err());
}

#[test]
fn set_style_validates_and_applies() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(100, 100)),
    )
    .expect("engine init");

    let bad = ChartStyle {
        bar_color: Color::rgb(2.0, 0.0, 0.0),
        ..ChartStyle::default()
    };
    assert!(engine.set_style(bad).is_err());
    assert_eq!(engine.style(), ChartStyle::default());

    let good = ChartStyle {
        slice_lightness: 0.3,
        ..ChartStyle::default()
    };
    engine.set_style(good).expect("valid style");
    assert_eq!(engine.style().slice_lightness, 0.3);
}

#[test]
fn set_viewport_rejects_zero_size() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(100, 100)),
    )
    .expect("engine init");
    assert!(engine.set_viewport(Viewport::new(100, 0)).is_err());
    engine
        .set_viewport(Viewport::new(200, 50))
        .expect("valid viewport");
    assert_eq!(engine.viewport(), Viewport::new(200, 50));
}
