#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use dash_chart::ChartError;
use dash_chart::api::{ChartEngine, ChartEngineConfig, ChartGeometry, ChartRequest};
use dash_chart::core::{PieGeometry, SeriesEntry, Viewport, polar_to_cartesian};
use dash_chart::render::{CairoRenderStats, CairoRenderer};

const WIDTH: i32 = 480;
const HEIGHT: i32 = 240;

fn engine() -> ChartEngine<CairoRenderer> {
    let renderer = CairoRenderer::new(WIDTH, HEIGHT).expect("renderer");
    ChartEngine::new(
        renderer,
        ChartEngineConfig::new(Viewport::new(WIDTH as u32, HEIGHT as u32)),
    )
    .expect("engine init")
}

fn pie_geometry(engine: &ChartEngine<CairoRenderer>, request: &ChartRequest) -> PieGeometry {
    match engine.project(request).expect("project") {
        ChartGeometry::Pie(geometry) | ChartGeometry::Donut(geometry) => geometry,
        other => panic!("expected radial geometry, got {other:?}"),
    }
}

/// Renders on a caller-owned surface and returns `(r, g, b)` at each sample point.
fn render_and_sample(
    engine: &mut ChartEngine<CairoRenderer>,
    request: &ChartRequest,
    points: &[(f64, f64)],
) -> Vec<(u8, u8, u8)> {
    let mut surface = ImageSurface::create(Format::ARgb32, WIDTH, HEIGHT).expect("surface");
    {
        let context = Context::new(&surface).expect("context");
        engine
            .render_on_cairo_context(&context, request)
            .expect("render on context");
    }
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().expect("surface data");

    points
        .iter()
        .map(|(x, y)| {
            let offset = (y.round() as usize) * stride + (x.round() as usize) * 4;
            // ARGB32 is stored native-endian: B, G, R, A on little-endian hosts.
            if cfg!(target_endian = "little") {
                (data[offset + 2], data[offset + 1], data[offset])
            } else {
                (data[offset + 1], data[offset + 2], data[offset + 3])
            }
        })
        .collect()
}

fn is_red(pixel: (u8, u8, u8)) -> bool {
    let (r, g, b) = pixel;
    r > 180 && g < 90 && b < 90
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 240).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn pie_wedges_are_filled_with_positional_colors() {
    let mut engine = engine();
    let request = ChartRequest::pie(vec![
        SeriesEntry::new("A", 10.0),
        SeriesEntry::new("B", 20.0),
        SeriesEntry::new("C", 30.0),
    ]);
    let geometry = pie_geometry(&engine, &request);

    // Middle of the first wedge (0°..60°), which gets hue 0.
    let wedge = polar_to_cartesian(
        geometry.center_x,
        geometry.center_y,
        geometry.radius * 0.6,
        30.0,
    );
    let pixels = render_and_sample(&mut engine, &request, &[wedge]);
    assert!(is_red(pixels[0]), "unexpected wedge pixel {:?}", pixels[0]);

    assert_eq!(
        engine.renderer().last_stats(),
        CairoRenderStats {
            rects_drawn: 3,
            lines_drawn: 0,
            paths_drawn: 3,
            polylines_drawn: 0,
            circles_drawn: 0,
            texts_drawn: 3,
        }
    );
}

#[test]
fn single_entry_donut_draws_full_ring_around_cutout() {
    let mut engine = engine();
    let request = ChartRequest::donut(vec![SeriesEntry::new("A", 5.0)]);
    let geometry = pie_geometry(&engine, &request);
    let inner = geometry.inner_radius.expect("donut cutout");
    let ring_radius = (inner + geometry.radius) / 2.0;

    let ring_points: Vec<(f64, f64)> = [45.0, 135.0, 225.0, 315.0]
        .iter()
        .map(|deg| polar_to_cartesian(geometry.center_x, geometry.center_y, ring_radius, *deg))
        .collect();
    let mut samples = ring_points.clone();
    samples.push((geometry.center_x, geometry.center_y));

    let pixels = render_and_sample(&mut engine, &request, &samples);
    for pixel in &pixels[..ring_points.len()] {
        assert!(is_red(*pixel), "ring pixel not filled: {pixel:?}");
    }
    assert_eq!(pixels[ring_points.len()], (255, 255, 255));

    let stats = engine.renderer().last_stats();
    assert_eq!(stats.paths_drawn, 1);
    assert_eq!(stats.circles_drawn, 1);
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.texts_drawn, 1);
}

#[test]
fn line_chart_draws_grid_polyline_markers_and_labels() {
    let mut engine = engine();
    engine
        .render(&ChartRequest::line(vec![
            SeriesEntry::new("Mon", 12.0),
            SeriesEntry::new("Tue", 30.0),
            SeriesEntry::new("Wed", 18.0),
        ]))
        .expect("render");

    assert_eq!(
        engine.renderer().last_stats(),
        CairoRenderStats {
            rects_drawn: 0,
            lines_drawn: 5,
            paths_drawn: 0,
            polylines_drawn: 1,
            circles_drawn: 3,
            texts_drawn: 3,
        }
    );
}

#[test]
fn sparkline_draws_a_single_polyline() {
    let mut engine = engine();
    engine
        .render_sparkline(&[3.0, 5.0, 4.0, 8.0])
        .expect("render sparkline");

    let stats = engine.renderer().last_stats();
    assert_eq!(stats.polylines_drawn, 1);
    assert_eq!(
        stats.rects_drawn + stats.lines_drawn + stats.paths_drawn + stats.circles_drawn,
        0
    );
    assert_eq!(stats.texts_drawn, 0);
}

#[test]
fn rendered_surface_encodes_as_png() {
    let mut engine = engine();
    engine
        .render(&ChartRequest::pie(vec![SeriesEntry::new("A", 1.0)]))
        .expect("render");

    let mut png = Vec::new();
    engine.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
