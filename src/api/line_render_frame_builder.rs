use crate::core::{LineChartGeometry, Viewport};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolylinePrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::ChartEngine;

/// Gap between the plot bottom and point labels.
const LABEL_GAP_PX: f64 = 6.0;

impl<R: Renderer> ChartEngine<R> {
    /// Gridlines first, then the polyline, markers and labels below each point.
    pub(super) fn append_line_primitives(
        &self,
        frame: &mut RenderFrame,
        geometry: &LineChartGeometry,
        viewport: Viewport,
    ) {
        if geometry.points.is_empty() {
            return;
        }

        let style = self.config.style;
        let padding = style.padding_px;
        let plot_left = padding;
        let plot_top = padding;
        let plot_width = (f64::from(viewport.width) - 2.0 * padding).max(0.0);
        let plot_height =
            (f64::from(viewport.height) - 2.0 * padding - style.line_label_band_px).max(0.0);
        let plot_bottom = plot_top + plot_height;

        for level_pct in geometry.gridlines_pct {
            let y = plot_top + level_pct / 100.0 * plot_height;
            frame.lines.push(LinePrimitive::new(
                plot_left,
                y,
                plot_left + plot_width,
                y,
                style.grid_line_width,
                style.grid_line_color,
            ));
        }

        let pixels: Vec<(f64, f64)> = geometry
            .points
            .iter()
            .map(|point| {
                (
                    plot_left + point.x_pct / 100.0 * plot_width,
                    plot_top + point.y_pct / 100.0 * plot_height,
                )
            })
            .collect();

        frame.polylines.push(PolylinePrimitive::new(
            pixels.clone(),
            style.line_width,
            style.line_color,
        ));

        for (point, (x, y)) in geometry.points.iter().zip(pixels) {
            if style.marker_radius_px > 0.0 {
                frame.circles.push(CirclePrimitive::new(
                    x,
                    y,
                    style.marker_radius_px,
                    style.marker_color,
                ));
            }
            if !point.label.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    point.label.clone(),
                    x,
                    plot_bottom + LABEL_GAP_PX,
                    style.label_font_size_px,
                    style.text_color,
                    TextHAlign::Center,
                ));
            }
        }
    }
}
