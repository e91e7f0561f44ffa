use crate::core::{BarGeometry, Viewport, format_value};
use crate::render::{RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Lays bars out top to bottom, one equal-height row per entry.
    pub(super) fn append_bar_primitives(
        &self,
        frame: &mut RenderFrame,
        bars: &[BarGeometry],
        viewport: Viewport,
    ) {
        if bars.is_empty() {
            return;
        }

        let style = self.config.style;
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let padding = style.padding_px;

        let plot_height = (height - 2.0 * padding).max(0.0);
        let row_height = plot_height / bars.len() as f64;
        let thickness = row_height * style.bar_thickness_ratio;
        let track_x = padding + style.bar_label_width_px;
        let track_width =
            (width - 2.0 * padding - style.bar_label_width_px - style.bar_value_width_px).max(0.0);
        let font_size = style.label_font_size_px;

        for bar in bars {
            let row_y = padding + bar.index as f64 * row_height;
            let bar_y = row_y + (row_height - thickness) / 2.0;
            let text_y = row_y + (row_height - font_size).max(0.0) / 2.0;

            frame.rects.push(
                RectPrimitive::new(track_x, bar_y, track_width, thickness, style.bar_track_color)
                    .with_corner_radius(style.bar_corner_radius_px),
            );
            frame.rects.push(
                RectPrimitive::new(
                    track_x,
                    bar_y,
                    bar.fraction * track_width,
                    thickness,
                    style.bar_color,
                )
                .with_corner_radius(style.bar_corner_radius_px),
            );

            if !bar.label.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    bar.label.clone(),
                    padding,
                    text_y,
                    font_size,
                    style.text_color,
                    TextHAlign::Left,
                ));
            }
            frame.texts.push(TextPrimitive::new(
                format_value(bar.value),
                width - padding,
                text_y,
                font_size,
                style.text_color,
                TextHAlign::Right,
            ));
        }
    }
}
