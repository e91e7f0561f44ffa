use crate::core::{SparklineGeometry, Trend, Viewport};
use crate::render::{
    Color, PolylinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{ChartEngine, ChartStyle, SummaryCard};

/// Vertical gap between the card title and the summary value.
const TITLE_VALUE_GAP_PX: f64 = 4.0;

#[must_use]
pub fn trend_color(trend: Trend, style: &ChartStyle) -> Color {
    match trend {
        Trend::Up => style.trend_up_color,
        Trend::Down => style.trend_down_color,
        Trend::Flat => style.trend_flat_color,
    }
}

/// Smallest integral viewport that contains the sparkline view box.
pub(super) fn sparkline_viewport(geometry: &SparklineGeometry) -> Viewport {
    Viewport::new(
        geometry.view_box.width.ceil().max(1.0) as u32,
        geometry.view_box.height.ceil().max(1.0) as u32,
    )
}

impl<R: Renderer> ChartEngine<R> {
    /// Bare polyline in view-box units: no grid, markers or labels.
    pub(super) fn append_sparkline_primitives(
        &self,
        frame: &mut RenderFrame,
        geometry: &SparklineGeometry,
    ) {
        if geometry.is_empty() {
            return;
        }
        let style = self.config.style;
        frame.polylines.push(PolylinePrimitive::new(
            geometry.points.clone(),
            style.sparkline_width,
            style.sparkline_color,
        ));
    }

    /// Card background, title, value and a trend-colored sparkline on the right.
    pub(super) fn append_summary_card_primitives(
        &self,
        frame: &mut RenderFrame,
        card: &SummaryCard,
        geometry: &SparklineGeometry,
    ) {
        let style = self.config.style;
        let width = f64::from(frame.viewport.width);
        let height = f64::from(frame.viewport.height);
        let padding = style.padding_px;

        frame.rects.push(
            RectPrimitive::new(0.0, 0.0, width, height, style.card_background_color)
                .with_corner_radius(style.card_corner_radius_px),
        );

        if !card.title.is_empty() {
            frame.texts.push(TextPrimitive::new(
                card.title.clone(),
                padding,
                padding,
                style.card_title_font_size_px,
                style.text_color,
                TextHAlign::Left,
            ));
        }
        if !card.value_text.is_empty() {
            frame.texts.push(TextPrimitive::new(
                card.value_text.clone(),
                padding,
                padding + style.card_title_font_size_px + TITLE_VALUE_GAP_PX,
                style.card_value_font_size_px,
                style.text_color,
                TextHAlign::Left,
            ));
        }

        if geometry.is_empty() {
            return;
        }

        let area_width = (width - 2.0 * padding).max(0.0) * style.card_sparkline_ratio;
        let area_height = (height - 2.0 * padding).max(0.0);
        let origin_x = width - padding - area_width;
        let scale_x = area_width / geometry.view_box.width;
        let scale_y = area_height / geometry.view_box.height;
        let points = geometry
            .points
            .iter()
            .map(|(x, y)| (origin_x + x * scale_x, padding + y * scale_y))
            .collect();

        frame.polylines.push(PolylinePrimitive::new(
            points,
            style.sparkline_width,
            trend_color(geometry.trend(), &style),
        ));
    }
}
