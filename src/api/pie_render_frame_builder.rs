use serde::{Deserialize, Serialize};

use crate::core::{PieGeometry, PieLayout, Viewport, format_value};
use crate::render::{
    CirclePrimitive, Color, PathPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::{ChartEngine, ChartKind, ChartStyle};

/// Horizontal gap between the pie and its legend.
const LEGEND_GAP_PX: f64 = 16.0;
/// Gap between a legend swatch and its text.
const SWATCH_TEXT_GAP_PX: f64 = 6.0;

/// One legend row: the slice color paired with its label, value and share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
    pub value_text: String,
    /// One-decimal percentage without the `%` sign, e.g. `"33.3"`.
    pub percentage_text: String,
}

impl LegendEntry {
    #[must_use]
    pub fn text(&self) -> String {
        if self.label.is_empty() {
            format!("{} ({}%)", self.value_text, self.percentage_text)
        } else {
            format!(
                "{}: {} ({}%)",
                self.label, self.value_text, self.percentage_text
            )
        }
    }
}

/// Slice color from the positional hue and the style's fixed tone.
#[must_use]
pub fn slice_color(hue_deg: f64, style: &ChartStyle) -> Color {
    Color::hsl(hue_deg, style.slice_saturation, style.slice_lightness)
}

/// Legend rows in input order.
#[must_use]
pub fn pie_legend(geometry: &PieGeometry, style: &ChartStyle) -> Vec<LegendEntry> {
    geometry
        .slices
        .iter()
        .map(|slice| LegendEntry {
            color: slice_color(slice.hue_deg, style),
            label: slice.label.clone(),
            value_text: format_value(slice.value),
            percentage_text: slice.percentage_text(),
        })
        .collect()
}

/// Places the pie in a square on the left of the viewport.
#[must_use]
pub(super) fn pie_layout(kind: ChartKind, viewport: Viewport, style: &ChartStyle) -> PieLayout {
    let padding = style.padding_px;
    let available_height = (f64::from(viewport.height) - 2.0 * padding).max(0.0);
    let available_width =
        (f64::from(viewport.width) - 2.0 * padding).max(0.0) * style.pie_area_ratio;
    let radius = available_height.min(available_width) / 2.0;
    let center_x = padding + radius;
    let center_y = f64::from(viewport.height) / 2.0;

    match kind {
        ChartKind::Donut => PieLayout::donut(
            center_x,
            center_y,
            radius,
            radius * style.donut_inner_radius_ratio,
        ),
        _ => PieLayout::pie(center_x, center_y, radius),
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Wedges in sweep order, then the donut cutout, then the legend.
    pub(super) fn append_pie_primitives(&self, frame: &mut RenderFrame, geometry: &PieGeometry) {
        if geometry.slices.is_empty() {
            return;
        }

        let style = self.config.style;
        for slice in &geometry.slices {
            frame.paths.push(PathPrimitive::new(
                slice.path.clone(),
                slice_color(slice.hue_deg, &style),
            ));
        }

        if let Some(inner_radius) = geometry.inner_radius {
            frame.circles.push(CirclePrimitive::new(
                geometry.center_x,
                geometry.center_y,
                inner_radius,
                style.donut_hole_color,
            ));
        }

        let legend = pie_legend(geometry, &style);
        let row_height = style.legend_row_height_px;
        let legend_x = geometry.center_x + geometry.radius + LEGEND_GAP_PX;
        let legend_top =
            (geometry.center_y - row_height * legend.len() as f64 / 2.0).max(style.padding_px);
        let swatch = style.legend_swatch_px.min(row_height);

        for (index, entry) in legend.iter().enumerate() {
            let row_y = legend_top + index as f64 * row_height;
            frame.rects.push(RectPrimitive::new(
                legend_x,
                row_y + (row_height - swatch) / 2.0,
                swatch,
                swatch,
                entry.color,
            ));
            frame.texts.push(TextPrimitive::new(
                entry.text(),
                legend_x + swatch + SWATCH_TEXT_GAP_PX,
                row_y + (row_height - style.label_font_size_px).max(0.0) / 2.0,
                style.label_font_size_px,
                style.text_color,
                TextHAlign::Left,
            ));
        }
    }
}
