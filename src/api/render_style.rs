use serde::{Deserialize, Serialize};

use crate::core::SparklineViewBox;
use crate::render::Color;

/// Visual style shared by every chart kind.
///
/// Missing fields fall back to `ChartStyle::default()` when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub text_color: Color,
    pub label_font_size_px: f64,
    /// Outer padding on every side of the drawing surface.
    pub padding_px: f64,

    pub bar_color: Color,
    pub bar_track_color: Color,
    /// Bar thickness as a fraction of its row height.
    pub bar_thickness_ratio: f64,
    pub bar_corner_radius_px: f64,
    /// Width reserved left of the track for entry labels.
    pub bar_label_width_px: f64,
    /// Width reserved right of the track for right-aligned values.
    pub bar_value_width_px: f64,

    pub line_color: Color,
    pub line_width: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub marker_color: Color,
    pub marker_radius_px: f64,
    /// Height reserved below the plot for point labels.
    pub line_label_band_px: f64,

    /// Fixed HSL saturation of pie/donut slices, in `[0, 1]`.
    pub slice_saturation: f64,
    /// Fixed HSL lightness of pie/donut slices, in `[0, 1]`.
    pub slice_lightness: f64,
    /// Donut cutout radius relative to the outer radius, in `(0, 1)`.
    pub donut_inner_radius_ratio: f64,
    pub donut_hole_color: Color,
    /// Share of the width available to the pie itself; the legend takes the rest.
    pub pie_area_ratio: f64,
    pub legend_swatch_px: f64,
    pub legend_row_height_px: f64,

    pub sparkline_view_box: SparklineViewBox,
    pub sparkline_color: Color,
    pub sparkline_width: f64,
    pub trend_up_color: Color,
    pub trend_down_color: Color,
    pub trend_flat_color: Color,

    pub card_background_color: Color,
    pub card_corner_radius_px: f64,
    pub card_title_font_size_px: f64,
    pub card_value_font_size_px: f64,
    /// Share of the card width given to the trend sparkline.
    pub card_sparkline_ratio: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            text_color: Color::rgb(0.10, 0.12, 0.16),
            label_font_size_px: 12.0,
            padding_px: 8.0,

            bar_color: Color::rgb(0.16, 0.38, 1.0),
            bar_track_color: Color::rgb(0.93, 0.94, 0.96),
            bar_thickness_ratio: 0.6,
            bar_corner_radius_px: 3.0,
            bar_label_width_px: 96.0,
            bar_value_width_px: 64.0,

            line_color: Color::rgb(0.16, 0.38, 1.0),
            line_width: 2.0,
            grid_line_color: Color::rgb(0.89, 0.92, 0.95),
            grid_line_width: 1.0,
            marker_color: Color::rgb(0.16, 0.38, 1.0),
            marker_radius_px: 4.0,
            line_label_band_px: 24.0,

            slice_saturation: 0.7,
            slice_lightness: 0.5,
            donut_inner_radius_ratio: 0.6,
            donut_hole_color: Color::rgb(1.0, 1.0, 1.0),
            pie_area_ratio: 0.5,
            legend_swatch_px: 12.0,
            legend_row_height_px: 20.0,

            sparkline_view_box: SparklineViewBox::default(),
            sparkline_color: Color::rgb(0.16, 0.38, 1.0),
            sparkline_width: 1.5,
            trend_up_color: Color::rgb(0.03, 0.60, 0.51),
            trend_down_color: Color::rgb(0.95, 0.21, 0.27),
            trend_flat_color: Color::rgb(0.47, 0.51, 0.58),

            card_background_color: Color::rgb(0.98, 0.98, 0.99),
            card_corner_radius_px: 8.0,
            card_title_font_size_px: 12.0,
            card_value_font_size_px: 22.0,
            card_sparkline_ratio: 0.4,
        }
    }
}
