use tracing::warn;

use crate::core::normalize::needs_clamping;
use crate::error::{ChartError, ChartResult};

use super::{ChartKind, ChartRequest, ChartStyle};

/// Largest accepted per-request frame height.
pub const MAX_HEIGHT_HINT_PX: f64 = 16_384.0;

pub(super) fn validate_chart_style(style: ChartStyle) -> ChartResult<ChartStyle> {
    for color in [
        style.text_color,
        style.bar_color,
        style.bar_track_color,
        style.line_color,
        style.grid_line_color,
        style.marker_color,
        style.donut_hole_color,
        style.sparkline_color,
        style.trend_up_color,
        style.trend_down_color,
        style.trend_flat_color,
        style.card_background_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("label font size", style.label_font_size_px),
        ("line width", style.line_width),
        ("grid line width", style.grid_line_width),
        ("sparkline width", style.sparkline_width),
        ("card title font size", style.card_title_font_size_px),
        ("card value font size", style.card_value_font_size_px),
        ("legend row height", style.legend_row_height_px),
    ] {
        ensure_positive(name, value)?;
    }

    for (name, value) in [
        ("padding", style.padding_px),
        ("bar corner radius", style.bar_corner_radius_px),
        ("bar label width", style.bar_label_width_px),
        ("bar value width", style.bar_value_width_px),
        ("marker radius", style.marker_radius_px),
        ("line label band", style.line_label_band_px),
        ("legend swatch", style.legend_swatch_px),
        ("card corner radius", style.card_corner_radius_px),
    ] {
        ensure_non_negative(name, value)?;
    }

    for (name, value) in [
        ("slice saturation", style.slice_saturation),
        ("slice lightness", style.slice_lightness),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and in [0, 1]"
            )));
        }
    }

    for (name, value) in [
        ("bar thickness ratio", style.bar_thickness_ratio),
        ("pie area ratio", style.pie_area_ratio),
        ("card sparkline ratio", style.card_sparkline_ratio),
    ] {
        if !value.is_finite() || value <= 0.0 || value > 1.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and in (0, 1]"
            )));
        }
    }

    let ratio = style.donut_inner_radius_ratio;
    if !ratio.is_finite() || ratio <= 0.0 || ratio >= 1.0 {
        return Err(ChartError::InvalidData(
            "donut inner radius ratio must be finite and in (0, 1)".to_owned(),
        ));
    }

    style.sparkline_view_box.validate()?;
    Ok(style)
}

/// Rejects inputs no drawing can represent and reports clamped magnitudes.
pub(super) fn validate_request(request: &ChartRequest) -> ChartResult<()> {
    if let Some(entry) = request.series.iter().find(|entry| !entry.value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "series value for `{}` must be finite",
            entry.label
        )));
    }

    if let Some(height) = request.height_hint {
        if !height.is_finite() || !(1.0..=MAX_HEIGHT_HINT_PX).contains(&height) {
            return Err(ChartError::InvalidData(format!(
                "height hint must be finite and in [1, {MAX_HEIGHT_HINT_PX}]"
            )));
        }
    }

    if matches!(request.kind, ChartKind::Bar | ChartKind::Donut | ChartKind::Pie) {
        let clamped = request
            .series
            .iter()
            .filter(|entry| needs_clamping(entry.value))
            .count();
        if clamped > 0 {
            warn!(
                kind = ?request.kind,
                clamped,
                "negative values clamped to zero"
            );
        }
    }

    Ok(())
}

pub(super) fn validate_values(values: &[f64]) -> ChartResult<()> {
    if values.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(
            "sparkline values must be finite".to_owned(),
        ));
    }
    Ok(())
}

fn ensure_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn ensure_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}
