use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::{SeriesEntry, series_values};
use crate::core::normalize::pie_fractions;
use crate::core::path::{PathCommand, polar_to_cartesian};
use crate::core::primitives::format_percentage;

/// Hue step between consecutive slices, in degrees.
pub const SLICE_HUE_STEP_DEG: usize = 60;

/// Positional slice hue: `(index * 60) mod 360`.
///
/// Colors depend on position only, so re-ordering a series re-colors it.
#[must_use]
pub fn slice_hue(index: usize) -> f64 {
    ((index % (360 / SLICE_HUE_STEP_DEG)) * SLICE_HUE_STEP_DEG) as f64
}

/// Pixel placement of a pie/donut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    /// Radius of the center cutout; `None` draws a full pie.
    pub inner_radius: Option<f64>,
}

impl PieLayout {
    #[must_use]
    pub fn pie(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            inner_radius: None,
        }
    }

    #[must_use]
    pub fn donut(center_x: f64, center_y: f64, radius: f64, inner_radius: f64) -> Self {
        Self {
            inner_radius: Some(inner_radius),
            ..Self::pie(center_x, center_y, radius)
        }
    }
}

/// One wedge of the sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcSlice {
    pub index: usize,
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub large_arc: bool,
    pub hue_deg: f64,
    /// Share of the total in percent, from the same denominator as `fraction`.
    pub percentage: f64,
    /// center -> endpoint 1 -> clockwise arc to endpoint 2 -> close.
    pub path: SmallVec<[PathCommand; 4]>,
}

impl ArcSlice {
    #[must_use]
    pub fn end_angle_deg(&self) -> f64 {
        self.start_angle_deg + self.sweep_angle_deg
    }

    /// Percentage formatted to one decimal place, as shown in the legend.
    #[must_use]
    pub fn percentage_text(&self) -> String {
        format_percentage(self.percentage)
    }
}

/// Full pie/donut geometry for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub inner_radius: Option<f64>,
    /// Sum of clamped magnitudes, saturating at `f64::MAX`.
    pub total: f64,
    pub slices: Vec<ArcSlice>,
}

impl PieGeometry {
    #[must_use]
    pub fn has_cutout(&self) -> bool {
        self.inner_radius.is_some()
    }

    /// Accumulated angle after the last slice: 360° for a non-zero total, 0° otherwise.
    #[must_use]
    pub fn swept_angle_deg(&self) -> f64 {
        self.slices.last().map_or(0.0, ArcSlice::end_angle_deg)
    }
}

/// Runs the cumulative arc sweep over `series`.
///
/// The running angle starts at 0° and advances by `fraction * 360` per entry in
/// input order. A zero total produces zero-degree slices instead of failing.
#[must_use]
pub fn project_pie(series: &[SeriesEntry], layout: PieLayout) -> PieGeometry {
    let values = series_values(series);
    let normalized = pie_fractions(&values);
    let PieLayout {
        center_x,
        center_y,
        radius,
        inner_radius,
    } = layout;

    let mut current_angle = 0.0_f64;
    let mut slices = Vec::with_capacity(series.len());
    for (index, (entry, fraction)) in series.iter().zip(normalized.fractions).enumerate() {
        let sweep_angle = fraction * 360.0;
        let (start_x, start_y) = polar_to_cartesian(center_x, center_y, radius, current_angle);
        let (end_x, end_y) =
            polar_to_cartesian(center_x, center_y, radius, current_angle + sweep_angle);
        let large_arc = sweep_angle > 180.0;

        let path = smallvec![
            PathCommand::MoveTo {
                x: center_x,
                y: center_y,
            },
            PathCommand::LineTo {
                x: start_x,
                y: start_y,
            },
            PathCommand::ArcTo {
                center_x,
                center_y,
                radius,
                start_angle_deg: current_angle,
                sweep_angle_deg: sweep_angle,
                large_arc,
                clockwise: true,
                end_x,
                end_y,
            },
            PathCommand::Close,
        ];

        slices.push(ArcSlice {
            index,
            label: entry.label.clone(),
            value: entry.value,
            fraction,
            start_angle_deg: current_angle,
            sweep_angle_deg: sweep_angle,
            start_x,
            start_y,
            end_x,
            end_y,
            large_arc,
            hue_deg: slice_hue(index),
            percentage: fraction * 100.0,
            path,
        });

        current_angle += sweep_angle;
    }

    PieGeometry {
        center_x,
        center_y,
        radius,
        inner_radius,
        total: normalized.total,
        slices,
    }
}

#[cfg(test)]
mod tests {
    use super::slice_hue;

    #[test]
    fn hue_wraps_every_six_slices() {
        let hues: Vec<f64> = (0..8).map(slice_hue).collect();
        assert_eq!(hues, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0, 0.0, 60.0]);
    }
}
