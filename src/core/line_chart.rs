use serde::{Deserialize, Serialize};

use crate::core::{SeriesEntry, series_values};
use crate::core::normalize::line_positions;

/// Horizontal reference levels, in percent of plot height.
pub const GRIDLINE_LEVELS_PCT: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// One projected line point in percent coordinates (y grows downwards).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub label: String,
    pub value: f64,
    pub x_pct: f64,
    pub y_pct: f64,
}

/// Percent-space geometry of a line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartGeometry {
    pub points: Vec<LinePoint>,
    pub gridlines_pct: [f64; 5],
}

impl LineChartGeometry {
    /// `false` for fewer than two points: a lone point has no segment to draw.
    #[must_use]
    pub fn has_visible_segment(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Projects a series into evenly spaced, min/max-normalized points.
#[must_use]
pub fn project_line_chart(series: &[SeriesEntry]) -> LineChartGeometry {
    let values = series_values(series);
    let points = series
        .iter()
        .zip(line_positions(&values))
        .map(|(entry, position)| LinePoint {
            label: entry.label.clone(),
            value: entry.value,
            x_pct: position.x * 100.0,
            y_pct: position.y * 100.0,
        })
        .collect();

    LineChartGeometry {
        points,
        gridlines_pct: GRIDLINE_LEVELS_PCT,
    }
}
