use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, LineChartGeometry, PieGeometry};

use super::ChartKind;

/// Projected geometry of one request, before any styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartGeometry {
    Bar(Vec<BarGeometry>),
    Line(LineChartGeometry),
    Donut(PieGeometry),
    Pie(PieGeometry),
}

impl ChartGeometry {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Bar(_) => ChartKind::Bar,
            Self::Line(_) => ChartKind::Line,
            Self::Donut(_) => ChartKind::Donut,
            Self::Pie(_) => ChartKind::Pie,
        }
    }

    /// Number of projected entries (bars, points or slices).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bar(bars) => bars.len(),
            Self::Line(line) => line.points.len(),
            Self::Donut(pie) | Self::Pie(pie) => pie.slices.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
