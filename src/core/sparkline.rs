use serde::{Deserialize, Serialize};

use crate::core::normalize::sparkline_positions;
use crate::error::{ChartError, ChartResult};

/// Fixed drawing box of a sparkline, in its own units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparklineViewBox {
    pub width: f64,
    pub height: f64,
}

impl SparklineViewBox {
    pub fn new(width: f64, height: f64) -> ChartResult<Self> {
        let view_box = Self { width, height };
        view_box.validate()?;
        Ok(view_box)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidData(
                "sparkline view box must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for SparklineViewBox {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 30.0,
        }
    }
}

/// Direction of a trend, comparing the last value with the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Sparkline polyline in view-box units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparklineGeometry {
    pub view_box: SparklineViewBox,
    pub points: Vec<(f64, f64)>,
    pub first_value: Option<f64>,
    pub last_value: Option<f64>,
}

impl SparklineGeometry {
    #[must_use]
    pub fn trend(&self) -> Trend {
        match (self.first_value, self.last_value) {
            (Some(first), Some(last)) if last > first => Trend::Up,
            (Some(first), Some(last)) if last < first => Trend::Down,
            _ => Trend::Flat,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Scales `values` into `view_box` with the min/max rule.
///
/// Normalization is local to this call. One value yields a single centered
/// point; no values yield an empty polyline.
#[must_use]
pub fn project_sparkline(values: &[f64], view_box: SparklineViewBox) -> SparklineGeometry {
    let points = sparkline_positions(values)
        .into_iter()
        .map(|position| (position.x * view_box.width, position.y * view_box.height))
        .collect();

    SparklineGeometry {
        view_box,
        points,
        first_value: values.first().copied(),
        last_value: values.last().copied(),
    }
}
