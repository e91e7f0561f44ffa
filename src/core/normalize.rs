//! Series normalization into relative `[0, 1]` coordinates.
//!
//! Every chart kind normalizes its own copy of the values: nothing here keeps
//! state between calls, so two charts built from the same numbers never share
//! a max/min/sum.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Fraction used for the x position of a lone point and for the y position of
/// a flat series.
pub const CENTER_FRACTION: f64 = 0.5;

/// Closed `[min, max]` interval of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Returns `None` for an empty slice. Non-finite values are read as `0`.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let min = values.iter().map(|v| OrderedFloat(finite_or_zero(*v))).min()?;
        let max = values.iter().map(|v| OrderedFloat(finite_or_zero(*v))).max()?;
        Some(Self {
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }

    /// `max - min`; overflows to infinity for ranges wider than `f64::MAX`.
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.max == self.min
    }

    /// Vertical fraction with the maximum at the top (`0`) and the minimum at
    /// the bottom (`1`). A flat range maps everything to the center.
    ///
    /// Offsets are taken on halved operands so any finite range stays finite.
    #[must_use]
    pub fn inverted_fraction(self, value: f64) -> f64 {
        if self.is_flat() {
            return CENTER_FRACTION;
        }
        let half_span = self.max / 2.0 - self.min / 2.0;
        let half_offset = finite_or_zero(value) / 2.0 - self.min / 2.0;
        (1.0 - half_offset / half_span).clamp(0.0, 1.0)
    }
}

/// Relative position of one line/sparkline point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

/// Sum-normalized fractions for donut/pie charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieNormalization {
    /// Sum of clamped magnitudes; the single denominator for the request.
    pub total: f64,
    pub fractions: Vec<f64>,
}

/// Magnitude used by bar and donut/pie charts.
///
/// Negative and non-finite values are clamped to `0`.
#[must_use]
pub fn magnitude(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Returns `true` when [`magnitude`] would change the value.
#[must_use]
pub fn needs_clamping(value: f64) -> bool {
    magnitude(value) != value
}

/// Bar fractions relative to the series maximum. An all-zero series yields
/// all-zero fractions.
#[must_use]
pub fn bar_fractions(values: &[f64]) -> Vec<f64> {
    let max = values
        .iter()
        .map(|v| OrderedFloat(magnitude(*v)))
        .max()
        .map_or(0.0, OrderedFloat::into_inner);

    values
        .iter()
        .map(|v| if max > 0.0 { magnitude(*v) / max } else { 0.0 })
        .collect()
}

/// Line positions: evenly spaced x, min/max-normalized inverted y.
///
/// A single point sits at `(0.5, 0.5)`; a flat series sits on `y = 0.5`.
#[must_use]
pub fn line_positions(values: &[f64]) -> Vec<NormalizedPoint> {
    let Some(range) = ValueRange::from_values(values) else {
        return Vec::new();
    };

    let last_index = values.len() - 1;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| NormalizedPoint {
            x: if last_index == 0 {
                CENTER_FRACTION
            } else {
                index as f64 / last_index as f64
            },
            y: range.inverted_fraction(*value),
        })
        .collect()
}

/// Sparkline positions; same rule as [`line_positions`], computed per call.
#[must_use]
pub fn sparkline_positions(values: &[f64]) -> Vec<NormalizedPoint> {
    line_positions(values)
}

/// Fractions of the clamped sum. A zero sum yields all-zero fractions.
///
/// When the plain sum overflows, magnitudes are rescaled by the largest one
/// before summing and `total` saturates at `f64::MAX`.
#[must_use]
pub fn pie_fractions(values: &[f64]) -> PieNormalization {
    let total: f64 = values.iter().map(|v| magnitude(*v)).sum();
    if total.is_finite() {
        let fractions = values
            .iter()
            .map(|v| {
                if total > 0.0 {
                    magnitude(*v) / total
                } else {
                    0.0
                }
            })
            .collect();
        return PieNormalization { total, fractions };
    }

    let max = values
        .iter()
        .map(|v| OrderedFloat(magnitude(*v)))
        .max()
        .map_or(0.0, OrderedFloat::into_inner);
    let scaled: Vec<f64> = values.iter().map(|v| magnitude(*v) / max).collect();
    let scaled_total: f64 = scaled.iter().sum();
    PieNormalization {
        total: f64::MAX,
        fractions: scaled.iter().map(|v| v / scaled_total).collect(),
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
