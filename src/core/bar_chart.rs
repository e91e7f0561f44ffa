use serde::{Deserialize, Serialize};

use crate::core::{SeriesEntry, series_values};
use crate::core::normalize::bar_fractions;

/// Relative geometry for one horizontal bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub label: String,
    /// Literal input value, printed as the bar's right-aligned label.
    pub value: f64,
    pub fraction: f64,
    /// Bar width as a percentage of the track (`fraction * 100`).
    pub width_pct: f64,
}

/// Projects a series into proportional bars keyed to the series maximum.
///
/// Bars keep input order; ranking is the caller's job.
#[must_use]
pub fn project_bars(series: &[SeriesEntry]) -> Vec<BarGeometry> {
    let values = series_values(series);
    let fractions = bar_fractions(&values);

    series
        .iter()
        .zip(fractions)
        .enumerate()
        .map(|(index, (entry, fraction))| BarGeometry {
            index,
            label: entry.label.clone(),
            value: entry.value,
            fraction,
            width_pct: fraction * 100.0,
        })
        .collect()
}
