use std::fmt::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Pixel size of one drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One labeled sample of a chart series.
///
/// A series is an ordered slice of entries; position in the slice decides
/// draw order and, for donut/pie charts, the assigned color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub label: String,
    pub value: f64,
}

impl SeriesEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Builds an entry from a decimal aggregate such as a revenue total.
    pub fn from_decimal(label: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            label: label.into(),
            value: decimal_to_f64(value, "value")?,
        })
    }

    /// Builds an entry labeled by a formatted date bucket, e.g. `"%b"` -> `Jan`.
    ///
    /// Unknown `strftime` specifiers are reported instead of panicking.
    pub fn from_date(date: NaiveDate, format: &str, value: f64) -> ChartResult<Self> {
        let mut label = String::new();
        write!(label, "{}", date.format(format)).map_err(|_| {
            ChartError::InvalidData(format!("invalid date label format `{format}`"))
        })?;
        Ok(Self { label, value })
    }
}

/// Extracts raw values in series order.
#[must_use]
pub fn series_values(series: &[SeriesEntry]) -> Vec<f64> {
    series.iter().map(|entry| entry.value).collect()
}
