use serde::{Deserialize, Serialize};

use crate::core::SeriesEntry;

/// Chart strategy selected by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Donut,
    Pie,
}

impl ChartKind {
    #[must_use]
    pub fn is_radial(self) -> bool {
        matches!(self, Self::Donut | Self::Pie)
    }
}

/// Everything needed for one render: built fresh each time and never retained
/// by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub series: Vec<SeriesEntry>,
    /// Preferred frame height in pixels; the configured viewport height otherwise.
    #[serde(default)]
    pub height_hint: Option<f64>,
}

impl ChartRequest {
    #[must_use]
    pub fn new(kind: ChartKind, series: Vec<SeriesEntry>) -> Self {
        Self {
            kind,
            series,
            height_hint: None,
        }
    }

    #[must_use]
    pub fn bar(series: Vec<SeriesEntry>) -> Self {
        Self::new(ChartKind::Bar, series)
    }

    #[must_use]
    pub fn line(series: Vec<SeriesEntry>) -> Self {
        Self::new(ChartKind::Line, series)
    }

    #[must_use]
    pub fn donut(series: Vec<SeriesEntry>) -> Self {
        Self::new(ChartKind::Donut, series)
    }

    #[must_use]
    pub fn pie(series: Vec<SeriesEntry>) -> Self {
        Self::new(ChartKind::Pie, series)
    }

    #[must_use]
    pub fn with_height_hint(mut self, height_px: f64) -> Self {
        self.height_hint = Some(height_px);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Summary value with an attached trend sparkline, as shown on dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub title: String,
    pub value_text: String,
    #[serde(default)]
    pub trend: Vec<f64>,
}

impl SummaryCard {
    #[must_use]
    pub fn new(title: impl Into<String>, value_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value_text: value_text.into(),
            trend: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_trend(mut self, trend: Vec<f64>) -> Self {
        self.trend = trend;
        self
    }
}
