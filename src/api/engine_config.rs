use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::ChartStyle;

/// Public engine bootstrap configuration.
///
/// Serializable so dashboards can ship chart setup as JSON; every field except
/// the viewport is optional in the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the padding kept free around every chart.
    #[must_use]
    pub fn with_padding(mut self, padding_px: f64) -> Self {
        self.style.padding_px = padding_px;
        self
    }

    /// Sets the fixed saturation/lightness used for positional slice hues.
    #[must_use]
    pub fn with_slice_tone(mut self, saturation: f64, lightness: f64) -> Self {
        self.style.slice_saturation = saturation;
        self.style.slice_lightness = lightness;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize engine config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse engine config: {e}"))
        })
    }
}
