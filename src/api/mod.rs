//! Engine facade: request validation, dispatch and frame building.

mod bar_render_frame_builder;
mod chart_geometry;
mod chart_request;
mod engine;
mod engine_config;
mod json_contract;
mod line_render_frame_builder;
mod pie_render_frame_builder;
mod render_frame_builder;
mod render_style;
mod sparkline_render_frame_builder;
mod validation;

pub use chart_geometry::ChartGeometry;
pub use chart_request::{ChartKind, ChartRequest, SummaryCard};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use json_contract::{CHART_GEOMETRY_JSON_SCHEMA_V1, ChartGeometryJsonContractV1};
pub use pie_render_frame_builder::{LegendEntry, pie_legend, slice_color};
pub use render_style::ChartStyle;
pub use sparkline_render_frame_builder::trend_color;
pub use validation::MAX_HEIGHT_HINT_PX;
