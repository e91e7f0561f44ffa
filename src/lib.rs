//! dash-chart: deterministic chart geometry for dashboard views.
//!
//! The crate turns already-aggregated series into declarative drawings in
//! three layers:
//!
//! - [`crate::core`] normalizes values and projects bar, line, donut/pie and
//!   sparkline geometry as pure functions.
//! - [`api`] validates requests and builds styled [`render::RenderFrame`]s.
//! - [`render`] holds the drawing primitives and renderer backends.
//!
//! Every degenerate input (empty series, all-zero values, a single entry) has
//! a defined drawing; errors are reserved for inputs such as non-finite values
//! that no drawing can represent.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartKind, ChartRequest};
pub use crate::core::SeriesEntry;
pub use error::{ChartError, ChartResult};
