pub mod bar_chart;
pub mod line_chart;
pub mod normalize;
pub mod path;
pub mod pie_chart;
pub mod primitives;
pub mod sparkline;
pub mod types;

pub use bar_chart::{BarGeometry, project_bars};
pub use line_chart::{GRIDLINE_LEVELS_PCT, LineChartGeometry, LinePoint, project_line_chart};
pub use normalize::{
    NormalizedPoint, PieNormalization, ValueRange, bar_fractions, line_positions, magnitude,
    pie_fractions, sparkline_positions,
};
pub use path::{PathCommand, polar_to_cartesian};
pub use pie_chart::{ArcSlice, PieGeometry, PieLayout, project_pie, slice_hue};
pub use primitives::{format_percentage, format_value};
pub use sparkline::{SparklineGeometry, SparklineViewBox, Trend, project_sparkline};
pub use types::{SeriesEntry, Viewport, series_values};
