use tracing::debug;

use crate::core::{
    SparklineGeometry, project_bars, project_line_chart, project_pie, project_sparkline,
};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::pie_render_frame_builder::pie_layout;
use super::sparkline_render_frame_builder::sparkline_viewport;
use super::validation::{validate_request, validate_values};
use super::{ChartEngine, ChartGeometry, ChartKind, ChartRequest, SummaryCard};

impl<R: Renderer> ChartEngine<R> {
    /// Normalizes and projects `request` without styling it.
    pub fn project(&self, request: &ChartRequest) -> ChartResult<ChartGeometry> {
        validate_request(request)?;
        let viewport = self.frame_viewport(request);
        let style = self.config.style;

        let geometry = match request.kind {
            ChartKind::Bar => ChartGeometry::Bar(project_bars(&request.series)),
            ChartKind::Line => ChartGeometry::Line(project_line_chart(&request.series)),
            ChartKind::Donut => ChartGeometry::Donut(project_pie(
                &request.series,
                pie_layout(ChartKind::Donut, viewport, &style),
            )),
            ChartKind::Pie => ChartGeometry::Pie(project_pie(
                &request.series,
                pie_layout(ChartKind::Pie, viewport, &style),
            )),
        };
        Ok(geometry)
    }

    /// Builds the complete drawing for `request`.
    ///
    /// An empty series yields a frame with no primitives.
    pub fn build_render_frame(&self, request: &ChartRequest) -> ChartResult<RenderFrame> {
        let geometry = self.project(request)?;
        let viewport = self.frame_viewport(request);
        let mut frame = RenderFrame::new(viewport);

        match &geometry {
            ChartGeometry::Bar(bars) => self.append_bar_primitives(&mut frame, bars, viewport),
            ChartGeometry::Line(line) => self.append_line_primitives(&mut frame, line, viewport),
            ChartGeometry::Donut(pie) | ChartGeometry::Pie(pie) => {
                self.append_pie_primitives(&mut frame, pie);
            }
        }

        debug!(
            kind = ?request.kind,
            entries = request.series.len(),
            width = viewport.width,
            height = viewport.height,
            primitives = frame.primitive_count(),
            "built chart frame"
        );
        Ok(frame)
    }

    /// Builds frames for many requests; output order matches input order.
    #[cfg(not(feature = "parallel-projection"))]
    pub fn build_render_frames(&self, requests: &[ChartRequest]) -> ChartResult<Vec<RenderFrame>> {
        requests
            .iter()
            .map(|request| self.build_render_frame(request))
            .collect()
    }

    /// Builds frames for many requests in parallel; output order matches input order.
    #[cfg(feature = "parallel-projection")]
    pub fn build_render_frames(&self, requests: &[ChartRequest]) -> ChartResult<Vec<RenderFrame>>
    where
        R: Sync,
    {
        use rayon::prelude::*;

        requests
            .par_iter()
            .map(|request| self.build_render_frame(request))
            .collect()
    }

    /// Projects a sparkline into the style's view box.
    pub fn project_sparkline(&self, values: &[f64]) -> ChartResult<SparklineGeometry> {
        validate_values(values)?;
        Ok(project_sparkline(values, self.config.style.sparkline_view_box))
    }

    /// Builds a standalone sparkline frame sized to the view box.
    pub fn build_sparkline_frame(&self, values: &[f64]) -> ChartResult<RenderFrame> {
        let geometry = self.project_sparkline(values)?;
        let mut frame = RenderFrame::new(sparkline_viewport(&geometry));
        self.append_sparkline_primitives(&mut frame, &geometry);
        debug!(
            points = geometry.points.len(),
            trend = ?geometry.trend(),
            "built sparkline frame"
        );
        Ok(frame)
    }

    /// Builds a summary card over the configured viewport.
    pub fn build_summary_card_frame(&self, card: &SummaryCard) -> ChartResult<RenderFrame> {
        let geometry = self.project_sparkline(&card.trend)?;
        let mut frame = RenderFrame::new(self.config.viewport);
        self.append_summary_card_primitives(&mut frame, card, &geometry);
        debug!(
            title = %card.title,
            points = geometry.points.len(),
            "built summary card frame"
        );
        Ok(frame)
    }
}
