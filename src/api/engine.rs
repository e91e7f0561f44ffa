use tracing::trace;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::validation::validate_chart_style;
use super::{ChartEngineConfig, ChartRequest, ChartStyle, SummaryCard};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main facade consumed by dashboard views.
///
/// The engine only holds configuration and a renderer. Every frame is built
/// from the request passed in, so rendering a new request fully replaces the
/// previous drawing and concurrent `build_*` calls need no coordination.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        validate_viewport(config.viewport)?;
        validate_chart_style(config.style)?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        validate_viewport(viewport)?;
        self.config.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.config.style
    }

    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        self.config.style = validate_chart_style(style)?;
        Ok(())
    }

    /// Builds the frame for `request` and hands it to the renderer.
    pub fn render(&mut self, request: &ChartRequest) -> ChartResult<()> {
        let frame = self.build_render_frame(request)?;
        trace!(
            kind = ?request.kind,
            primitives = frame.primitive_count(),
            "render chart frame"
        );
        self.renderer.render(&frame)
    }

    pub fn render_sparkline(&mut self, values: &[f64]) -> ChartResult<()> {
        let frame = self.build_sparkline_frame(values)?;
        trace!(primitives = frame.primitive_count(), "render sparkline frame");
        self.renderer.render(&frame)
    }

    pub fn render_summary_card(&mut self, card: &SummaryCard) -> ChartResult<()> {
        let frame = self.build_summary_card_frame(card)?;
        trace!(primitives = frame.primitive_count(), "render summary card frame");
        self.renderer.render(&frame)
    }

    /// Renders `request` into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        request: &ChartRequest,
    ) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame(request)?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Frame size for `request`: configured width, hinted or configured height.
    pub(super) fn frame_viewport(&self, request: &ChartRequest) -> Viewport {
        let height = request
            .height_hint
            .map_or(self.config.viewport.height, |hint| hint.round() as u32);
        Viewport::new(self.config.viewport.width, height)
    }
}

fn validate_viewport(viewport: Viewport) -> ChartResult<()> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}
