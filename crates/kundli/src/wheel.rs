//! Stateful wheel component.
//!
//! Holds the current chart, style override and container width. Any change
//! to one of them throws the previous drawing away and composes a new one.

use crate::chart::{Chart, ChartStyle, Planet};
use crate::error::Result;
use crate::rendering::{render_svg, ChartSpec, PlanetGlyph, VisualConfig, WheelCompositor};

pub const DEFAULT_WIDTH: f32 = 500.0;

pub struct ChartWheel {
    compositor: WheelCompositor,
    chart: Option<Chart>,
    style: Option<ChartStyle>,
    width: f32,
    drawing: Option<ChartSpec>,
}

impl Default for ChartWheel {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl ChartWheel {
    pub fn new(width: f32) -> Self {
        Self::with_config(width, VisualConfig::default())
    }

    pub fn with_config(width: f32, visual_config: VisualConfig) -> Self {
        Self {
            compositor: WheelCompositor::with_config(visual_config),
            chart: None,
            style: None,
            width,
            drawing: None,
        }
    }

    pub fn set_chart(&mut self, chart: Chart) -> Result<()> {
        self.chart = Some(chart);
        self.redraw()
    }

    /// Draw with `style` instead of the chart's own; `None` restores it.
    pub fn set_style(&mut self, style: Option<ChartStyle>) -> Result<()> {
        self.style = style;
        self.redraw()
    }

    /// New measured container width.
    pub fn resize(&mut self, width: f32) -> Result<()> {
        self.width = width;
        self.redraw()
    }

    pub fn clear(&mut self) {
        self.chart = None;
        self.drawing = None;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Style the current drawing uses.
    pub fn effective_style(&self) -> Option<ChartStyle> {
        self.chart
            .as_ref()
            .map(|chart| self.style.unwrap_or(chart.style))
    }

    pub fn drawing(&self) -> Option<&ChartSpec> {
        self.drawing.as_ref()
    }

    pub fn glyph(&self, planet: Planet) -> Option<&PlanetGlyph> {
        self.drawing.as_ref()?.glyph(planet)
    }

    /// Mutable access for hover/focus handling. Glyph state lives in the
    /// current drawing and is lost on the next redraw.
    pub fn glyph_mut(&mut self, planet: Planet) -> Option<&mut PlanetGlyph> {
        self.drawing.as_mut()?.glyph_mut(planet)
    }

    pub fn to_svg(&self) -> Option<String> {
        self.drawing.as_ref().map(render_svg)
    }

    fn redraw(&mut self) -> Result<()> {
        // Drop the old drawing first so a failed rebuild never leaves a
        // stale wheel behind.
        self.drawing = None;
        let Some(chart) = &self.chart else {
            return Ok(());
        };

        let drawing = match self.style {
            Some(style) if style != chart.style => {
                self.compositor.generate(&chart.with_style(style), self.width)?
            }
            _ => self.compositor.generate(chart, self.width)?,
        };
        self.drawing = Some(drawing);
        Ok(())
    }
}
