use std::fmt::{self, Write};

use crate::core::{PathCommand, polar_to_cartesian};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Serializes frames into standalone SVG documents.
///
/// The last rendered document is kept until the next `render` call.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    background: Option<Color>,
    document: String,
    documents_rendered: usize,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints a full-size background rect before any frame primitive.
    pub fn with_background(mut self, color: Color) -> ChartResult<Self> {
        color.validate()?;
        self.background = Some(color);
        Ok(self)
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn documents_rendered(&self) -> usize {
        self.documents_rendered
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut document = String::new();
        write_document(&mut document, frame, self.background)
            .map_err(|err| ChartError::Serialization(format!("failed to write svg: {err}")))?;
        self.document = document;
        self.documents_rendered += 1;
        Ok(())
    }
}

/// One-shot helper returning the SVG markup of `frame`.
pub fn render_svg(frame: &RenderFrame) -> ChartResult<String> {
    let mut renderer = SvgRenderer::new();
    renderer.render(frame)?;
    Ok(renderer.into_document())
}

fn write_document(out: &mut String, frame: &RenderFrame, background: Option<Color>) -> fmt::Result {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;

    if let Some(color) = background {
        writeln!(
            out,
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"{}/>"#,
            color.to_hex(),
            opacity_attr("fill-opacity", color)
        )?;
    }

    for rect in &frame.rects {
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}"#,
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            rect.fill_color.to_hex(),
            opacity_attr("fill-opacity", rect.fill_color)
        )?;
        if rect.corner_radius > 0.0 {
            let radius = rect
                .corner_radius
                .min(rect.width * 0.5)
                .min(rect.height * 0.5);
            write!(out, r#" rx="{r}" ry="{r}""#, r = num(radius))?;
        }
        if rect.border_width > 0.0 {
            write!(
                out,
                r#" stroke="{}" stroke-width="{}""#,
                rect.border_color.to_hex(),
                num(rect.border_width)
            )?;
        }
        writeln!(out, "/>")?;
    }

    for line in &frame.lines {
        writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
            num(line.x1),
            num(line.y1),
            num(line.x2),
            num(line.y2),
            line.color.to_hex(),
            num(line.stroke_width),
            opacity_attr("stroke-opacity", line.color)
        )?;
    }

    for path in &frame.paths {
        out.push_str(r#"<path d=""#);
        write_path_data(out, &path.commands)?;
        writeln!(
            out,
            r#"" fill="{}"{}/>"#,
            path.fill_color.to_hex(),
            opacity_attr("fill-opacity", path.fill_color)
        )?;
    }

    for polyline in &frame.polylines {
        out.push_str(r#"<polyline points=""#);
        for (index, (x, y)) in polyline.points.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            write!(out, "{},{}", num(*x), num(*y))?;
        }
        writeln!(
            out,
            r#"" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round"{}/>"#,
            polyline.color.to_hex(),
            num(polyline.stroke_width),
            opacity_attr("stroke-opacity", polyline.color)
        )?;
    }

    for circle in &frame.circles {
        writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"{}/>"#,
            num(circle.center_x),
            num(circle.center_y),
            num(circle.radius),
            circle.fill_color.to_hex(),
            opacity_attr("fill-opacity", circle.fill_color)
        )?;
    }

    for text in &frame.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" font-family="sans-serif" text-anchor="{anchor}" dominant-baseline="hanging" fill="{}"{}>{}</text>"#,
            num(text.x),
            num(text.y),
            num(text.font_size_px),
            text.color.to_hex(),
            opacity_attr("fill-opacity", text.color),
            escape_xml(&text.text)
        )?;
    }

    writeln!(out, "</svg>")
}

fn write_path_data(out: &mut String, commands: &[PathCommand]) -> fmt::Result {
    for (index, command) in commands.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        match *command {
            PathCommand::MoveTo { x, y } => write!(out, "M {} {}", num(x), num(y))?,
            PathCommand::LineTo { x, y } => write!(out, "L {} {}", num(x), num(y))?,
            PathCommand::ArcTo {
                center_x,
                center_y,
                radius,
                start_angle_deg,
                sweep_angle_deg,
                large_arc,
                clockwise,
                end_x,
                end_y,
            } => {
                let sweep_flag = u8::from(clockwise);
                // Identical endpoints draw nothing in SVG, so a full turn goes
                // through the antipodal point.
                if sweep_angle_deg.abs() >= 360.0 - 1e-9 && radius > 0.0 {
                    let half = if clockwise { 180.0 } else { -180.0 };
                    let (mid_x, mid_y) =
                        polar_to_cartesian(center_x, center_y, radius, start_angle_deg + half);
                    write!(
                        out,
                        "A {r} {r} 0 0 {sweep_flag} {} {} A {r} {r} 0 0 {sweep_flag} {} {}",
                        num(mid_x),
                        num(mid_y),
                        num(end_x),
                        num(end_y),
                        r = num(radius)
                    )?;
                } else {
                    write!(
                        out,
                        "A {r} {r} 0 {} {sweep_flag} {} {}",
                        u8::from(large_arc),
                        num(end_x),
                        num(end_y),
                        r = num(radius)
                    )?;
                }
            }
            PathCommand::Close => out.push('Z'),
        }
    }
    Ok(())
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, num(color.alpha))
    }
}

/// Fixed three-decimal output with trailing zeros trimmed.
fn num(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
