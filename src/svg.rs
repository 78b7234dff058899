//! SVG canvas backend.
//!
//! Renders editor and viewer frames into a standalone SVG document so they
//! can be inspected without a window.

use std::fmt::Write;

use cutpath_core::{Canvas, Color, ScreenPoint, ScreenSize};

/// Text height in pixels used for labels and overlay lines.
const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Approximate glyph advance relative to the font size.
const GLYPH_WIDTH: f64 = 0.6;

/// A [`Canvas`] that accumulates SVG elements.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    size: ScreenSize,
    font_size: f64,
    body: String,
}

impl SvgCanvas {
    pub fn new(size: ScreenSize) -> Self {
        Self {
            size,
            font_size: DEFAULT_FONT_SIZE,
            body: String::with_capacity(4096),
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        if font_size > 0.0 {
            self.font_size = font_size;
        }
        self
    }

    /// Completes the document.
    pub fn finish(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.2} {h:.2}" xmlns="http://www.w3.org/2000/svg">
{body}</svg>
"#,
            w = self.size.width,
            h = self.size.height,
            body = self.body
        )
    }

    /// Writes the completed document to `path`.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        std::fs::write(path, self.finish())
    }
}

fn fill(color: Color) -> String {
    if color.a == 255 {
        format!("fill:{}", color.to_hex())
    } else {
        format!(
            "fill:{};fill-opacity:{:.3}",
            color.to_hex(),
            color.a as f64 / 255.0
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// `write!` into a String cannot fail; results are discarded.
impl Canvas for SvgCanvas {
    fn fill_rect(&mut self, origin: ScreenPoint, size: ScreenSize, color: Color) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" style="{}" />"#,
            origin.x,
            origin.y,
            size.width,
            size.height,
            fill(color)
        );
    }

    fn circle(&mut self, center: ScreenPoint, radius: f64, color: Color) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" style="{}" />"#,
            center.x,
            center.y,
            radius,
            fill(color)
        );
    }

    fn segment(&mut self, from: ScreenPoint, to: ScreenPoint, width: f64, color: Color) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" style="stroke:{};stroke-width:{:.2};stroke-linecap:round" />"#,
            from.x,
            from.y,
            to.x,
            to.y,
            color.to_hex(),
            width.max(1.0)
        );
    }

    fn text(&mut self, pos: ScreenPoint, text: &str, color: Color, background: Option<Color>) {
        if let Some(bg) = background {
            let width = text.chars().count() as f64 * self.font_size * GLYPH_WIDTH;
            self.fill_rect(pos, ScreenSize::new(width, self.font_size), bg);
        }
        let _ = writeln!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-size="{:.2}" font-family="monospace" dominant-baseline="hanging" style="{}">{}</text>"#,
            pos.x,
            pos.y,
            self.font_size,
            fill(color),
            escape(text)
        );
    }

    fn sprite(&mut self, center: ScreenPoint, heading: f64, length: f64, width: f64) {
        let degrees = heading.to_degrees();
        let _ = writeln!(
            self.body,
            r#"<g transform="translate({:.2} {:.2}) rotate({:.2})">"#,
            center.x, center.y, degrees
        );
        let _ = writeln!(
            self.body,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" style="fill:#d5c4a1;stroke:#282828;stroke-width:2" />"#,
            -length / 2.0,
            -width / 2.0,
            length,
            width
        );
        // Nose marker along the local +x axis.
        let _ = writeln!(
            self.body,
            r#"  <line x1="0" y1="0" x2="{:.2}" y2="0" style="stroke:#282828;stroke-width:2" />"#,
            length / 2.0
        );
        self.body.push_str("</g>\n");
    }
}
