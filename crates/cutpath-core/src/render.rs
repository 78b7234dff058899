//! Abstract 2D canvas.
//!
//! Editors and viewers describe a frame as a stream of [`DrawCommand`]s
//! against a [`Canvas`]. Backends (a window, an SVG document, a test
//! recorder) decide how to rasterize them.

use std::fmt;

use crate::input::{ScreenPoint, ScreenSize};

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb` form, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Color palette used by the editor and viewer.
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(80, 73, 69);
    pub const FOREGROUND: Color = Color::rgb(235, 219, 178);
    pub const BLADE_ON: Color = Color::rgb(251, 73, 52);
    pub const BLADE_OFF: Color = Color::rgb(138, 41, 20);
    pub const SELECTED: Color = Color::rgb(184, 167, 38);
    pub const CUT: Color = Color::rgb(58, 72, 24);
}

/// One primitive drawing operation in screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        origin: ScreenPoint,
        size: ScreenSize,
        color: Color,
    },
    Circle {
        center: ScreenPoint,
        radius: f64,
        color: Color,
    },
    Segment {
        from: ScreenPoint,
        to: ScreenPoint,
        width: f64,
        color: Color,
    },
    Text {
        pos: ScreenPoint,
        text: String,
        color: Color,
        background: Option<Color>,
    },
    /// Oriented robot marker. `heading` is in radians, clockwise on screen.
    Sprite {
        center: ScreenPoint,
        heading: f64,
        length: f64,
        width: f64,
    },
}

/// Drawing surface.
pub trait Canvas {
    fn fill_rect(&mut self, origin: ScreenPoint, size: ScreenSize, color: Color);

    fn circle(&mut self, center: ScreenPoint, radius: f64, color: Color);

    fn segment(&mut self, from: ScreenPoint, to: ScreenPoint, width: f64, color: Color);

    fn text(&mut self, pos: ScreenPoint, text: &str, color: Color, background: Option<Color>);

    fn sprite(&mut self, center: ScreenPoint, heading: f64, length: f64, width: f64);

    /// Dispatches a recorded command to the matching primitive.
    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::FillRect {
                origin,
                size,
                color,
            } => self.fill_rect(*origin, *size, *color),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => self.circle(*center, *radius, *color),
            DrawCommand::Segment {
                from,
                to,
                width,
                color,
            } => self.segment(*from, *to, *width, *color),
            DrawCommand::Text {
                pos,
                text,
                color,
                background,
            } => self.text(*pos, text, *color, *background),
            DrawCommand::Sprite {
                center,
                heading,
                length,
                width,
            } => self.sprite(*center, *heading, *length, *width),
        }
    }
}

/// A canvas that records commands in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text strings in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replays every recorded command onto another canvas.
    pub fn replay(&self, target: &mut dyn Canvas) {
        for command in &self.commands {
            target.draw(command);
        }
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, origin: ScreenPoint, size: ScreenSize, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }

    fn circle(&mut self, center: ScreenPoint, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn segment(&mut self, from: ScreenPoint, to: ScreenPoint, width: f64, color: Color) {
        self.commands.push(DrawCommand::Segment {
            from,
            to,
            width,
            color,
        });
    }

    fn text(&mut self, pos: ScreenPoint, text: &str, color: Color, background: Option<Color>) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            color,
            background,
        });
    }

    fn sprite(&mut self, center: ScreenPoint, heading: f64, length: f64, width: f64) {
        self.commands.push(DrawCommand::Sprite {
            center,
            heading,
            length,
            width,
        });
    }
}
