//! Debug-render protocol.
//!
//! Every simulation state carries a [`DebugFrame`]: renderable primitives
//! and free-text messages emitted by the engine. Renderables arrive either
//! as the engine's text descriptors
//!
//! ```text
//! Circle((x, y), r, (R, G, B))
//! Line((x1, y1), (x2, y2), w, (R, G, B))
//! ```
//!
//! or as single-key JSON objects `{"Circle": {...}}` / `{"Line": {...}}`.
//! A renderable that fails to decode is skipped; the rest of the frame is
//! kept.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use cutpath_core::{Color, DecodeError, Point2};

/// A world-space overlay primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Renderable {
    Circle {
        center: Point2,
        /// Meters.
        radius: f64,
        color: Color,
    },
    Segment {
        p1: Point2,
        p2: Point2,
        /// Meters.
        width: f64,
        color: Color,
    },
}

/// Annotations attached to one simulation state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DebugFrame {
    pub renderables: Vec<Renderable>,
    pub messages: Vec<String>,
}

impl DebugFrame {
    pub fn is_empty(&self) -> bool {
        self.renderables.is_empty() && self.messages.is_empty()
    }

    /// Decodes a frame leniently. Anything that is not an object decodes to
    /// an empty frame; non-string messages are stringified; bad renderables
    /// are dropped with a warning.
    pub fn decode(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        let messages = match map.get("messages") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        };

        let renderables = match map.get("renderables") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match parse_renderable(item) {
                    Ok(renderable) => Some(renderable),
                    Err(e) => {
                        warn!("Skipping debug renderable: {}", e);
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            renderables,
            messages,
        }
    }
}

/// Decodes one renderable from either wire form.
pub fn parse_renderable(value: &Value) -> Result<Renderable, DecodeError> {
    match value {
        Value::String(descriptor) => parse_descriptor(descriptor),
        Value::Object(map) if map.len() == 1 => {
            let descriptor = value.to_string();
            let Some((kind, payload)) = map.iter().next() else {
                return Err(DecodeError::UnknownRenderable { descriptor });
            };
            let malformed = |e: serde_json::Error| DecodeError::MalformedRenderable {
                descriptor: descriptor.clone(),
                reason: e.to_string(),
            };
            match kind.as_str() {
                "Circle" => {
                    let c: CirclePayload =
                        serde_json::from_value(payload.clone()).map_err(malformed)?;
                    Ok(Renderable::Circle {
                        center: c.center,
                        radius: c.radius,
                        color: Color::from(c.color),
                    })
                }
                "Line" => {
                    let l: LinePayload =
                        serde_json::from_value(payload.clone()).map_err(malformed)?;
                    Ok(Renderable::Segment {
                        p1: l.p1,
                        p2: l.p2,
                        width: l.width,
                        color: Color::from(l.color),
                    })
                }
                _ => Err(DecodeError::UnknownRenderable { descriptor }),
            }
        }
        other => Err(DecodeError::MalformedRenderable {
            descriptor: other.to_string(),
            reason: "expected a descriptor string or a single-key object".to_string(),
        }),
    }
}

#[derive(Deserialize)]
struct CirclePayload {
    center: Point2,
    radius: f64,
    color: (u8, u8, u8),
}

#[derive(Deserialize)]
struct LinePayload {
    p1: Point2,
    p2: Point2,
    width: f64,
    color: (u8, u8, u8),
}

/// Parsed descriptor argument: a number or a parenthesized tuple.
#[derive(Debug, Clone, PartialEq)]
enum Arg {
    Number(f64),
    Tuple(Vec<Arg>),
}

/// Parses the engine's text form, e.g. `Circle((0.0, 1.5), 0.2, (255, 0, 0))`.
pub fn parse_descriptor(descriptor: &str) -> Result<Renderable, DecodeError> {
    let text = descriptor.trim();
    let malformed = |reason: &str| DecodeError::MalformedRenderable {
        descriptor: descriptor.to_string(),
        reason: reason.to_string(),
    };

    let open = text.find('(').ok_or_else(|| malformed("missing argument list"))?;
    let kind = text[..open].trim();
    if kind != "Circle" && kind != "Line" {
        return Err(DecodeError::UnknownRenderable {
            descriptor: descriptor.to_string(),
        });
    }

    let mut parser = ArgParser::new(&text[open..]);
    let args = match parser.parse_tuple() {
        Some(Arg::Tuple(args)) if parser.at_end() => args,
        _ => return Err(malformed("unbalanced or invalid argument list")),
    };

    match (kind, args.as_slice()) {
        ("Circle", [center, Arg::Number(radius), color]) => Ok(Renderable::Circle {
            center: point_arg(center).ok_or_else(|| malformed("bad center"))?,
            radius: *radius,
            color: color_arg(color).ok_or_else(|| malformed("bad color"))?,
        }),
        ("Line", [p1, p2, Arg::Number(width), color]) => Ok(Renderable::Segment {
            p1: point_arg(p1).ok_or_else(|| malformed("bad start point"))?,
            p2: point_arg(p2).ok_or_else(|| malformed("bad end point"))?,
            width: *width,
            color: color_arg(color).ok_or_else(|| malformed("bad color"))?,
        }),
        _ => Err(malformed("wrong number or kind of arguments")),
    }
}

fn point_arg(arg: &Arg) -> Option<Point2> {
    match arg {
        Arg::Tuple(items) => match items.as_slice() {
            [Arg::Number(x), Arg::Number(y)] => Some(Point2::new(*x, *y)),
            _ => None,
        },
        Arg::Number(_) => None,
    }
}

fn color_arg(arg: &Arg) -> Option<Color> {
    let channel = |a: &Arg| match a {
        Arg::Number(n) if (0.0..=255.0).contains(n) => Some(n.round() as u8),
        _ => None,
    };
    match arg {
        Arg::Tuple(items) => match items.as_slice() {
            [r, g, b] => Some(Color::rgb(channel(r)?, channel(g)?, channel(b)?)),
            _ => None,
        },
        Arg::Number(_) => None,
    }
}

/// Recursive-descent parser over `( arg, arg, ... )`.
struct ArgParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> ArgParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos == self.input.len()
    }

    fn parse_arg(&mut self) -> Option<Arg> {
        self.skip_whitespace();
        if self.rest().starts_with('(') {
            self.parse_tuple()
        } else {
            self.parse_number()
        }
    }

    fn parse_tuple(&mut self) -> Option<Arg> {
        if !self.eat('(') {
            return None;
        }
        let mut items = Vec::new();
        if self.eat(')') {
            return Some(Arg::Tuple(items));
        }
        loop {
            items.push(self.parse_arg()?);
            if self.eat(',') {
                // Trailing comma, as in a one-element tuple.
                if self.eat(')') {
                    return Some(Arg::Tuple(items));
                }
                continue;
            }
            if self.eat(')') {
                return Some(Arg::Tuple(items));
            }
            return None;
        }
    }

    fn parse_number(&mut self) -> Option<Arg> {
        self.skip_whitespace();
        let len = self
            .rest()
            .find(|c: char| c == ',' || c == ')' || c == '(' || c.is_whitespace())
            .unwrap_or(self.rest().len());
        if len == 0 {
            return None;
        }
        let token = &self.rest()[..len];
        let value = token.parse::<f64>().ok()?;
        self.pos += len;
        Some(Arg::Number(value))
    }
}
