//! Instruction sequence model.
//!
//! An [`InstructionSequence`] is the authored tool path: an ordered list of
//! moves and blade toggles. Order is execution order. The last element is
//! always the selected one, and only its vertices may be edited.

use std::fmt;

use crate::constants::{CURVE_DEFAULT_OFFSET, LINE_DEFAULT_OFFSET};
use crate::geometry::{CubicBezier, LineSegment, Point2};

/// Binary cutting-tool state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BladeState {
    On,
    #[default]
    Off,
}

impl BladeState {
    pub fn is_on(self) -> bool {
        self == BladeState::On
    }
}

impl From<bool> for BladeState {
    fn from(on: bool) -> Self {
        if on {
            BladeState::On
        } else {
            BladeState::Off
        }
    }
}

impl fmt::Display for BladeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BladeState::On => write!(f, "Blade ON"),
            BladeState::Off => write!(f, "Blade OFF"),
        }
    }
}

/// One element of an authored tool path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    MoveLine {
        start: Point2,
        end: Point2,
    },
    MoveCurve {
        p0: Point2,
        p1: Point2,
        p2: Point2,
        p3: Point2,
    },
    BladeOn,
    BladeOff,
}

impl Instruction {
    /// Human-readable variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Instruction::MoveLine { .. } => "Line",
            Instruction::MoveCurve { .. } => "Curve",
            Instruction::BladeOn => "Blade On",
            Instruction::BladeOff => "Blade Off",
        }
    }

    /// Where a move ends; `None` for blade markers.
    pub fn end_point(&self) -> Option<Point2> {
        match self {
            Instruction::MoveLine { end, .. } => Some(*end),
            Instruction::MoveCurve { p3, .. } => Some(*p3),
            Instruction::BladeOn | Instruction::BladeOff => None,
        }
    }

    /// Blade state set by a marker; `None` for moves.
    pub fn blade_state(&self) -> Option<BladeState> {
        match self {
            Instruction::BladeOn => Some(BladeState::On),
            Instruction::BladeOff => Some(BladeState::Off),
            Instruction::MoveLine { .. } | Instruction::MoveCurve { .. } => None,
        }
    }

    /// Vertices in index order (start/end, or p0..p3). Empty for markers.
    pub fn vertices(&self) -> Vec<Point2> {
        match self {
            Instruction::MoveLine { start, end } => vec![*start, *end],
            Instruction::MoveCurve { p0, p1, p2, p3 } => vec![*p0, *p1, *p2, *p3],
            Instruction::BladeOn | Instruction::BladeOff => Vec::new(),
        }
    }

    pub fn vertex(&self, index: usize) -> Option<Point2> {
        self.vertices().get(index).copied()
    }

    /// Replaces vertex `index`. Returns `false` (and changes nothing) when the
    /// index does not exist for this variant.
    pub fn set_vertex(&mut self, index: usize, pos: Point2) -> bool {
        let slot = match (self, index) {
            (Instruction::MoveLine { start, .. }, 0) => start,
            (Instruction::MoveLine { end, .. }, 1) => end,
            (Instruction::MoveCurve { p0, .. }, 0) => p0,
            (Instruction::MoveCurve { p1, .. }, 1) => p1,
            (Instruction::MoveCurve { p2, .. }, 2) => p2,
            (Instruction::MoveCurve { p3, .. }, 3) => p3,
            _ => return false,
        };
        *slot = pos;
        true
    }

    /// Point at parameter `t` along a move; `None` for markers.
    pub fn point_on(&self, t: f64) -> Option<Point2> {
        match self {
            Instruction::MoveLine { start, end } => Some(LineSegment::new(*start, *end).point_on(t)),
            Instruction::MoveCurve { p0, p1, p2, p3 } => {
                Some(CubicBezier::new(*p0, *p1, *p2, *p3).point_on(t))
            }
            Instruction::BladeOn | Instruction::BladeOff => None,
        }
    }

    /// Straight-line distance from first to last vertex; `None` for markers.
    pub fn chord_length(&self) -> Option<f64> {
        match self {
            Instruction::MoveLine { start, end } => Some(start.distance_to(end)),
            Instruction::MoveCurve { p0, p3, .. } => Some(p0.distance_to(p3)),
            Instruction::BladeOn | Instruction::BladeOff => None,
        }
    }
}

/// Ordered, append-mostly list of instructions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstructionSequence {
    instructions: Vec<Instruction>,
}

impl InstructionSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// The selected instruction, which is always the last one.
    pub fn selected(&self) -> Option<&Instruction> {
        self.instructions.last()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.instructions.len().checked_sub(1)
    }

    /// End of the most recent move, skipping blade markers; the origin if
    /// there is none.
    pub fn effective_end_point(&self) -> Point2 {
        self.instructions
            .iter()
            .rev()
            .find_map(Instruction::end_point)
            .unwrap_or(Point2::ORIGIN)
    }

    /// Blade state in effect before instruction `index` executes.
    pub fn blade_state_before(&self, index: usize) -> BladeState {
        let end = index.min(self.instructions.len());
        self.instructions[..end]
            .iter()
            .rev()
            .find_map(Instruction::blade_state)
            .unwrap_or_default()
    }

    /// Blade state after the whole sequence has executed.
    pub fn blade_state(&self) -> BladeState {
        self.blade_state_before(self.instructions.len())
    }

    /// Appends a straight move from the effective end point, stepping back
    /// toward the origin on each axis that is already positive.
    pub fn append_line(&mut self) {
        let end = self.effective_end_point();
        let offset = default_offset(end, LINE_DEFAULT_OFFSET);
        self.instructions.push(Instruction::MoveLine {
            start: end,
            end: end + offset,
        });
    }

    /// Appends a curve from the effective end point with a default S-like
    /// shape.
    pub fn append_curve(&mut self) {
        let end = self.effective_end_point();
        let d = default_offset(end, CURVE_DEFAULT_OFFSET);
        self.instructions.push(Instruction::MoveCurve {
            p0: end,
            p1: end + d,
            p2: end + Point2::new(d.x * 2.0, -d.y),
            p3: end + Point2::new(d.x * 4.0, 0.0),
        });
    }

    pub fn append_blade_on(&mut self) {
        self.instructions.push(Instruction::BladeOn);
    }

    pub fn append_blade_off(&mut self) {
        self.instructions.push(Instruction::BladeOff);
    }

    /// Removes the last instruction. Does nothing on an empty sequence.
    pub fn remove_last(&mut self) -> Option<Instruction> {
        self.instructions.pop()
    }

    /// Moves vertex `vertex` of the selected instruction to `pos`.
    ///
    /// Returns `false` without touching anything if the sequence is empty or
    /// the index is out of range for the selected variant.
    pub fn update_point(&mut self, vertex: usize, pos: Point2) -> bool {
        match self.instructions.last_mut() {
            Some(selected) => selected.set_vertex(vertex, pos),
            None => false,
        }
    }

    pub fn into_vec(self) -> Vec<Instruction> {
        self.instructions
    }
}

impl From<Vec<Instruction>> for InstructionSequence {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl FromIterator<Instruction> for InstructionSequence {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a InstructionSequence {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// `magnitude` on each axis, negated where `from` is already positive.
fn default_offset(from: Point2, magnitude: f64) -> Point2 {
    let dx = if from.x > 0.0 { -magnitude } else { magnitude };
    let dy = if from.y > 0.0 { -magnitude } else { magnitude };
    Point2::new(dx, dy)
}
