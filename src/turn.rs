//! Face turns and their notation.

use std::fmt;

use crate::cube::Side;
use crate::geometry::{Angle, Axis};

/// The faces that can be turned.
///
/// Front, upper and right generate every reachable configuration once
/// whole-cube reorientations are treated as equivalent; the opposite faces are
/// never turned directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Upper,
    Right,
}

impl Face {
    pub const ALL: [Face; 3] = [Face::Front, Face::Upper, Face::Right];

    /// The axis pointing out of this face.
    pub fn axis(self) -> Axis {
        match self {
            Face::Front => Axis::X,
            Face::Upper => Axis::Y,
            Face::Right => Axis::Z,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Face::Front => Side::Front,
            Face::Upper => Side::Upper,
            Face::Right => Side::Right,
        }
    }
}

/// A quarter or half turn of one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    face: Face,
    angle: Angle,
}

impl Turn {
    /// Every turn, in the order the solver generates neighbors.
    pub const ALL: [Turn; 9] = {
        let mut turns = [Turn::new(Face::Front, Angle::Deg90); 9];
        let mut i = 0;
        while i < 9 {
            turns[i] = Turn::new(Face::ALL[i / 3], Angle::ALL[i % 3]);
            i += 1;
        }
        turns
    };

    pub const fn new(face: Face, angle: Angle) -> Self {
        Self { face, angle }
    }

    pub fn face(self) -> Face {
        self.face
    }

    pub fn angle(self) -> Angle {
        self.angle
    }

    /// The turn that undoes this one.
    pub fn reverse(self) -> Self {
        Self::new(self.face, self.angle.reverse())
    }
}

/// Standard notation: `F`, `F2`, `F'`.
impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.angle {
            Angle::Deg90 => "",
            Angle::Deg180 => "2",
            Angle::Deg270 => "'",
        };
        write!(f, "{}{suffix}", self.face.side().letter())
    }
}

/// Formats a turn sequence as space-separated notation.
pub fn format_turns(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(Turn::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
