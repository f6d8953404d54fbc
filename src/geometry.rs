//! 3D sticker coordinates and rotation math.
//!
//! Every sticker of the 2x2x2 cube sits at a fixed integer coordinate. The
//! coordinates are doubled so that they stay integral: the component along the
//! sticker's face normal is ±2 and the two in-face components are ±1.
//!
//! Axes: +X points out of the front face, +Y out of the upper face and +Z out
//! of the right face.

use std::f64::consts::{FRAC_PI_2, PI};

use thiserror::Error;

/// A 3D coordinate of a sticker (doubled, so always integral).
pub type Coord = (i32, i32, i32);

/// Number of sticker slots on the cube.
pub const STICKER_COUNT: usize = 24;

/// Canonical sticker slot coordinates.
///
/// Slots are grouped by face (FRONT, LEFT, UPPER, BACK, RIGHT, DOWN) and
/// within a face ordered RT, RB, LB, LT as seen from outside the cube.
///
/// Ordering note: this table defines the slot numbering used by every
/// permutation and every `State`, and must stay in sync with `cube::Side`.
pub const STICKER_COORDS: [Coord; STICKER_COUNT] = [
    // FRONT (+X), right = +Z, up = +Y
    (2, 1, 1),
    (2, -1, 1),
    (2, -1, -1),
    (2, 1, -1),
    // LEFT (-Z), right = +X, up = +Y
    (1, 1, -2),
    (1, -1, -2),
    (-1, -1, -2),
    (-1, 1, -2),
    // UPPER (+Y), right = +Z, up = -X
    (-1, 2, 1),
    (1, 2, 1),
    (1, 2, -1),
    (-1, 2, -1),
    // BACK (-X), right = -Z, up = +Y
    (-2, 1, -1),
    (-2, -1, -1),
    (-2, -1, 1),
    (-2, 1, 1),
    // RIGHT (+Z), right = -X, up = +Y
    (-1, 1, 2),
    (-1, -1, 2),
    (1, -1, 2),
    (1, 1, 2),
    // DOWN (-Y), right = -Z, up = -X
    (-1, -2, -1),
    (1, -2, -1),
    (1, -2, 1),
    (-1, -2, 1),
];

/// A rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the component of `coord` along this axis.
    #[inline]
    pub fn component(self, (x, y, z): Coord) -> i32 {
        match self {
            Axis::X => x,
            Axis::Y => y,
            Axis::Z => z,
        }
    }
}

/// A rotation angle, clockwise when looking at the positive end of the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Angle {
    Deg90,
    Deg180,
    Deg270,
}

impl Angle {
    pub const ALL: [Angle; 3] = [Angle::Deg90, Angle::Deg180, Angle::Deg270];

    /// Rotation amount in radians (right-handed about the axis).
    pub fn radians(self) -> f64 {
        match self {
            Angle::Deg90 => FRAC_PI_2,
            Angle::Deg180 => PI,
            Angle::Deg270 => -FRAC_PI_2,
        }
    }

    /// The angle that undoes this one.
    pub fn reverse(self) -> Angle {
        match self {
            Angle::Deg90 => Angle::Deg270,
            Angle::Deg180 => Angle::Deg180,
            Angle::Deg270 => Angle::Deg90,
        }
    }
}

/// A single rotation step about one axis.
pub type RotationStep = (Axis, Angle);

/// Errors raised while deriving permutations from the coordinate table.
///
/// Any of these means the coordinate table or the rotation list is broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("sticker slot {slot} rotated to {rotated:?}, which is not a sticker position")]
    UnmatchedCoordinate { slot: usize, rotated: Coord },
    #[error("rotation is not a bijection, no sticker lands on slot {missing}")]
    NotBijective { missing: usize },
}

type Matrix = [[f64; 3]; 3];

fn rotation_matrix((axis, angle): RotationStep) -> Matrix {
    let (sin, cos) = angle.radians().sin_cos();
    match axis {
        Axis::X => [[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]],
        Axis::Y => [[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]],
        Axis::Z => [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]],
    }
}

/// Rotates a coordinate through each step in order.
///
/// The math runs in floating point; each component is rounded to the nearest
/// integer at the end.
pub fn rotate(coord: Coord, steps: &[RotationStep]) -> Coord {
    let mut point = [coord.0 as f64, coord.1 as f64, coord.2 as f64];
    for &step in steps {
        let matrix = rotation_matrix(step);
        point = std::array::from_fn(|row| {
            (0..3).map(|col| matrix[row][col] * point[col]).sum::<f64>()
        });
    }
    (
        point[0].round() as i32,
        point[1].round() as i32,
        point[2].round() as i32,
    )
}

/// Finds the slot index of a sticker coordinate.
pub fn slot_of(coord: Coord) -> Option<usize> {
    STICKER_COORDS.iter().position(|&candidate| candidate == coord)
}
