//! Permutation tables for face turns and whole-cube reorientations.
//!
//! Both tables are derived from `geometry::STICKER_COORDS` by rotating each
//! sticker and matching the result back to a slot. They are built once by
//! `PermutationTables::new` and only read afterwards.

use log::debug;

use crate::geometry::Angle::{Deg180, Deg270, Deg90};
use crate::geometry::Axis::{X, Y, Z};
use crate::geometry::{
    rotate, slot_of, Angle, Axis, Coord, GeometryError, RotationStep, STICKER_COORDS,
    STICKER_COUNT,
};

/// Number of whole-cube orientations.
pub const NUM_ROTATIONS: usize = 24;

/// The 24 whole-cube rotations, as sequences of axis steps.
///
/// Organized as 6 face-up choices x 4 spins around the vertical (Y) axis:
/// - Rotations 0-3: upper face stays up
/// - Rotations 4-7: tipped 90 degrees around X
/// - Rotations 8-11: tipped 180 degrees around X
/// - Rotations 12-15: tipped 270 degrees around X
/// - Rotations 16-19: tipped 90 degrees around Z
/// - Rotations 20-23: tipped 270 degrees around Z
///
/// The tip is applied first, then the spin. Rotation 0 is the identity.
pub const FULL_ROTATIONS: [&[RotationStep]; NUM_ROTATIONS] = [
    &[],
    &[(Y, Deg90)],
    &[(Y, Deg180)],
    &[(Y, Deg270)],
    &[(X, Deg90)],
    &[(X, Deg90), (Y, Deg90)],
    &[(X, Deg90), (Y, Deg180)],
    &[(X, Deg90), (Y, Deg270)],
    &[(X, Deg180)],
    &[(X, Deg180), (Y, Deg90)],
    &[(X, Deg180), (Y, Deg180)],
    &[(X, Deg180), (Y, Deg270)],
    &[(X, Deg270)],
    &[(X, Deg270), (Y, Deg90)],
    &[(X, Deg270), (Y, Deg180)],
    &[(X, Deg270), (Y, Deg270)],
    &[(Z, Deg90)],
    &[(Z, Deg90), (Y, Deg90)],
    &[(Z, Deg90), (Y, Deg180)],
    &[(Z, Deg90), (Y, Deg270)],
    &[(Z, Deg270)],
    &[(Z, Deg270), (Y, Deg90)],
    &[(Z, Deg270), (Y, Deg180)],
    &[(Z, Deg270), (Y, Deg270)],
];

/// A bijection on sticker slots.
///
/// `self.source(i)` is the slot whose sticker ends up at slot `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation([u8; STICKER_COUNT]);

impl Permutation {
    pub const IDENTITY: Self = {
        let mut mapping = [0u8; STICKER_COUNT];
        let mut slot = 0;
        while slot < STICKER_COUNT {
            mapping[slot] = slot as u8;
            slot += 1;
        }
        Self(mapping)
    };

    /// The slot whose sticker ends up at `slot`.
    #[inline]
    pub fn source(&self, slot: usize) -> usize {
        self.0[slot] as usize
    }

    /// Gathers `items` through the permutation: `result[i] = items[self[i]]`.
    #[inline]
    pub fn apply<T: Copy>(&self, items: &[T; STICKER_COUNT]) -> [T; STICKER_COUNT] {
        std::array::from_fn(|slot| items[self.source(slot)])
    }

    /// The permutation equivalent to applying `self` and then `next`.
    pub fn then(&self, next: &Permutation) -> Permutation {
        Permutation(next.apply(&self.0))
    }

    pub fn inverse(&self) -> Permutation {
        let mut mapping = [0u8; STICKER_COUNT];
        for (dest, &source) in self.0.iter().enumerate() {
            mapping[source as usize] = dest as u8;
        }
        Permutation(mapping)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Slots that receive a sticker from somewhere else.
    pub fn moved_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..STICKER_COUNT).filter(|&slot| self.source(slot) != slot)
    }
}

/// Rotates every sticker for which `moves` holds and records where it lands.
///
/// Stickers that do not move are fixed points of the result.
fn build_permutation(
    steps: &[RotationStep],
    moves: impl Fn(Coord) -> bool,
) -> Result<Permutation, GeometryError> {
    let mut mapping = [0u8; STICKER_COUNT];
    let mut filled = [false; STICKER_COUNT];

    for (source, &coord) in STICKER_COORDS.iter().enumerate() {
        let dest = if moves(coord) {
            let rotated = rotate(coord, steps);
            slot_of(rotated).ok_or(GeometryError::UnmatchedCoordinate {
                slot: source,
                rotated,
            })?
        } else {
            source
        };
        mapping[dest] = source as u8;
        filled[dest] = true;
    }

    match filled.iter().position(|&is_filled| !is_filled) {
        Some(missing) => Err(GeometryError::NotBijective { missing }),
        None => Ok(Permutation(mapping)),
    }
}

/// Builds the permutation for turning the half of the cube on the positive
/// side of `axis`.
pub fn half_turn_permutation(axis: Axis, angle: Angle) -> Result<Permutation, GeometryError> {
    build_permutation(&[(axis, angle)], |coord| axis.component(coord) > 0)
}

/// Builds the permutation for reorienting the whole cube.
pub fn full_rotation_permutation(steps: &[RotationStep]) -> Result<Permutation, GeometryError> {
    build_permutation(steps, |_| true)
}

/// Precomputed face-turn and reorientation permutations.
#[derive(Debug, Clone)]
pub struct PermutationTables {
    /// Indexed by `[axis][angle]`.
    half_turns: [[Permutation; 3]; 3],
    /// In `FULL_ROTATIONS` order.
    full_rotations: [Permutation; NUM_ROTATIONS],
}

impl PermutationTables {
    /// Derives both tables from the sticker coordinates.
    pub fn new() -> Result<Self, GeometryError> {
        let mut half_turns = [[Permutation::IDENTITY; 3]; 3];
        for axis in Axis::ALL {
            for angle in Angle::ALL {
                half_turns[axis as usize][angle as usize] = half_turn_permutation(axis, angle)?;
            }
        }

        let mut full_rotations = [Permutation::IDENTITY; NUM_ROTATIONS];
        for (slot, steps) in full_rotations.iter_mut().zip(FULL_ROTATIONS) {
            *slot = full_rotation_permutation(steps)?;
        }

        debug!(
            "Built {} half-turn and {} full-rotation permutations",
            Axis::ALL.len() * Angle::ALL.len(),
            NUM_ROTATIONS
        );

        Ok(Self {
            half_turns,
            full_rotations,
        })
    }

    #[inline]
    pub fn half_turn(&self, axis: Axis, angle: Angle) -> &Permutation {
        &self.half_turns[axis as usize][angle as usize]
    }

    #[inline]
    pub fn full_rotations(&self) -> &[Permutation; NUM_ROTATIONS] {
        &self.full_rotations
    }
}
