//! Sticker colors, faces and the cube state.
//!
//! A `State` is a flat array of 24 colors indexed by sticker slot (see
//! `geometry::STICKER_COORDS` for the slot numbering). It is a small `Copy`
//! value; every operation returns a new state.

use std::fmt;

use thiserror::Error;

use crate::geometry::STICKER_COUNT;
use crate::tables::{PermutationTables, NUM_ROTATIONS};
use crate::turn::Turn;

/// Number of stickers on each face.
pub const TILES_PER_FACE: usize = 4;

/// Sticker colors. A color's index matches the face it belongs to when solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Orange = 4,
    Blue = 5,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];

    /// Single-letter label used when rendering a state.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Blue => 'B',
        }
    }
}

/// The six faces, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front = 0,
    Left = 1,
    Upper = 2,
    Back = 3,
    Right = 4,
    Down = 5,
}

impl Side {
    pub const ALL: [Side; 6] = [
        Side::Front,
        Side::Left,
        Side::Upper,
        Side::Back,
        Side::Right,
        Side::Down,
    ];

    /// Face letter in standard cube notation.
    pub fn letter(self) -> char {
        match self {
            Side::Front => 'F',
            Side::Left => 'L',
            Side::Upper => 'U',
            Side::Back => 'B',
            Side::Right => 'R',
            Side::Down => 'D',
        }
    }

    /// The color this face shows when the cube is solved.
    pub fn color(self) -> Color {
        Color::ALL[self as usize]
    }
}

/// Tile position within a face, as seen from outside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    RightTop = 0,
    RightBottom = 1,
    LeftBottom = 2,
    LeftTop = 3,
}

/// Errors for malformed or inconsistent states.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Invalid sticker count, expected {expected} stickers but got {actual}")]
    WrongStickerCount { expected: usize, actual: usize },
    #[error("Color {color:?} appears {count} times, expected 4")]
    ColorCount { color: Color, count: usize },
}

/// An arrangement of colors on the 24 sticker slots.
///
/// Equality and hashing are structural, so two states are equal exactly when
/// every slot holds the same color. The derived ordering is lexicographic over
/// slots and is used to pick a canonical member of an equivalence class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State([Color; STICKER_COUNT]);

impl State {
    /// Creates a state from colors in slot order.
    ///
    /// Fails if `stickers` does not hold exactly 24 colors.
    pub fn new(stickers: &[Color]) -> Result<Self, StateError> {
        let stickers: [Color; STICKER_COUNT] =
            stickers.try_into().map_err(|_| StateError::WrongStickerCount {
                expected: STICKER_COUNT,
                actual: stickers.len(),
            })?;
        Ok(Self(stickers))
    }

    /// Creates a state from per-face tiles, faces in `Side::ALL` order and
    /// tiles in `Tile` order.
    pub fn from_faces(faces: [[Color; TILES_PER_FACE]; 6]) -> Self {
        Self(std::array::from_fn(|slot| {
            faces[slot / TILES_PER_FACE][slot % TILES_PER_FACE]
        }))
    }

    /// The solved state: every face filled with its own color.
    pub fn solved() -> Self {
        Self(std::array::from_fn(|slot| {
            Side::ALL[slot / TILES_PER_FACE].color()
        }))
    }

    pub fn stickers(&self) -> &[Color; STICKER_COUNT] {
        &self.0
    }

    pub fn sticker(&self, side: Side, tile: Tile) -> Color {
        self.0[side as usize * TILES_PER_FACE + tile as usize]
    }

    /// The four tiles of one face in `Tile` order.
    pub fn face(&self, side: Side) -> [Color; TILES_PER_FACE] {
        let start = side as usize * TILES_PER_FACE;
        std::array::from_fn(|tile| self.0[start + tile])
    }

    /// Returns the state after turning one face.
    #[inline]
    pub fn apply(&self, turn: Turn, tables: &PermutationTables) -> Self {
        let permutation = tables.half_turn(turn.face().axis(), turn.angle());
        Self(permutation.apply(&self.0))
    }

    /// Applies each turn in order.
    pub fn apply_all<'a>(
        &self,
        turns: impl IntoIterator<Item = &'a Turn>,
        tables: &PermutationTables,
    ) -> Self {
        turns
            .into_iter()
            .fold(*self, |state, &turn| state.apply(turn, tables))
    }

    /// All 24 reorientations of this state, in `tables::FULL_ROTATIONS` order.
    ///
    /// The first entry is always `self`.
    pub fn equivalents(&self, tables: &PermutationTables) -> [State; NUM_ROTATIONS] {
        let rotations = tables.full_rotations();
        std::array::from_fn(|index| Self(rotations[index].apply(&self.0)))
    }

    /// The smallest equivalent state. Two states are equivalent exactly when
    /// their canonical states are equal.
    pub fn canonical(&self, tables: &PermutationTables) -> Self {
        let rotations = tables.full_rotations();
        let mut smallest = *self;

        // skip the identity at index 0
        for rotation in &rotations[1..] {
            let rotated = Self(rotation.apply(&self.0));
            if rotated < smallest {
                smallest = rotated;
            }
        }

        smallest
    }

    /// Whether `other` is this state held in a different orientation.
    pub fn is_equivalent(&self, other: &State, tables: &PermutationTables) -> bool {
        self.equivalents(tables).contains(other)
    }

    /// Checks that each color appears on exactly four stickers.
    ///
    /// Construction never runs this check; callers opt in.
    pub fn verify_color_counts(&self) -> Result<(), StateError> {
        let mut counts = [0usize; Color::ALL.len()];
        for &color in &self.0 {
            counts[color as usize] += 1;
        }
        match Color::ALL
            .into_iter()
            .find(|&color| counts[color as usize] != TILES_PER_FACE)
        {
            Some(color) => Err(StateError::ColorCount {
                color,
                count: counts[color as usize],
            }),
            None => Ok(()),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::solved()
    }
}

impl From<[Color; STICKER_COUNT]> for State {
    fn from(stickers: [Color; STICKER_COUNT]) -> Self {
        Self(stickers)
    }
}

impl TryFrom<&[Color]> for State {
    type Error = StateError;

    fn try_from(stickers: &[Color]) -> Result<Self, Self::Error> {
        Self::new(stickers)
    }
}

impl TryFrom<Vec<Color>> for State {
    type Error = StateError;

    fn try_from(stickers: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(&stickers)
    }
}

/// Renders the state as a cube net:
///
/// ```text
///     U U
///     U U
/// L L F F R R B B
/// L L F F R R B B
///     D D
///     D D
/// ```
///
/// Each face is drawn as seen from outside the cube, unfolded around the front.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Tile::*;

        let row = |side: Side, tiles: [Tile; 2]| {
            let [a, b] = tiles.map(|tile| self.sticker(side, tile).letter());
            format!("{a} {b}")
        };
        // the down face's frame is upside down relative to the net
        let down_rows = [[RightBottom, LeftBottom], [RightTop, LeftTop]];

        writeln!(f, "    {}", row(Side::Upper, [LeftTop, RightTop]))?;
        writeln!(f, "    {}", row(Side::Upper, [LeftBottom, RightBottom]))?;
        for tiles in [[LeftTop, RightTop], [LeftBottom, RightBottom]] {
            let middle: Vec<String> = [Side::Left, Side::Front, Side::Right, Side::Back]
                .into_iter()
                .map(|side| row(side, tiles))
                .collect();
            writeln!(f, "{}", middle.join(" "))?;
        }
        writeln!(f, "    {}", row(Side::Down, down_rows[0]))?;
        write!(f, "    {}", row(Side::Down, down_rows[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Angle;
    use crate::turn::Face;

    use super::Color::{Blue as B, Green as G, Orange as O, Red as R, White as W, Yellow as Y};

    fn tables() -> PermutationTables {
        PermutationTables::new().unwrap()
    }

    #[test]
    fn test_solved_state_matches_face_colors() {
        let explicit = State::new(&[
            // RT, RB, LB, LT
            W, W, W, W, // FRONT
            R, R, R, R, // LEFT
            G, G, G, G, // UPPER
            Y, Y, Y, Y, // BACK
            O, O, O, O, // RIGHT
            B, B, B, B, // DOWN
        ])
        .unwrap();
        assert_eq!(explicit, State::solved());

        let mixed = State::new(&[
            W, W, W, W, // FRONT
            B, R, R, G, // LEFT
            R, G, G, G, // UPPER
            Y, Y, Y, Y, // BACK
            O, O, O, O, // RIGHT
            B, B, B, R, // DOWN
        ])
        .unwrap();
        assert_ne!(mixed, State::solved());
    }

    #[test]
    fn test_single_sticker_mismatch_is_unequal() {
        let solved = State::solved();
        for slot in 0..STICKER_COUNT {
            let mut stickers = *solved.stickers();
            stickers[slot] = if stickers[slot] == W { B } else { W };
            assert_ne!(State::from(stickers), solved, "Slot {slot} change went unnoticed");
        }
    }

    #[test]
    fn test_wrong_sticker_count_is_rejected() {
        assert_eq!(
            State::new(&[W; 23]),
            Err(StateError::WrongStickerCount {
                expected: 24,
                actual: 23
            })
        );
        assert_eq!(
            State::try_from(vec![W; 25]),
            Err(StateError::WrongStickerCount {
                expected: 24,
                actual: 25
            })
        );
        assert!(State::new(&[]).is_err());
    }

    #[test]
    fn test_from_faces_matches_slot_order() {
        let state = State::from_faces([[W; 4], [R; 4], [G; 4], [Y; 4], [O; 4], [B; 4]]);
        assert_eq!(state, State::solved());
        assert_eq!(state.face(Side::Back), [Y; 4]);
        assert_eq!(state.sticker(Side::Down, Tile::LeftTop), B);
    }

    /// Expected stickers after one turn from the solved state, faces in slot
    /// order and tiles RT, RB, LB, LT.
    fn single_turn_fixtures() -> Vec<(Face, Angle, [[Color; 4]; 6])> {
        vec![
            (
                Face::Front,
                Angle::Deg90,
                [[W, W, W, W], [B, B, R, R], [G, R, R, G], [Y, Y, Y, Y], [O, O, G, G], [B, O, O, B]],
            ),
            (
                Face::Front,
                Angle::Deg270,
                [[W, W, W, W], [G, G, R, R], [G, O, O, G], [Y, Y, Y, Y], [O, O, B, B], [B, R, R, B]],
            ),
            (
                Face::Front,
                Angle::Deg180,
                [[W, W, W, W], [O, O, R, R], [G, B, B, G], [Y, Y, Y, Y], [O, O, R, R], [B, G, G, B]],
            ),
            (
                Face::Upper,
                Angle::Deg90,
                [[O, W, W, O], [W, R, R, W], [G, G, G, G], [R, Y, Y, R], [Y, O, O, Y], [B, B, B, B]],
            ),
            (
                Face::Upper,
                Angle::Deg270,
                [[R, W, W, R], [Y, R, R, Y], [G, G, G, G], [O, Y, Y, O], [W, O, O, W], [B, B, B, B]],
            ),
            (
                Face::Upper,
                Angle::Deg180,
                [[Y, W, W, Y], [O, R, R, O], [G, G, G, G], [W, Y, Y, W], [R, O, O, R], [B, B, B, B]],
            ),
            (
                Face::Right,
                Angle::Deg90,
                [[B, B, W, W], [R, R, R, R], [W, W, G, G], [Y, Y, G, G], [O, O, O, O], [B, B, Y, Y]],
            ),
            (
                Face::Right,
                Angle::Deg270,
                [[G, G, W, W], [R, R, R, R], [Y, Y, G, G], [Y, Y, B, B], [O, O, O, O], [B, B, W, W]],
            ),
            (
                Face::Right,
                Angle::Deg180,
                [[Y, Y, W, W], [R, R, R, R], [B, B, G, G], [Y, Y, W, W], [O, O, O, O], [B, B, G, G]],
            ),
        ]
    }

    #[test]
    fn test_single_turns_from_solved() {
        let tables = tables();
        for (face, angle, faces) in single_turn_fixtures() {
            let turned = State::solved().apply(Turn::new(face, angle), &tables);
            assert_eq!(turned, State::from_faces(faces), "{face:?} {angle:?}");
        }
    }

    #[test]
    fn test_turn_then_reverse_restores_state() {
        let tables = tables();
        let scrambled = State::solved().apply_all(
            &[
                Turn::new(Face::Right, Angle::Deg90),
                Turn::new(Face::Upper, Angle::Deg270),
                Turn::new(Face::Front, Angle::Deg180),
            ],
            &tables,
        );
        for start in [State::solved(), scrambled] {
            for turn in Turn::ALL {
                let back = start.apply(turn, &tables).apply(turn.reverse(), &tables);
                assert_eq!(back, start, "{turn} did not undo");
            }
        }
    }

    #[test]
    fn test_equivalents_of_single_turns_exclude_solved() {
        let tables = tables();
        let solved = State::solved();
        for turn in Turn::ALL {
            let turned = solved.apply(turn, &tables);
            let equivalents = turned.equivalents(&tables);
            assert!(equivalents.contains(&turned));
            assert!(!equivalents.contains(&solved), "{turn} looks solved");
        }
    }

    #[test]
    fn test_equivalents_start_with_self_and_are_distinct() {
        let tables = tables();
        let solved = State::solved();
        let equivalents = solved.equivalents(&tables);
        assert_eq!(equivalents[0], solved);
        for (i, a) in equivalents.iter().enumerate() {
            for b in &equivalents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_canonical_is_shared_by_the_class() {
        let tables = tables();
        let state = State::solved().apply_all(
            &[
                Turn::new(Face::Front, Angle::Deg90),
                Turn::new(Face::Right, Angle::Deg180),
            ],
            &tables,
        );
        let canonical = state.canonical(&tables);
        for equivalent in state.equivalents(&tables) {
            assert_eq!(equivalent.canonical(&tables), canonical);
            assert!(equivalent.is_equivalent(&state, &tables));
            assert!(canonical <= equivalent);
        }
        assert!(!state.is_equivalent(&State::solved(), &tables));
    }

    #[test]
    fn test_verify_color_counts() {
        let tables = tables();
        let scrambled = State::solved().apply(Turn::new(Face::Upper, Angle::Deg90), &tables);
        assert_eq!(scrambled.verify_color_counts(), Ok(()));

        let mut stickers = *State::solved().stickers();
        stickers[0] = R;
        assert_eq!(
            State::from(stickers).verify_color_counts(),
            Err(StateError::ColorCount { color: W, count: 3 })
        );
    }

    #[test]
    fn test_display_solved_net() {
        insta::assert_snapshot!(State::solved().to_string(), @r"
            G G
            G G
        R R W W O O Y Y
        R R W W O O Y Y
            B B
            B B
        ");
    }

    #[test]
    fn test_display_front_turn_net() {
        let tables = tables();
        let turned = State::solved().apply(Turn::new(Face::Front, Angle::Deg90), &tables);
        insta::assert_snapshot!(turned.to_string(), @r"
            G G
            R R
        R B W W G O Y Y
        R B W W G O Y Y
            O O
            B B
        ");
    }
}
