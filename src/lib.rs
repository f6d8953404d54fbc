//! Pocket Cube Solver Library
//!
//! Finds shortest face-turn sequences for the 2x2x2 cube by breadth-first
//! search, treating whole-cube reorientations of a state as the same node.
//!
//! ```no_run
//! use pocket_solver::{Face, Angle, PermutationTables, Solver, State, Turn};
//!
//! let tables = PermutationTables::new().expect("sticker geometry is consistent");
//! let scrambled = State::solved().apply(Turn::new(Face::Right, Angle::Deg90), &tables);
//! let path = Solver::new(&tables).solve(&scrambled)?;
//! assert_eq!(path, vec![Turn::new(Face::Right, Angle::Deg270)]);
//! # Ok::<(), pocket_solver::SolveError>(())
//! ```

pub mod cube;
pub mod geometry;
pub mod solver;
pub mod tables;
pub mod turn;

pub use cube::{Color, Side, State, StateError, Tile};
pub use geometry::{Angle, Axis, GeometryError};
pub use solver::{SearchProgress, SolveError, Solver};
pub use tables::{Permutation, PermutationTables};
pub use turn::{format_turns, Face, Turn};
