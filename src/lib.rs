//! 3x3x3 Cube Simulation Library
//!
//! Models the facelets of a 3x3x3 twisty puzzle, applies layer turns to them,
//! and checks whether a move sequence brings a starting configuration to the
//! solved configuration. Finding solutions is left to external solvers.

pub mod color;
pub mod config;
pub mod cube;
pub mod error;
pub mod grid;
pub mod logging;
pub mod moves;
pub mod persistence;
pub mod verify;

pub use color::{Color, Face};
pub use cube::{is_face_solved, CubeState, SolvedTarget};
pub use error::CubeError;
pub use grid::{rotate_180, rotate_ccw, rotate_cw, FaceletGrid};
pub use moves::{apply_move, apply_moves, apply_sequence, parse_sequence, Move, Turn};
pub use verify::{scramble, verify, Verdict};
