//! Error types for parsing, construction and move application.

use thiserror::Error;

use crate::color::Face;

/// Everything that can go wrong between raw input and a verdict.
///
/// Layer turns themselves never fail; every variant here comes from
/// rejecting malformed input before it reaches the move engine.
#[derive(Debug, Error)]
pub enum CubeError {
    /// A move token outside the 18-symbol alphabet.
    #[error("unrecognized move token {token:?} at position {position}")]
    UnrecognizedToken { token: String, position: usize },

    /// A scramble was requested with no moves in it.
    #[error("move sequence is empty")]
    EmptySequence,

    /// A face grid that is not exactly 3x3.
    #[error("malformed grid for face {face}: {reason}")]
    MalformedGrid { face: Face, reason: String },

    /// A color symbol outside the six-color alphabet.
    #[error("unknown color {token:?}")]
    UnknownColor { token: String },

    /// A facelet string that is not 54 color letters.
    #[error("malformed facelet string: {reason}")]
    MalformedFaceletString { reason: String },

    #[error("line {line}: {reason}")]
    MalformedStateFile { line: usize, reason: String },

    #[error("face {0} is missing from the state")]
    MissingFace(Face),

    #[error("face {0} appears more than once")]
    DuplicateFace(Face),

    /// A solved target that does not give each face its own color.
    #[error("invalid solved target: {reason}")]
    InvalidTarget { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CubeError>;
