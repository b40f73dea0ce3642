//! End-to-end pipeline: copy a starting state, apply a solution, judge it.

use tracing::info;

use crate::cube::{CubeState, SolvedTarget};
use crate::error::{CubeError, Result};
use crate::moves::{apply_moves, apply_sequence, parse_sequence};

/// Outcome of applying a solution to a starting state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub final_state: CubeState,
    pub solved: bool,
    pub moves_applied: usize,
}

/// Applies `solution` to a copy of `initial` and checks it against `target`.
///
/// The caller's state is never touched. An unrecognized token aborts the
/// whole verification with no verdict.
pub fn verify(initial: &CubeState, solution: &str, target: &SolvedTarget) -> Result<Verdict> {
    let mut state = initial.clone();
    let moves_applied = apply_sequence(&mut state, solution)?;
    let solved = state.is_solved(target);
    info!(moves_applied, solved, "verified move sequence");

    Ok(Verdict {
        final_state: state,
        solved,
        moves_applied,
    })
}

/// Applies a scramble to the solved state for `target`.
///
/// Unlike a solution, a scramble must contain at least one move, and it is
/// parsed completely before anything is applied.
pub fn scramble(text: &str, target: &SolvedTarget) -> Result<CubeState> {
    let moves = parse_sequence(text)?;
    if moves.is_empty() {
        return Err(CubeError::EmptySequence);
    }

    let mut state = CubeState::solved(target);
    apply_moves(&mut state, &moves);
    Ok(state)
}
