//! Layer turns and move-sequence dispatch.
//!
//! Each of the six `turn_*` operators is one clockwise quarter turn of a face
//! layer, seen from outside the cube looking at that face. It rotates the
//! face's own grid and cycles the four boundary lines of the adjacent faces.
//! All four lines are captured before any is written.
//!
//! Counter-clockwise and double moves are never computed directly: they are
//! three and two applications of the same clockwise operator.
//!
//! Line notation below: `X.row(k)` reads left to right, `X.col(k)` reads top to
//! bottom, and a trailing `rev` means the line is written in reverse order.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::color::Face;
use crate::cube::CubeState;
use crate::error::{CubeError, Result};
use crate::grid::{rotate_cw, Line};

/// How far a face layer is turned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Double,
}

impl Turn {
    /// Number of clockwise quarter turns this amounts to.
    pub const fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::CounterClockwise => 3,
        }
    }

    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        }
    }
}

/// One of the 18 move tokens: a face letter with an optional `'` or `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// The move that undoes this one.
    pub const fn inverse(self) -> Move {
        Move::new(self.face, self.turn.inverse())
    }

    /// Every valid move, grouped by face.
    pub fn all() -> impl Iterator<Item = Move> {
        Face::ALL.into_iter().flat_map(|face| {
            [Turn::Clockwise, Turn::CounterClockwise, Turn::Double]
                .into_iter()
                .map(move |turn| Move::new(face, turn))
        })
    }

    /// Parses a single token, reporting `position` on failure.
    pub fn parse_at(token: &str, position: usize) -> Result<Move> {
        let mut chars = token.chars();
        let face = chars.next().and_then(Face::from_letter);
        let turn = match (chars.next(), chars.next()) {
            (None, _) => Some(Turn::Clockwise),
            (Some('\''), None) => Some(Turn::CounterClockwise),
            (Some('2'), None) => Some(Turn::Double),
            _ => None,
        };

        match (face, turn) {
            (Some(face), Some(turn)) => Ok(Move::new(face, turn)),
            _ => Err(CubeError::UnrecognizedToken {
                token: token.to_string(),
                position,
            }),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(token: &str) -> Result<Self> {
        Move::parse_at(token, 0)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

/// Parses a whitespace-separated move sequence.
///
/// Fails on the first token outside the alphabet. Blank input is an empty
/// sequence.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| Move::parse_at(token, position))
        .collect()
}

/// Joins moves back into canonical notation.
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The sequence that undoes `moves`: reversed, each move inverted.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

/// Up: `F.row0 -> L.row0 -> B.row0 -> R.row0 -> F.row0`.
pub fn turn_u(state: &mut CubeState) {
    state[Face::Up] = rotate_cw(&state[Face::Up]);

    let front = state[Face::Front].row(0);
    let left = state[Face::Left].row(0);
    let back = state[Face::Back].row(0);
    let right = state[Face::Right].row(0);

    state[Face::Left].set_row(0, front);
    state[Face::Back].set_row(0, left);
    state[Face::Right].set_row(0, back);
    state[Face::Front].set_row(0, right);
}

/// Down: `F.row2 -> R.row2 -> B.row2 -> L.row2 -> F.row2`.
pub fn turn_d(state: &mut CubeState) {
    state[Face::Down] = rotate_cw(&state[Face::Down]);

    let front = state[Face::Front].row(2);
    let right = state[Face::Right].row(2);
    let back = state[Face::Back].row(2);
    let left = state[Face::Left].row(2);

    state[Face::Right].set_row(2, front);
    state[Face::Back].set_row(2, right);
    state[Face::Left].set_row(2, back);
    state[Face::Front].set_row(2, left);
}

/// Front: `U.row2 -> R.col0`, `R.col0 -> D.row0 rev`, `D.row0 -> L.col2`,
/// `L.col2 -> U.row2 rev`.
pub fn turn_f(state: &mut CubeState) {
    state[Face::Front] = rotate_cw(&state[Face::Front]);

    let up = state[Face::Up].row(2);
    let right = state[Face::Right].col(0);
    let down = state[Face::Down].row(0);
    let left = state[Face::Left].col(2);

    state[Face::Right].set_col(0, up);
    state[Face::Down].set_row(0, reversed(right));
    state[Face::Left].set_col(2, down);
    state[Face::Up].set_row(2, reversed(left));
}

/// Back: `U.row0 -> L.col0 rev`, `L.col0 -> D.row2`, `D.row2 -> R.col2 rev`,
/// `R.col2 -> U.row0`.
pub fn turn_b(state: &mut CubeState) {
    state[Face::Back] = rotate_cw(&state[Face::Back]);

    let up = state[Face::Up].row(0);
    let left = state[Face::Left].col(0);
    let down = state[Face::Down].row(2);
    let right = state[Face::Right].col(2);

    state[Face::Left].set_col(0, reversed(up));
    state[Face::Down].set_row(2, left);
    state[Face::Right].set_col(2, reversed(down));
    state[Face::Up].set_row(0, right);
}

/// Right: `U.col2 -> B.col0 rev`, `B.col0 -> D.col2 rev`, `D.col2 -> F.col2`,
/// `F.col2 -> U.col2`.
pub fn turn_r(state: &mut CubeState) {
    state[Face::Right] = rotate_cw(&state[Face::Right]);

    let up = state[Face::Up].col(2);
    let back = state[Face::Back].col(0);
    let down = state[Face::Down].col(2);
    let front = state[Face::Front].col(2);

    state[Face::Back].set_col(0, reversed(up));
    state[Face::Down].set_col(2, reversed(back));
    state[Face::Front].set_col(2, down);
    state[Face::Up].set_col(2, front);
}

/// Left: `U.col0 -> F.col0`, `F.col0 -> D.col0`, `D.col0 -> B.col2 rev`,
/// `B.col2 -> U.col0 rev`.
pub fn turn_l(state: &mut CubeState) {
    state[Face::Left] = rotate_cw(&state[Face::Left]);

    let up = state[Face::Up].col(0);
    let front = state[Face::Front].col(0);
    let down = state[Face::Down].col(0);
    let back = state[Face::Back].col(2);

    state[Face::Front].set_col(0, up);
    state[Face::Down].set_col(0, front);
    state[Face::Back].set_col(2, reversed(down));
    state[Face::Up].set_col(0, reversed(back));
}

#[inline]
fn reversed(mut line: Line) -> Line {
    line.reverse();
    line
}

/// The clockwise quarter-turn operator for `face`.
pub fn operator(face: Face) -> fn(&mut CubeState) {
    match face {
        Face::Up => turn_u,
        Face::Down => turn_d,
        Face::Front => turn_f,
        Face::Back => turn_b,
        Face::Left => turn_l,
        Face::Right => turn_r,
    }
}

/// Applies one move by repeating its face's clockwise operator.
pub fn apply_move(state: &mut CubeState, mv: Move) {
    let turn = operator(mv.face);
    for _ in 0..mv.turn.quarter_turns() {
        turn(state);
    }
}

/// Applies already-parsed moves in order.
pub fn apply_moves(state: &mut CubeState, moves: &[Move]) {
    for &mv in moves {
        apply_move(state, mv);
    }
}

/// Parses and applies a whitespace-separated sequence, left to right.
///
/// Tokens are applied as they are parsed. If a token is unrecognized the
/// error names it and its position, and `state` is left exactly as it was
/// after the last valid token before it. Returns the number of moves applied.
pub fn apply_sequence(state: &mut CubeState, text: &str) -> Result<usize> {
    let mut applied = 0;
    for (position, token) in text.split_whitespace().enumerate() {
        let mv = match Move::parse_at(token, position) {
            Ok(mv) => mv,
            Err(err) => {
                warn!(token, position, applied, "rejecting move sequence");
                return Err(err);
            }
        };
        debug!(%mv, position, "applying move");
        apply_move(state, mv);
        applied += 1;
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::cube::SolvedTarget;
    use crate::grid::FaceletGrid;
    use proptest::prelude::*;

    /// Colors vary by face and cell so a misplaced line shows up as a diff.
    fn patterned_state() -> CubeState {
        CubeState::from_faces(|face| {
            let offset = face.index();
            let mut grid = FaceletGrid::uniform(Color::White);
            for row in 0..3 {
                for col in 0..3 {
                    grid[row][col] = Color::ALL[(offset + row * 3 + col) % 6];
                }
            }
            grid
        })
    }

    fn arb_state() -> impl Strategy<Value = CubeState> {
        prop::collection::vec(prop::sample::select(Color::ALL.to_vec()), 54).prop_map(|colors| {
            let text: String = colors.into_iter().map(Color::letter).collect();
            CubeState::from_facelet_string(&text).unwrap()
        })
    }

    fn arb_moves() -> impl Strategy<Value = Vec<Move>> {
        prop::collection::vec(prop::sample::select(Move::all().collect::<Vec<_>>()), 0..40)
    }

    #[test]
    fn test_parses_all_eighteen_tokens() {
        let tokens = "U U' U2 R R' R2 F F' F2 D D' D2 L L' L2 B B' B2";
        let moves = parse_sequence(tokens).unwrap();
        assert_eq!(moves.len(), 18);
        assert_eq!(format_sequence(&moves), tokens);

        let mut all: Vec<Move> = Move::all().collect();
        all.sort_by_key(|mv| (mv.face, mv.turn.quarter_turns()));
        all.dedup();
        assert_eq!(all.len(), 18);
    }

    #[test]
    fn test_rejects_tokens_outside_alphabet() {
        for token in ["X", "u", "U3", "U''", "R2'", "M", "'", "2"] {
            let err = token.parse::<Move>().unwrap_err();
            assert!(
                matches!(err, CubeError::UnrecognizedToken { .. }),
                "Token {token:?} produced {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_sequence_reports_position() {
        let err = parse_sequence("R U  Q D").unwrap_err();
        match err {
            CubeError::UnrecognizedToken { token, position } => {
                assert_eq!(token, "Q");
                assert_eq!(position, 2);
            }
            other => panic!("Unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_blank_sequence_is_empty() {
        assert!(parse_sequence("  \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_apply_sequence_stops_at_bad_token() {
        let mut state = patterned_state();
        let err = apply_sequence(&mut state, "R U bogus F").unwrap_err();
        assert!(matches!(
            err,
            CubeError::UnrecognizedToken { position: 2, .. }
        ));

        let mut expected = patterned_state();
        turn_r(&mut expected);
        turn_u(&mut expected);
        assert_eq!(state, expected, "State must reflect tokens before the bad one");
    }

    #[test]
    fn test_apply_sequence_counts_moves() {
        let mut state = patterned_state();
        assert_eq!(apply_sequence(&mut state, "R U R' U'").unwrap(), 4);
    }

    #[test]
    fn test_every_operator_has_order_four() {
        for face in Face::ALL {
            let start = patterned_state();
            let mut state = start.clone();
            for quarter in 1..=4 {
                operator(face)(&mut state);
                if quarter < 4 {
                    assert_ne!(state, start, "{face} x{quarter} should change the state");
                }
            }
            assert_eq!(state, start, "{face} x4 must be identity");
        }
    }

    #[test]
    fn test_prime_undoes_clockwise() {
        for face in Face::ALL {
            let start = patterned_state();
            let mut state = start.clone();
            apply_move(&mut state, Move::new(face, Turn::Clockwise));
            apply_move(&mut state, Move::new(face, Turn::CounterClockwise));
            assert_eq!(state, start, "{face} then {face}' must be identity");
        }
    }

    #[test]
    fn test_double_twice_is_identity() {
        for face in Face::ALL {
            let start = patterned_state();
            let mut state = start.clone();
            let double = Move::new(face, Turn::Double);
            apply_move(&mut state, double);
            assert_ne!(state, start);
            apply_move(&mut state, double);
            assert_eq!(state, start, "{face}2 {face}2 must be identity");
        }
    }

    #[test]
    fn test_turn_never_touches_opposite_face() {
        for face in Face::ALL {
            let start = patterned_state();
            let mut state = start.clone();
            operator(face)(&mut state);
            assert_eq!(
                state[face.opposite()],
                start[face.opposite()],
                "{face} turn changed the opposite face"
            );
        }
    }

    #[test]
    fn test_turn_u_cycles_top_rows() {
        let start = patterned_state();
        let mut state = start.clone();
        turn_u(&mut state);
        assert_eq!(state[Face::Left].row(0), start[Face::Front].row(0));
        assert_eq!(state[Face::Back].row(0), start[Face::Left].row(0));
        assert_eq!(state[Face::Right].row(0), start[Face::Back].row(0));
        assert_eq!(state[Face::Front].row(0), start[Face::Right].row(0));
        assert_eq!(state[Face::Front].row(1), start[Face::Front].row(1));
    }

    #[test]
    fn test_turn_f_index_mapping() {
        let start = patterned_state();
        let mut state = start.clone();
        turn_f(&mut state);
        for i in 0..3 {
            assert_eq!(state[Face::Right][i][0], start[Face::Up][2][i]);
            assert_eq!(state[Face::Down][0][2 - i], start[Face::Right][i][0]);
            assert_eq!(state[Face::Left][i][2], start[Face::Down][0][i]);
            assert_eq!(state[Face::Up][2][2 - i], start[Face::Left][i][2]);
        }
    }

    #[test]
    fn test_turn_b_index_mapping() {
        let start = patterned_state();
        let mut state = start.clone();
        turn_b(&mut state);
        for i in 0..3 {
            assert_eq!(state[Face::Left][2 - i][0], start[Face::Up][0][i]);
            assert_eq!(state[Face::Down][2][i], start[Face::Left][i][0]);
            assert_eq!(state[Face::Right][2 - i][2], start[Face::Down][2][i]);
            assert_eq!(state[Face::Up][0][i], start[Face::Right][i][2]);
        }
    }

    #[test]
    fn test_turn_r_and_l_use_reflected_back_columns() {
        let start = patterned_state();

        let mut state = start.clone();
        turn_r(&mut state);
        for i in 0..3 {
            assert_eq!(state[Face::Back][2 - i][0], start[Face::Up][i][2]);
            assert_eq!(state[Face::Down][2 - i][2], start[Face::Back][i][0]);
            assert_eq!(state[Face::Front][i][2], start[Face::Down][i][2]);
            assert_eq!(state[Face::Up][i][2], start[Face::Front][i][2]);
        }

        let mut state = start.clone();
        turn_l(&mut state);
        for i in 0..3 {
            assert_eq!(state[Face::Front][i][0], start[Face::Up][i][0]);
            assert_eq!(state[Face::Down][i][0], start[Face::Front][i][0]);
            assert_eq!(state[Face::Back][2 - i][2], start[Face::Down][i][0]);
            assert_eq!(state[Face::Up][2 - i][0], start[Face::Back][i][2]);
        }
    }

    #[test]
    fn test_u_then_u_cubed_from_solved_is_solved() {
        let target = SolvedTarget::default();
        let mut state = CubeState::solved(&target);
        apply_sequence(&mut state, "U").unwrap();
        assert!(!state.is_solved(&target));
        apply_sequence(&mut state, "U U U").unwrap();
        assert!(state.is_solved(&target));
    }

    #[test]
    fn test_sexy_move_has_order_six() {
        let target = SolvedTarget::default();
        let mut state = CubeState::solved(&target);
        for repetition in 1..=6 {
            apply_sequence(&mut state, "R U R' U'").unwrap();
            assert_eq!(
                state.is_solved(&target),
                repetition == 6,
                "Unexpected verdict after {repetition} repetitions"
            );
        }
    }

    #[test]
    fn test_adjacent_commutator_order() {
        // R U as a single element has order 105 on a physical cube.
        let target = SolvedTarget::default();
        let mut state = CubeState::solved(&target);
        let moves = parse_sequence("R U").unwrap();
        let mut order = 0;
        loop {
            apply_moves(&mut state, &moves);
            order += 1;
            if state.is_solved(&target) {
                break;
            }
        }
        assert_eq!(order, 105);
    }

    #[test]
    fn test_invert_sequence() {
        let moves = parse_sequence("R U2 F'").unwrap();
        assert_eq!(format_sequence(&invert_sequence(&moves)), "F U2 R'");
    }

    proptest! {
        #[test]
        fn any_operator_four_times_is_identity(start in arb_state(), face_index in 0usize..6) {
            let face = Face::ALL[face_index];
            let mut state = start.clone();
            for _ in 0..4 {
                operator(face)(&mut state);
            }
            prop_assert_eq!(state, start);
        }

        #[test]
        fn moves_conserve_colors(start in arb_state(), moves in arb_moves()) {
            let mut state = start.clone();
            apply_moves(&mut state, &moves);
            prop_assert_eq!(state.color_counts(), start.color_counts());
        }

        #[test]
        fn sequence_then_inverse_is_identity(start in arb_state(), moves in arb_moves()) {
            let mut state = start.clone();
            apply_moves(&mut state, &moves);
            apply_moves(&mut state, &invert_sequence(&moves));
            prop_assert_eq!(state, start);
        }

        #[test]
        fn formatted_sequence_parses_back(moves in arb_moves()) {
            prop_assert_eq!(parse_sequence(&format_sequence(&moves)).unwrap(), moves);
        }
    }
}
