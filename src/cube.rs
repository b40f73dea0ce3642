//! The facelet state store: six grids, one per face.
//!
//! A `CubeState` is built once from caller data (always copied), mutated in
//! place by the layer turns in [`crate::moves`], and queried for solvedness
//! against a [`SolvedTarget`].
//!
//! Orientation convention: every face is stored as seen looking straight at
//! it, except that the Back face's columns are stored pre-reflected relative
//! to Front, Left and Right. The boundary tables in `moves` depend on this.

use std::fmt;
use std::ops::{Index, IndexMut};

use rustc_hash::FxHashMap;

use crate::color::{Color, Face};
use crate::error::{CubeError, Result};
use crate::grid::{FaceletGrid, DIM};

/// Number of facelets on a face.
pub const FACE_SIZE: usize = DIM * DIM;

/// Number of facelets on the whole cube.
pub const FACELET_COUNT: usize = FACE_SIZE * 6;

/// The color each face must show when the cube is solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolvedTarget {
    colors: [Color; 6],
}

impl SolvedTarget {
    /// Builds a target from a face -> color lookup.
    ///
    /// Fails unless the six faces receive six distinct colors.
    pub fn new(color_of: impl Fn(Face) -> Color) -> Result<Self> {
        let colors = Face::ALL.map(&color_of);
        for (i, color) in colors.iter().enumerate() {
            if let Some(other) = colors[..i].iter().position(|c| c == color) {
                return Err(CubeError::InvalidTarget {
                    reason: format!(
                        "faces {} and {} both map to {color}",
                        Face::ALL[other],
                        Face::ALL[i]
                    ),
                });
            }
        }
        Ok(Self { colors })
    }

    #[inline]
    pub fn color(&self, face: Face) -> Color {
        self.colors[face.index()]
    }

    /// The face whose target is `color`.
    pub fn face_of(&self, color: Color) -> Option<Face> {
        Face::ALL.into_iter().find(|&face| self.color(face) == color)
    }
}

/// White up, green front, red right, blue back, orange left, yellow down.
impl Default for SolvedTarget {
    fn default() -> Self {
        let mut colors = [Color::White; 6];
        colors[Face::Up.index()] = Color::White;
        colors[Face::Right.index()] = Color::Red;
        colors[Face::Front.index()] = Color::Green;
        colors[Face::Down.index()] = Color::Yellow;
        colors[Face::Left.index()] = Color::Orange;
        colors[Face::Back.index()] = Color::Blue;
        Self { colors }
    }
}

/// True iff all nine cells of `grid` equal `color`.
#[inline]
pub fn is_face_solved(grid: &FaceletGrid, color: Color) -> bool {
    grid.is_uniform(color)
}

/// Six facelet grids indexed by [`Face`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [FaceletGrid; 6],
}

impl CubeState {
    /// Builds a state from one grid per face, copying each grid.
    pub fn from_faces(grid_of: impl Fn(Face) -> FaceletGrid) -> Self {
        Self {
            faces: Face::ALL.map(grid_of),
        }
    }

    /// The solved configuration for `target`.
    pub fn solved(target: &SolvedTarget) -> Self {
        Self::from_faces(|face| FaceletGrid::uniform(target.color(face)))
    }

    /// Parses 54 color letters laid out face by face in `U R F D L B` order,
    /// each face row-major. Whitespace is ignored.
    pub fn from_facelet_string(text: &str) -> Result<Self> {
        let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != FACELET_COUNT {
            return Err(CubeError::MalformedFaceletString {
                reason: format!(
                    "expected {FACELET_COUNT} facelets, found {}",
                    symbols.len()
                ),
            });
        }

        let mut faces = [FaceletGrid::uniform(Color::White); 6];
        for (position, &symbol) in symbols.iter().enumerate() {
            let color = Color::from_letter(symbol).ok_or_else(|| CubeError::UnknownColor {
                token: symbol.to_string(),
            })?;
            let cell = position % FACE_SIZE;
            faces[position / FACE_SIZE][cell / DIM][cell % DIM] = color;
        }

        Ok(Self { faces })
    }

    /// Inverse of [`CubeState::from_facelet_string`], without whitespace.
    pub fn to_facelet_string(&self) -> String {
        self.faces
            .iter()
            .flat_map(FaceletGrid::iter)
            .map(Color::letter)
            .collect()
    }

    pub fn face(&self, face: Face) -> &FaceletGrid {
        &self.faces[face.index()]
    }

    pub fn face_mut(&mut self, face: Face) -> &mut FaceletGrid {
        &mut self.faces[face.index()]
    }

    /// Iterates over `(face, grid)` pairs in canonical face order.
    pub fn faces(&self) -> impl Iterator<Item = (Face, &FaceletGrid)> {
        Face::ALL.into_iter().zip(self.faces.iter())
    }

    pub fn is_solved(&self, target: &SolvedTarget) -> bool {
        self.faces()
            .all(|(face, grid)| is_face_solved(grid, target.color(face)))
    }

    /// Counts facelets per color across all six faces.
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for color in self.faces.iter().flat_map(FaceletGrid::iter) {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }
}

impl Index<Face> for CubeState {
    type Output = FaceletGrid;

    fn index(&self, face: Face) -> &Self::Output {
        self.face(face)
    }
}

impl IndexMut<Face> for CubeState {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        self.face_mut(face)
    }
}

/// One line per face, `X: rrr rrr rrr`, in canonical face order.
///
/// This is also the state file format read by [`crate::persistence`].
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (face, grid) in self.faces() {
            writeln!(f, "{face}: {grid}")?;
        }
        Ok(())
    }
}
