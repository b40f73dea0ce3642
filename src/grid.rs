//! The 3x3 facelet grid of a single face and its rotation primitives.
//!
//! Cells are indexed `[row][col]`, row 0 at the top and column 0 at the left,
//! as seen looking straight at the face. Rotations are pure: they build a new
//! grid from the nine cells of the input and never look at neighboring faces.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::color::{Color, Face};
use crate::error::{CubeError, Result};

/// Side length of a face.
pub const DIM: usize = 3;

/// A row or column of three facelets, read left to right or top to bottom.
pub type Line = [Color; DIM];

/// Nine facelets of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceletGrid {
    cells: [[Color; DIM]; DIM],
}

impl FaceletGrid {
    pub const fn new(cells: [[Color; DIM]; DIM]) -> Self {
        Self { cells }
    }

    /// A grid with every facelet set to `color`.
    pub const fn uniform(color: Color) -> Self {
        Self {
            cells: [[color; DIM]; DIM],
        }
    }

    /// Builds a grid from caller-supplied rows, copying the cells.
    ///
    /// `face` is only used to label the error when the rows are not 3x3.
    pub fn from_rows<R: AsRef<[Color]>>(face: Face, rows: &[R]) -> Result<Self> {
        if rows.len() != DIM {
            return Err(CubeError::MalformedGrid {
                face,
                reason: format!("expected {DIM} rows, found {}", rows.len()),
            });
        }

        let mut cells = [[Color::White; DIM]; DIM];
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != DIM {
                return Err(CubeError::MalformedGrid {
                    face,
                    reason: format!(
                        "row {row_index} has {} cells, expected {DIM}",
                        row.len()
                    ),
                });
            }
            cells[row_index].copy_from_slice(row);
        }

        Ok(Self { cells })
    }

    pub const fn cells(&self) -> &[[Color; DIM]; DIM] {
        &self.cells
    }

    /// Iterates over all nine facelets in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().flatten().copied()
    }

    #[inline]
    pub fn row(&self, row: usize) -> Line {
        self.cells[row]
    }

    #[inline]
    pub fn col(&self, col: usize) -> Line {
        [self.cells[0][col], self.cells[1][col], self.cells[2][col]]
    }

    #[inline]
    pub fn set_row(&mut self, row: usize, line: Line) {
        self.cells[row] = line;
    }

    #[inline]
    pub fn set_col(&mut self, col: usize, line: Line) {
        for (row, color) in line.into_iter().enumerate() {
            self.cells[row][col] = color;
        }
    }

    /// True iff all nine facelets equal `color`.
    pub fn is_uniform(&self, color: Color) -> bool {
        self.iter().all(|cell| cell == color)
    }
}

impl Index<usize> for FaceletGrid {
    type Output = [Color; DIM];

    fn index(&self, row: usize) -> &Self::Output {
        &self.cells[row]
    }
}

impl IndexMut<usize> for FaceletGrid {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.cells[row]
    }
}

/// Prints the grid as three space-separated row groups, e.g. `WWW WGW WWW`.
impl fmt::Display for FaceletGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.iter().enumerate() {
            if row_index > 0 {
                f.write_str(" ")?;
            }
            for color in row {
                write!(f, "{color}")?;
            }
        }
        Ok(())
    }
}

/// Rotates a grid 90 degrees clockwise: `out[i][j] = in[2 - j][i]`.
pub const fn rotate_cw(grid: &FaceletGrid) -> FaceletGrid {
    let mut cells = grid.cells;
    let mut i = 0;
    while i < DIM {
        let mut j = 0;
        while j < DIM {
            cells[i][j] = grid.cells[DIM - 1 - j][i];
            j += 1;
        }
        i += 1;
    }
    FaceletGrid { cells }
}

/// Rotates a grid 90 degrees counter-clockwise: `out[i][j] = in[j][2 - i]`.
pub const fn rotate_ccw(grid: &FaceletGrid) -> FaceletGrid {
    let mut cells = grid.cells;
    let mut i = 0;
    while i < DIM {
        let mut j = 0;
        while j < DIM {
            cells[i][j] = grid.cells[j][DIM - 1 - i];
            j += 1;
        }
        i += 1;
    }
    FaceletGrid { cells }
}

/// Rotates a grid by 180 degrees, reversing both axes.
pub const fn rotate_180(grid: &FaceletGrid) -> FaceletGrid {
    let mut cells = grid.cells;
    let mut i = 0;
    while i < DIM {
        let mut j = 0;
        while j < DIM {
            cells[i][j] = grid.cells[DIM - 1 - i][DIM - 1 - j];
            j += 1;
        }
        i += 1;
    }
    FaceletGrid { cells }
}
