//! File I/O for cube states.
//!
//! Text format, one face per line, in any order:
//!
//! ```text
//! # comments and blank lines are ignored
//! U: WWW WWW WWW
//! R: RRR RRR RRR
//! F: GGG GGG GGG
//! D: YYY YYY YYY
//! L: OOO OOO OOO
//! B: BBB BBB BBB
//! ```
//!
//! Each face lists its rows top to bottom, each row left to right; the nine
//! letters may also be written as one unbroken group. Face sections can share
//! a line when separated by `/`, as in `U:WWWWWWWWW/R:RRRRRRRRR/...`. A file
//! holding a single 54-letter facelet string (`U R F D L B` order) is also
//! accepted.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::color::{Color, Face};
use crate::cube::{CubeState, FACE_SIZE};
use crate::error::{CubeError, Result};
use crate::grid::{FaceletGrid, DIM};

/// Parses the state file format.
pub fn parse_state(text: &str) -> Result<CubeState> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, strip_comment(line).trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    if lines.iter().all(|(_, line)| !line.contains(':')) {
        let joined: String = lines.iter().map(|(_, line)| *line).collect();
        return CubeState::from_facelet_string(&joined);
    }

    let sections = lines.into_iter().flat_map(|(line_number, line)| {
        line.split('/')
            .map(str::trim)
            .filter(|section| !section.is_empty())
            .map(move |section| (line_number, section))
    });

    let mut grids: [Option<FaceletGrid>; 6] = [None; 6];
    for (line_number, line) in sections {
        let (label, rows) = line
            .split_once(':')
            .ok_or_else(|| CubeError::MalformedStateFile {
                line: line_number,
                reason: "expected `<face>: <rows>`".to_string(),
            })?;

        let face = parse_face_label(label.trim()).ok_or_else(|| CubeError::MalformedStateFile {
            line: line_number,
            reason: format!("unknown face {:?}", label.trim()),
        })?;

        let mut rows = rows
            .split_whitespace()
            .map(parse_row)
            .collect::<Result<Vec<Vec<Color>>>>()?;
        if let [cells] = rows.as_slice() {
            if cells.len() == FACE_SIZE {
                rows = cells.chunks(DIM).map(<[Color]>::to_vec).collect();
            }
        }
        let grid = FaceletGrid::from_rows(face, &rows)?;

        let slot = &mut grids[face.index()];
        if slot.is_some() {
            return Err(CubeError::DuplicateFace(face));
        }
        *slot = Some(grid);
    }

    let mut faces = [FaceletGrid::uniform(Color::White); 6];
    for face in Face::ALL {
        faces[face.index()] = grids[face.index()].ok_or(CubeError::MissingFace(face))?;
    }
    Ok(CubeState::from_faces(|face| faces[face.index()]))
}

fn strip_comment(line: &str) -> &str {
    match line.split_once('#') {
        Some((content, _)) => content,
        None => line,
    }
}

fn parse_face_label(label: &str) -> Option<Face> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Face::from_letter(letter.to_ascii_uppercase()),
        _ => None,
    }
}

fn parse_row(group: &str) -> Result<Vec<Color>> {
    group
        .chars()
        .map(|symbol| {
            Color::from_letter(symbol).ok_or_else(|| CubeError::UnknownColor {
                token: symbol.to_string(),
            })
        })
        .collect()
}

/// Loads a state from a file.
pub fn load(path: &Path) -> Result<CubeState> {
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), "loading cube state");
    parse_state(&text)
}

/// Saves a state in the text format, readable by [`load`].
pub fn save(path: &Path, state: &CubeState) -> Result<()> {
    let mut file = File::create(path)?;
    write!(file, "{state}")?;
    Ok(())
}
