//! Face identifiers and facelet colors.
//!
//! Both are small `Copy` enums. Faces double as indices into the cube's
//! grid array, so `Face::index` must stay in sync with `Face::ALL`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::CubeError;

/// One of the six faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    /// All faces in canonical `U R F D L B` order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    /// Position of this face in [`Face::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Face::Up => 0,
            Face::Right => 1,
            Face::Front => 2,
            Face::Down => 3,
            Face::Left => 4,
            Face::Back => 5,
        }
    }

    /// Single-letter notation used in move tokens and state files.
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'U' => Some(Face::Up),
            'R' => Some(Face::Right),
            'F' => Some(Face::Front),
            'D' => Some(Face::Down),
            'L' => Some(Face::Left),
            'B' => Some(Face::Back),
            _ => None,
        }
    }

    /// The face across the cube, which shares no boundary with this one.
    pub const fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the six sticker colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }

    /// Parses a single color letter, accepting either case.
    pub fn from_letter(letter: char) -> Option<Color> {
        match letter.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'Y' => Some(Color::Yellow),
            'G' => Some(Color::Green),
            'B' => Some(Color::Blue),
            'R' => Some(Color::Red),
            'O' => Some(Color::Orange),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Accepts a color letter or a full English color name, case-insensitively.
impl FromStr for Color {
    type Err = CubeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let trimmed = token.trim();
        let mut chars = trimmed.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            if let Some(color) = Color::from_letter(letter) {
                return Ok(color);
            }
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "white" => Ok(Color::White),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "red" => Ok(Color::Red),
            "orange" => Ok(Color::Orange),
            _ => Err(CubeError::UnknownColor {
                token: token.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = CubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
