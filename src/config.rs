//! Solved-target configuration stored as TOML.
//!
//! ```toml
//! [target]
//! U = "white"
//! F = "green"
//! ```
//!
//! Faces left out keep their default color; the result must still give each
//! face its own color.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::color::{Color, Face};
use crate::cube::SolvedTarget;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    target: RawTarget,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
struct RawTarget {
    #[serde(rename = "U")]
    up: Option<Color>,
    #[serde(rename = "R")]
    right: Option<Color>,
    #[serde(rename = "F")]
    front: Option<Color>,
    #[serde(rename = "D")]
    down: Option<Color>,
    #[serde(rename = "L")]
    left: Option<Color>,
    #[serde(rename = "B")]
    back: Option<Color>,
}

impl RawTarget {
    fn get(&self, face: Face) -> Option<Color> {
        match face {
            Face::Up => self.up,
            Face::Right => self.right,
            Face::Front => self.front,
            Face::Down => self.down,
            Face::Left => self.left,
            Face::Back => self.back,
        }
    }
}

/// Validated configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CubeConfig {
    pub target: SolvedTarget,
}

impl CubeConfig {
    /// Parses and validates configuration text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(text).context("parse cube config")?;
        let defaults = SolvedTarget::default();
        let target =
            SolvedTarget::new(|face| raw.target.get(face).unwrap_or(defaults.color(face)))?;
        Ok(Self { target })
    }
}

/// Loads config from a TOML file.
///
/// If the file is missing, returns `CubeConfig::default()`.
pub fn load_config(path: &Path) -> Result<CubeConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(CubeConfig::default()),
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    CubeConfig::from_toml(&contents).with_context(|| format!("load {}", path.display()))
}
