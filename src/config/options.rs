// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use super::consts::*;

/// Regular season or playoff game. Supplied by the caller, never parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum GameType {
    #[default]
    Regular,
    Playoff,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameType::Regular => f.write_str("Regular"),
            GameType::Playoff => f.write_str("Playoff"),
        }
    }
}

impl FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(GameType::Regular),
            "playoff" | "playoffs" => Ok(GameType::Playoff),
            other => Err(format!("Unknown game type: {other} (use Regular or Playoff)")),
        }
    }
}

/// Per-run metadata stamped onto every record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub session: String,
    pub game_type: GameType,
    pub rank: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            session: s!(DEFAULT_SESSION),
            game_type: GameType::Regular,
            rank: s!(DEFAULT_RANK),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    /// Machine-readable, comma separated
    Csv,
    /// Human-readable, pipe separated
    Pipe,
}

impl Delim {
    pub fn byte(self) -> u8 {
        match self {
            Delim::Csv => b',',
            Delim::Pipe => b'|',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// `None` prints the human-readable report to stdout.
    pub out_dir: Option<PathBuf>,
    pub include_headers: bool,
    pub format: Delim,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: None,
            include_headers: false,
            format: Delim::Csv,
        }
    }
}

/// Roster file locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterPaths {
    pub skaters: PathBuf,
    pub goalies: PathBuf,
}

impl Default for RosterPaths {
    fn default() -> Self {
        let dir = PathBuf::from(DEFAULT_ROSTER_DIR);
        Self {
            skaters: dir.join(SKATERS_FILE),
            goalies: dir.join(GOALIES_FILE),
        }
    }
}
