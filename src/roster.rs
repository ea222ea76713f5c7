// src/roster.rs
// Name-fragment lookup tables for the team's skaters and goalies.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::config::options::RosterPaths;
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerKind {
    Skater,
    Goalie,
}

impl PlayerKind {
    pub fn label(self) -> &'static str {
        match self {
            PlayerKind::Skater => "skater",
            PlayerKind::Goalie => "goalie",
        }
    }
}

/// Read-only fragment → canonical id tables.
///
/// Fragments are written the way the recap author writes them ("Smitty",
/// "J. Smith"); many fragments may point at one id. Matching is
/// case-sensitive, same as the author's capitalised names.
#[derive(Clone, Debug, Default)]
pub struct RosterIndex {
    skaters: BTreeMap<String, String>,
    goalies: BTreeMap<String, String>,
}

impl RosterIndex {
    /// Build from in-memory tables. Entries with an empty fragment or a blank
    /// id are dropped, so every fragment the index hands out resolves.
    pub fn from_tables<S, G>(skaters: S, goalies: G) -> Self
    where
        S: IntoIterator<Item = (String, String)>,
        G: IntoIterator<Item = (String, String)>,
    {
        Self {
            skaters: clean_table(PlayerKind::Skater, skaters),
            goalies: clean_table(PlayerKind::Goalie, goalies),
        }
    }

    /// Load both tables from JSON objects of the form `{"fragment": "Player Id"}`.
    pub fn load(paths: &RosterPaths) -> Result<Self, Error> {
        let skaters = read_table(&paths.skaters)?;
        let goalies = read_table(&paths.goalies)?;
        let index = Self::from_tables(skaters, goalies);
        logf!(
            "Roster loaded: {} skater and {} goalie fragments",
            index.skaters.len(),
            index.goalies.len()
        );
        Ok(index)
    }

    pub fn lookup(&self, kind: PlayerKind, fragment: &str) -> Option<&str> {
        self.table(kind).get(fragment).map(String::as_str)
    }

    /// Every (fragment, kind), skaters first.
    pub fn fragments(&self) -> impl Iterator<Item = (&str, PlayerKind)> {
        let skaters = self.skaters.keys().map(|f| (f.as_str(), PlayerKind::Skater));
        let goalies = self.goalies.keys().map(|f| (f.as_str(), PlayerKind::Goalie));
        skaters.chain(goalies)
    }

    pub fn is_empty(&self) -> bool {
        self.skaters.is_empty() && self.goalies.is_empty()
    }

    fn table(&self, kind: PlayerKind) -> &BTreeMap<String, String> {
        match kind {
            PlayerKind::Skater => &self.skaters,
            PlayerKind::Goalie => &self.goalies,
        }
    }
}

fn read_table(path: &Path) -> Result<BTreeMap<String, String>, Error> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| Error::Roster { path: path.to_path_buf(), source })
}

fn clean_table<I>(kind: PlayerKind, entries: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut out = BTreeMap::new();
    for (fragment, id) in entries {
        let id = id.trim();
        if fragment.is_empty() || id.is_empty() {
            logw!("Dropping {} roster entry {:?} -> {:?}: blank fragment or id", kind.label(), fragment, id);
            continue;
        }
        out.insert(fragment, s!(id));
    }
    out
}
