// src/records.rs
//! Output shapes of one parsed game: the team line, one record per skater,
//! one record per goalie.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::config::options::{GameType, ParseOptions};

/// How the game ended, from our side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Loss,
    ShootoutWin,
    ShootoutLoss,
    Tie,
}

/// 0/1 columns derived from an [`Outcome`]. At most one is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeFlags {
    pub win: u32,
    pub loss: u32,
    pub sow: u32,
    pub sol: u32,
}

impl Outcome {
    /// A shootout win is only a shootout win, never also a plain win.
    pub fn flags(self) -> OutcomeFlags {
        let mut f = OutcomeFlags::default();
        match self {
            Outcome::Win => f.win = 1,
            Outcome::Loss => f.loss = 1,
            Outcome::ShootoutWin => f.sow = 1,
            Outcome::ShootoutLoss => f.sol = 1,
            Outcome::Tie => {}
        }
        f
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamResult {
    pub rank: String,
    pub session: String,
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub date: NaiveDate,
    pub opponent: String,
    pub time: NaiveTime,
    pub win: u32,
    pub loss: u32,
    pub sow: u32,
    pub sol: u32,
    pub gf: u32,
    pub ga: u32,
}

impl TeamResult {
    pub fn new(
        options: &ParseOptions,
        date: NaiveDate,
        opponent: String,
        time: NaiveTime,
        outcome: Outcome,
        gf: u32,
        ga: u32,
    ) -> Self {
        let OutcomeFlags { win, loss, sow, sol } = outcome.flags();
        Self {
            rank: options.rank.clone(),
            session: options.session.clone(),
            game_type: options.game_type,
            date,
            opponent,
            time,
            win,
            loss,
            sow,
            sol,
            gf,
            ga,
        }
    }
}

/// Stats pulled out of one skater mention, before they are stamped with
/// game metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkaterLine {
    pub g: u32,
    pub a: u32,
    pub pim: u32,
    pub soa: u32,
    pub sog: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkaterRecord {
    pub player: String,
    pub session: String,
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub date: NaiveDate,
    pub gp: u32,
    pub g: u32,
    pub a: u32,
    pub pts: u32,
    pub pim: u32,
    pub soa: u32,
    pub sog: u32,
}

impl SkaterRecord {
    /// Points count shootout goals: `pts = g + a + sog`, saturating.
    pub fn new(player: &str, team: &TeamResult, line: SkaterLine) -> Self {
        Self {
            player: s!(player),
            session: team.session.clone(),
            game_type: team.game_type,
            date: team.date,
            gp: 1,
            g: line.g,
            a: line.a,
            pts: line.g.saturating_add(line.a).saturating_add(line.sog),
            pim: line.pim,
            soa: line.soa,
            sog: line.sog,
        }
    }
}

/// Stats pulled out of one goalie mention. `sv + ga == shots` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GoalieLine {
    pub shots: u32,
    pub sv: u32,
    pub ga: u32,
    pub a: u32,
    pub so_sa: Option<u32>,
    pub so_ga: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GoalieRecord {
    pub player: String,
    pub session: String,
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub date: NaiveDate,
    pub gp: u32,
    pub w: u32,
    pub l: u32,
    pub sol: u32,
    pub sow: u32,
    pub a: u32,
    pub sv: u32,
    pub shots: u32,
    pub ga: u32,
    #[serde(rename = "so sa")]
    pub so_sa: Option<u32>,
    #[serde(rename = "so ga")]
    pub so_ga: Option<u32>,
}

impl GoalieRecord {
    /// Decisions (w/l/sol/sow) come from the team result, not the mention.
    pub fn new(player: &str, team: &TeamResult, line: GoalieLine) -> Self {
        Self {
            player: s!(player),
            session: team.session.clone(),
            game_type: team.game_type,
            date: team.date,
            gp: 1,
            w: team.win,
            l: team.loss,
            sol: team.sol,
            sow: team.sow,
            a: line.a,
            sv: line.sv,
            shots: line.shots,
            ga: line.ga,
            so_sa: line.so_sa,
            so_ga: line.so_ga,
        }
    }
}

pub trait Keyed {
    fn player(&self) -> &str;
}

impl Keyed for SkaterRecord {
    fn player(&self) -> &str {
        &self.player
    }
}

impl Keyed for GoalieRecord {
    fn player(&self) -> &str {
        &self.player
    }
}

/// Records keyed by canonical player id, at most one per id, kept in the
/// order each id was first resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerTable<T> {
    rows: Vec<T>,
}

impl<T> Default for PlayerTable<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Keyed> PlayerTable<T> {
    pub fn get(&self, player: &str) -> Option<&T> {
        self.rows.iter().find(|r| r.player() == player)
    }

    /// Replace the record for the same player in place, or append.
    pub fn upsert(&mut self, record: T) {
        match self.rows.iter_mut().find(|r| r.player() == record.player()) {
            Some(slot) => *slot = record,
            None => self.rows.push(record),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Everything one recap produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedGame {
    pub team: TeamResult,
    pub skaters: PlayerTable<SkaterRecord>,
    pub goalies: PlayerTable<GoalieRecord>,
}

impl ParsedGame {
    pub fn new(team: TeamResult) -> Self {
        Self { team, skaters: PlayerTable::default(), goalies: PlayerTable::default() }
    }
}
