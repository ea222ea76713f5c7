// src/csv.rs
use chrono::{NaiveDate, NaiveTime};
use csv::WriterBuilder;

use crate::config::consts::{DATE_FORMAT, REPORT_SECTION_SEP, TIME_FORMAT};
use crate::config::options::Delim;
use crate::error::Error;
use crate::records::{GoalieRecord, ParsedGame, SkaterRecord, TeamResult};

/* ---------------- Row shapes ---------------- */

/// A record that renders as one row under fixed headers.
pub trait Tabular {
    const HEADERS: &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

pub fn fmt_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn fmt_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

fn opt_cell(v: Option<u32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

impl Tabular for SkaterRecord {
    const HEADERS: &'static [&'static str] =
        &["player", "session", "type", "date", "gp", "g", "a", "pts", "pim", "soa", "sog"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.player.clone(),
            self.session.clone(),
            self.game_type.to_string(),
            fmt_date(self.date),
            self.gp.to_string(),
            self.g.to_string(),
            self.a.to_string(),
            self.pts.to_string(),
            self.pim.to_string(),
            self.soa.to_string(),
            self.sog.to_string(),
        ]
    }
}

impl Tabular for GoalieRecord {
    // No sow column in the goalie sheet.
    const HEADERS: &'static [&'static str] = &[
        "player", "session", "type", "date", "gp", "w", "l", "sol", "a", "sv", "shots", "ga", "so sa", "so ga",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.player.clone(),
            self.session.clone(),
            self.game_type.to_string(),
            fmt_date(self.date),
            self.gp.to_string(),
            self.w.to_string(),
            self.l.to_string(),
            self.sol.to_string(),
            self.a.to_string(),
            self.sv.to_string(),
            self.shots.to_string(),
            self.ga.to_string(),
            opt_cell(self.so_sa),
            opt_cell(self.so_ga),
        ]
    }
}

impl Tabular for TeamResult {
    const HEADERS: &'static [&'static str] =
        &["rank", "session", "type", "opponent", "date", "time", "win", "loss", "sol", "sow", "gf", "ga"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.rank.clone(),
            self.session.clone(),
            self.game_type.to_string(),
            self.opponent.clone(),
            fmt_date(self.date),
            fmt_time(self.time),
            self.win.to_string(),
            self.loss.to_string(),
            self.sol.to_string(),
            self.sow.to_string(),
            self.gf.to_string(),
            self.ga.to_string(),
        ]
    }
}

/* ---------------- Writing ---------------- */

/// Render rows (and optionally the header line) with the given delimiter.
/// Fields holding the delimiter, quotes or newlines are quoted.
pub fn to_export_string<'r, T, I>(rows: I, include_headers: bool, delim: Delim) -> Result<String, Error>
where
    T: Tabular + 'r,
    I: IntoIterator<Item = &'r T>,
{
    let mut buf: Vec<u8> = Vec::new();
    {
        let mut w = WriterBuilder::new()
            .delimiter(delim.byte())
            .has_headers(false)
            .from_writer(&mut buf);
        if include_headers {
            w.write_record(T::HEADERS)?;
        }
        for row in rows {
            w.write_record(row.cells())?;
        }
        w.flush()?;
    }

    match String::from_utf8(buf) {
        Ok(s) => Ok(s),
        Err(e) => Ok(String::from_utf8_lossy(&e.into_bytes()).into_owned()),
    }
}

/// The three sheets of one game, in file order.
pub struct Sheets {
    pub skaters: String,
    pub goalies: String,
    pub team: String,
}

pub fn sheets(game: &ParsedGame, include_headers: bool, delim: Delim) -> Result<Sheets, Error> {
    Ok(Sheets {
        skaters: to_export_string(game.skaters.iter(), include_headers, delim)?,
        goalies: to_export_string(game.goalies.iter(), include_headers, delim)?,
        team: to_export_string(std::iter::once(&game.team), include_headers, delim)?,
    })
}

/// Human-readable report: headed, pipe-delimited sheets separated by `--`.
pub fn report(game: &ParsedGame) -> Result<String, Error> {
    let Sheets { skaters, goalies, team } = sheets(game, true, Delim::Pipe)?;
    Ok([skaters, goalies, team].join(REPORT_SECTION_SEP))
}
