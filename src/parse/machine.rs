// src/parse/machine.rs
//! The recap fold: one line in, next state out.
//!
//! States only move forward: date, then score line, then mentions until the
//! input ends. [`Parser::step`] is the reducer; [`Parser::parse_lines`] and
//! [`Parser::parse_reader`] drive it, and [`finish`] turns the final state
//! into a game or a structural error.

use std::fmt::Debug;
use std::io::BufRead;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::config::options::ParseOptions;
use crate::error::ParseError;
use crate::parse::conflict::Merge;
use crate::parse::date::parse_date_line;
use crate::parse::goalie::extract_goalie;
use crate::parse::mentions::scan_mentions;
use crate::parse::result::{parse_result_line, ClockTime, ResultLine};
use crate::parse::skater::extract_skater;
use crate::records::{GoalieRecord, Keyed, ParsedGame, PlayerTable, SkaterRecord, TeamResult};
use crate::resolve::{Conflict, Resolver};
use crate::roster::{PlayerKind, RosterIndex};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    AwaitingDate,
    AwaitingResult { date: NaiveDate },
    ScanningMentions(ParsedGame),
}

impl GameState {
    pub fn phase(&self) -> &'static str {
        match self {
            GameState::AwaitingDate => "awaiting date",
            GameState::AwaitingResult { .. } => "awaiting result",
            GameState::ScanningMentions(_) => "scanning mentions",
        }
    }
}

/// End of input. Only a state that reached the mention phase is a game.
pub fn finish(state: GameState) -> Result<ParsedGame, ParseError> {
    match state {
        GameState::AwaitingDate => Err(ParseError::MissingDate),
        GameState::AwaitingResult { .. } => Err(ParseError::MissingResult),
        GameState::ScanningMentions(game) => Ok(game),
    }
}

pub struct Parser<'a, R> {
    roster: &'a RosterIndex,
    options: &'a ParseOptions,
    /// Anchor for "3 hrs ago" / "Yesterday at ..."
    now: NaiveDateTime,
    resolver: R,
}

impl<'a, R: Resolver> Parser<'a, R> {
    pub fn new(roster: &'a RosterIndex, options: &'a ParseOptions, now: NaiveDateTime, resolver: R) -> Self {
        Self { roster, options, now, resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn into_resolver(self) -> R {
        self.resolver
    }

    pub fn parse_lines<I, S>(&mut self, lines: I) -> Result<ParsedGame, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let state = lines
            .into_iter()
            .try_fold(GameState::AwaitingDate, |state, line| self.step(state, line.as_ref()))?;
        finish(state)
    }

    pub fn parse_reader<B: BufRead>(&mut self, reader: B) -> Result<ParsedGame, ParseError> {
        let mut state = GameState::AwaitingDate;
        for line in reader.lines() {
            state = self.step(state, &line?)?;
        }
        finish(state)
    }

    /// Fold one line into the state.
    pub fn step(&mut self, state: GameState, line: &str) -> Result<GameState, ParseError> {
        match state {
            GameState::AwaitingDate => {
                logd!("Attempting to parse date from: {line}");
                match parse_date_line(line, self.now) {
                    Some(date) => {
                        logf!("Parsed date: {date}");
                        Ok(GameState::AwaitingResult { date })
                    }
                    None => Ok(GameState::AwaitingDate),
                }
            }
            GameState::AwaitingResult { date } => {
                logd!("Attempting to parse score from: {line}");
                match parse_result_line(line) {
                    Some(result) => {
                        let team = self.team_result(date, line, result)?;
                        logf!("Parsed team data: {}", render(&team));
                        Ok(GameState::ScanningMentions(ParsedGame::new(team)))
                    }
                    None => Ok(GameState::AwaitingResult { date }),
                }
            }
            GameState::ScanningMentions(mut game) => {
                self.scan(&mut game, line)?;
                Ok(GameState::ScanningMentions(game))
            }
        }
    }

    /// Fill what the score line left out by asking the resolver.
    fn team_result(&mut self, date: NaiveDate, line: &str, result: ResultLine) -> Result<TeamResult, ParseError> {
        let opponent = match result.opponent {
            Some(name) => name,
            None => self.resolver.opponent(line)?,
        };
        let time = self.game_time(line, result.time)?;
        Ok(TeamResult::new(self.options, date, opponent, time, result.outcome, result.gf, result.ga))
    }

    fn game_time(&mut self, line: &str, time: ClockTime) -> Result<NaiveTime, ParseError> {
        match time {
            ClockTime::Known(t) => Ok(t),
            ClockTime::NeedsMeridiem { hour, minute } => {
                let meridiem = self.resolver.meridiem(line, hour, minute)?;
                match meridiem.to_time(hour, minute) {
                    Some(t) => Ok(t),
                    None => self.resolver.game_time(line),
                }
            }
            ClockTime::Missing => self.resolver.game_time(line),
        }
    }

    fn scan(&mut self, game: &mut ParsedGame, line: &str) -> Result<(), ParseError> {
        for mention in scan_mentions(line, self.roster) {
            let text = mention.text(line);
            if text.len() == line.len() {
                logd!("{} {} Found, attempting parse from: \"{text}\"", mention.kind.label(), mention.fragment);
            } else {
                logd!(
                    "{} {} Found, attempting parse from: \"{text}\" [Full line: {line}]",
                    mention.kind.label(),
                    mention.fragment
                );
            }

            match mention.kind {
                PlayerKind::Skater => match extract_skater(text) {
                    Some(stats) => {
                        let record = SkaterRecord::new(mention.player, &game.team, stats);
                        self.settle(&mut game.skaters, mention.kind, record)?;
                    }
                    None => logd!("No data found"),
                },
                PlayerKind::Goalie => match extract_goalie(text, game.team.ga) {
                    Some(stats) => {
                        let record = GoalieRecord::new(mention.player, &game.team, stats);
                        self.settle(&mut game.goalies, mention.kind, record)?;
                    }
                    None => logd!("No data found"),
                },
            }
        }
        Ok(())
    }

    /// At most one record per player: a second record goes through the
    /// resolver before it lands.
    fn settle<T>(&mut self, table: &mut PlayerTable<T>, kind: PlayerKind, record: T) -> Result<(), ParseError>
    where
        T: Keyed + Merge + Clone + Serialize + Debug,
    {
        let merged = match table.get(record.player()) {
            Some(existing) => {
                let choice = {
                    let conflict = Conflict {
                        player: record.player(),
                        kind,
                        first: render(existing),
                        second: render(&record),
                    };
                    self.resolver.conflict(&conflict)?
                };
                logd!("Resolved duplicate {} {} with {choice:?}", kind.label(), record.player());
                choice.apply(existing, record)
            }
            None => record,
        };
        logf!("Set data for {} {}: {}", kind.label(), merged.player(), render(&merged));
        table.upsert(merged);
        Ok(())
    }
}

fn render<T: Serialize + Debug>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
}
