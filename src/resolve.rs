// src/resolve.rs
//! Human-in-the-loop decisions, behind one trait so the parser never talks
//! to a terminal directly.
//!
//! - [`TerminalResolver`]: prompts on any reader/writer pair (stdin/stdout in
//!   the CLI) and re-asks until it gets a valid answer.
//! - [`ScriptedResolver`]: canned answers, for tests and replays.
//! - [`RejectingResolver`]: fails the file instead of asking, for unattended runs.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use chrono::NaiveTime;

use crate::error::ParseError;
use crate::parse::conflict::Resolution;
use crate::parse::result::{parse_clock_time, ClockTime, Meridiem};
use crate::roster::PlayerKind;

/// Two records for the same player, rendered for a human.
#[derive(Clone, Debug)]
pub struct Conflict<'a> {
    pub player: &'a str,
    pub kind: PlayerKind,
    pub first: String,
    pub second: String,
}

pub trait Resolver {
    /// The score line named no opponent.
    fn opponent(&mut self, line: &str) -> Result<String, ParseError>;

    /// The score line gave no game time.
    fn game_time(&mut self, line: &str) -> Result<NaiveTime, ParseError>;

    /// The score line gave `hour:minute` without AM/PM.
    fn meridiem(&mut self, line: &str, hour: u32, minute: u32) -> Result<Meridiem, ParseError>;

    /// A player was mentioned twice in one game.
    fn conflict(&mut self, conflict: &Conflict<'_>) -> Result<Resolution, ParseError>;
}

impl<R: Resolver + ?Sized> Resolver for &mut R {
    fn opponent(&mut self, line: &str) -> Result<String, ParseError> {
        (**self).opponent(line)
    }
    fn game_time(&mut self, line: &str) -> Result<NaiveTime, ParseError> {
        (**self).game_time(line)
    }
    fn meridiem(&mut self, line: &str, hour: u32, minute: u32) -> Result<Meridiem, ParseError> {
        (**self).meridiem(line, hour, minute)
    }
    fn conflict(&mut self, conflict: &Conflict<'_>) -> Result<Resolution, ParseError> {
        (**self).conflict(conflict)
    }
}

/* ---------------- terminal ---------------- */

pub struct TerminalResolver<I, O> {
    input: I,
    output: O,
}

impl TerminalResolver<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> TerminalResolver<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Print `prompt`, read one line. A closed input stream is an error:
    /// there is nobody left to answer.
    fn ask(&mut self, prompt: &str, what: &str) -> Result<String, ParseError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        let mut answer = s!();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(ParseError::input_closed(what));
        }
        Ok(s!(answer.trim()))
    }
}

impl<I: BufRead, O: Write> Resolver for TerminalResolver<I, O> {
    fn opponent(&mut self, line: &str) -> Result<String, ParseError> {
        let mut prompt = format!("Could not find the opponent in: \"{line}\"\nOpponent: ");
        loop {
            let answer = self.ask(&prompt, "the opponent")?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            prompt = s!("Type the opponent's name: ");
        }
    }

    fn game_time(&mut self, line: &str) -> Result<NaiveTime, ParseError> {
        let mut prompt = format!("Could not find the game time in: \"{line}\"\nGame time (e.g. 8:30 PM): ");
        loop {
            let answer = self.ask(&prompt, "the game time")?;
            match parse_clock_time(&answer) {
                ClockTime::Known(t) => return Ok(t),
                ClockTime::NeedsMeridiem { hour, minute } => {
                    let m = self.meridiem(line, hour, minute)?;
                    if let Some(t) = m.to_time(hour, minute) {
                        return Ok(t);
                    }
                }
                ClockTime::Missing => {}
            }
            prompt = s!("Type a time like 8:30 PM: ");
        }
    }

    fn meridiem(&mut self, _line: &str, hour: u32, minute: u32) -> Result<Meridiem, ParseError> {
        let mut prompt = format!("Is {hour}:{minute:02} AM or PM? (a/p) ");
        loop {
            let answer = self.ask(&prompt, "AM/PM")?;
            match answer.chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('a') => return Ok(Meridiem::Am),
                Some('p') => return Ok(Meridiem::Pm),
                _ => prompt = s!("Type a or p: "),
            }
        }
    }

    fn conflict(&mut self, conflict: &Conflict<'_>) -> Result<Resolution, ParseError> {
        let mut prompt = format!(
            "Found more than one entry for {} {}. Current value: {}. New value: {}\n1 - Take First\n2 - Take Second\n3 - Combine\n",
            conflict.kind.label(),
            conflict.player,
            conflict.first,
            conflict.second,
        );
        loop {
            let answer = self.ask(&prompt, "a conflict choice")?;
            if let Some(choice) = Resolution::from_choice(&answer) {
                return Ok(choice);
            }
            prompt = s!("Type 1, 2, or 3\n");
        }
    }
}

/* ---------------- scripted ---------------- */

/// Answers from queues, in order. Running out of answers fails the parse
/// like an unattended run would.
#[derive(Clone, Debug, Default)]
pub struct ScriptedResolver {
    opponents: VecDeque<String>,
    times: VecDeque<NaiveTime>,
    meridiems: VecDeque<Meridiem>,
    resolutions: VecDeque<Resolution>,
    /// Players whose conflicts were asked about, in order
    pub conflicts_seen: Vec<String>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_opponent(mut self, name: &str) -> Self {
        self.opponents.push_back(s!(name));
        self
    }

    pub fn with_time(mut self, t: NaiveTime) -> Self {
        self.times.push_back(t);
        self
    }

    pub fn with_meridiem(mut self, m: Meridiem) -> Self {
        self.meridiems.push_back(m);
        self
    }

    pub fn with_resolution(mut self, r: Resolution) -> Self {
        self.resolutions.push_back(r);
        self
    }
}

impl Resolver for ScriptedResolver {
    fn opponent(&mut self, _line: &str) -> Result<String, ParseError> {
        self.opponents.pop_front().ok_or_else(|| ParseError::needs_operator("the opponent"))
    }

    fn game_time(&mut self, _line: &str) -> Result<NaiveTime, ParseError> {
        self.times.pop_front().ok_or_else(|| ParseError::needs_operator("the game time"))
    }

    fn meridiem(&mut self, _line: &str, _hour: u32, _minute: u32) -> Result<Meridiem, ParseError> {
        self.meridiems.pop_front().ok_or_else(|| ParseError::needs_operator("AM/PM"))
    }

    fn conflict(&mut self, conflict: &Conflict<'_>) -> Result<Resolution, ParseError> {
        self.conflicts_seen.push(s!(conflict.player));
        self.resolutions
            .pop_front()
            .ok_or_else(|| ParseError::needs_operator(format!("duplicate entry for {}", conflict.player)))
    }
}

/* ---------------- unattended ---------------- */

#[derive(Clone, Copy, Debug, Default)]
pub struct RejectingResolver;

impl Resolver for RejectingResolver {
    fn opponent(&mut self, _line: &str) -> Result<String, ParseError> {
        Err(ParseError::needs_operator("the opponent"))
    }

    fn game_time(&mut self, _line: &str) -> Result<NaiveTime, ParseError> {
        Err(ParseError::needs_operator("the game time"))
    }

    fn meridiem(&mut self, _line: &str, _hour: u32, _minute: u32) -> Result<Meridiem, ParseError> {
        Err(ParseError::needs_operator("AM/PM"))
    }

    fn conflict(&mut self, conflict: &Conflict<'_>) -> Result<Resolution, ParseError> {
        Err(ParseError::needs_operator(format!("duplicate entry for {}", conflict.player)))
    }
}
