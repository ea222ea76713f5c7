// src/parse/conflict.rs
//! Two mentions of the same player in one game. The operator picks one of
//! three outcomes; "combine" is an explicit per-shape merge.

use crate::records::{GoalieRecord, SkaterRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    KeepFirst,
    KeepSecond,
    Combine,
}

impl Resolution {
    /// "1" / "2" / "3", first character only. Anything else is `None`.
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim().chars().next()? {
            '1' => Some(Resolution::KeepFirst),
            '2' => Some(Resolution::KeepSecond),
            '3' => Some(Resolution::Combine),
            _ => None,
        }
    }

    pub fn apply<T: Merge + Clone>(self, first: &T, second: T) -> T {
        match self {
            Resolution::KeepFirst => first.clone(),
            Resolution::KeepSecond => second,
            Resolution::Combine => first.combine(&second),
        }
    }
}

/// Sum the statistics, keep the first record's identity fields
/// (player, session, type, date) and `gp`, which stays 1 for one game.
pub trait Merge {
    fn combine(&self, other: &Self) -> Self;
}

impl Merge for SkaterRecord {
    fn combine(&self, other: &Self) -> Self {
        sum_fields!(self, other; g, a, pts, pim, soa, sog)
    }
}

impl Merge for GoalieRecord {
    /// Decisions (w/l/sol/sow) belong to the team result and are not summed.
    fn combine(&self, other: &Self) -> Self {
        let mut out = sum_fields!(self, other; a, sv, shots, ga);
        out.so_sa = add_opt(self.so_sa, other.so_sa);
        out.so_ga = add_opt(self.so_ga, other.so_ga);
        out
    }
}

fn add_opt(a: Option<u32>, b: Option<u32>) -> Option<u32> {
    match (a, b) {
        (None, None) => None,
        (a, b) => Some(a.unwrap_or(0).saturating_add(b.unwrap_or(0))),
    }
}
