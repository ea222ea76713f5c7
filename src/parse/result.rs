// src/parse/result.rs
//! The score line: "we won 5-2 vs Rivals at 8:00pm".
//!
//! Everything here is pure. Anything the line does not say (opponent,
//! game time, AM/PM) is reported as missing so the caller can ask a human;
//! nothing is defaulted.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::core::sanitize::{normalize_ws, trim_punct};
use crate::records::Outcome;

static SCORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*-\s*(\d+)").expect("valid score regex")
});

static WIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:win|wins|won|winning)\b").expect("valid win regex")
});

static LOSS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:loss|losses|lost|lose)\b").expect("valid loss regex")
});

static SHOOTOUT_WIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bsow\b|\bshoot\s?-?\s?out\s+win").expect("valid shootout win regex")
});

static SHOOTOUT_LOSS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bsol\b|\bshoot\s?-?\s?out\s+loss").expect("valid shootout loss regex")
});

// "vs"-style keywords name the opponent outright; a bare "to" ("lost 3-1 to
// Blades") is only trusted when none of them appear. Each keyword has a form
// bounded by the time token, preferred when present.
static VS_BEFORE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\bvs\b\.?|\bverse\b|\bversus\b)\s*(.+?)\s*(?:\bat\b|@)")
        .expect("valid bounded vs regex")
});

static VS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\bvs\b\.?|\bverse\b|\bversus\b)\s*(.+)$").expect("valid vs regex")
});

static TO_BEFORE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bto\b\s*(.+?)\s*(?:\bat\b|@)").expect("valid bounded to regex")
});

static TO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bto\b\s*(.+)$").expect("valid to regex")
});

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?::(\d{2}))?\s*([ap])\.?\s?m\b\.?").expect("valid time regex")
});

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2}):(\d{2})\b").expect("valid clock regex")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// 12-hour clock → time of day. `None` for hours outside 1..=12.
    pub fn to_time(self, hour: u32, minute: u32) -> Option<NaiveTime> {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let h24 = match self {
            Meridiem::Am => hour % 12,
            Meridiem::Pm => hour % 12 + 12,
        };
        NaiveTime::from_hms_opt(h24, minute, 0)
    }
}

/// What a line says about the game time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockTime {
    Known(NaiveTime),
    /// "8:00" with no AM/PM
    NeedsMeridiem { hour: u32, minute: u32 },
    Missing,
}

/// Raw facts from a score line. `gf`/`ga` are already "ours"/"theirs".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultLine {
    pub gf: u32,
    pub ga: u32,
    pub outcome: Outcome,
    pub opponent: Option<String>,
    pub time: ClockTime,
}

/// `None` unless the line carries an `<int> - <int>` score.
pub fn parse_result_line(line: &str) -> Option<ResultLine> {
    let caps = SCORE_RE.captures(line)?;
    let first: u32 = caps[1].parse().ok()?;
    let second: u32 = caps[2].parse().ok()?;

    let outcome = detect_outcome(line, first, second);
    let (gf, ga) = match outcome {
        Outcome::Win | Outcome::ShootoutWin => (first.max(second), first.min(second)),
        Outcome::Loss | Outcome::ShootoutLoss => (first.min(second), first.max(second)),
        Outcome::Tie => (first, second),
    };

    Some(ResultLine {
        gf,
        ga,
        outcome,
        opponent: parse_opponent(line),
        time: parse_clock_time(line),
    })
}

/// Shootout words beat plain words; plain words beat the numbers. The
/// numbers only decide when the wording doesn't (none, or both sides).
pub fn detect_outcome(line: &str, first: u32, second: u32) -> Outcome {
    let sow = SHOOTOUT_WIN_RE.is_match(line);
    let sol = SHOOTOUT_LOSS_RE.is_match(line);
    match (sow, sol) {
        (true, false) => return Outcome::ShootoutWin,
        (false, true) => return Outcome::ShootoutLoss,
        (true, true) => {
            return if first >= second { Outcome::ShootoutWin } else { Outcome::ShootoutLoss };
        }
        (false, false) => {}
    }

    let win = WIN_RE.is_match(line);
    let loss = LOSS_RE.is_match(line);
    match (win, loss) {
        (true, false) => Outcome::Win,
        (false, true) => Outcome::Loss,
        _ => {
            if first > second {
                Outcome::Win
            } else if first < second {
                Outcome::Loss
            } else {
                logw!("Tied score {first}-{second} with no outcome word: recording a tie");
                Outcome::Tie
            }
        }
    }
}

pub fn parse_opponent(line: &str) -> Option<String> {
    let caps = if VS_RE.is_match(line) {
        VS_BEFORE_TIME_RE.captures(line).or_else(|| VS_RE.captures(line))?
    } else {
        TO_BEFORE_TIME_RE.captures(line).or_else(|| TO_RE.captures(line))?
    };
    let mut name = caps.get(1)?.as_str();

    // "vs Rivals 5-2" → "Rivals"
    if let Some(score) = SCORE_RE.find(name) {
        name = &name[..score.start()];
    }
    let name = normalize_ws(trim_punct(name));
    if name.is_empty() { None } else { Some(name) }
}

pub fn parse_clock_time(text: &str) -> ClockTime {
    for caps in TIME_RE.captures_iter(text) {
        let hour: u32 = match caps[1].parse() {
            Ok(h) => h,
            Err(_) => continue,
        };
        let minute: u32 = caps.get(2).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
        let meridiem = if caps[3].eq_ignore_ascii_case("a") { Meridiem::Am } else { Meridiem::Pm };
        if let Some(t) = meridiem.to_time(hour, minute) {
            return ClockTime::Known(t);
        }
    }

    for caps in CLOCK_RE.captures_iter(text) {
        let (Ok(hour), Ok(minute)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) else {
            continue;
        };
        if minute >= 60 || hour >= 24 {
            continue;
        }
        // 0:xx and 13:00+ are already 24-hour clock
        if hour == 0 || hour > 12 {
            if let Some(t) = NaiveTime::from_hms_opt(hour, minute, 0) {
                return ClockTime::Known(t);
            }
        }
        return ClockTime::NeedsMeridiem { hour, minute };
    }

    ClockTime::Missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn full_line() {
        let r = parse_result_line("we won 5-2 vs Rivals at 8:00pm").unwrap();
        assert_eq!((r.gf, r.ga), (5, 2));
        assert_eq!(r.outcome, Outcome::Win);
        assert_eq!(r.opponent.as_deref(), Some("Rivals"));
        assert_eq!(r.time, ClockTime::Known(hm(20, 0)));
    }

    #[test]
    fn explicit_win_normalizes_score_order() {
        let r = parse_result_line("Big win 2 - 4 versus the Hawks @ 9pm").unwrap();
        assert_eq!(r.outcome, Outcome::Win);
        assert_eq!((r.gf, r.ga), (4, 2));
        assert_eq!(r.opponent.as_deref(), Some("the Hawks"));
        assert_eq!(r.time, ClockTime::Known(hm(21, 0)));
    }

    #[test]
    fn loss_puts_smaller_score_first() {
        let r = parse_result_line("Tough loss 6-3 to Blades at 10:15 PM").unwrap();
        assert_eq!(r.outcome, Outcome::Loss);
        assert_eq!((r.gf, r.ga), (3, 6));
        assert_eq!(r.opponent.as_deref(), Some("Blades"));
    }

    #[test]
    fn numbers_decide_without_words() {
        assert_eq!(detect_outcome("3-1 vs Rivals", 3, 1), Outcome::Win);
        assert_eq!(detect_outcome("1-3 vs Rivals", 1, 3), Outcome::Loss);
        assert_eq!(detect_outcome("2-2 vs Rivals", 2, 2), Outcome::Tie);
    }

    #[test]
    fn shootout_words_override_plain_words() {
        let r = parse_result_line("Shoot out win 4-3 vs Rivals at 7pm").unwrap();
        assert_eq!(r.outcome, Outcome::ShootoutWin);
        let r = parse_result_line("3-4 SOL vs Rivals at 7pm").unwrap();
        assert_eq!(r.outcome, Outcome::ShootoutLoss);
        assert_eq!((r.gf, r.ga), (3, 4));
    }

    #[test]
    fn shootout_abbreviations_need_word_boundaries() {
        // "solid" is not "sol"
        let r = parse_result_line("solid 5-1 win vs Rivals at 7pm").unwrap();
        assert_eq!(r.outcome, Outcome::Win);
    }

    #[test]
    fn opponent_without_time_token() {
        assert_eq!(parse_opponent("won 5-2 vs. Rivals!"), Some(s!("Rivals")));
        assert_eq!(parse_opponent("vs Rivals 5-2"), Some(s!("Rivals")));
        assert_eq!(parse_opponent("won 5-2 tonight"), None);
    }

    #[test]
    fn vs_beats_an_earlier_casual_to() {
        let r = parse_result_line("Great to see everyone out, we won 5-2 vs Rivals at 8pm").unwrap();
        assert_eq!(r.opponent.as_deref(), Some("Rivals"));
        assert_eq!(parse_opponent("Nice to win one, 4-1 versus the Hawks"), Some(s!("the Hawks")));
        // "to" still works on its own
        assert_eq!(parse_opponent("lost 1-3 to Blades @ 7pm"), Some(s!("Blades")));
    }

    #[test]
    fn clock_variants() {
        assert_eq!(parse_clock_time("at 8pm"), ClockTime::Known(hm(20, 0)));
        assert_eq!(parse_clock_time("at 11:30 a.m."), ClockTime::Known(hm(11, 30)));
        assert_eq!(parse_clock_time("at 12:05am"), ClockTime::Known(hm(0, 5)));
        assert_eq!(parse_clock_time("at 8:00"), ClockTime::NeedsMeridiem { hour: 8, minute: 0 });
        assert_eq!(parse_clock_time("at 21:45"), ClockTime::Known(hm(21, 45)));
        assert_eq!(parse_clock_time("won 5-2"), ClockTime::Missing);
    }

    #[test]
    fn non_score_lines_are_skipped() {
        assert!(parse_result_line("What a game tonight").is_none());
    }
}
