// src/parse/rules.rs
//! Named pattern rules. One rule per statistic, each a short list of
//! alternative spellings tried in order; the first pattern that matches wins.
//! Every pattern captures the number in group 1 (and group 2 for pairs).

use std::sync::OnceLock;

use regex::Regex;

pub struct Rule {
    pub name: &'static str,
    sources: &'static [&'static str],
    exclude: &'static [&'static str],
    compiled: OnceLock<Vec<Regex>>,
}

impl Rule {
    pub const fn new(name: &'static str, sources: &'static [&'static str]) -> Self {
        Self { name, sources, exclude: &[], compiled: OnceLock::new() }
    }

    /// Skip matches whose text contains any of these (lowercase) words.
    pub const fn excluding(mut self, words: &'static [&'static str]) -> Self {
        self.exclude = words;
        self
    }

    fn regexes(&self) -> &[Regex] {
        self.compiled.get_or_init(|| {
            self.sources
                .iter()
                .map(|src| Regex::new(src).expect("valid stat rule regex"))
                .collect()
        })
    }

    fn accepts(&self, matched: &str) -> bool {
        if self.exclude.is_empty() {
            return true;
        }
        let lc = matched.to_ascii_lowercase();
        !self.exclude.iter().any(|w| lc.contains(w))
    }

    pub fn matches(&self, text: &str) -> bool {
        self.capture(text).is_some()
    }

    /// First number captured by the first matching pattern.
    pub fn capture(&self, text: &str) -> Option<u32> {
        self.captures(text).and_then(|(n, _)| n)
    }

    /// First (group 1, group 2) pair, for two-number phrasings.
    pub fn capture_pair(&self, text: &str) -> Option<(u32, u32)> {
        match self.captures(text)? {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    fn captures(&self, text: &str) -> Option<(Option<u32>, Option<u32>)> {
        for re in self.regexes() {
            for caps in re.captures_iter(text) {
                let whole = caps.get(0).map_or("", |m| m.as_str());
                if !self.accepts(whole) {
                    continue;
                }
                let group = |i: usize| {
                    let digits = caps.get(i)?.as_str();
                    match digits.parse::<u32>() {
                        Ok(n) => Some(n),
                        Err(_) => {
                            logw!("{}: {digits} is out of range, ignoring it", self.name);
                            None
                        }
                    }
                };
                return Some((group(1), group(2)));
            }
        }
        None
    }
}

/* ---------------- skater rules ---------------- */

pub static SKATER_GOALS: Rule = Rule::new("goals", &[
    r"(?i)\b(\d+)\s?g\b",
    r"(?i)\b(\d+)\s+goals?\b",
]);

pub static SKATER_ASSISTS: Rule = Rule::new("assists", &[
    r"(?i)\b(\d+)\s?a\b",
    r"(?i)\b(\d+)\s+assists?\b",
]);

pub static SECONDARY_ASSISTS: Rule = Rule::new("secondary assists", &[
    r"(?i)\b(\d+)\s+secondary\b",
]);

pub static PENALTY_MINUTES: Rule = Rule::new("penalty minutes", &[
    r"(?i)\b(\d+)\s?p\.?i\.?m\b",
    r"(?i)\b(\d+)\s+penalty\b",
]);

pub static SHOOTOUT_GOALS: Rule = Rule::new("shootout goals", &[
    r"(?i)\b(\d+)\s?s\.?o\.?g\b",
    r"(?i)\b(\d+)\s+shoot\s?-?\s?out\s+goals?\b",
]);

pub static SHOOTOUT_ATTEMPTS: Rule = Rule::new("shootout attempts", &[
    r"(?i)\b(\d+)\s?s\.?o\.?a\b",
    r"(?i)\b(\d+)\s+shoot\s?-?\s?out\s+attempts?\b",
]);

/* ---------------- goalie rules ---------------- */

// Adjectives are allowed between the number and the noun ("1 horrendous goal").
pub static SHOTS_AGAINST: Rule = Rule::new("shots", &[
    r"(?i)\b(\d+)[^0-9]*?shot",
])
.excluding(&["shoot", "s.o", "so "]);

pub static GOALS_AGAINST: Rule = Rule::new("goals against", &[
    r"(?i)\b(\d+)[^0-9]*?goal",
])
.excluding(&["shoot", "s.o", "so "]);

pub static SAVE_RATIO: Rule = Rule::new("saves of shots", &[
    r"(?i)\b(\d+)\s+of\s+(\d+)\b",
]);

pub static GOALIE_ASSISTS: Rule = Rule::new("assists", &[
    r"(?i)\b(\d+)\s?a\b",
    r"(?i)\b(\d+)\s+assists?\b",
]);

pub static SHOOTOUT_SHOTS_AGAINST: Rule = Rule::new("shootout shots against", &[
    r"(?i)\b(\d+)\s?s\.?o\.?s\.?a\b",
    r"(?i)\b(\d+)\s+shoot\s?-?\s?out\s+shots?\b",
]);

pub static SHOOTOUT_GOALS_AGAINST: Rule = Rule::new("shootout goals against", &[
    r"(?i)\b(\d+)\s?s\.?o\.?g\.?a\b",
    r"(?i)\b(\d+)\s+shoot\s?-?\s?out\s+goals?\b",
]);
