// src/parse/skater.rs
use crate::records::SkaterLine;

use super::rules::{
    Rule, PENALTY_MINUTES, SECONDARY_ASSISTS, SHOOTOUT_ATTEMPTS, SHOOTOUT_GOALS, SKATER_ASSISTS,
    SKATER_GOALS,
};

static SKATER_RULES: [&Rule; 6] = [
    &SKATER_GOALS,
    &SKATER_ASSISTS,
    &SECONDARY_ASSISTS,
    &PENALTY_MINUTES,
    &SHOOTOUT_GOALS,
    &SHOOTOUT_ATTEMPTS,
];

/// Stats for one skater mention. `None` when no rule matches at all;
/// otherwise missing stats are 0. Secondary assists fold into `a`.
pub fn extract_skater(text: &str) -> Option<SkaterLine> {
    if !SKATER_RULES.iter().any(|rule| rule.matches(text)) {
        return None;
    }
    let n = |rule: &Rule| rule.capture(text).unwrap_or(0);
    Some(SkaterLine {
        g: n(&SKATER_GOALS),
        a: n(&SKATER_ASSISTS).saturating_add(n(&SECONDARY_ASSISTS)),
        pim: n(&PENALTY_MINUTES),
        soa: n(&SHOOTOUT_ATTEMPTS),
        sog: n(&SHOOTOUT_GOALS),
    })
}
