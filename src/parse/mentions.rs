// src/parse/mentions.rs
//! Splits a line into one span per roster mention.
//!
//! Plain substring search, not token aware: "Al" inside "Alex" counts.
//! Each mention runs from its first occurrence to the next mention's start
//! (or end of line), so spans tile the line left to right.

use std::ops::Range;

use crate::roster::{PlayerKind, RosterIndex};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mention<'r> {
    pub fragment: &'r str,
    pub player: &'r str,
    pub kind: PlayerKind,
    /// Byte range into the scanned line
    pub span: Range<usize>,
}

impl Mention<'_> {
    pub fn text<'l>(&self, line: &'l str) -> &'l str {
        &line[self.span.clone()]
    }
}

pub fn scan_mentions<'r>(line: &str, roster: &'r RosterIndex) -> Vec<Mention<'r>> {
    let mut found: Vec<Mention<'r>> = roster
        .fragments()
        .filter_map(|(fragment, kind)| {
            let start = line.find(fragment)?;
            let Some(player) = roster.lookup(kind, fragment) else {
                logw!("No {} id for fragment {fragment:?}, skipping", kind.label());
                return None;
            };
            Some(Mention { fragment, player, kind, span: start..start })
        })
        .collect();

    // Same start: the longer fragment sorts last and keeps the span.
    found.sort_by(|a, b| {
        a.span.start
            .cmp(&b.span.start)
            .then(a.fragment.len().cmp(&b.fragment.len()))
    });

    let starts: Vec<usize> = found.iter().map(|m| m.span.start).collect();
    for (i, m) in found.iter_mut().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(line.len());
        m.span.end = end;
    }

    found.retain(|m| !m.span.is_empty());
    found
}
