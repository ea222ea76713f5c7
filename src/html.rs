// src/html.rs
//! HTML rendering of the three sheets, one `<table>` each, for pasting or
//! screenshotting. Cells are the same strings the CSV sheets carry.

use crate::csv::Tabular;
use crate::records::ParsedGame;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn row(tag: &str, cells: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    let inner: String = cells
        .into_iter()
        .map(|c| format!("<{tag}>{}</{tag}>", escape(c.as_ref())))
        .collect();
    format!("<tr>{inner}</tr>")
}

/// One table: a header row, then a row per record.
pub fn to_html_table<'r, T, I>(rows: I) -> String
where
    T: Tabular + 'r,
    I: IntoIterator<Item = &'r T>,
{
    let mut lines = vec![s!("<table>"), row("th", T::HEADERS)];
    lines.extend(rows.into_iter().map(|r| row("td", r.cells())));
    lines.push(s!("</table>"));
    lines.join("\n")
}

/// Skater, goalie and team tables, in file order.
pub fn html_report(game: &ParsedGame) -> String {
    [
        to_html_table(game.skaters.iter()),
        to_html_table(game.goalies.iter()),
        to_html_table(std::iter::once(&game.team)),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::config::options::ParseOptions;
    use crate::records::{Outcome, SkaterLine, SkaterRecord, TeamResult};

    fn game(opponent: &str) -> ParsedGame {
        let team = TeamResult::new(
            &ParseOptions::default(),
            NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            s!(opponent),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            Outcome::Win,
            5,
            2,
        );
        let mut g = ParsedGame::new(team);
        g.skaters.upsert(SkaterRecord::new("John Smith", &g.team, SkaterLine { g: 2, a: 1, ..Default::default() }));
        g
    }

    #[test]
    fn one_table_per_sheet() {
        let html = html_report(&game("Rivals"));
        assert_eq!(html.matches("<table>").count(), 3);
        assert_eq!(html.matches("</table>").count(), 3);
        assert!(html.contains("<tr><th>player</th><th>session</th>"));
        assert!(html.contains("<tr><td>John Smith</td><td>Spring 2019</td><td>Regular</td><td>2/14/2026</td>"));
        assert!(html.contains("<td>8:00 PM</td>"));
    }

    #[test]
    fn empty_sheet_keeps_its_headers() {
        let html = to_html_table(game("Rivals").goalies.iter());
        assert_eq!(html.lines().count(), 3);
        assert!(html.contains("<th>so ga</th>"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn cells_are_escaped() {
        let html = to_html_table(std::iter::once(&game("<Hawks> & \"Co\"").team));
        assert!(html.contains("<td>&lt;Hawks&gt; &amp; &quot;Co&quot;</td>"));
    }
}
