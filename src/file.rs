// src/file.rs

use std::{
    collections::HashMap,
    fs,
    io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use chrono::{DateTime, Datelike, NaiveDateTime};
use regex::Regex;

use crate::config::consts::{GOALIE_DATA_FILE, REPORT_FILE, REPORT_HTML_FILE, SKATER_DATA_FILE, TEAM_DATA_FILE};
use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_stem;
use crate::csv::{report, sheets};
use crate::error::Error;
use crate::html::html_report;
use crate::records::ParsedGame;

static PARTITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"20\d\d-[0-1]?\d-[0-3]?\d_(\d+)").expect("valid partition regex")
});

pub fn ensure_directory(dir: &Path) -> Result<(), Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!("Path exists but is not a directory: {}", dir.display())).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// `2026-2-14_1771099200000`: unpadded local date, then epoch millis.
pub fn partition_name(at: NaiveDateTime) -> String {
    format!("{}-{}-{}_{}", at.year(), at.month(), at.day(), at.and_utc().timestamp_millis())
}

/// Inverse of [`partition_name`]; the millis are authoritative.
pub fn parse_partition_name(name: &str) -> Option<NaiveDateTime> {
    let millis: i64 = PARTITION_RE.captures(name)?.get(1)?.as_str().parse().ok()?;
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// Output stem for a recap file, deduplicated **only within this run**:
/// first `game`, then `game (2)`, `game (3)`, ...
pub fn resolve_stem(recap: &Path, seen_names: &mut HashMap<String, usize>) -> String {
    let raw = recap.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let stem = sanitize_stem(&raw);
    let count = seen_names.entry(stem.clone()).or_insert(0);
    let name = if *count == 0 { stem } else { format!("{stem} ({})", *count + 1) };
    *count += 1;
    name
}

/// Write one game under `<out_dir>/<stem>/<partition>/`: the three sheets
/// plus the human-readable report as text and HTML tables. Returns the partition directory.
pub fn write_game(
    export: &ExportOptions,
    out_dir: &Path,
    stem: &str,
    at: NaiveDateTime,
    game: &ParsedGame,
) -> Result<PathBuf, Error> {
    let dir = out_dir.join(stem).join(partition_name(at));
    ensure_directory(&dir)?;

    let s = sheets(game, export.include_headers, export.format)?;
    fs::write(dir.join(SKATER_DATA_FILE), s.skaters)?;
    fs::write(dir.join(GOALIE_DATA_FILE), s.goalies)?;
    fs::write(dir.join(TEAM_DATA_FILE), s.team)?;
    fs::write(dir.join(REPORT_FILE), report(game)?)?;
    fs::write(dir.join(REPORT_HTML_FILE), html_report(game))?;

    logd!("Wrote {}", dir.display());
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 14).unwrap().and_hms_milli_opt(20, 15, 30, 250).unwrap()
    }

    #[test]
    fn partition_names_round_trip() {
        let name = partition_name(at());
        assert!(name.starts_with("2026-2-14_"));
        assert_eq!(parse_partition_name(&name), Some(at()));
        assert_eq!(parse_partition_name(&format!("out/game/{name}")), Some(at()));
    }

    #[test]
    fn malformed_partitions() {
        assert_eq!(parse_partition_name("2026-2-14"), None);
        assert_eq!(parse_partition_name("recap"), None);
    }

    #[test]
    fn stems_dedupe_within_a_run() {
        let mut seen = HashMap::new();
        assert_eq!(resolve_stem(Path::new("a/game night.txt"), &mut seen), "game_night");
        assert_eq!(resolve_stem(Path::new("b/game night.txt"), &mut seen), "game_night (2)");
        assert_eq!(resolve_stem(Path::new("other.txt"), &mut seen), "other");
    }

    #[test]
    fn ensure_directory_refuses_files() {
        let dir = std::env::temp_dir().join("hockey_recap_file_not_dir");
        let _ = fs::remove_dir_all(&dir);
        let _ = fs::remove_file(&dir);
        fs::write(&dir, "x").unwrap();
        assert!(ensure_directory(&dir).is_err());
        fs::remove_file(&dir).unwrap();
    }
}
