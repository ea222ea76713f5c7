// src/runner.rs
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::{
    config::options::{ExportOptions, ParseOptions},
    csv::report,
    error::Error,
    file::{resolve_stem, write_game},
    parse::Parser,
    progress::Progress,
    records::ParsedGame,
    resolve::Resolver,
    roster::RosterIndex,
};

/// Everything a batch shares across files.
pub struct Batch<'a> {
    pub roster: &'a RosterIndex,
    pub parse: &'a ParseOptions,
    pub export: &'a ExportOptions,
    /// Wall clock for relative dates and partition names
    pub now: NaiveDateTime,
}

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub parsed: Vec<PathBuf>,
    /// Partition directories, when writing to disk
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Parse one recap file.
pub fn parse_file<R: Resolver + ?Sized>(batch: &Batch<'_>, path: &Path, resolver: &mut R) -> Result<ParsedGame, Error> {
    let file = File::open(path).map_err(|e| Error::parse(path, e.into()))?;
    Parser::new(batch.roster, batch.parse, batch.now, resolver)
        .parse_reader(BufReader::new(file))
        .map_err(|e| Error::parse(path, e))
}

/// Parse each file in order. A failure is logged, reported, and skipped;
/// nothing from a failed file reaches the output.
///
/// Without an output directory each report is written to `out`.
pub fn run_batch<R, W>(
    batch: &Batch<'_>,
    files: &[PathBuf],
    resolver: &mut R,
    out: &mut W,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary
where
    R: Resolver + ?Sized,
    W: Write + ?Sized,
{
    let mut summary = RunSummary::default();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(files.len());
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    for path in files {
        logf!("Parsing {}", path.display());
        let outcome = parse_file(batch, path, resolver).and_then(|game| emit(batch, path, &game, out, &mut seen));

        match outcome {
            Ok(written) => {
                summary.parsed.push(path.clone());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(path);
                    if let Some(dir) = &written {
                        p.log(&format!("Wrote {}", dir.display()));
                    }
                }
                summary.written.extend(written);
            }
            Err(e) => {
                loge!("Skipping {}: {e}", path.display());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(path, &e);
                }
                summary.failed.push((path.clone(), e.to_string()));
            }
        }
    }

    logf!("Parsed {} of {} recap(s)", summary.parsed.len(), files.len());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}

fn emit<W: Write + ?Sized>(
    batch: &Batch<'_>,
    path: &Path,
    game: &ParsedGame,
    out: &mut W,
    seen: &mut HashMap<String, usize>,
) -> Result<Option<PathBuf>, Error> {
    match &batch.export.out_dir {
        Some(dir) => {
            let stem = resolve_stem(path, seen);
            write_game(batch.export, dir, &stem, batch.now, game).map(Some)
        }
        None => {
            writeln!(out, "{}", report(game)?)?;
            Ok(None)
        }
    }
}
