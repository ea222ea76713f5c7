// src/cli.rs
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{bail, Result, WrapErr};

use crate::config::consts::{DEFAULT_GAME_TYPE, DEFAULT_RANK, DEFAULT_SESSION};
use crate::config::options::{ExportOptions, GameType, ParseOptions, RosterPaths};
use crate::error::Error;
use crate::progress::Progress;
use crate::resolve::{RejectingResolver, Resolver, TerminalResolver};
use crate::roster::RosterIndex;
use crate::runner::{run_batch, Batch};

#[derive(Parser, Debug)]
#[command(name = "hockey_recap", version)]
#[command(about = "Turn hockey game recaps into skater, goalie and team stat sheets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse one or more recap files
    Parse(ParseArgs),
}

#[derive(Args, Debug)]
struct ParseArgs {
    /// Recap text files, processed in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output debug level
    #[arg(short, long)]
    debug: bool,

    /// Output directory. If not given, reports go to standard out.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Type of session [Regular|Playoff]
    #[arg(long, default_value = DEFAULT_GAME_TYPE)]
    game_type: GameType,

    /// The description of the session
    #[arg(long, default_value = DEFAULT_SESSION)]
    session: String,

    /// The team's rank for the session
    #[arg(long, default_value = DEFAULT_RANK)]
    session_rank: String,

    /// Skater roster JSON (fragment -> player)
    #[arg(long)]
    skaters: Option<PathBuf>,

    /// Goalie roster JSON (fragment -> player)
    #[arg(long)]
    goalies: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    logfile: Option<PathBuf>,

    /// Fail a recap instead of prompting when it needs a decision
    #[arg(long)]
    non_interactive: bool,
}

/// Status lines on stderr so stdout stays clean for reports.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        if total > 1 {
            eprintln!("Parsing {total} recaps");
        }
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_failed(&mut self, path: &Path, err: &Error) {
        eprintln!("Skipped {}: {err}", path.display());
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Parse(args) => parse(args),
    }
}

fn parse(args: ParseArgs) -> Result<()> {
    crate::log::init(args.debug, args.logfile.as_deref()).wrap_err("could not open log file")?;

    let defaults = RosterPaths::default();
    let paths = RosterPaths {
        skaters: args.skaters.unwrap_or(defaults.skaters),
        goalies: args.goalies.unwrap_or(defaults.goalies),
    };
    let roster = RosterIndex::load(&paths).wrap_err("could not load roster")?;
    if roster.is_empty() {
        bail!("roster is empty: {} / {}", paths.skaters.display(), paths.goalies.display());
    }

    let parse = ParseOptions {
        session: args.session,
        game_type: args.game_type,
        rank: args.session_rank,
    };
    let export = ExportOptions { out_dir: args.output, ..ExportOptions::default() };
    let batch = Batch { roster: &roster, parse: &parse, export: &export, now: Local::now().naive_local() };

    let mut resolver: Box<dyn Resolver> = if args.non_interactive {
        Box::new(RejectingResolver)
    } else {
        Box::new(TerminalResolver::stdio())
    };

    // Prompts and reports share stdout, so no long-held lock here.
    let mut out = io::stdout();
    let mut progress = StderrProgress;
    let summary = run_batch(
        &batch,
        &args.files,
        resolver.as_mut(),
        &mut out,
        Some(&mut progress as &mut dyn Progress),
    );
    out.flush()?;

    if !summary.failed.is_empty() {
        logw!("{} recap(s) failed", summary.failed.len());
    }
    Ok(())
}
