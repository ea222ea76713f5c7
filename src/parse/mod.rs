// src/parse/mod.rs
//! # Recap parsing
//!
//! Turns a free-form game recap into one [`ParsedGame`](crate::records::ParsedGame):
//! a team line plus at most one record per skater and per goalie.
//!
//! ## What lives here
//! - **Line classifiers**: date lines (`date`), the score line (`result`),
//!   roster mentions (`mentions`).
//! - **Named field rules** (`rules`), one per statistic, and the per-shape
//!   extractors built from them (`skater`, `goalie`).
//! - **Duplicate handling** (`conflict`): the keep-first / keep-second /
//!   combine choice and the typed merge behind "combine".
//! - **The fold** (`machine`) that sequences all of the above line by line.
//!
//! ## What does **not** live here
//! - **Prompting**: anything a line cannot answer goes through
//!   [`Resolver`](crate::resolve::Resolver); nothing in `parse` touches a terminal.
//! - **Files and output**: roster loading, CSV and the report belong to
//!   `roster`, `csv` and `file`.
//!
//! ## Typical call chain
//! ```text
//! runner → Parser::parse_reader → step (per line)
//!                                   ├─ date::parse_date_line
//!                                   ├─ result::parse_result_line → Resolver (gaps)
//!                                   └─ mentions::scan_mentions
//!                                        → skater / goalie extract
//!                                        → Resolver::conflict on duplicates
//! ```
//!
//! ## Conventions & invariants
//! - Phases only move forward; a line is read by the current phase only.
//! - Missing optional numbers are zero (skaters) or come from the team line
//!   (goalie goals-against). They never fail a parse.
//! - `sv + ga == shots` for every goalie record, merged or not.

pub mod conflict;
pub mod date;
pub mod goalie;
pub mod machine;
pub mod mentions;
pub mod result;
pub mod rules;
pub mod skater;

pub use conflict::{Merge, Resolution};
pub use machine::{finish, GameState, Parser};
