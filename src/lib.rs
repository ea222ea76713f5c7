// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod file;
pub mod html;
pub mod parse;
pub mod progress;
pub mod records;
pub mod resolve;
pub mod roster;
pub mod runner;
