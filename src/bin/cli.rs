// src/bin/cli.rs
use hockey_recap::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
