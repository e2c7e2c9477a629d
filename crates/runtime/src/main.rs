#![deny(clippy::all, clippy::pedantic)]
//! # Ship Demo
//!
//! A raymarched spaceship on the XY plane. Arrow keys turn and thrust; the
//! mouse orbits the camera. `--headless` simulates without a window and saves
//! the final frame as a PNG.

mod app;
mod cli;
mod watcher;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = cli::Cli::parse();
    tracing::debug!(?cli, "parsed arguments");
    app::run(&cli)
}
