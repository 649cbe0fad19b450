//! Able CLI Application
//!
//! Command-line front end for the plan-driven research assistant.

mod args;
mod cli;
mod repl;
mod renderer;

use able_core::{Pacing, SessionBuilder};
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        instant,
        command,
    } = Args::parse();

    let mut builder = SessionBuilder::new().with_config_path(config);
    if instant {
        builder = builder.with_pacing(Pacing::instant());
    }
    let session = builder.build().context("Failed to initialize session")?;

    let cli = Cli::new(session, TerminalRenderer::new(!no_color));

    info!("Able started");

    match command {
        Some(Plan(args)) => cli.preview_plan(args),
        Some(Run(args)) => cli.run(args).await,
        Some(Chat(args)) => cli.chat(args).await,
        None => cli.show_starters(),
    }
}
