use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ChatArgs, PlanArgs, RunArgs};

/// Plan-driven research assistant for the terminal
///
/// Able turns a research question into a multi-step plan. Review the steps,
/// approve, edit or skip them, then let Able run the plan and report back.
#[derive(Parser)]
#[command(version, about, name = "able")]
pub struct Args {
    /// Path to a JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/able/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip every simulated delay
    #[arg(long, global = true)]
    pub instant: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Able CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Preview the plan a query would produce
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Run one query end to end: plan, review, execute
    #[command(alias = "r")]
    Run(RunArgs),
    /// Start an interactive chat session
    #[command(alias = "c")]
    Chat(ChatArgs),
}
