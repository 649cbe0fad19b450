//! Command handlers and their clap argument types.
//!
//! Each subcommand gets an `Args` struct with clap derives; [`Cli`] turns
//! those into calls on the core [`Session`] and renders the outcome through
//! the [`TerminalRenderer`]. Rejected review actions are reported, not
//! treated as failures.

use std::path::PathBuf;

use able_core::{
    planning::generate_plan, ActionOutcome, Continuation, ExportFormat, ReplyAction, Session,
    STARTERS,
};
use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    renderer::TerminalRenderer,
    repl::{ReplCommand, HELP},
};

/// Preview the plan a query would produce
///
/// Nothing is executed and no session state is kept; this only shows which
/// plan template the query selects.
#[derive(Args)]
pub struct PlanArgs {
    /// The research question
    pub query: String,
}

/// Run one query end to end
///
/// Submits the query, waits for the plan, applies the requested skips and
/// approvals (in that order), executes the plan when at least one step is
/// approved and prints the resulting transcript.
#[derive(Args)]
pub struct RunArgs {
    /// The research question
    pub query: String,
    /// Approve every step that is still pending
    #[arg(long)]
    pub approve_all: bool,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Step numbers to approve, as a comma-separated list"
    )]
    pub approve: Vec<u64>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Step numbers to skip, as a comma-separated list"
    )]
    pub skip: Vec<u64>,
    /// Write the final transcript to this file
    #[arg(long)]
    pub export: Option<PathBuf>,
    #[arg(
        long,
        value_enum,
        requires = "export",
        help = "Export format; guessed from the file extension when omitted"
    )]
    pub format: Option<FormatArg>,
}

/// Start an interactive chat session
///
/// Reads commands line by line from stdin. Type /help inside the chat for the
/// list of commands.
#[derive(Args)]
pub struct ChatArgs {
    /// Query handed over from the home screen, sent once on start
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Command-line representation of the export formats
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Markdown,
    Html,
}

impl From<FormatArg> for ExportFormat {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Markdown => ExportFormat::Markdown,
            FormatArg::Html => ExportFormat::Html,
        }
    }
}

pub struct Cli {
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    /// Empty-state screen: what Able does and how to start.
    pub fn show_starters(&self) -> Result<()> {
        let mut output = String::from(
            "# Able\n\nAsk a research question and get a plan you can review before it runs.\n\n**Try:**\n",
        );
        for starter in STARTERS {
            output.push_str(&format!("- {}...\n", starter.trim_end()));
        }
        output.push_str("\nRun `able chat` to start a conversation or `able run <query>` for a one-shot run.\n");
        self.renderer.render(&output)
    }

    pub fn preview_plan(&self, args: PlanArgs) -> Result<()> {
        if args.query.trim().is_empty() {
            bail!("Query must not be blank");
        }
        let plan = generate_plan(&args.query).into_plan();
        self.renderer.render(&plan.to_string())
    }

    pub async fn run(&self, args: RunArgs) -> Result<()> {
        let Some(composing) = self.session.submit_query(&args.query).await else {
            bail!("Query must not be blank");
        };
        let plan_id = self
            .settle(composing)
            .await?
            .context("Plan generation was interrupted")?;

        for step_id in &args.skip {
            self.skip(plan_id, *step_id).await?;
        }
        for step_id in &args.approve {
            self.approve(plan_id, *step_id).await?;
        }
        if args.approve_all {
            self.approve_all(plan_id).await?;
        }

        match self.session.execute_plan(plan_id).await {
            Some(execution) => {
                self.settle(execution).await?;
            }
            None => self.report(ActionOutcome::ignored(
                "No approved steps, the plan was not executed",
            ))?,
        }

        self.renderer.render(&self.session.snapshot().await.to_string())?;

        if let Some(path) = args.export {
            let format = args
                .format
                .map_or_else(|| ExportFormat::from_path(&path), Into::into);
            self.session
                .export(format, &path)
                .await
                .with_context(|| format!("Failed to export to {}", path.display()))?;
            self.report(ActionOutcome::applied(format!(
                "Exported transcript to {}",
                path.display()
            )))?;
        }
        Ok(())
    }

    pub async fn chat(&self, args: ChatArgs) -> Result<()> {
        self.show_starters()?;
        self.renderer.line("Type /help for commands.")?;

        if let Some(query) = args.query {
            if let Some(composing) = self.session.submit_initial_query(&query).await {
                self.renderer.render(&format!("Sending \"{}\"...\n", query.trim()))?;
                let before = self.session.snapshot().await.len();
                self.settle(composing).await?;
                self.render_since(before).await?;
            }
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut prefill: Option<String> = None;
        loop {
            // A Ctrl-C during a wait shuts the session down; stop reading then.
            if self.session.is_shut_down() {
                self.renderer.line("Interrupted.")?;
                break;
            }
            let line = tokio::select! {
                line = lines.next_line() => line.context("Failed to read input")?,
                _ = tokio::signal::ctrl_c() => None,
            };
            let Some(line) = line else { break };

            match line.parse::<ReplCommand>() {
                Ok(ReplCommand::Quit) => break,
                Ok(command) => self.dispatch(command, &mut prefill).await?,
                Err(e) => self.renderer.line(&format!("Error: {e}"))?,
            }
        }

        self.session.shutdown();
        debug!("Chat ended");
        Ok(())
    }

    async fn dispatch(&self, command: ReplCommand, prefill: &mut Option<String>) -> Result<()> {
        match command {
            ReplCommand::Empty => {
                if let Some(text) = prefill.take() {
                    self.query(&text).await?;
                }
            }
            ReplCommand::Query(text) => {
                prefill.take();
                self.query(&text).await?;
            }
            ReplCommand::Approve {
                message_id,
                step_id,
            } => self.approve(message_id, step_id).await?,
            ReplCommand::Skip {
                message_id,
                step_id,
            } => self.skip(message_id, step_id).await?,
            ReplCommand::Edit {
                message_id,
                step_id,
                text,
            } => {
                let edited = self
                    .session
                    .edit_step_description(message_id, step_id, &text)
                    .await;
                self.report(ActionOutcome::from_bool(
                    edited,
                    format!("Updated step {step_id} of message {message_id}"),
                    format!("Message {message_id} has no step {step_id}"),
                ))?;
            }
            ReplCommand::ApproveAll { message_id } => self.approve_all(message_id).await?,
            ReplCommand::Execute { message_id } => self.execute(message_id).await?,
            ReplCommand::Reply { message_id, number } => {
                let action = match number.checked_sub(1) {
                    Some(index) => self.session.select_reply(message_id, index).await,
                    None => None,
                };
                match action {
                    Some(ReplyAction::Prefill(text)) => {
                        self.renderer
                            .line(&format!("Input: {text} (press Enter to send)"))?;
                        *prefill = Some(text);
                    }
                    Some(ReplyAction::SaveToProject) => {
                        self.report(ActionOutcome::from_bool(
                            self.session.can_save_to_project().await,
                            "Saved conversation to project",
                            "Nothing to save yet",
                        ))?;
                    }
                    None => self.report(ActionOutcome::ignored(format!(
                        "Message {message_id} has no reply {number}"
                    )))?,
                }
            }
            ReplCommand::Export { path } => {
                let format = ExportFormat::from_path(&path);
                match self.session.export(format, &path).await {
                    Ok(()) => self.report(ActionOutcome::applied(format!(
                        "Exported transcript to {}",
                        path.display()
                    )))?,
                    Err(e) => self.renderer.line(&format!("Error: {e}"))?,
                }
            }
            ReplCommand::Show => {
                self.renderer.render(&self.session.snapshot().await.to_string())?;
            }
            ReplCommand::Help => self.renderer.render(HELP)?,
            ReplCommand::Quit => {}
        }
        Ok(())
    }

    async fn query(&self, text: &str) -> Result<()> {
        let Some(composing) = self.session.submit_query(text).await else {
            return Ok(());
        };
        // The user's own line is already on screen.
        let before = self.session.snapshot().await.len();
        self.renderer.line("Thinking...")?;
        self.settle(composing).await?;
        self.render_since(before).await
    }

    async fn approve(&self, message_id: u64, step_id: u64) -> Result<()> {
        let approved = self.session.approve_step(message_id, step_id).await;
        self.report(ActionOutcome::from_bool(
            approved,
            format!("Approved step {step_id} of message {message_id}"),
            format!("Step {step_id} of message {message_id} is not pending review"),
        ))
    }

    async fn skip(&self, message_id: u64, step_id: u64) -> Result<()> {
        let skipped = self.session.skip_step(message_id, step_id).await;
        self.report(ActionOutcome::from_bool(
            skipped,
            format!("Skipped step {step_id} of message {message_id}"),
            format!("Step {step_id} of message {message_id} is not pending review"),
        ))
    }

    async fn approve_all(&self, message_id: u64) -> Result<()> {
        let count = self.session.approve_all_pending(message_id).await;
        self.report(ActionOutcome::from_bool(
            count > 0,
            format!("Approved {count} pending steps of message {message_id}"),
            format!("Message {message_id} has no pending steps to approve"),
        ))
    }

    async fn execute(&self, message_id: u64) -> Result<()> {
        let Some(execution) = self.session.execute_plan(message_id).await else {
            return self.report(ActionOutcome::ignored(format!(
                "Plan in message {message_id} cannot run, approve at least one step first"
            )));
        };
        let before = self.session.snapshot().await.len();
        self.renderer.line("Running plan...")?;
        self.settle(execution).await?;

        let transcript = self.session.snapshot().await;
        if let Some(message) = transcript.get(message_id) {
            self.renderer.render(&message.to_string())?;
        }
        self.render_since(before).await
    }

    /// Waits for a continuation. Ctrl-C shuts the session down instead of
    /// killing the process, so the transcript stays printable.
    async fn settle(&self, continuation: Continuation<Option<u64>>) -> Result<Option<u64>> {
        tokio::select! {
            result = continuation.wait() => Ok(result?),
            _ = tokio::signal::ctrl_c() => {
                self.session.shutdown();
                Ok(None)
            }
        }
    }

    async fn render_since(&self, index: usize) -> Result<()> {
        let transcript = self.session.snapshot().await;
        for message in transcript.messages().iter().skip(index) {
            self.renderer.render(&message.to_string())?;
        }
        Ok(())
    }

    fn report(&self, outcome: ActionOutcome) -> Result<()> {
        self.renderer.render(&outcome.to_string())
    }
}
