//! Transcript export to JSON, Markdown or HTML.

use std::{fs, path::Path, str::FromStr};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    error::{IoResultExt, Result},
    markup,
    models::MessageRole,
    transcript::Transcript,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// The serialized transcript
    #[default]
    Json,

    /// The transcript's Display output
    Markdown,

    /// A standalone HTML page; message text is escaped
    Html,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" => Ok(ExportFormat::Html),
            _ => Err(format!("Invalid export format: {s}")),
        }
    }
}

impl ExportFormat {
    /// Guesses the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .unwrap_or_default()
    }
}

/// Renders the transcript in `format`.
///
/// # Errors
///
/// Returns `SessionError::Serialization` if JSON encoding fails
pub fn render(transcript: &Transcript, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(transcript)?),
        ExportFormat::Markdown => Ok(transcript.to_string()),
        ExportFormat::Html => Ok(render_html(transcript)),
    }
}

/// Renders and writes the transcript to `path`.
pub fn write_transcript(transcript: &Transcript, format: ExportFormat, path: &Path) -> Result<()> {
    let contents = render(transcript, format)?;
    fs::write(path, contents).fs_context(path)?;
    info!(
        "Exported {} messages to {} as {format:?}",
        transcript.len(),
        path.display()
    );
    Ok(())
}

fn render_html(transcript: &Transcript) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<body>\n");
    for message in transcript.messages() {
        html.push_str(&format!(
            "<section class=\"{}\" id=\"message-{}\">\n",
            message.role.as_str(),
            message.id
        ));
        html.push_str(&format!("<p>{}</p>\n", markup::to_html(&message.text)));

        if let Some(plan) = &message.plan {
            html.push_str(&format!(
                "<h3>{} ({})</h3>\n<ol>\n",
                markup::escape_html(&plan.title),
                plan.status.as_str()
            ));
            for step in &plan.steps {
                html.push_str(&format!(
                    "<li class=\"{}\"><strong>{}</strong> {}",
                    step.status.as_str(),
                    markup::escape_html(&step.title),
                    markup::escape_html(&step.description)
                ));
                if let Some(result) = &step.result {
                    html.push_str(&format!("<br/><em>{}</em>", markup::escape_html(result)));
                }
                html.push_str("</li>\n");
            }
            html.push_str("</ol>\n");
        }

        if message.role == MessageRole::Assistant && !message.suggested_replies.is_empty() {
            html.push_str("<ul class=\"replies\">\n");
            for reply in &message.suggested_replies {
                html.push_str(&format!("<li>{}</li>\n", markup::escape_html(reply)));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</section>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}
