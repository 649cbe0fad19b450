//! Line commands understood by `able chat`.
//!
//! Plain lines are queries. Lines starting with `/` are commands; IDs are the
//! numbers shown in the transcript (`## [id]` for messages, `#### n.` for
//! steps, `- [n]` for suggested replies).

use std::{path::PathBuf, str::FromStr};

pub const HELP: &str = "\
**Commands**
/approve <msg> <step>       approve a pending step
/skip <msg> <step>          skip a pending step
/edit <msg> <step> <text>   replace a step's description
/approve-all <msg>          approve every pending step
/execute <msg>              run the plan
/reply <msg> <n>            pick suggested reply n
/export <path>              write the transcript (.json, .md or .html)
/show                       print the transcript
/help                       show this help
/quit                       leave the chat
Anything else is sent as a query. An empty line sends the prefilled reply.
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Query(String),
    Approve { message_id: u64, step_id: u64 },
    Skip { message_id: u64, step_id: u64 },
    Edit { message_id: u64, step_id: u64, text: String },
    ApproveAll { message_id: u64 },
    Execute { message_id: u64 },
    /// `number` is 1-based, as displayed
    Reply { message_id: u64, number: usize },
    Export { path: PathBuf },
    Show,
    Help,
    Quit,
    /// A blank line
    Empty,
}

fn id<T: FromStr>(value: Option<&str>, name: &str) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("missing <{name}>"))?;
    value
        .parse()
        .map_err(|_| format!("<{name}> must be a number, got '{value}'"))
}

impl FromStr for ReplCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ReplCommand::Empty);
        }
        let Some(command) = line.strip_prefix('/') else {
            return Ok(ReplCommand::Query(line.to_string()));
        };

        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, rest)| (name, rest.trim_start()));
        let mut parts = rest.split_whitespace();

        let parsed = match name {
            "approve" => ReplCommand::Approve {
                message_id: id(parts.next(), "msg")?,
                step_id: id(parts.next(), "step")?,
            },
            "skip" => ReplCommand::Skip {
                message_id: id(parts.next(), "msg")?,
                step_id: id(parts.next(), "step")?,
            },
            "edit" => {
                let mut fields = rest.splitn(3, char::is_whitespace);
                let message_id = id(fields.next(), "msg")?;
                let step_id = id(fields.next(), "step")?;
                let text = fields.next().map(str::trim).unwrap_or_default();
                if text.is_empty() {
                    return Err("missing <text>".to_string());
                }
                ReplCommand::Edit {
                    message_id,
                    step_id,
                    text: text.to_string(),
                }
            }
            "approve-all" => ReplCommand::ApproveAll {
                message_id: id(parts.next(), "msg")?,
            },
            "execute" | "run" => ReplCommand::Execute {
                message_id: id(parts.next(), "msg")?,
            },
            "reply" => ReplCommand::Reply {
                message_id: id(parts.next(), "msg")?,
                number: id(parts.next(), "n")?,
            },
            "export" => {
                if rest.is_empty() {
                    return Err("missing <path>".to_string());
                }
                ReplCommand::Export {
                    path: PathBuf::from(rest),
                }
            }
            "show" => ReplCommand::Show,
            "help" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            other => return Err(format!("unknown command '/{other}', try /help")),
        };
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_query() {
        assert_eq!(
            "  Scan AI in logistics ".parse(),
            Ok(ReplCommand::Query("Scan AI in logistics".to_string()))
        );
        assert_eq!("   ".parse(), Ok(ReplCommand::Empty));
    }

    #[test]
    fn test_step_commands() {
        assert_eq!(
            "/approve 2 3".parse(),
            Ok(ReplCommand::Approve {
                message_id: 2,
                step_id: 3
            })
        );
        assert_eq!(
            "/skip 2 4".parse(),
            Ok(ReplCommand::Skip {
                message_id: 2,
                step_id: 4
            })
        );
        assert_eq!(
            "/approve-all 2".parse(),
            Ok(ReplCommand::ApproveAll { message_id: 2 })
        );
    }

    #[test]
    fn test_edit_keeps_spacing_in_text() {
        assert_eq!(
            "/edit 2 1 Focus on  EU carriers".parse(),
            Ok(ReplCommand::Edit {
                message_id: 2,
                step_id: 1,
                text: "Focus on  EU carriers".to_string()
            })
        );
        assert!("/edit 2 1".parse::<ReplCommand>().is_err());
    }

    #[test]
    fn test_bad_arguments() {
        let err = "/approve two 1".parse::<ReplCommand>().unwrap_err();
        assert!(err.contains("<msg> must be a number"));
        assert!("/approve 2".parse::<ReplCommand>().is_err());
        assert!("/frobnicate".parse::<ReplCommand>().is_err());
        assert!("/export".parse::<ReplCommand>().is_err());
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!("/show".parse(), Ok(ReplCommand::Show));
        assert_eq!("/help".parse(), Ok(ReplCommand::Help));
        assert_eq!("/quit".parse(), Ok(ReplCommand::Quit));
        assert_eq!(
            "/export out/session.md".parse(),
            Ok(ReplCommand::Export {
                path: PathBuf::from("out/session.md")
            })
        );
    }
}
