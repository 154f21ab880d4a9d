#![forbid(unsafe_code)]

//! JSONL output for scripts
//!
//! Each invocation emits exactly one line:
//! `{"type":"command","site":"github","action":"pull","url":"df/pull/7"}`

use crate::command::WebCommand;
use serde::Serialize;

/// Formats commands as JSON Lines
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the command as one JSON object followed by a newline
    pub fn format(&self, command: &WebCommand) -> Result<String, serde_json::Error> {
        let record = CommandRecord {
            record_type: "command",
            site: command.site(),
            action: command.action(),
            url: command.url(),
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');
        Ok(line)
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct CommandRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    site: &'a str,
    action: &'a str,
    url: &'a str,
}
