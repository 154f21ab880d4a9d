#![forbid(unsafe_code)]

//! Site adapters that turn argument tokens into URLs

pub mod apidock;
pub mod github;
pub mod web;

pub use apidock::{ApiDock, ApidockAction, Subsite};
pub use github::{Github, GithubAction};
pub use web::Web;

use crate::command::WebCommand;
use thiserror::Error;

/// Errors for arguments that cannot be mapped to a URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// `gh` was called without a repository abbreviation
    #[error("missing repository abbreviation (usage: gh <repo> [command] [args...])")]
    MissingRepo,

    /// A command received more or fewer parameters than it accepts
    #[error("{site} {action} expects {expected} argument(s), got {got}")]
    ArgumentCount {
        site: &'static str,
        action: &'static str,
        expected: &'static str,
        got: usize,
    },
}

/// A site-specific dispatcher
///
/// Implementations read the leading tokens to choose a command and use the
/// rest as its parameters. Unrecognized dispatch tokens are not errors: each
/// site falls back to a default action.
pub trait Site {
    fn name(&self) -> &'static str;

    fn generate_command(&self, args: &[String]) -> Result<WebCommand, UsageError>;
}

/// Strips trailing slashes so templates can join with `/`
pub(crate) fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
