#![forbid(unsafe_code)]

//! GitHub adapter
//!
//! `gh <repo> [command] [args...]`. The first token names the repository;
//! the second selects a command from the table below. Any other second
//! token is taken to be a commit hash.
//!
//! | token                   | command | urls                                        |
//! |-------------------------|---------|---------------------------------------------|
//! | (none)                  | repo    | `<repo>`                                    |
//! | `c`, `commit`, `commits`| commit  | `<repo>/commits`, `<repo>/commit/<hash>`    |
//! | `p`, `pull`, `pulls`    | pull    | `<repo>/pulls`, `<repo>/pull/<n>`, `<repo>/pulls/<author>` |
//! | `r`, `ref`              | ref     | `<repo>/tree/<ref>`                         |
//! | `pa`, `path`            | path    | `<repo>/tree/<ref>/<path>`                  |
//! | `f`, `file`             | file    | `<repo>/blob/<ref>/<path>`                  |
//! | `d`, `diff`, `pr`       | diff    | `<repo>/compare/<ref>`, `<repo>/compare/<start>...<end>` |
//! | `h`, `history`          | history | `<repo>/commits/<ref>/<path>`               |
//! | `b`, `blame`            | blame   | `<repo>/blame/<ref>/<path>`                 |
//!
//! `path` and `file` accept a trailing `history` (and `file` a trailing
//! `blame`) to jump to that view of the same path.

use super::{Site, UsageError};
use crate::command::WebCommand;
use crate::cursor::ArgCursor;
use crate::refs::{IdentityExpander, RefExpander};
use std::collections::BTreeMap;
use std::slice;

pub const DEFAULT_BRANCH: &str = "master";

const HISTORY_TOKENS: &[&str] = &["h", "history"];
const BLAME_TOKENS: &[&str] = &["b", "blame"];

const ACTIONS: &[(&str, GithubAction)] = &[
    ("c", GithubAction::Commit),
    ("commit", GithubAction::Commit),
    ("commits", GithubAction::Commit),
    ("p", GithubAction::Pull),
    ("pull", GithubAction::Pull),
    ("pulls", GithubAction::Pull),
    ("r", GithubAction::Ref),
    ("ref", GithubAction::Ref),
    ("pa", GithubAction::Path),
    ("path", GithubAction::Path),
    ("f", GithubAction::File),
    ("file", GithubAction::File),
    ("d", GithubAction::Diff),
    ("diff", GithubAction::Diff),
    ("pr", GithubAction::Diff),
    ("h", GithubAction::History),
    ("history", GithubAction::History),
    ("b", GithubAction::Blame),
    ("blame", GithubAction::Blame),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GithubAction {
    OpenRepo,
    Commit,
    Pull,
    Ref,
    Path,
    File,
    Diff,
    History,
    Blame,
}

impl GithubAction {
    /// Looks up the command selected by a dispatch token
    pub fn from_token(token: &str) -> Option<Self> {
        ACTIONS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, action)| *action)
    }

    /// Short name reported with the resolved command
    pub fn name(self) -> &'static str {
        match self {
            GithubAction::OpenRepo => "repo",
            GithubAction::Commit => "commit",
            GithubAction::Pull => "pull",
            GithubAction::Ref => "ref",
            GithubAction::Path => "path",
            GithubAction::File => "file",
            GithubAction::Diff => "diff",
            GithubAction::History => "history",
            GithubAction::Blame => "blame",
        }
    }

    /// Resolves trailing `history`/`blame` modifiers on `path` and `file`
    ///
    /// Returns the action that should actually run together with the
    /// parameters left once the modifier is dropped.
    fn resolve_alias(self, params: &[String]) -> (GithubAction, &[String]) {
        match (self, params.split_last()) {
            (GithubAction::Path | GithubAction::File, Some((last, rest)))
                if HISTORY_TOKENS.contains(&last.as_str()) =>
            {
                (GithubAction::History, rest)
            }
            (GithubAction::File, Some((last, rest))) if BLAME_TOKENS.contains(&last.as_str()) => {
                (GithubAction::Blame, rest)
            }
            _ => (self, params),
        }
    }
}

/// Whether a pull argument names a pull number rather than an author
///
/// Mirrors integer-prefix conversion: leading ASCII whitespace and a sign
/// are skipped, then the leading run of digits is read, where a single `_`
/// between two digits is a separator. The token counts as a number only if
/// that run is non-zero, so `"0"` is treated as an author.
pub fn is_pull_number(token: &str) -> bool {
    let trimmed = token.trim_start_matches(is_integer_space);
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    let chars: Vec<char> = unsigned.chars().collect();
    let mut nonzero = false;
    for (i, &c) in chars.iter().enumerate() {
        match c {
            '0'..='9' => nonzero |= c != '0',
            '_' if i > 0 && chars.get(i + 1).is_some_and(char::is_ascii_digit) => {}
            _ => break,
        }
    }
    nonzero
}

/// Whitespace skipped before an integer: space, `\t`, `\n`, `\v`, `\f`, `\r`
fn is_integer_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Dispatcher for GitHub repositories
pub struct Github {
    repos: BTreeMap<String, String>,
    default_branch: String,
    expander: Box<dyn RefExpander>,
}

impl Github {
    /// Creates a dispatcher with the given abbreviation table and default branch
    ///
    /// Abbreviations missing from `repos` are used as the repository URL as-is.
    pub fn new(repos: BTreeMap<String, String>, default_branch: impl Into<String>) -> Self {
        Github {
            repos,
            default_branch: default_branch.into(),
            expander: Box::new(IdentityExpander),
        }
    }

    /// Replaces the ref expander used for ref, path, and diff arguments
    pub fn with_expander(mut self, expander: Box<dyn RefExpander>) -> Self {
        self.expander = expander;
        self
    }

    /// Maps a repository abbreviation to its base URL
    ///
    /// Unknown abbreviations are returned unchanged.
    pub fn resolve_repo(&self, abbr: &str) -> String {
        match self.repos.get(abbr) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => abbr.to_string(),
        }
    }

    fn expand_ref(&self, token: &String) -> String {
        self.expander.expand(slice::from_ref(token))
    }

    fn arity_error(&self, action: GithubAction, expected: &'static str, got: usize) -> UsageError {
        UsageError::ArgumentCount {
            site: self.name(),
            action: action.name(),
            expected,
            got,
        }
    }

    /// Splits `[path]` or `[ref, path]`
    fn ref_and_path<'a>(
        &self,
        action: GithubAction,
        params: &'a [String],
    ) -> Result<(String, &'a str), UsageError> {
        match params {
            [path] => Ok((self.default_branch.clone(), path.as_str())),
            [git_ref, path] => Ok((self.expand_ref(git_ref), path.as_str())),
            _ => Err(self.arity_error(action, "1 or 2", params.len())),
        }
    }

    /// Renders the URL for an already dispatched action
    pub fn url(
        &self,
        repo: &str,
        action: GithubAction,
        params: &[String],
    ) -> Result<(GithubAction, String), UsageError> {
        let (action, params) = action.resolve_alias(params);

        let url = match action {
            GithubAction::OpenRepo => match params {
                [] => repo.to_string(),
                _ => return Err(self.arity_error(action, "0", params.len())),
            },
            GithubAction::Commit => match params {
                [] => format!("{}/commits", repo),
                [hash] => format!("{}/commit/{}", repo, hash),
                _ => return Err(self.arity_error(action, "0 or 1", params.len())),
            },
            GithubAction::Pull => match params {
                [] => format!("{}/pulls", repo),
                [number] if is_pull_number(number) => format!("{}/pull/{}", repo, number),
                [author] => format!("{}/pulls/{}", repo, author),
                _ => return Err(self.arity_error(action, "0 or 1", params.len())),
            },
            GithubAction::Ref => match params {
                [_] => format!("{}/tree/{}", repo, self.expander.expand(params)),
                _ => return Err(self.arity_error(action, "1", params.len())),
            },
            GithubAction::Path => {
                let (git_ref, path) = self.ref_and_path(action, params)?;
                format!("{}/tree/{}/{}", repo, git_ref, path)
            }
            GithubAction::File => {
                let (git_ref, path) = self.ref_and_path(action, params)?;
                format!("{}/blob/{}/{}", repo, git_ref, path)
            }
            GithubAction::History => {
                let (git_ref, path) = self.ref_and_path(action, params)?;
                format!("{}/commits/{}/{}", repo, git_ref, path)
            }
            GithubAction::Blame => {
                let (git_ref, path) = self.ref_and_path(action, params)?;
                format!("{}/blame/{}/{}", repo, git_ref, path)
            }
            GithubAction::Diff => match params {
                [single] => format!("{}/compare/{}", repo, self.expand_ref(single)),
                [start, end] => format!("{}/compare/{}...{}", repo, start, end),
                _ => return Err(self.arity_error(action, "1 or 2", params.len())),
            },
        };

        Ok((action, url))
    }
}

impl Default for Github {
    fn default() -> Self {
        Self::new(BTreeMap::new(), DEFAULT_BRANCH)
    }
}

impl Site for Github {
    fn name(&self) -> &'static str {
        "github"
    }

    fn generate_command(&self, args: &[String]) -> Result<WebCommand, UsageError> {
        let mut cursor = ArgCursor::new(args);

        let abbr = cursor
            .next_token()
            .filter(|abbr| !abbr.is_empty())
            .ok_or(UsageError::MissingRepo)?;
        let repo = self.resolve_repo(abbr);

        let (action, params) = match cursor.next_token() {
            None => (GithubAction::OpenRepo, cursor.remaining()),
            Some(token) => match GithubAction::from_token(token) {
                Some(action) => (action, cursor.remaining()),
                // `gh <repo> <hash>`
                None if cursor.is_empty() => (GithubAction::Commit, slice::from_ref(token)),
                None => {
                    return Err(self.arity_error(
                        GithubAction::Commit,
                        "1",
                        cursor.remaining().len() + 1,
                    ));
                }
            },
        };

        let (action, url) = self.url(&repo, action, params)?;
        Ok(WebCommand::new(self.name(), action.name(), url))
    }
}
