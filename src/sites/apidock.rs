#![forbid(unsafe_code)]

//! apidock.com adapter
//!
//! `apidock <site> [q] <term>` where `<site>` is one of `rb|ruby`,
//! `r|rails`, or `rs|rspec`. A `q` selects the search page; otherwise the
//! term is looked up directly. Anything else opens the front page.

use super::{Site, UsageError, trim_base};
use crate::command::WebCommand;
use crate::cursor::ArgCursor;

pub const DEFAULT_BASE_URL: &str = "http://apidock.com";

const QUERY_TOKEN: &str = "q";

const SUBSITES: &[(&str, Subsite)] = &[
    ("rb", Subsite::Ruby),
    ("ruby", Subsite::Ruby),
    ("r", Subsite::Rails),
    ("rails", Subsite::Rails),
    ("rs", Subsite::Rspec),
    ("rspec", Subsite::Rspec),
];

/// Documentation sections hosted on apidock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsite {
    Ruby,
    Rails,
    Rspec,
}

impl Subsite {
    /// Looks up the subsite named by a dispatch token
    pub fn from_token(token: &str) -> Option<Self> {
        SUBSITES
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, subsite)| *subsite)
    }

    /// Path segment under the base URL
    pub fn prefix(self) -> &'static str {
        match self {
            Subsite::Ruby => "ruby",
            Subsite::Rails => "rails",
            Subsite::Rspec => "rspec",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApidockAction {
    /// Site front page
    Root,
    /// Full-text search within a subsite
    Query(Subsite),
    /// Direct path lookup within a subsite
    Lookup(Subsite),
}

impl ApidockAction {
    pub fn name(self) -> &'static str {
        match self {
            ApidockAction::Root => "root",
            ApidockAction::Query(_) => "query",
            ApidockAction::Lookup(_) => "lookup",
        }
    }

    /// Renders the URL for this action
    pub fn url(self, base: &str, term: &str) -> String {
        match self {
            ApidockAction::Root => base.to_string(),
            ApidockAction::Query(subsite) => {
                format!("{}/{}/search?query={}", base, subsite.prefix(), term)
            }
            ApidockAction::Lookup(subsite) => format!("{}/{}/{}", base, subsite.prefix(), term),
        }
    }
}

/// Dispatcher for apidock.com
#[derive(Debug, Clone)]
pub struct ApiDock {
    base_url: String,
}

impl ApiDock {
    /// Creates a dispatcher rooted at `base_url`, ignoring trailing slashes
    pub fn new(base_url: &str) -> Self {
        ApiDock {
            base_url: trim_base(base_url),
        }
    }

    /// Returns the base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn command(&self, action: ApidockAction, term: &str) -> WebCommand {
        WebCommand::new(self.name(), action.name(), action.url(&self.base_url, term))
    }
}

impl Default for ApiDock {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Site for ApiDock {
    fn name(&self) -> &'static str {
        "apidock"
    }

    fn generate_command(&self, args: &[String]) -> Result<WebCommand, UsageError> {
        let mut cursor = ArgCursor::new(args);

        let Some(subsite) = cursor.next_token().and_then(|token| Subsite::from_token(token)) else {
            return Ok(self.command(ApidockAction::Root, ""));
        };

        let action = if cursor.next_if_eq(QUERY_TOKEN) {
            ApidockAction::Query(subsite)
        } else {
            ApidockAction::Lookup(subsite)
        };

        match cursor.remaining() {
            [term] => Ok(self.command(action, term)),
            rest => Err(UsageError::ArgumentCount {
                site: self.name(),
                action: action.name(),
                expected: "1",
                got: rest.len(),
            }),
        }
    }
}
