#![forbid(unsafe_code)]

//! Resolved web commands and the handler that owns one
//!
//! A [`WebCommand`] is the end product of dispatch: an immutable URL plus
//! the site and action that produced it. A [`CommandHandler`] owns exactly
//! one command, either handed to it directly or generated by a [`Site`].

pub mod opener;

pub use opener::{OpenError, Opener, SystemOpener};

use crate::sites::{Site, UsageError};

/// A fully resolved URL ready to be opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebCommand {
    site: &'static str,
    action: &'static str,
    url: String,
}

impl WebCommand {
    /// Creates a command for `url`, tagged with the site and action that produced it
    pub fn new(site: &'static str, action: &'static str, url: impl Into<String>) -> Self {
        WebCommand {
            site,
            action,
            url: url.into(),
        }
    }

    /// Name of the site adapter, e.g. `github`
    pub fn site(&self) -> &'static str {
        self.site
    }

    /// Name of the dispatched action, e.g. `pull`
    pub fn action(&self) -> &'static str {
        self.action
    }

    /// The resolved URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Hands the URL to the opener
    pub fn run(&self, opener: &dyn Opener) -> Result<(), OpenError> {
        opener.open(&self.url)
    }
}

/// Owns the single command built for one invocation
#[derive(Debug, Clone)]
pub struct CommandHandler {
    command: WebCommand,
}

impl CommandHandler {
    /// Builds the command by dispatching `args` through `site`
    ///
    /// # Errors
    ///
    /// Returns the site's usage error when the arguments cannot be mapped to
    /// a URL (missing repository abbreviation, wrong argument count).
    pub fn new(site: &dyn Site, args: &[String]) -> Result<Self, UsageError> {
        let command = site.generate_command(args)?;
        log::debug!(
            "{} dispatched {:?} to {} -> {}",
            site.name(),
            args,
            command.action(),
            command.url()
        );
        Ok(CommandHandler { command })
    }

    /// Wraps a command that was built without dispatch
    pub fn with_command(command: WebCommand) -> Self {
        CommandHandler { command }
    }

    /// Returns the held command
    pub fn command(&self) -> &WebCommand {
        &self.command
    }

    /// Opens the held command's URL
    pub fn run(&self, opener: &dyn Opener) -> Result<(), OpenError> {
        self.command.run(opener)
    }
}
