#![forbid(unsafe_code)]

//! Runs the command held by a handler

use crate::command::{CommandHandler, OpenError, Opener};

/// Opens each handler's URL through a single opener
pub struct Runner<'a> {
    opener: &'a dyn Opener,
}

impl<'a> Runner<'a> {
    /// Creates a runner that opens URLs through `opener`
    pub fn new(opener: &'a dyn Opener) -> Self {
        Runner { opener }
    }

    /// Opens the URL held by `handler`
    pub fn run(&self, handler: &CommandHandler) -> Result<(), OpenError> {
        let command = handler.command();
        log::info!("opening {} ({} {})", command.url(), command.site(), command.action());
        handler.run(self.opener)
    }
}
