#![forbid(unsafe_code)]

//! Launching URLs with the host's default opener

use std::io;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Errors raised while launching the opener process
#[derive(Debug, Error)]
pub enum OpenError {
    /// The opener program could not be started
    #[error("Failed to launch '{program}' for {url}: {source}")]
    Spawn {
        program: String,
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Something that can show a URL to the user
pub trait Opener {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Opens URLs through the operating system
///
/// Uses the configured program when one is set, otherwise the platform's
/// default:
/// - macOS: `open`
/// - Windows: `cmd /C start`
/// - everything else: `xdg-open`
///
/// The child is spawned and left running; nothing waits for it.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    program: Option<String>,
}

impl SystemOpener {
    /// Creates an opener that launches `program`, or the platform default when `None`
    pub fn new(program: Option<String>) -> Self {
        SystemOpener { program }
    }

    /// Builds the launch command for `url` without running it
    pub fn command_for(&self, url: &str) -> (String, Command) {
        if let Some(program) = &self.program {
            let mut command = Command::new(program);
            command.arg(url);
            return (program.clone(), command);
        }
        platform_command(url)
    }
}

impl Opener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        let (program, mut command) = self.command_for(url);
        log::debug!("launching {} {}", program, url);

        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| OpenError::Spawn {
                program,
                url: url.to_string(),
                source,
            })?;

        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn platform_command(url: &str) -> (String, Command) {
    let mut command = Command::new("open");
    command.arg(url);
    ("open".to_string(), command)
}

#[cfg(target_os = "windows")]
fn platform_command(url: &str) -> (String, Command) {
    let mut command = Command::new("cmd");
    // The empty string is the window title `start` expects before a URL
    command.args(["/C", "start", "", url]);
    ("cmd".to_string(), command)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_command(url: &str) -> (String, Command) {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    ("xdg-open".to_string(), command)
}
