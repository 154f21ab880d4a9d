#![forbid(unsafe_code)]

//! Executes a parsed command line

use super::args::{Cli, Command, OutputFormat};
use crate::command::{CommandHandler, SystemOpener, WebCommand};
use crate::error::{EXIT_SUCCESS, Error};
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::runner::Runner;
use crate::sites::{ApiDock, Github, Site, Web};
use std::io::Write;

/// Runs the command line and returns the process exit code
pub fn run(cli: &Cli) -> i32 {
    match run_inner(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run_inner(cli: &Cli) -> Result<(), Error> {
    let handler = build_handler(&cli.command)?;

    if cli.print {
        return print_command(cli, handler.command());
    }

    let opener = SystemOpener::new(cli.opener.clone());
    Runner::new(&opener).run(&handler)?;
    Ok(())
}

/// Dispatches the subcommand's tokens through the matching site
pub fn build_handler(command: &Command) -> Result<CommandHandler, Error> {
    let (site, args): (Box<dyn Site>, &[String]) = match command {
        Command::Apidock { args } => (Box::new(ApiDock::default()), args),
        Command::Gh { args } => (Box::new(Github::default()), args),
        Command::Web { args } => (Box::new(Web::default()), args),
    };

    Ok(CommandHandler::new(site.as_ref(), args)?)
}

fn print_command(cli: &Cli, command: &WebCommand) -> Result<(), Error> {
    match cli.format {
        OutputFormat::Human => {
            HumanFormatter::new(cli.color.to_termcolor()).write_to_stdout(command)?;
        }
        OutputFormat::Jsonl => {
            let line = JsonlFormatter::new()
                .format(command)
                .map_err(std::io::Error::from)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(line.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_USAGE;
    use crate::sites::UsageError;

    fn gh(items: &[&str]) -> Command {
        Command::Gh {
            args: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_build_handler_github() {
        let handler = build_handler(&gh(&["df", "diff", "start", "end"])).unwrap();
        assert_eq!(handler.command().url(), "df/compare/start...end");
    }

    #[test]
    fn test_build_handler_apidock() {
        let command = Command::Apidock {
            args: vec!["rb".to_string(), "q".to_string(), "zip".to_string()],
        };
        let handler = build_handler(&command).unwrap();
        assert_eq!(
            handler.command().url(),
            "http://apidock.com/ruby/search?query=zip"
        );
    }

    #[test]
    fn test_build_handler_missing_repo() {
        let err = build_handler(&gh(&[])).unwrap_err();
        assert!(matches!(err, Error::Usage(UsageError::MissingRepo)));
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn test_build_handler_web_default() {
        let handler = build_handler(&Command::Web { args: vec![] }).unwrap();
        assert_eq!(handler.command().url(), "http://eqdw.net");
    }
}
