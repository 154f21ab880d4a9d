#![forbid(unsafe_code)]

//! Command-line arguments

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;

/// Open web pages from short commands
#[derive(Parser, Debug)]
#[command(
    name = "websites",
    version,
    about,
    long_about = None,
    after_help = "Flags may appear anywhere on the line. Tokens that start with '-' go after '--', e.g. `websites gh df diff -- -x`."
)]
pub struct Cli {
    /// Program used to open URLs instead of the platform default
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub opener: Option<String>,

    /// Print the URL instead of opening it
    #[arg(long, global = true)]
    pub print: bool,

    /// Output format used with --print
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// When to color human output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// apidock.com: [rb|ruby|r|rails|rs|rspec] [q] [term]
    #[command(visible_alias = "ad")]
    Apidock {
        args: Vec<String>,
    },

    /// GitHub: <repo> [c|p|r|pa|f|d|pr|h|b] [args...], or <repo> <hash>
    #[command(visible_alias = "github")]
    Gh {
        args: Vec<String>,
    },

    /// Any URL, or http://eqdw.net
    Web {
        args: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Jsonl,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves `auto` against whether stdout is a terminal
    pub fn to_termcolor(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
