#![forbid(unsafe_code)]

//! Human-readable output with optional colorization

use crate::command::WebCommand;
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Prints the resolved URL, one per line
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Format the command as plain text
    pub fn format(&self, command: &WebCommand) -> String {
        format!("{}\n", command.url())
    }

    /// Write the URL to stdout, underlined in cyan when colors are enabled
    pub fn write_to_stdout(&self, command: &WebCommand) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write_to(&mut stdout, command)
    }

    fn write_to<W: WriteColor>(&self, out: &mut W, command: &WebCommand) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_underline(true))?;
        write!(out, "{}", command.url())?;
        out.reset()?;
        writeln!(out)?;
        out.flush()
    }
}
