use std::{
    io::{self, Stdout, Write},
    process::Command,
};

use crate::{
    render::frame::format_frame,
    runtime::handler::SampleSink,
    sample::parser::Sample,
    settings::{ClearMode, Settings},
};

/// Control sequence that erases the display and homes the cursor.
pub const ANSI_CLEAR: &str = "\x1b[2J\x1b[H";

/// Paints each sample as a full repaint onto a writer, usually standard output.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    glyph: char,
    clear: ClearMode,
    clear_command: fn() -> Command,
}

impl TerminalRenderer<Stdout> {
    /// Creates a renderer writing to standard output.
    #[must_use]
    pub fn stdout(settings: &Settings) -> Self {
        Self::new(io::stdout(), settings)
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Creates a renderer writing to `out` with the glyph and clear mode from `settings`.
    pub const fn new(out: W, settings: &Settings) -> Self {
        Self {
            out,
            glyph: settings.bar_glyph,
            clear: settings.clear,
            clear_command,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Clears the screen, writes the frame and flushes.
    ///
    /// # Errors
    ///
    /// Throws an `io::Error` if writing to the terminal fails.
    pub fn paint(&mut self, sample: &Sample) -> io::Result<()> {
        self.clear_screen()?;
        self.out.write_all(format_frame(sample, self.glyph).as_bytes())?;
        self.out.flush()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        match self.clear {
            ClearMode::Ansi => self.out.write_all(ANSI_CLEAR.as_bytes()),
            ClearMode::Command => {
                // The command writes to the real terminal, pending output has to go first.
                self.out.flush()?;
                // A clear program that fails to start still leaves the frame to be painted.
                if let Err(e) = (self.clear_command)().status() {
                    log::debug!("Failed to run clear command: {e}");
                }
                Ok(())
            }
            ClearMode::None => Ok(()),
        }
    }
}

#[cfg(windows)]
fn clear_command() -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "cls"]);
    command
}

#[cfg(not(windows))]
fn clear_command() -> Command {
    Command::new("clear")
}

impl<W: Write> SampleSink for TerminalRenderer<W> {
    fn present(&mut self, sample: &Sample) {
        if let Err(e) = self.paint(sample) {
            log::debug!("Failed to write frame to terminal: {e}");
        }
    }
}
