//! Styled console output.
//!
//! [`ConsoleOutput`] owns a writer, renders markup for it, and provides the
//! status message and table helpers. Whether the writer gets escape
//! sequences is decided once, at construction.

use std::io::{self, IsTerminal, Write};

use crate::capability::CapabilityProbe;
use crate::color::ColorMode;
use crate::errors::Result;
use crate::markup::Formatter;
use crate::style::MessageType;
use crate::table;

/// Markup-aware writer.
///
/// # Example
///
/// ```
/// use conio_core::ConsoleOutput;
///
/// let mut out = ConsoleOutput::plain(Vec::new());
/// out.success("Deployed").unwrap();
/// assert_eq!(out.into_inner(), b" SUCCESS: Deployed\n");
/// ```
#[derive(Debug)]
pub struct ConsoleOutput<W: Write> {
    writer: W,
    formatter: Formatter,
    colors: bool,
}

impl ConsoleOutput<io::Stdout> {
    /// Output on stdout, colors detected automatically.
    pub fn stdout() -> Self {
        Self::terminal(io::stdout(), ColorMode::Auto)
    }
}

impl ConsoleOutput<io::Stderr> {
    /// Output on stderr, colors detected automatically.
    pub fn stderr() -> Self {
        Self::terminal(io::stderr(), ColorMode::Auto)
    }
}

impl<W: Write + IsTerminal> ConsoleOutput<W> {
    /// Output on a stream that can report whether it is a terminal.
    pub fn terminal(writer: W, mode: ColorMode) -> Self {
        let tty = writer.is_terminal();
        Self::with_probe(writer, mode, &CapabilityProbe::system(), Some(tty))
    }
}

impl<W: Write> ConsoleOutput<W> {
    /// Output on an arbitrary writer.
    ///
    /// Such writers cannot report whether they are a terminal, so `Auto`
    /// falls back to the environment (`TERM`) to decide.
    pub fn new(writer: W, mode: ColorMode) -> Self {
        Self::with_probe(writer, mode, &CapabilityProbe::system(), None)
    }

    /// Output whose color support is decided by a specific probe.
    ///
    /// `tty` is the writer's terminal status, or `None` when unknown.
    pub fn with_probe(
        writer: W,
        mode: ColorMode,
        probe: &CapabilityProbe,
        tty: Option<bool>,
    ) -> Self {
        Self {
            writer,
            formatter: Formatter::new(),
            colors: mode.resolve(probe, tty),
        }
    }

    /// Output that never emits escape sequences.
    pub fn plain(writer: W) -> Self {
        Self {
            writer,
            formatter: Formatter::new(),
            colors: false,
        }
    }

    /// Output that always emits escape sequences.
    pub fn styled(writer: W) -> Self {
        Self {
            writer,
            formatter: Formatter::new(),
            colors: true,
        }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the output and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Render markup the way this output would write it.
    pub fn format(&self, text: &str) -> String {
        self.formatter.render(text, self.colors)
    }

    /// Format and write text without a trailing newline.
    ///
    /// The writer is flushed so partial lines such as prompts are visible
    /// before a blocking read.
    pub fn write(&mut self, text: &str) -> Result<()> {
        let rendered = self.format(text);
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Format and write text followed by one newline.
    pub fn write_ln(&mut self, text: &str) -> Result<()> {
        let mut rendered = self.format(text);
        rendered.push('\n');
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a status message using its fixed template.
    pub fn message(&mut self, msg_type: MessageType, text: &str) -> Result<()> {
        self.write_ln(&msg_type.markup(text))
    }

    /// Write a success message.
    pub fn success(&mut self, text: &str) -> Result<()> {
        self.message(MessageType::Success, text)
    }

    /// Write a warning message.
    pub fn warning(&mut self, text: &str) -> Result<()> {
        self.message(MessageType::Warning, text)
    }

    /// Write an error message.
    pub fn error(&mut self, text: &str) -> Result<()> {
        self.message(MessageType::Error, text)
    }

    /// Write a table: header row, separator, then one line per row.
    ///
    /// Rows shorter than the widest row get blank cells.
    pub fn table<H, R, C>(&mut self, headers: &[H], rows: &[R]) -> Result<()>
    where
        H: AsRef<str>,
        R: AsRef<[C]>,
        C: ToString,
    {
        let widths = table::column_widths(headers, rows);
        let header_cells: Vec<&str> = headers.iter().map(|h| h.as_ref()).collect();

        self.print_row(&header_cells, &widths)?;
        self.print_separator(&widths)?;
        for row in rows {
            self.print_row(row.as_ref(), &widths)?;
        }
        Ok(())
    }

    /// Write a single table line padded to `widths`.
    pub fn print_row<C: ToString>(&mut self, row: &[C], widths: &[usize]) -> Result<()> {
        self.write(&table::render_row(row, widths))
    }

    /// Write a table separator line for `widths`.
    pub fn print_separator(&mut self, widths: &[usize]) -> Result<()> {
        self.write(&table::render_separator(widths))
    }
}
