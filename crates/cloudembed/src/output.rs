//! Command output.
//!
//! Results (embed HTML, toolbar JSON, the tag table) go to stdout, and a failed
//! write there fails the command. Notices go to stderr on a best-effort basis
//! and are colored only when stderr is a terminal.

use std::io::{self, Write};

use console::{Style, Term};

/// Result writer plus stderr notices.
pub(crate) struct Output<W = Term> {
    out: W,
    notices: Term,
    heading: Style,
    warning: Style,
    error: Style,
}

impl Output {
    /// Results to stdout.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::with_writer(Term::stdout())
    }
}

impl<W: Write> Output<W> {
    /// Results to `out`.
    pub(crate) fn with_writer(out: W) -> Self {
        Self {
            out,
            notices: Term::stderr(),
            heading: Style::new().bold(),
            warning: Style::new().yellow().for_stderr(),
            error: Style::new().red().for_stderr(),
        }
    }

    /// Write one result line.
    pub(crate) fn line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    /// Write a table heading, bold on a terminal.
    pub(crate) fn heading(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", self.heading.apply_to(line))
    }

    /// Plain notice on stderr.
    pub(crate) fn note(&self, msg: &str) {
        let _ = self.notices.write_line(msg);
    }

    /// Yellow notice on stderr.
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.notices.write_line(&self.warning.apply_to(msg).to_string());
    }

    /// Red notice on stderr.
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.notices.write_line(&self.error.apply_to(msg).to_string());
    }

    /// The result writer.
    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}
