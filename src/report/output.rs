use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Color;

use crate::models::ReportLine;

/// Where report lines end up. Decides how flagged lines are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// Flagged lines are printed in red; every line is followed by a blank line.
    Console,
    /// Flagged lines get a `* ` prefix; one line per package.
    File,
}

/// Report sink, acquired once at startup and handed to the report step.
pub struct Output<W: Write> {
    writer: W,
    kind: SinkKind,
}

impl Output<Stdout> {
    pub fn console() -> Self {
        Self::new(io::stdout(), SinkKind::Console)
    }
}

impl Output<BufWriter<File>> {
    /// Create (or truncate) the report file.
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create output file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file), SinkKind::File))
    }
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, kind: SinkKind) -> Self {
        Self { writer, kind }
    }

    pub fn kind(&self) -> SinkKind {
        self.kind
    }

    /// Write one report line.
    pub fn print_info(&mut self, line: &ReportLine) -> Result<()> {
        let msg = format_line(line, self.kind);
        match self.kind {
            SinkKind::Console => writeln!(self.writer, "{}", msg)?,
            SinkKind::File => write!(self.writer, "{}", msg)?,
        }
        Ok(())
    }

    /// Flush and release the sink.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush().context("failed to flush report output")?;
        Ok(self.writer)
    }
}

/// Render a line with the sink's flag marker and a trailing newline.
///
/// Flagged console lines are always wrapped in red escapes, even when stdout
/// is not a terminal, so the flag survives piping.
pub fn format_line(line: &ReportLine, kind: SinkKind) -> String {
    let msg = line.to_string();
    let msg = match (line.flagged, kind) {
        (false, _) => msg,
        (true, SinkKind::File) => format!("* {}", msg),
        (true, SinkKind::Console) => {
            format!("\x1b[{}m{}\x1b[0m", Color::Red.to_fg_str(), msg)
        }
    };
    format!("{}\n", msg)
}
