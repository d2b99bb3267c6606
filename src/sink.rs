//! Destinations for finished dumps. The engine itself never writes anywhere.

use std::io::{self, Write};

use tracing::Level;

pub trait DumpSink {
    fn emit(&mut self, label: &str, text: &str) -> io::Result<()>;
}

/// Emits each dump as one `tracing` event at a fixed level.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: Level,
}

impl TracingSink {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl DumpSink for TracingSink {
    fn emit(&mut self, label: &str, text: &str) -> io::Result<()> {
        match self.level {
            Level::ERROR => tracing::error!(target: "valdump", label, "\n{}", text),
            Level::WARN => tracing::warn!(target: "valdump", label, "\n{}", text),
            Level::INFO => tracing::info!(target: "valdump", label, "\n{}", text),
            Level::DEBUG => tracing::debug!(target: "valdump", label, "\n{}", text),
            _ => tracing::trace!(target: "valdump", label, "\n{}", text),
        }
        Ok(())
    }
}

/// Writes each dump followed by a newline to any writer: stdout, a file, a
/// buffer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DumpSink for WriterSink<W> {
    fn emit(&mut self, _label: &str, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }
}
