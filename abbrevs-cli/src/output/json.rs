//! JSON output formatter

use super::OutputFormatter;
use abbrevs_core::Tokens;
use anyhow::Result;
use std::io::Write;

/// JSON formatter - emits the lookup result in the dataset file shape
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_tokens(&mut self, tokens: &Tokens) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, tokens)?;
        } else {
            serde_json::to_writer(&mut self.writer, tokens)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
