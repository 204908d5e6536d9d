use crate::domain::puzzle::PuzzleDefinition;
use crate::error::Result;
use log::debug;
use std::io::{Read, Write};

/// Reads a puzzle definition from a JSON source.
pub struct PuzzleReader<R: Read> {
    source: R,
}

impl<R: Read> PuzzleReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Parses the whole source as one puzzle.
    ///
    /// Only the JSON shape is checked here; grid bounds are validated when the
    /// definition is handed to the engine.
    pub fn read(self) -> Result<PuzzleDefinition> {
        let definition: PuzzleDefinition = serde_json::from_reader(self.source)?;
        debug!(
            "Read puzzle {:?} with {} entries",
            definition.title,
            definition.entries.len()
        );
        Ok(definition)
    }
}

/// Writes a puzzle definition as pretty-printed JSON.
pub fn write_puzzle<W: Write>(writer: W, definition: &PuzzleDefinition) -> Result<()> {
    serde_json::to_writer_pretty(writer, definition)?;
    Ok(())
}
