use crate::application::engine::PuzzleEngine;
use crate::domain::grid::Position;
use crate::domain::puzzle::Orientation;
use crate::error::Result;
use std::io::Write;

const INACTIVE: char = '#';
const EMPTY: char = '_';

/// Paints an engine's state as plain text.
///
/// Each cell is its clue number (or padding) followed by `#` for a block,
/// `_` for an empty square or the entered letter.
pub struct BoardWriter<W: Write> {
    writer: W,
}

impl<W: Write> BoardWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_board(&mut self, engine: &PuzzleEngine) -> Result<()> {
        let definition = engine.definition();
        writeln!(self.writer, "{}", definition.title)?;

        let label_width = engine
            .labels()
            .iter()
            .filter_map(|(_, label)| *label)
            .map(|label| label.to_string().len())
            .max()
            .unwrap_or(0);

        for row in 0..definition.rows() {
            let cells: Vec<String> = (0..definition.cols())
                .map(|col| {
                    let label = engine
                        .label_at(row, col)
                        .map(|n| n.to_string())
                        .unwrap_or_default();
                    let content = if !engine.is_active_at(Position::new(row, col)) {
                        INACTIVE
                    } else {
                        engine.entry_at(row, col).unwrap_or(EMPTY)
                    };
                    format!("{label:>label_width$}{content}")
                })
                .collect();
            writeln!(self.writer, "{}", cells.join(" "))?;
        }

        let cursor = engine.cursor();
        match cursor.position() {
            Some(pos) => writeln!(
                self.writer,
                "cursor: {},{} {}",
                pos.row, pos.col, cursor.orientation
            )?,
            None => writeln!(self.writer, "cursor: none")?,
        }
        if let Some(clue) = engine.current_clue() {
            writeln!(
                self.writer,
                "clue: {} {}: {}",
                clue.display_number, clue.orientation, clue.clue_text
            )?;
        }

        for (heading, orientation) in [("Across", Orientation::Across), ("Down", Orientation::Down)] {
            writeln!(self.writer, "{heading}")?;
            for clue in engine.clues_by_orientation(orientation) {
                writeln!(
                    self.writer,
                    "  {}. {} ({})",
                    clue.display_number,
                    clue.clue_text,
                    clue.text.len()
                )?;
            }
        }

        self.writer.flush()?;
        Ok(())
    }
}
