use crate::domain::cursor::CursorState;
use crate::domain::grid::{CellLabels, EntryGrid, Position, SolutionGrid};
use crate::domain::puzzle::{ClueEntry, Orientation, PuzzleDefinition};
use crate::error::ConstructionError;
use log::{debug, warn};

/// Largest grid (in cells) a puzzle may declare.
pub const MAX_CELLS: usize = 1 << 20;

/// What to do when two entries put different letters in the same cell.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum OverlapPolicy {
    /// The entry later in definition order wins.
    #[default]
    Overwrite,
    /// Fail construction with [`ConstructionError::ConflictingEntries`].
    Reject,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct EngineConfig {
    pub overlap_policy: OverlapPolicy,
}

/// The crossword play engine.
///
/// `PuzzleEngine` owns a puzzle definition, the answer key derived from it,
/// the player's entries and the cursor. Construction is the only fallible
/// step; every play operation degrades to a no-op on input it cannot use.
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    config: EngineConfig,
    definition: PuzzleDefinition,
    solution: SolutionGrid,
    labels: CellLabels,
    entries: EntryGrid,
    cursor: CursorState,
}

impl PuzzleEngine {
    /// Builds an engine with the default (overwriting) overlap policy.
    pub fn new(definition: PuzzleDefinition) -> Result<Self, ConstructionError> {
        Self::with_config(definition, EngineConfig::default())
    }

    pub fn with_config(
        definition: PuzzleDefinition,
        config: EngineConfig,
    ) -> Result<Self, ConstructionError> {
        let solution = build_solution(&definition, config.overlap_policy)?;
        let labels = build_labels(&definition);
        let entries = EntryGrid::new(definition.rows(), definition.cols());
        debug!(
            "Loaded puzzle {:?}: {}x{} grid, {} entries",
            definition.title,
            definition.rows(),
            definition.cols(),
            definition.entries.len()
        );

        Ok(Self {
            config,
            definition,
            solution,
            labels,
            entries,
            cursor: CursorState::default(),
        })
    }

    /// Replaces the puzzle, reinitializing entries and cursor.
    ///
    /// On failure the engine keeps its current puzzle and state.
    pub fn load(&mut self, definition: PuzzleDefinition) -> Result<(), ConstructionError> {
        *self = Self::with_config(definition, self.config)?;
        Ok(())
    }

    pub fn definition(&self) -> &PuzzleDefinition {
        &self.definition
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn solution(&self) -> &SolutionGrid {
        &self.solution
    }

    pub fn entry_grid(&self) -> &EntryGrid {
        &self.entries
    }

    pub fn labels(&self) -> &CellLabels {
        &self.labels
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    /// True iff the cell is inside the grid and part of some entry.
    pub fn is_active(&self, row: isize, col: isize) -> bool {
        Position::from_signed(row, col).is_some_and(|pos| self.is_active_at(pos))
    }

    pub fn is_active_at(&self, pos: Position) -> bool {
        self.solution.value(pos).is_some()
    }

    /// The letter the player has entered at a cell.
    pub fn entry_at(&self, row: usize, col: usize) -> Option<char> {
        self.entries.value(Position::new(row, col))
    }

    /// The clue number printed at a cell.
    pub fn label_at(&self, row: usize, col: usize) -> Option<u32> {
        self.labels.value(Position::new(row, col))
    }

    /// Clicks a cell: reselecting the cursor cell flips orientation, any
    /// other active cell becomes the cursor.
    pub fn select(&mut self, row: isize, col: isize) {
        let Some(pos) = Position::from_signed(row, col) else {
            return;
        };
        if !self.is_active_at(pos) {
            return;
        }

        if self.cursor.is_at(pos) {
            self.cursor.orientation = self.cursor.orientation.toggled();
        } else {
            self.cursor.selected = Some(pos);
        }
    }

    /// Writes a letter at the cursor and advances.
    pub fn type_letter(&mut self, ch: char) {
        if !ch.is_ascii_alphabetic() {
            return;
        }
        let Some(pos) = self.cursor.position() else {
            return;
        };
        self.entries.set(pos, Some(ch.to_ascii_uppercase()));
        self.advance();
    }

    /// Clears the cursor cell and retreats.
    pub fn backspace(&mut self) {
        let Some(pos) = self.cursor.position() else {
            return;
        };
        self.entries.set(pos, None);
        self.retreat();
    }

    /// Moves the cursor exactly one cell if that cell is active.
    ///
    /// Only the four unit steps are honoured.
    pub fn move_directional(&mut self, d_row: isize, d_col: isize) {
        if !matches!((d_row, d_col), (-1 | 1, 0) | (0, -1 | 1)) {
            return;
        }
        let Some(pos) = self.cursor.position() else {
            return;
        };
        if let Some(next) = pos.offset(d_row, d_col)
            && self.is_active_at(next)
        {
            self.cursor.selected = Some(next);
        }
    }

    /// Jumps to the next active cell along the cursor orientation.
    pub fn advance(&mut self) {
        let (d_row, d_col) = self.cursor.orientation.step();
        self.scan(d_row, d_col);
    }

    /// Jumps to the previous active cell along the cursor orientation.
    pub fn retreat(&mut self) {
        let (d_row, d_col) = self.cursor.orientation.step();
        self.scan(-d_row, -d_col);
    }

    // Stops at the first active cell; leaves the cursor alone at the edge.
    fn scan(&mut self, d_row: isize, d_col: isize) {
        let Some(mut pos) = self.cursor.position() else {
            return;
        };
        while let Some(next) = pos.offset(d_row, d_col)
            && self.solution.contains(next)
        {
            if self.is_active_at(next) {
                self.cursor.selected = Some(next);
                return;
            }
            pos = next;
        }
    }

    /// True iff every solution letter has been entered correctly.
    pub fn check(&self) -> bool {
        self.solution
            .iter()
            .filter_map(|(pos, letter)| letter.map(|l| (pos, l)))
            .all(|(pos, letter)| self.entries.value(pos) == Some(letter))
    }

    /// Empties the entry grid and drops the selection.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = CursorState::default();
        debug!("Reset puzzle {:?}", self.definition.title);
    }

    /// Entries of one orientation, in definition order.
    pub fn clues_by_orientation(&self, orientation: Orientation) -> Vec<&ClueEntry> {
        self.definition
            .entries
            .iter()
            .filter(|entry| entry.orientation == orientation)
            .collect()
    }

    /// The entry running in the cursor's orientation through the cursor cell.
    pub fn current_clue(&self) -> Option<&ClueEntry> {
        let pos = self.cursor.position()?;
        self.definition
            .entries
            .iter()
            .find(|entry| entry.orientation == self.cursor.orientation && entry.covers(pos))
    }
}

fn build_solution(
    definition: &PuzzleDefinition,
    policy: OverlapPolicy,
) -> Result<SolutionGrid, ConstructionError> {
    let (rows, cols) = (definition.rows(), definition.cols());
    if rows == 0 || cols == 0 {
        return Err(ConstructionError::EmptyGrid { rows, cols });
    }
    if rows.checked_mul(cols).is_none_or(|cells| cells > MAX_CELLS) {
        return Err(ConstructionError::GridTooLarge { rows, cols });
    }

    let mut solution = SolutionGrid::new(rows, cols);
    for entry in &definition.entries {
        if entry.display_number == 0 {
            return Err(ConstructionError::InvalidNumber {
                orientation: entry.orientation,
                text: entry.text.clone(),
            });
        }
        if entry.text.is_empty() || !entry.text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConstructionError::InvalidAnswer {
                number: entry.display_number,
                orientation: entry.orientation,
                text: entry.text.clone(),
            });
        }
        if !fits(entry, rows, cols) {
            return Err(ConstructionError::OutOfBounds {
                number: entry.display_number,
                orientation: entry.orientation,
                text: entry.text.clone(),
                rows,
                cols,
            });
        }

        for (pos, letter) in entry.cells() {
            if let Some(Some(existing)) = solution.set(pos, Some(letter))
                && existing != letter
            {
                match policy {
                    OverlapPolicy::Overwrite => warn!(
                        "Entry {} {} overwrites {existing} with {letter} at ({}, {})",
                        entry.display_number, entry.orientation, pos.row, pos.col
                    ),
                    OverlapPolicy::Reject => {
                        return Err(ConstructionError::ConflictingEntries {
                            row: pos.row,
                            col: pos.col,
                            existing,
                            incoming: letter,
                        });
                    }
                }
            }
        }
    }
    Ok(solution)
}

// Checked without walking the cells so huge origins cannot overflow.
fn fits(entry: &ClueEntry, rows: usize, cols: usize) -> bool {
    let (start, limit, cross_ok) = match entry.orientation {
        Orientation::Across => (entry.origin_col, cols, entry.origin_row < rows),
        Orientation::Down => (entry.origin_row, rows, entry.origin_col < cols),
    };
    cross_ok && start < limit && entry.text.len() <= limit - start
}

// The first entry starting at a cell provides its label.
fn build_labels(definition: &PuzzleDefinition) -> CellLabels {
    let mut labels = CellLabels::new(definition.rows(), definition.cols());
    for entry in &definition.entries {
        if labels.value(entry.origin()).is_none() {
            labels.set(entry.origin(), Some(entry.display_number));
        }
    }
    labels
}
