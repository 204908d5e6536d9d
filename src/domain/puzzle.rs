use super::grid::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Across,
    Down,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Across => Orientation::Down,
            Orientation::Down => Orientation::Across,
        }
    }

    /// Unit step `(d_row, d_col)` taken when reading a word in this orientation.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Across => (0, 1),
            Orientation::Down => (1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Across => write!(f, "across"),
            Orientation::Down => write!(f, "down"),
        }
    }
}

/// One placed word of a puzzle.
///
/// Field names on the wire follow the site's puzzle files
/// (`answer`, `clue`, `direction`, `row`, `col`, `number`).
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ClueEntry {
    /// The answer, uppercase ASCII letters.
    #[serde(rename = "answer")]
    pub text: String,
    /// Prompt shown to the player.
    #[serde(rename = "clue")]
    pub clue_text: String,
    #[serde(rename = "direction")]
    pub orientation: Orientation,
    #[serde(rename = "row")]
    pub origin_row: usize,
    #[serde(rename = "col")]
    pub origin_col: usize,
    /// Number printed in the origin cell.
    #[serde(rename = "number")]
    pub display_number: u32,
}

impl ClueEntry {
    pub fn across(number: u32, text: &str, clue: &str, row: usize, col: usize) -> Self {
        Self::new(number, Orientation::Across, text, clue, row, col)
    }

    pub fn down(number: u32, text: &str, clue: &str, row: usize, col: usize) -> Self {
        Self::new(number, Orientation::Down, text, clue, row, col)
    }

    pub fn new(
        number: u32,
        orientation: Orientation,
        text: &str,
        clue: &str,
        row: usize,
        col: usize,
    ) -> Self {
        Self {
            text: text.to_string(),
            clue_text: clue.to_string(),
            orientation,
            origin_row: row,
            origin_col: col,
            display_number: number,
        }
    }

    pub fn origin(&self) -> Position {
        Position::new(self.origin_row, self.origin_col)
    }

    /// Cells covered by this entry paired with the letter they hold.
    ///
    /// Positions are not bounds-checked against any grid.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        let origin = self.origin();
        self.text.chars().enumerate().map(move |(i, letter)| {
            let pos = match self.orientation {
                Orientation::Across => Position::new(origin.row, origin.col + i),
                Orientation::Down => Position::new(origin.row + i, origin.col),
            };
            (pos, letter)
        })
    }

    pub fn covers(&self, pos: Position) -> bool {
        self.cells().any(|(cell, _)| cell == pos)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

/// An immutable puzzle as supplied by the caller.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PuzzleDefinition {
    pub title: String,
    pub size: GridSize,
    #[serde(rename = "clues")]
    pub entries: Vec<ClueEntry>,
}

impl PuzzleDefinition {
    pub fn new(title: &str, rows: usize, cols: usize, entries: Vec<ClueEntry>) -> Self {
        Self {
            title: title.to_string(),
            size: GridSize { rows, cols },
            entries,
        }
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// The puzzle shipped with the site.
    ///
    /// Several of its entries disagree on shared cells (TIME/LAMP at the
    /// origin, for one), so it only loads under the overwriting overlap policy.
    pub fn sample() -> Self {
        Self::new(
            "Simple Crossword",
            10,
            10,
            vec![
                ClueEntry::across(1, "TIME", "When it comes to us all", 0, 0),
                ClueEntry::down(1, "LAMP", "Illuminating invention", 0, 0),
                ClueEntry::across(2, "CPU", "Computer brain", 2, 2),
                ClueEntry::down(2, "CAFE", "Place to get coffee", 2, 2),
                ClueEntry::across(3, "REACT", "Programming language with hooks", 4, 0),
                ClueEntry::across(4, "GOOGLE", "Internet search giant", 6, 3),
                ClueEntry::down(5, "AWS", "Cloud service provider", 4, 4),
                ClueEntry::across(6, "GIT", "Version control system", 8, 1),
            ],
        )
    }
}
