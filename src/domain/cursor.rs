use super::grid::Position;
use super::puzzle::Orientation;

/// The selected cell (if any) and the orientation typing follows.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct CursorState {
    pub selected: Option<Position>,
    pub orientation: Orientation,
}

impl CursorState {
    pub fn position(&self) -> Option<Position> {
        self.selected
    }

    pub fn is_at(&self, pos: Position) -> bool {
        self.selected == Some(pos)
    }
}

/// Arrow-key directions for single-step cursor moves.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Parses a direction name, also accepting browser arrow-key names.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "up" | "arrowup" => Some(Direction::Up),
            "down" | "arrowdown" => Some(Direction::Down),
            "left" | "arrowleft" => Some(Direction::Left),
            "right" | "arrowright" => Some(Direction::Right),
            _ => None,
        }
    }
}
