
/// A cell coordinate inside a grid.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts signed coordinates, rejecting negatives.
    pub fn from_signed(row: isize, col: isize) -> Option<Self> {
        Some(Self::new(usize::try_from(row).ok()?, usize::try_from(col).ok()?))
    }

    /// The neighbouring coordinate, or `None` when it would be negative.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add_signed(d_row)?,
            self.col.checked_add_signed(d_col)?,
        ))
    }
}

/// Dense row-major `rows × cols` storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Answer key: `Some(letter)` for cells covered by an entry.
pub type SolutionGrid = Grid<Option<char>>;
/// Player input: `Some(letter)` once something has been typed.
pub type EntryGrid = Grid<Option<char>>;
/// Clue numbers printed in origin cells.
pub type CellLabels = Grid<Option<u32>>;

impl<T: Clone + Default> Grid<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }

    /// Sets every cell back to `T::default()`.
    pub fn clear(&mut self) {
        self.cells.fill(T::default());
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Overwrites a cell, returning the previous value. Out-of-bounds writes are dropped.
    pub fn set(&mut self, pos: Position, value: T) -> Option<T> {
        let i = self.index(pos)?;
        Some(std::mem::replace(&mut self.cells[i], value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, value)| (Position::new(i / cols, i % cols), value))
    }
}

impl<T: Copy> Grid<Option<T>> {
    /// The value at `pos`, flattening "out of bounds" and "empty" together.
    pub fn value(&self, pos: Position) -> Option<T> {
        self.get(pos).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_get_and_set() {
        let mut grid: Grid<Option<char>> = Grid::new(2, 3);
        assert_eq!(grid.value(Position::new(1, 2)), None);

        assert_eq!(grid.set(Position::new(1, 2), Some('A')), Some(None));
        assert_eq!(grid.value(Position::new(1, 2)), Some('A'));

        // Out of bounds writes are dropped
        assert_eq!(grid.set(Position::new(2, 0), Some('B')), None);
        assert_eq!(grid.set(Position::new(0, 3), Some('B')), None);
        assert_eq!(grid.get(Position::new(2, 0)), None);
    }

    #[test]
    fn test_grid_iter_is_row_major() {
        let grid: Grid<u8> = Grid::new(2, 2);
        let positions: Vec<_> = grid.iter().map(|(pos, _)| pos).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_grid_clear() {
        let mut grid: Grid<Option<char>> = Grid::new(1, 2);
        grid.set(Position::new(0, 0), Some('X'));
        grid.clear();
        assert!(grid.iter().all(|(_, v)| v.is_none()));
    }

    #[test]
    fn test_position_offset() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(1, 0), Some(Position::new(1, 0)));
        assert_eq!(Position::from_signed(-3, 2), None);
        assert_eq!(Position::from_signed(3, 2), Some(Position::new(3, 2)));
    }
}
