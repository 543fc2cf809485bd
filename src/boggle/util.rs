use std::slice::Iter;

/// The eight compass directions a path can move in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// Iterates the directions in search order (row by row, left to right)
    pub fn iter() -> Iter<'static, Direction> {
        static DIRS: [Direction; 8] = [
            Direction::NorthWest,
            Direction::North,
            Direction::NorthEast,
            Direction::West,
            Direction::East,
            Direction::SouthWest,
            Direction::South,
            Direction::SouthEast,
        ];
        DIRS.iter()
    }

    /// (row, col) offset of a single step
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Self::NorthWest => (-1, -1),
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::West => (0, -1),
            Self::East => (0, 1),
            Self::SouthWest => (1, -1),
            Self::South => (1, 0),
            Self::SouthEast => (1, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring position in the given direction, or None if it
    /// falls off a board of the given (rows, cols) shape
    pub fn step(&self, dir: Direction, shape: (usize, usize)) -> Option<Position> {
        let (d_row, d_col) = dir.offset();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        if row < shape.0 && col < shape.1 {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// Returns all the in-bounds adjacent positions, in direction order
    pub fn adjacent(self, shape: (usize, usize)) -> impl Iterator<Item = Position> {
        Direction::iter().filter_map(move |&d| self.step(d, shape))
    }

    /// Converts the row/col to an ndarray index
    pub fn as_index(&self) -> [usize; 2] {
        [self.row, self.col]
    }
}

/// Lower-cases a single character. Characters whose lower-case form is more than
/// one character long are left alone so that a cell always stays a single char.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Folds a word one character at a time, the same way board cells are folded
pub fn fold_word(word: &str) -> String {
    word.chars().map(fold_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_order() {
        let offsets = Direction::iter().map(|d| d.offset()).collect::<Vec<_>>();
        assert_eq!(
            offsets,
            vec![
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1)
            ]
        );
    }

    #[test]
    fn test_adjacent() {
        let shape = (4, 4);
        assert_eq!(Position::new(0, 0).adjacent(shape).count(), 3);
        assert_eq!(Position::new(0, 2).adjacent(shape).count(), 5);
        assert_eq!(Position::new(1, 1).adjacent(shape).count(), 8);
        assert_eq!(Position::new(3, 3).adjacent(shape).count(), 3);

        let corner = Position::new(0, 0).adjacent(shape).collect::<Vec<_>>();
        assert_eq!(
            corner,
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );

        // Single cell and empty boards have no neighbours
        assert_eq!(Position::new(0, 0).adjacent((1, 1)).count(), 0);
        assert_eq!(Position::new(0, 0).adjacent((0, 0)).count(), 0);
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold_char('Q'), 'q');
        assert_eq!(fold_char('q'), 'q');
        assert_eq!(fold_char('Ä'), 'ä');
        // 'İ' lower-cases to two chars, so it is kept
        assert_eq!(fold_char('İ'), 'İ');
        assert_eq!(fold_word("MaStEr"), "master");
    }
}
