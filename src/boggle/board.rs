use std::fmt;
use std::fs;
use std::path::Path;

use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;
use serde::Deserialize;

use super::util::{fold_char, Position};
use crate::errors::BoggleError;

/// Raw matrices as they arrive over JSON. A file can hold a single matrix or a list of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBoards {
    Many(Vec<Vec<Vec<String>>>),
    One(Vec<Vec<String>>),
}

/// Rectangular grid of lower-cased single-character cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoggleBoard {
    cells: Array2<char>,
}

impl BoggleBoard {
    pub fn empty() -> Self {
        Self {
            cells: Array2::from_elem((0, 0), ' '),
        }
    }

    /// Builds a board from rows of single-character strings. Every row must be
    /// as long as the first one. Zero rows, or zero-length rows, give an empty board.
    pub fn from_rows<I, R, S>(rows: I) -> Result<Self, BoggleError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut n_rows = 0;
        let mut n_cols = None;

        for (row, row_cells) in rows.into_iter().enumerate() {
            let start = cells.len();
            for (col, cell) in row_cells.into_iter().enumerate() {
                let cell = cell.as_ref();
                let mut chars = cell.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => cells.push(fold_char(c)),
                    _ => {
                        return Err(BoggleError::InvalidCell {
                            row,
                            col,
                            cell: cell.to_string(),
                        })
                    }
                }
            }
            Self::check_row_length(row, cells.len() - start, &mut n_cols)?;
            n_rows += 1;
        }

        Self::from_shape(n_rows, n_cols.unwrap_or(0), cells)
    }

    /// Builds a board from rows of characters
    pub fn from_chars<I, R>(rows: I) -> Result<Self, BoggleError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = char>,
    {
        let mut cells = Vec::new();
        let mut n_rows = 0;
        let mut n_cols = None;

        for (row, row_cells) in rows.into_iter().enumerate() {
            let start = cells.len();
            cells.extend(row_cells.into_iter().map(fold_char));
            Self::check_row_length(row, cells.len() - start, &mut n_cols)?;
            n_rows += 1;
        }

        Self::from_shape(n_rows, n_cols.unwrap_or(0), cells)
    }

    /// Parses a board typed on one line, with rows separated by whitespace.
    /// e.g. "bncd eigh iarl mrod"
    pub fn parse_line(line: &str) -> Result<Self, BoggleError> {
        Self::from_chars(line.split_whitespace().map(|row| row.chars()))
    }

    /// Parses either a single JSON matrix or a JSON list of matrices
    pub fn parse_json(data: &str) -> Result<Vec<Self>, BoggleError> {
        let raw: RawBoards = serde_json::from_str(data)?;
        match raw {
            RawBoards::One(matrix) => Ok(vec![Self::from_rows(matrix).map_err(|e| e.in_matrix(0))?]),
            RawBoards::Many(matrices) => matrices
                .into_iter()
                .enumerate()
                .map(|(i, matrix)| Self::from_rows(matrix).map_err(|e| e.in_matrix(i)))
                .collect(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, BoggleError> {
        let data = fs::read_to_string(path.as_ref())?;
        Self::parse_json(&data)
    }

    /// Generates a board of uniformly random letters a-z
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let cells = Array2::<u8>::random_using((rows, cols), Uniform::new_inclusive(b'a', b'z'), rng)
            .mapv(char::from);
        Self { cells }
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// True for a board with no rows or with zero-length rows
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (rows, cols) = self.shape();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Position { row, col }))
    }

    fn check_row_length(
        row: usize,
        found: usize,
        n_cols: &mut Option<usize>,
    ) -> Result<(), BoggleError> {
        match *n_cols {
            None => {
                *n_cols = Some(found);
                Ok(())
            }
            Some(expected) if expected != found => Err(BoggleError::RaggedRow {
                row,
                expected,
                found,
            }),
            Some(_) => Ok(()),
        }
    }

    fn from_shape(rows: usize, cols: usize, cells: Vec<char>) -> Result<Self, BoggleError> {
        // A board with rows of zero length holds no cells at all
        let rows = if cols == 0 { 0 } else { rows };
        let cells = Array2::from_shape_vec((rows, cols), cells)?;
        Ok(Self { cells })
    }
}

impl std::ops::Index<Position> for BoggleBoard {
    type Output = char;

    fn index(&self, index: Position) -> &Self::Output {
        &self.cells[index.as_index()]
    }
}

impl fmt::Display for BoggleBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line = row
                .iter()
                .flat_map(|c| c.to_uppercase())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
