//! Error type shared by the board, dictionary and word-list loaders.
//!
//! Solving itself never fails: an empty board just yields no words. Errors only
//! come from turning external input (JSON matrices, word-list files) into the
//! engine's types.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum BoggleError {
    #[error("row {} has {found} cells, expected {expected}", .row + 1)]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell at row {}, column {} must be a single character, got {cell:?}", .row + 1, .col + 1)]
    InvalidCell { row: usize, col: usize, cell: String },

    #[error("matrix {}: {source}", .index + 1)]
    InvalidMatrix {
        index: usize,
        #[source]
        source: Box<BoggleError>,
    },

    #[error("board shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("failed to build dictionary: {0}")]
    Dictionary(#[from] fst::Error),

    #[error("failed to read word list: {0}")]
    WordList(#[from] csv::Error),

    #[error("invalid board json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl BoggleError {
    /// Attaches the index of the matrix being parsed to a board error.
    pub fn in_matrix(self, index: usize) -> Self {
        BoggleError::InvalidMatrix {
            index,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_one_based() {
        let err = BoggleError::RaggedRow {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "row 3 has 3 cells, expected 4");

        let err = BoggleError::InvalidCell {
            row: 0,
            col: 1,
            cell: "qu".into(),
        }
        .in_matrix(0);
        assert_eq!(
            err.to_string(),
            "matrix 1: cell at row 1, column 2 must be a single character, got \"qu\""
        );
    }
}
