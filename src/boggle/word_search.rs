use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, warn};
use ndarray::Array2;
use rayon::prelude::*;

use super::board::BoggleBoard;
use super::dictionary::{Cursor, Dictionary};
use super::util::Position;
use super::MIN_WORD_LENGTH;
use crate::errors::BoggleError;

/// Words found on a board, lower-cased
pub type FoundWords = BTreeSet<String>;

/*
    Exhaustive depth-first search over simple paths of adjacent cells. The dictionary
    cursor travels down the path with us, so a branch ends as soon as no word in the
    dictionary has the letters on the path as a prefix.
*/

/// Scratch state for one search. The visited flags are always restored on the way
/// back out of a branch, so the same state can be reused for every start position.
struct PathState {
    visited: Array2<bool>,
    word: String,
    found: FoundWords,
}

impl PathState {
    fn new(shape: (usize, usize)) -> Self {
        Self {
            visited: Array2::from_elem(shape, false),
            word: String::new(),
            found: FoundWords::new(),
        }
    }
}

pub struct Solver {
    board: BoggleBoard,
    dictionary: Arc<Dictionary>,
}

impl Solver {
    /// Builds a solver with its own dictionary compiled from the given words
    pub fn new<I, S>(board: BoggleBoard, words: I) -> Result<Self, BoggleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = Dictionary::new(words)?;
        Ok(Self::with_dictionary(board, Arc::new(dictionary)))
    }

    /// Builds a solver sharing an already compiled dictionary
    pub fn with_dictionary(board: BoggleBoard, dictionary: Arc<Dictionary>) -> Self {
        Self { board, dictionary }
    }

    pub fn board(&self) -> &BoggleBoard {
        &self.board
    }

    /// Finds every dictionary word of at least MIN_WORD_LENGTH letters that can be
    /// spelled by a path of adjacent cells without reusing a cell
    pub fn solve(&self) -> FoundWords {
        if self.board.is_empty() {
            warn!("Board is empty, nothing to solve");
            return FoundWords::new();
        }

        let mut path = PathState::new(self.board.shape());
        for start in self.board.positions() {
            self.search(start, self.dictionary.cursor(), 0, &mut path);
        }
        debug_assert!(path.visited.iter().all(|v| !v));

        debug!(
            "Found {} words on a {:?} board",
            path.found.len(),
            self.board.shape()
        );
        path.found
    }

    /// Same result as [`Solver::solve`], with every start position searched as its
    /// own rayon task. Each task keeps its own path state and the sets are merged at the end.
    pub fn solve_parallel(&self) -> FoundWords {
        if self.board.is_empty() {
            warn!("Board is empty, nothing to solve");
            return FoundWords::new();
        }

        let shape = self.board.shape();
        let found = self
            .board
            .positions()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|start| {
                let mut path = PathState::new(shape);
                self.search(start, self.dictionary.cursor(), 0, &mut path);
                path.found
            })
            .reduce(FoundWords::new, |mut acc, words| {
                acc.extend(words);
                acc
            });

        debug!("Found {} words on a {:?} board", found.len(), shape);
        found
    }

    fn search(&self, pos: Position, cursor: Cursor<'_>, depth: usize, path: &mut PathState) {
        if path.visited[pos.as_index()] {
            return;
        }

        let letter = self.board[pos];
        let cursor = match cursor.step(letter) {
            Some(c) => c,
            // Nothing in the dictionary starts with this path
            None => return,
        };
        let depth = depth + 1;

        path.word.push(letter);
        if depth >= MIN_WORD_LENGTH && cursor.is_word() {
            path.found.insert(path.word.clone());
        }

        path.visited[pos.as_index()] = true;
        for next in pos.adjacent(self.board.shape()) {
            self.search(next, cursor.clone(), depth, path);
        }
        path.visited[pos.as_index()] = false;
        path.word.pop();
    }
}
