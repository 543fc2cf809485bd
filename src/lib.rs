//! Boggle-style word search: finds every dictionary word that can be spelled by a
//! path of adjacent, non-repeating cells in a rectangular letter grid.
//!
//! ```
//! use boggle_solver::boggle::{BoggleBoard, Solver};
//!
//! let board = BoggleBoard::parse_line("bncd eigh iarl mrod").unwrap();
//! let solver = Solver::new(board, ["BIRD", "RAIN", "RING", "CAT"]).unwrap();
//! let found = solver.solve();
//! assert!(found.contains("bird"));
//! assert!(!found.contains("cat"));
//! ```

pub mod boggle;
pub mod errors;
pub mod utils;
