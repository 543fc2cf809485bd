use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use super::board::BoggleBoard;
use super::dictionary::Dictionary;
use super::word_search::Solver;

/// Words found on one board of a batch, in the shape the solve endpoint responds with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSolution {
    pub matrix_index: usize,
    pub found_words: Vec<String>,
}

/// Solves every board against the same dictionary. Boards are spread over the rayon
/// pool, results come back in input order.
pub fn solve_boards(boards: Vec<BoggleBoard>, dictionary: Arc<Dictionary>) -> Vec<BoardSolution> {
    boards
        .into_par_iter()
        .enumerate()
        .map(|(matrix_index, board)| {
            let solver = Solver::with_dictionary(board, dictionary.clone());
            BoardSolution {
                matrix_index,
                found_words: solver.solve().into_iter().collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_boards_in_order() {
        let boards = BoggleBoard::parse_json(
            r#"[
                [["B","N","C","D"],["E","I","G","H"],["I","A","R","L"],["M","R","O","D"]],
                [],
                [["c","a","t"]]
            ]"#,
        )
        .unwrap();
        let dict = Arc::new(Dictionary::new(["bird", "rain", "ring", "cat", "dog"]).unwrap());

        let solutions = solve_boards(boards, dict);
        assert_eq!(solutions.len(), 3);
        assert_eq!(solutions[0].matrix_index, 0);
        assert_eq!(solutions[0].found_words, vec!["bird", "rain", "ring"]);
        assert!(solutions[1].found_words.is_empty());
        assert_eq!(solutions[2].found_words, vec!["cat"]);
    }

    #[test]
    fn test_solution_json() {
        let solution = BoardSolution {
            matrix_index: 2,
            found_words: vec!["bird".into()],
        };
        assert_eq!(
            serde_json::to_string(&solution).unwrap(),
            r#"{"matrixIndex":2,"foundWords":["bird"]}"#
        );
    }
}
