pub mod batch;
pub mod board;
pub mod dictionary;
pub mod util;
pub mod word_search;

/// Shortest word, in letters, that counts as found
pub const MIN_WORD_LENGTH: usize = 3;

pub use self::board::BoggleBoard;
pub use self::dictionary::Dictionary;
pub use self::word_search::{FoundWords, Solver};
