pub mod log;
pub mod word_list;
