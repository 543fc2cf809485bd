use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::errors::BoggleError;

/// Reads a word list in CSV form. Every non-empty field of every record is a word,
/// so a plain list with one word per line works as well as comma separated rows.
pub fn parse_word_list<R: Read>(reader: R) -> Result<Vec<String>, BoggleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut words = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        words.extend(
            record
                .iter()
                .filter(|field| !field.is_empty())
                .map(str::to_string),
        );
    }
    Ok(words)
}

pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, BoggleError> {
    let file = File::open(path.as_ref())?;
    let words = parse_word_list(file)?;
    debug!("Read {} words from {}", words.len(), path.as_ref().display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_one_word_per_line() {
        let words = parse_word_list("cat\n  Dog \n\nbird\n".as_bytes()).unwrap();
        assert_eq!(words, vec!["cat", "Dog", "bird"]);
    }

    #[test]
    fn test_csv_rows_are_flattened() {
        let words = parse_word_list("cat, dog,bird\nrain\n,ring,\n".as_bytes()).unwrap();
        assert_eq!(words, vec!["cat", "dog", "bird", "rain", "ring"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_word_list("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "MASTER,MAST").unwrap();
        writeln!(file, "ASTER").unwrap();
        file.flush().unwrap();

        let words = load_word_list(file.path()).unwrap();
        assert_eq!(words, vec!["MASTER", "MAST", "ASTER"]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_word_list("/definitely/not/a/word/list.csv").unwrap_err();
        assert!(matches!(err, BoggleError::Io(_)));
    }
}
