use std::collections::BTreeSet;

use fst::raw::{Fst, Node};
use fst::Set;

use super::util::fold_word;
use crate::errors::BoggleError;

/// Case-folded word set compiled into an FST so the search can walk it one
/// letter at a time and drop a path as soon as no word starts with it
pub struct Dictionary {
    words: Set<Vec<u8>>,
}

impl Dictionary {
    pub fn new<I, S>(words: I) -> Result<Self, BoggleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // The fst builder needs its keys sorted and unique
        let entries: BTreeSet<String> = words
            .into_iter()
            .map(|w| fold_word(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        let words = Set::from_iter(entries)?;
        Ok(Self { words })
    }

    pub fn empty() -> Self {
        Self {
            words: Set::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact, case-insensitive membership
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(fold_word(word))
    }

    /// Cursor positioned at the empty prefix
    pub fn cursor(&self) -> Cursor<'_> {
        let fst = self.words.as_fst();
        Cursor {
            fst,
            node: fst.root(),
        }
    }
}

/// A prefix of some dictionary word
#[derive(Clone)]
pub struct Cursor<'a> {
    fst: &'a Fst<Vec<u8>>,
    node: Node<'a>,
}

impl<'a> Cursor<'a> {
    /// Extends the prefix by one character. Returns None if no dictionary word
    /// starts with the extended prefix.
    pub fn step(&self, letter: char) -> Option<Cursor<'a>> {
        let mut buf = [0; 4];
        let mut node = self.node.clone();
        for &byte in letter.encode_utf8(&mut buf).as_bytes() {
            let i = node.find_input(byte)?;
            node = self.fst.node(node.transition(i).addr);
        }
        Some(Cursor {
            fst: self.fst,
            node,
        })
    }

    /// Whether the prefix is itself a word
    pub fn is_word(&self) -> bool {
        self.node.is_final()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk<'a>(dict: &'a Dictionary, prefix: &str) -> Option<Cursor<'a>> {
        prefix
            .chars()
            .try_fold(dict.cursor(), |cursor, c| cursor.step(c))
    }

    #[test]
    fn test_dictionary_lookup() {
        let dict = Dictionary::new(["CAT", "dog", "Mouse", "moose", "cat", ""]).unwrap();
        // Duplicates collapse and empty strings are dropped
        assert_eq!(dict.len(), 4);
        assert!(dict.contains("cat"));
        assert!(dict.contains("CAT"));
        assert!(dict.contains("mOuSe"));
        assert!(!dict.contains("mous"));
        assert!(!dict.contains("laptop"));
    }

    #[test]
    fn test_cursor() {
        let dict = Dictionary::new(["mast", "master", "moose"]).unwrap();

        let mas = walk(&dict, "mas").expect("prefix of mast");
        assert!(!mas.is_word());

        let mast = mas.step('t').unwrap();
        assert!(mast.is_word());
        assert!(walk(&dict, "maste").is_some());
        assert!(walk(&dict, "master").unwrap().is_word());

        // No word continues past "master" or starts with "mx"
        assert!(walk(&dict, "masters").is_none());
        assert!(walk(&dict, "mx").is_none());
    }

    #[test]
    fn test_cursor_multibyte() {
        let dict = Dictionary::new(["ÄPFEL", "äsen"]).unwrap();
        let cursor = walk(&dict, "äpfel").unwrap();
        assert!(cursor.is_word());
        assert!(walk(&dict, "äs").is_some());
        assert!(walk(&dict, "a").is_none());
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert!(dict.cursor().step('a').is_none());
        assert!(!dict.cursor().is_word());

        let words: Vec<String> = vec![];
        assert!(Dictionary::new(words).unwrap().is_empty());
    }
}
