// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Group presentations: rank, defining relators, subgroup generators.
//!
//! A [`Presentation`] bundles everything the enumerator consumes: the
//! generator [`Alphabet`], the relator words of G, and the generator words
//! of the subgroup H. Word strings are validated here, at the parsing
//! boundary; the core operates purely on checked generator indices.
//!
//! # Text format
//!
//! The `tc` binary reads presentations in the original prompt format:
//!
//! ```text
//! # S3, trivial subgroup
//! 2
//! aa
//! bbb
//! abab
//! .
//! .
//! ```
//!
//! First the rank, then relators until a `.` line, then subgroup generators
//! until a `.` line. Blank lines and `#` comments are skipped.

use thiserror::Error;

use crate::alphabet::{Alphabet, MAX_RANK};
use crate::word::Word;

/// Errors rejected at the presentation-parsing boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresentationError {
    /// The rank must fit the letter alphabet.
    #[error("rank {0} out of range (expected 1..={MAX_RANK})")]
    RankOutOfRange(usize),

    /// The rank line was missing or not a number.
    #[error("expected a rank line with an integer, found {0:?}")]
    BadRank(String),

    /// A word used a letter outside the configured alphabet.
    #[error("invalid letter {letter:?} in word {word:?}; use alphabet {alphabet}")]
    BadLetter {
        letter: char,
        word: String,
        alphabet: Alphabet,
    },

    /// The input ended before both `.` terminators were seen.
    #[error("unexpected end of input: missing '.' terminator")]
    UnterminatedSection,
}

/// A finitely presented group G together with a subgroup H.
#[derive(Debug, Clone)]
pub struct Presentation {
    alphabet: Alphabet,
    relators: Vec<Word>,
    subgroup_generators: Vec<Word>,
}

impl Presentation {
    /// Create an empty presentation of the given rank (a free group, with
    /// the trivial subgroup).
    pub fn new(rank: usize) -> Result<Self, PresentationError> {
        let alphabet = Alphabet::new(rank).ok_or(PresentationError::RankOutOfRange(rank))?;
        Ok(Self {
            alphabet,
            relators: Vec::new(),
            subgroup_generators: Vec::new(),
        })
    }

    /// Add a defining relator of G, e.g. `"abab"`.
    pub fn relator(&mut self, word: &str) -> Result<&mut Self, PresentationError> {
        let w = self.parse_word(word)?;
        self.relators.push(w);
        Ok(self)
    }

    /// Add a generator of the subgroup H, e.g. `"aa"`.
    pub fn subgroup_generator(&mut self, word: &str) -> Result<&mut Self, PresentationError> {
        let w = self.parse_word(word)?;
        self.subgroup_generators.push(w);
        Ok(self)
    }

    /// The generator alphabet.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// The defining relators of G.
    pub fn relators(&self) -> &[Word] {
        &self.relators
    }

    /// The generators of H.
    pub fn subgroup_generators(&self) -> &[Word] {
        &self.subgroup_generators
    }

    /// Parse a presentation from the text format described in the module
    /// docs.
    pub fn parse(text: &str) -> Result<Self, PresentationError> {
        let mut lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let rank_line = lines.next().unwrap_or("");
        let rank: usize = rank_line
            .parse()
            .map_err(|_| PresentationError::BadRank(rank_line.to_string()))?;
        let mut presentation = Presentation::new(rank)?;

        let mut in_relators = true;
        for line in lines {
            if line == "." {
                if in_relators {
                    in_relators = false;
                    continue;
                }
                return Ok(presentation);
            }
            if in_relators {
                presentation.relator(line)?;
            } else {
                presentation.subgroup_generator(line)?;
            }
        }
        Err(PresentationError::UnterminatedSection)
    }

    fn parse_word(&self, word: &str) -> Result<Word, PresentationError> {
        let mut letters = Vec::with_capacity(word.len());
        for c in word.chars() {
            let x = self
                .alphabet
                .gen_of_char(c)
                .ok_or(PresentationError::BadLetter {
                    letter: c,
                    word: word.to_string(),
                    alphabet: self.alphabet,
                })?;
            letters.push(x);
        }
        Ok(Word::new(letters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let mut p = Presentation::new(2).unwrap();
        p.relator("aa").unwrap();
        p.relator("bbb").unwrap();
        p.subgroup_generator("ab").unwrap();
        assert_eq!(p.relators().len(), 2);
        assert_eq!(p.subgroup_generators().len(), 1);
        assert_eq!(p.alphabet().ngens(), 4);
    }

    #[test]
    fn test_bad_rank() {
        assert_eq!(
            Presentation::new(0).unwrap_err(),
            PresentationError::RankOutOfRange(0)
        );
        assert_eq!(
            Presentation::new(27).unwrap_err(),
            PresentationError::RankOutOfRange(27)
        );
    }

    #[test]
    fn test_bad_letter() {
        let mut p = Presentation::new(1).unwrap();
        let err = p.relator("ab").unwrap_err();
        assert!(matches!(err, PresentationError::BadLetter { letter: 'b', .. }));
    }

    #[test]
    fn test_parse_text() {
        let text = "\
# S3
2
aa
bbb
abab
.
.
";
        let p = Presentation::parse(text).unwrap();
        assert_eq!(p.alphabet().rank(), 2);
        assert_eq!(p.relators().len(), 3);
        assert!(p.subgroup_generators().is_empty());
    }

    #[test]
    fn test_parse_with_subgroup() {
        let p = Presentation::parse("1\n.\naa\n.\n").unwrap();
        assert!(p.relators().is_empty());
        assert_eq!(p.subgroup_generators().len(), 1);
    }

    #[test]
    fn test_parse_missing_terminator() {
        assert_eq!(
            Presentation::parse("2\naa\n.\n").unwrap_err(),
            PresentationError::UnterminatedSection
        );
        assert!(matches!(
            Presentation::parse("").unwrap_err(),
            PresentationError::BadRank(_)
        ));
    }
}
