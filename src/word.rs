// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Words in the free group on the generator alphabet.
//!
//! A [`Word`] is an ordered sequence of generators. Relators and subgroup
//! generators are words; the scanning routines trace them through the coset
//! table letter by letter.

use crate::alphabet::{Alphabet, Gen};

/// An ordered sequence of generators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(Vec<Gen>);

impl Word {
    /// Create a word from generator indices.
    pub fn new(letters: Vec<Gen>) -> Self {
        Self(letters)
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty word (the identity).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letter at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn letter(&self, i: usize) -> Gen {
        self.0[i]
    }

    /// Iterate over the letters in order.
    pub fn letters(&self) -> impl Iterator<Item = Gen> + '_ {
        self.0.iter().copied()
    }

    /// The formal inverse word: letters reversed and each inverted.
    pub fn inverse(&self) -> Word {
        Word(self.0.iter().rev().map(|x| x.inverse()).collect())
    }

    /// All cyclic rotations of this word, starting with the word itself.
    ///
    /// The empty word has no rotations. Used to build the per-generator
    /// relator tables for Felsch enumeration.
    pub fn rotations(&self) -> impl Iterator<Item = Word> + '_ {
        (0..self.0.len()).map(move |i| {
            let mut letters = Vec::with_capacity(self.0.len());
            letters.extend_from_slice(&self.0[i..]);
            letters.extend_from_slice(&self.0[..i]);
            Word(letters)
        })
    }

    /// Render the word with the given alphabet's letters.
    pub fn display(&self, alphabet: Alphabet) -> String {
        self.letters().map(|x| alphabet.char_of_gen(x)).collect()
    }
}
