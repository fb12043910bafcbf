// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generators and their inverse pairing.
//!
//! A presentation of rank n works over 2n formal generators: each group
//! generator together with its formal inverse. Generators are stored in
//! canonical pairs: index `2i` is the i-th generator, index `2i + 1` its
//! inverse, so inversion is a single bit flip.
//!
//! The [`Alphabet`] is an immutable configuration value constructed once and
//! passed to every component that needs the generator count or the letter
//! encoding. Letters `a..z` denote generators and `A..Z` their inverses.

use std::fmt;

/// Largest supported rank (one letter pair per generator).
pub const MAX_RANK: usize = 26;

/// A generator index in `[0, ngens)`.
///
/// Newtype wrapper to keep generator indices from mixing with coset indices
/// and other integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gen(u8);

impl Gen {
    /// Create a generator index without range checking against an alphabet.
    ///
    /// Words are validated at the parsing boundary, so internal code may
    /// construct `Gen` values freely.
    pub fn new(index: u8) -> Self {
        Self(index)
    }

    /// The formal inverse of this generator.
    ///
    /// Pairs are laid out as `(2i, 2i + 1)`, so this is an involution with
    /// no fixed points.
    pub fn inverse(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// The underlying index, for table columns.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// The generator alphabet of one presentation: rank plus letter encoding.
///
/// This replaces global generator tables with an explicit value; every
/// component that needs `ngens` or the inverse pairing receives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    rank: usize,
}

impl Alphabet {
    /// Create an alphabet for a presentation of the given rank.
    ///
    /// Returns `None` unless `1 <= rank <= MAX_RANK`.
    pub fn new(rank: usize) -> Option<Self> {
        if (1..=MAX_RANK).contains(&rank) {
            Some(Self { rank })
        } else {
            None
        }
    }

    /// Number of group generators (letter pairs).
    pub fn rank(self) -> usize {
        self.rank
    }

    /// Total number of formal generators, counting inverses. Always even.
    pub fn ngens(self) -> usize {
        2 * self.rank
    }

    /// Iterate over all formal generators in index order.
    pub fn gens(self) -> impl Iterator<Item = Gen> {
        (0..self.ngens() as u8).map(Gen)
    }

    /// Decode a letter: `a..` for generators, `A..` for inverses.
    ///
    /// Returns `None` for letters outside this alphabet's rank.
    pub fn gen_of_char(self, c: char) -> Option<Gen> {
        let index = if c.is_ascii_lowercase() {
            2 * (c as u8 - b'a')
        } else if c.is_ascii_uppercase() {
            2 * (c as u8 - b'A') + 1
        } else {
            return None;
        };
        if (index as usize) < self.ngens() {
            Some(Gen(index))
        } else {
            None
        }
    }

    /// Encode a generator as its letter.
    ///
    /// # Panics
    ///
    /// Panics if the generator is outside this alphabet.
    pub fn char_of_gen(self, x: Gen) -> char {
        assert!(x.as_usize() < self.ngens(), "generator out of alphabet: {:?}", x);
        let pair = x.0 / 2;
        if x.0 % 2 == 0 {
            (b'a' + pair) as char
        } else {
            (b'A' + pair) as char
        }
    }
}

impl fmt::Display for Alphabet {
    /// The usable letters, e.g. `a,A,b,B` for rank 2.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for x in self.gens() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", self.char_of_gen(x))?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_is_involution() {
        for i in 0..52 {
            let x = Gen::new(i);
            assert_ne!(x.inverse(), x);
            assert_eq!(x.inverse().inverse(), x);
        }
    }

    #[test]
    fn test_alphabet_rank_bounds() {
        assert!(Alphabet::new(0).is_none());
        assert!(Alphabet::new(1).is_some());
        assert!(Alphabet::new(26).is_some());
        assert!(Alphabet::new(27).is_none());
    }

    #[test]
    fn test_letter_round_trip() {
        let alphabet = Alphabet::new(3).unwrap();
        for x in alphabet.gens() {
            let c = alphabet.char_of_gen(x);
            assert_eq!(alphabet.gen_of_char(c), Some(x));
        }
    }

    #[test]
    fn test_letters_outside_rank_rejected() {
        let alphabet = Alphabet::new(2).unwrap();
        assert_eq!(alphabet.gen_of_char('a'), Some(Gen::new(0)));
        assert_eq!(alphabet.gen_of_char('A'), Some(Gen::new(1)));
        assert_eq!(alphabet.gen_of_char('b'), Some(Gen::new(2)));
        assert!(alphabet.gen_of_char('c').is_none());
        assert!(alphabet.gen_of_char('C').is_none());
        assert!(alphabet.gen_of_char('1').is_none());
    }

    #[test]
    fn test_display() {
        let alphabet = Alphabet::new(2).unwrap();
        assert_eq!(alphabet.to_string(), "a,A,b,B");
    }
}
