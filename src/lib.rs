// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Todd-Coxeter coset enumeration.
//!
//! Computes the index of a subgroup H in a finitely presented group G by
//! incrementally building a coset table forced to be consistent with G's
//! defining relators, terminating when the table is complete.
//!
//! # Architecture
//!
//! The crate is layered leaves-first:
//!
//! - [`alphabet`] / [`word`] / [`presentation`]: the input model — paired
//!   generators with formal inverses, free-group words, and the parsing
//!   boundary that validates relator and subgroup-generator strings.
//! - [`table`]: the coset table itself, with its union-find equivalence
//!   relation ([`table::equiv`]), the bounded deduction worklist
//!   ([`table::deduction`]), the scan/define/coincidence operations, and
//!   the compression and standardization passes ([`table::compress`]).
//! - [`enumerate`]: the three strategies (HLT, HLT with lookahead, Felsch
//!   with deduction propagation) driving the table to completion.
//! - [`render`]: plain-text rendering of a completed table.
//!
//! Everything is single-threaded and deterministic; the only terminal
//! failures are running out of memory for new cosets and, for the
//! lookahead strategy, a table that will not fit under the caller's
//! threshold. Non-termination on infinite-index subgroups is not detected;
//! bound it externally with a coset cap or threshold.
//!
//! # Example
//!
//! ```
//! use todd_coxeter::{Enumerator, Method, Presentation};
//!
//! // S3 = <a, b | a^2, b^3, (ab)^2>, H trivial.
//! let mut presentation = Presentation::new(2)?;
//! presentation.relator("aa")?;
//! presentation.relator("bbb")?;
//! presentation.relator("abab")?;
//!
//! let mut enumerator = Enumerator::new(&presentation, Method::Felsch);
//! enumerator.enumerate()?;
//! assert_eq!(enumerator.index(), 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod alphabet;
pub mod enumerate;
pub mod presentation;
pub mod render;
pub mod table;
pub mod word;

// Re-export the commonly used types.
pub use alphabet::{Alphabet, Gen};
pub use enumerate::{EnumerationError, Enumerator, Method};
pub use presentation::{Presentation, PresentationError};
pub use table::{Coset, CosetTable};
pub use word::Word;
