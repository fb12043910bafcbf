// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The coset table: one row per coset, one column per generator.
//!
//! This is the combinatorial object the Todd-Coxeter procedure builds. Each
//! row maps every generator to either an undefined entry or the coset
//! reached by that generator's action. The enumeration strategies in
//! [`crate::enumerate`] drive the table through three operations:
//!
//! - [`CosetTable::define`] creates a new coset as the target of one edge;
//! - [`CosetTable::scan`] / [`CosetTable::scan_and_fill`] trace a relator
//!   through the table from both ends, closing it into a deduction or a
//!   coincidence;
//! - [`CosetTable::coincidence`] merges two coset placeholders that have
//!   been discovered to denote the same coset.
//!
//! # Invariants
//!
//! - Coset `k` is alive iff it is its own union-find representative.
//! - Row symmetry: whenever `row[k][x] = l` for live `k`, then
//!   `row[l][inv(x)] = k`. Definitions install both directions at once and
//!   coincidence processing repairs the pair as it transfers edges.
//!
//! Coincidence propagation drains an explicit FIFO queue rather than
//! recursing, so pathological coincidence chains cannot exhaust the call
//! stack. Dead rows keep their entries until [`CosetTable::compress`]
//! discards them; indices are stable everywhere else.

pub mod compress;
pub mod deduction;
pub mod equiv;

pub use deduction::{Deduction, DeductionStack};
pub use equiv::EquivRelation;

use std::collections::VecDeque;
use std::fmt;

use log::{debug, trace};
use thiserror::Error;

use crate::alphabet::{Alphabet, Gen};
use crate::word::Word;

/// A coset identifier: the row index assigned at creation.
///
/// Indices increase monotonically until compression, which may renumber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coset(u32);

impl Coset {
    /// Coset 0: the subgroup H itself, seed of the enumeration.
    pub const FIRST: Coset = Coset(0);

    /// Create a coset identifier from a row index.
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// The row index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The next coset index.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Coset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocation of a new coset row failed, either because the configured coset
/// cap was reached or because the allocator refused to grow the table.
///
/// Fatal to the current enumeration attempt; the partial table is unusable.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("out of memory: cannot allocate a new coset (table has {size} cosets)")]
pub struct OutOfMemory {
    /// Table size at the point of failure.
    pub size: usize,
}

/// The row-per-coset action table, with its equivalence relation and
/// deduction stack.
#[derive(Debug)]
pub struct CosetTable {
    alphabet: Alphabet,
    /// `rows[k][x]` is the coset reached from `k` by generator `x`.
    rows: Vec<Vec<Option<Coset>>>,
    equiv: EquivRelation,
    /// Dead cosets whose edges still need transferring.
    queue: VecDeque<Coset>,
    deductions: DeductionStack,
    live: usize,
    max_cosets: usize,
}

impl CosetTable {
    /// Create a table over the given alphabet, holding only coset 0.
    ///
    /// `max_cosets` bounds the number of rows ever allocated; [`define`]
    /// fails with [`OutOfMemory`] beyond it.
    ///
    /// [`define`]: CosetTable::define
    pub fn new(alphabet: Alphabet, max_cosets: usize) -> Self {
        let mut table = Self {
            alphabet,
            rows: Vec::new(),
            equiv: EquivRelation::new(0),
            queue: VecDeque::new(),
            deductions: DeductionStack::new(),
            live: 0,
            max_cosets,
        };
        table.rows.push(table.blank_row());
        table.equiv.push();
        table.live = 1;
        table
    }

    fn blank_row(&self) -> Vec<Option<Coset>> {
        vec![None; self.alphabet.ngens()]
    }

    /// The generator alphabet this table is defined over.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Current number of rows, dead ones included.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Number of live cosets. Once enumeration succeeds this is the index
    /// of H in G.
    pub fn live_cosets(&self) -> usize {
        self.live
    }

    /// True when `k` has not been merged away.
    pub fn is_alive(&self, k: Coset) -> bool {
        self.equiv.is_rep(k)
    }

    /// True when the action of `x` at `k` is defined.
    pub fn is_defined(&self, k: Coset, x: Gen) -> bool {
        self.rows[k.index()][x.as_usize()].is_some()
    }

    /// The coset reached from `k` by `x`, if defined.
    pub fn act(&self, k: Coset, x: Gen) -> Option<Coset> {
        self.rows[k.index()][x.as_usize()]
    }

    /// Read access to one row, for rendering.
    pub fn row(&self, k: Coset) -> &[Option<Coset>] {
        &self.rows[k.index()]
    }

    /// Iterate over live rows in index order, for rendering.
    pub fn live_rows(&self) -> impl Iterator<Item = (Coset, &[Option<Coset>])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(k, row)| (Coset::new(k), row.as_slice()))
            .filter(|(k, _)| self.is_alive(*k))
    }

    /// Define the action of `x` at `k` to be a fresh coset.
    ///
    /// Installs both the edge and its inverse and returns the new coset.
    /// When `record` is set the definition is pushed onto the deduction
    /// stack for later relator verification.
    ///
    /// Requires `k` alive and `x` undefined at `k` (debug-asserted).
    pub fn define(&mut self, k: Coset, x: Gen, record: bool) -> Result<Coset, OutOfMemory> {
        debug_assert!(self.is_alive(k), "define at dead coset {k}");
        debug_assert!(!self.is_defined(k, x), "redefinition at coset {k}");

        if self.rows.len() >= self.max_cosets || self.rows.try_reserve(1).is_err() {
            return Err(OutOfMemory { size: self.rows.len() });
        }
        let l = Coset::new(self.rows.len());
        let mut row = self.blank_row();
        row[x.inverse().as_usize()] = Some(k);
        self.rows.push(row);
        self.rows[k.index()][x.as_usize()] = Some(l);
        self.equiv.push();
        self.live += 1;
        trace!(
            "definition {}: {k} -> {l}",
            self.alphabet.char_of_gen(x)
        );
        if record {
            self.deductions.push(k, x);
        }
        Ok(l)
    }

    /// Scan the word `w` starting and ending at coset `k`, without ever
    /// creating new cosets.
    ///
    /// A forward pointer advances along defined actions; a backward pointer
    /// retreats along defined inverse actions. When the pointers meet at
    /// distinct cosets a coincidence is resolved; when they close to a
    /// single undefined letter the missing edge pair is installed (a
    /// deduction, recorded when `record` is set); a wider gap yields no
    /// information and the scan is abandoned.
    pub fn scan(&mut self, k: Coset, w: &Word, record: bool) {
        let mut f = k;
        let mut b = k;
        let mut i = 0; // next letter to scan forward
        let mut j = w.len(); // letters `i..j` remain unscanned

        while i < j {
            match self.act(f, w.letter(i)) {
                Some(t) => {
                    f = t;
                    i += 1;
                }
                None => break,
            }
        }
        if i == j {
            if f != b {
                self.coincidence(f, b, record);
            }
            return;
        }
        while j > i {
            match self.act(b, w.letter(j - 1).inverse()) {
                Some(t) => {
                    b = t;
                    j -= 1;
                }
                None => break,
            }
        }
        if j == i {
            // Both pointers covered the whole word.
            if f != b {
                self.coincidence(f, b, record);
            }
        } else if j == i + 1 {
            // Exactly one letter open on both sides: a deduction.
            self.install_edge(f, w.letter(i), b, record);
        }
        // A gap of more than one letter is an incomplete scan; nothing
        // learned.
    }

    /// Scan the word `w` at coset `k`, defining new cosets whenever the
    /// scan would otherwise stall.
    ///
    /// The only table operation that can fail with [`OutOfMemory`].
    pub fn scan_and_fill(&mut self, k: Coset, w: &Word, record: bool) -> Result<(), OutOfMemory> {
        let mut f = k;
        let mut b = k;
        let mut i = 0;
        let mut j = w.len();

        loop {
            while i < j {
                match self.act(f, w.letter(i)) {
                    Some(t) => {
                        f = t;
                        i += 1;
                    }
                    None => break,
                }
            }
            if i == j {
                if f != b {
                    self.coincidence(f, b, record);
                }
                return Ok(());
            }
            while j > i {
                match self.act(b, w.letter(j - 1).inverse()) {
                    Some(t) => {
                        b = t;
                        j -= 1;
                    }
                    None => break,
                }
            }
            if j == i {
                if f != b {
                    self.coincidence(f, b, record);
                }
                return Ok(());
            }
            if j == i + 1 {
                self.install_edge(f, w.letter(i), b, record);
                return Ok(());
            }
            // Incomplete: define the blocking edge and resume the forward
            // scan from the same position.
            self.define(f, w.letter(i), record)?;
        }
    }

    /// Install the edge pair `k --x--> l`, `l --inv(x)--> k`.
    fn install_edge(&mut self, k: Coset, x: Gen, l: Coset, record: bool) {
        trace!("deduction {}: {k} -> {l}", self.alphabet.char_of_gen(x));
        self.rows[k.index()][x.as_usize()] = Some(l);
        self.rows[l.index()][x.inverse().as_usize()] = Some(k);
        if record {
            self.deductions.push(k, x);
        }
    }

    /// Merge the classes of `k` and `l`, queueing the obsolete index.
    fn merge(&mut self, k: Coset, l: Coset) {
        if let Some(obsolete) = self.equiv.merge(k, l) {
            self.live -= 1;
            self.queue.push_back(obsolete);
        }
    }

    /// Declare cosets `k` and `l` equal and restore table consistency.
    ///
    /// Works breadth-first over a queue of dead cosets: every edge of a dead
    /// coset is removed together with its reverse edge and re-inserted
    /// between the class representatives, merging further whenever the
    /// representative rows disagree. Draining the queue (rather than merging
    /// pointwise) is required for correctness; transferred edges can expose
    /// new coincidences that would otherwise be lost.
    pub fn coincidence(&mut self, k: Coset, l: Coset, record: bool) {
        debug!("coincidence ({k}, {l})");
        self.merge(k, l);
        while let Some(e) = self.queue.pop_front() {
            for x in self.alphabet.gens() {
                let Some(f) = self.act(e, x) else { continue };
                // Remove the reverse edge f --inv(x)--> e before the
                // transfer; e's own row is discarded with e.
                self.rows[f.index()][x.inverse().as_usize()] = None;
                let e1 = self.equiv.rep(e);
                let f1 = self.equiv.rep(f);
                if let Some(t) = self.act(e1, x) {
                    self.merge(f1, t);
                } else if let Some(t) = self.act(f1, x.inverse()) {
                    self.merge(e1, t);
                } else {
                    self.install_edge(e1, x, f1, record);
                }
            }
        }
    }

    // Deduction-stack access for the Felsch strategy.

    /// Pop the most recent unverified deduction.
    pub fn pop_deduction(&mut self) -> Option<Deduction> {
        self.deductions.pop()
    }

    /// True once the deduction stack has overflowed and dropped entries.
    pub fn deductions_dropped(&self) -> bool {
        self.deductions.has_dropped()
    }

    /// Discard pending deductions and reset the overflow flag; the caller
    /// must follow up with a global lookahead.
    pub fn erase_deductions(&mut self) {
        self.deductions.erase();
    }

    /// Resolve `k` to its class representative.
    pub fn rep(&mut self, k: Coset) -> Coset {
        self.equiv.rep(k)
    }
}
