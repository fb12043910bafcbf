// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded worklist of deductions awaiting relator verification.
//!
//! Felsch enumeration records every edge it installs as a `(coset,
//! generator)` pair and verifies each against the relators that start with
//! that generator. The stack has a fixed capacity; filling up is not an
//! error but a signal that the enumerator must fall back to a global
//! lookahead, so overflow merely sets a sticky flag.

use crate::alphabet::Gen;

use super::Coset;

/// Capacity of the deduction stack.
const MAX_DEDUCTIONS: usize = 1024;

/// A table edge whose relator consequences are still unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deduction {
    /// Source coset of the edge.
    pub coset: Coset,
    /// Generator labelling the edge.
    pub gen: Gen,
}

/// Fixed-capacity stack of pending deductions.
#[derive(Debug)]
pub struct DeductionStack {
    items: Vec<Deduction>,
    dropped: bool,
}

impl DeductionStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(MAX_DEDUCTIONS),
            dropped: false,
        }
    }

    /// Push a deduction, dropping it (and setting the sticky flag) when the
    /// stack is full.
    pub fn push(&mut self, coset: Coset, gen: Gen) {
        if self.items.len() < MAX_DEDUCTIONS {
            self.items.push(Deduction { coset, gen });
        } else {
            self.dropped = true;
        }
    }

    /// Pop the most recent deduction.
    pub fn pop(&mut self) -> Option<Deduction> {
        self.items.pop()
    }

    /// True when no deductions are pending.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True once any deduction has been dropped since the last [`erase`].
    ///
    /// [`erase`]: DeductionStack::erase
    pub fn has_dropped(&self) -> bool {
        self.dropped
    }

    /// Discard all pending deductions and clear the dropped flag. The
    /// caller takes responsibility for a global consistency check.
    pub fn erase(&mut self) {
        self.items.clear();
        self.dropped = false;
    }
}

impl Default for DeductionStack {
    fn default() -> Self {
        Self::new()
    }
}
