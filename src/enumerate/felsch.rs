// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Felsch enumeration: minimal definitions, immediate verification.
//!
//! Where HLT scans whole relators eagerly, Felsch defines one edge at a
//! time and checks each new edge only against the relators that can see
//! it: the cyclic rotations (of every relator and its inverse word) that
//! begin with the edge's generator, scanned at the edge's source, plus the
//! rotations beginning with the inverse generator, scanned at the target.
//! This local check is far cheaper than rescanning all relators at all
//! cosets and keeps the table close to the final index at all times.
//!
//! Pending checks live on the bounded deduction stack. If it overflows,
//! the remaining checks are abandoned in favour of one full lookahead
//! pass, a safe superset of everything dropped; the run is then flagged
//! and re-verified globally after the definition loop, so an overflow can
//! never produce a false "complete" state.

use itertools::Itertools;
use log::debug;

use crate::alphabet::{Alphabet, Gen};
use crate::table::{Coset, OutOfMemory};
use crate::word::Word;

use super::Enumerator;

/// Relator rotations bucketed by first letter, built once per enumeration.
#[derive(Debug)]
pub(crate) struct RelatorTables {
    by_first: Vec<Vec<Word>>,
}

impl RelatorTables {
    /// Bucket every cyclic rotation of every relator and of its formal
    /// inverse under the rotation's first letter.
    pub(crate) fn new(alphabet: Alphabet, relators: &[Word]) -> Self {
        let mut by_first = vec![Vec::new(); alphabet.ngens()];
        let rotations = relators
            .iter()
            .flat_map(|r| [r.clone(), r.inverse()])
            .flat_map(|w| w.rotations().collect::<Vec<_>>())
            .unique();
        for rotation in rotations {
            by_first[rotation.letter(0).as_usize()].push(rotation);
        }
        Self { by_first }
    }

    /// The rotations whose first letter is `x`.
    pub(crate) fn starting_with(&self, x: Gen) -> &[Word] {
        &self.by_first[x.as_usize()]
    }
}

impl Enumerator {
    pub(super) fn felsch(&mut self) -> Result<(), OutOfMemory> {
        let tables = RelatorTables::new(self.table.alphabet(), &self.relators);
        self.seed(true)?;
        self.process_deductions(&tables);
        self.fill_all(&tables)?;

        if !self.dropped_deductions {
            return Ok(());
        }
        // Some incremental checks were skipped. The table is now fully
        // defined, so a full relator sweep either finds nothing (which
        // certifies completeness directly) or coincides cosets, leaving
        // holes to refill before sweeping again.
        debug!("deductions were dropped: verifying globally");
        loop {
            let live = self.table.live_cosets();
            self.lookahead(Coset::FIRST);
            if self.table.live_cosets() == live {
                self.table.erase_deductions();
                return Ok(());
            }
            self.fill_all(&tables)?;
        }
    }

    /// Define every missing action at every live coset, one edge at a
    /// time, draining the deduction stack after each definition.
    fn fill_all(&mut self, tables: &RelatorTables) -> Result<(), OutOfMemory> {
        let mut k = Coset::FIRST;
        while k.index() < self.table.size() {
            if self.table.is_alive(k) {
                for x in self.table.alphabet().gens() {
                    if !self.table.is_alive(k) {
                        break;
                    }
                    if !self.table.is_defined(k, x) {
                        self.table.define(k, x, true)?;
                        self.process_deductions(tables);
                    }
                }
            }
            k = k.next();
        }
        Ok(())
    }

    /// Drain the deduction stack, scanning each popped edge against the
    /// relator rotations that start with its generator (at the source) and
    /// with the inverse generator (at the target).
    ///
    /// Deductions for cosets that have since died are skipped: coincidence
    /// processing re-records every edge it transfers. On overflow the
    /// remaining entries are abandoned for a full lookahead.
    fn process_deductions(&mut self, tables: &RelatorTables) {
        loop {
            if self.table.deductions_dropped() {
                debug!("deduction stack overflow: falling back to full lookahead");
                self.table.erase_deductions();
                self.dropped_deductions = true;
                self.lookahead(Coset::FIRST);
                return;
            }
            let Some(deduction) = self.table.pop_deduction() else {
                return;
            };
            let k = deduction.coset;
            let x = deduction.gen;
            if self.table.is_alive(k) {
                for w in tables.starting_with(x) {
                    if !self.table.is_alive(k) {
                        break;
                    }
                    self.table.scan(k, w, true);
                }
            }
            if !self.table.is_alive(k) {
                continue;
            }
            if let Some(target) = self.table.act(k, x) {
                if self.table.is_alive(target) {
                    for w in tables.starting_with(x.inverse()) {
                        if !self.table.is_alive(target) {
                            break;
                        }
                        self.table.scan(target, w, true);
                    }
                }
            }
        }
    }
}
