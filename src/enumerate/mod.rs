// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration strategies that drive the coset table to completion.
//!
//! All three strategies share one completion criterion: every live coset
//! has all generator actions defined and every relator scans cleanly from
//! every live coset. They differ in how eagerly they define cosets:
//!
//! - **HLT** scans and fills relators coset by coset, defining whole rows
//!   eagerly; coincidences are discovered late, so the table can grow far
//!   beyond the final index.
//! - **HLT with lookahead** is HLT with a size threshold: when the table
//!   outgrows it, a scan-only lookahead pass hunts for hidden coincidences
//!   and the table is compressed before continuing.
//! - **Felsch** defines one edge at a time and immediately verifies it
//!   against the relators that start with that edge's generator, keeping
//!   the table near-minimal at higher cost per definition.
//!
//! The enumerator consumes a [`Presentation`] and owns the table; on
//! success the live-coset count is the index of H in G.

pub mod felsch;

use log::debug;
use thiserror::Error;

use crate::presentation::Presentation;
use crate::table::{Coset, CosetTable, OutOfMemory};
use crate::word::Word;

/// Which enumeration strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Plain HLT: eager row filling, no size control.
    Hlt,
    /// HLT with a lookahead-and-compress pass above `threshold` rows.
    HltLookahead {
        /// Table size above which lookahead is triggered.
        threshold: usize,
    },
    /// Felsch: minimal definitions with immediate deduction checking.
    Felsch,
}

/// Terminal outcomes of a failed enumeration attempt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnumerationError {
    /// A new coset could not be allocated. Fatal; the table is unusable.
    #[error(transparent)]
    OutOfMemory(#[from] OutOfMemory),

    /// The compressed table still exceeds the lookahead threshold.
    /// Recoverable: re-run with a larger threshold.
    #[error("table still has {size} cosets after compression, over threshold {threshold}")]
    ThresholdExceeded {
        /// The caller-supplied threshold.
        threshold: usize,
        /// Live table size after the failed recovery.
        size: usize,
    },
}

/// Drives a [`CosetTable`] to completion over one presentation.
#[derive(Debug)]
pub struct Enumerator {
    table: CosetTable,
    relators: Vec<Word>,
    subgroup_generators: Vec<Word>,
    method: Method,
    /// Set when the Felsch deduction stack overflowed and incremental
    /// checks were skipped; forces a global verification pass at the end.
    dropped_deductions: bool,
}

impl Enumerator {
    /// Create an enumerator for a presentation, with no bound on the
    /// number of cosets.
    pub fn new(presentation: &Presentation, method: Method) -> Self {
        Self::with_max_cosets(presentation, method, usize::MAX)
    }

    /// Create an enumerator that fails with out-of-memory beyond
    /// `max_cosets` table rows.
    pub fn with_max_cosets(
        presentation: &Presentation,
        method: Method,
        max_cosets: usize,
    ) -> Self {
        Self {
            table: CosetTable::new(presentation.alphabet(), max_cosets),
            relators: presentation.relators().to_vec(),
            subgroup_generators: presentation.subgroup_generators().to_vec(),
            method,
            dropped_deductions: false,
        }
    }

    /// Run the enumeration to completion.
    ///
    /// On success the table is complete and [`index`] is the index of H
    /// in G. The table is left uncompressed; call [`CosetTable::compress`]
    /// and [`CosetTable::standardize`] via [`table_mut`] before rendering.
    ///
    /// [`index`]: Enumerator::index
    /// [`table_mut`]: Enumerator::table_mut
    pub fn enumerate(&mut self) -> Result<(), EnumerationError> {
        match self.method {
            Method::Hlt => self.hlt().map_err(EnumerationError::from),
            Method::HltLookahead { threshold } => self.hlt_lookahead(threshold),
            Method::Felsch => self.felsch().map_err(EnumerationError::from),
        }
    }

    /// The number of live cosets: the index of H in G once enumeration
    /// has succeeded.
    pub fn index(&self) -> usize {
        self.table.live_cosets()
    }

    /// Pre-compression table size (total rows, dead ones included).
    pub fn table_size(&self) -> usize {
        self.table.size()
    }

    /// Read access to the table.
    pub fn table(&self) -> &CosetTable {
        &self.table
    }

    /// Mutable access, for post-processing passes.
    pub fn table_mut(&mut self) -> &mut CosetTable {
        &mut self.table
    }

    /// Consume the enumerator, keeping the table.
    pub fn into_table(self) -> CosetTable {
        self.table
    }

    /// Close coset 0 under every subgroup generator, seeding H.
    fn seed(&mut self, record: bool) -> Result<(), OutOfMemory> {
        for w in &self.subgroup_generators {
            self.table.scan_and_fill(Coset::FIRST, w, record)?;
        }
        Ok(())
    }

    fn hlt(&mut self) -> Result<(), OutOfMemory> {
        self.seed(false)?;
        let mut k = Coset::FIRST;
        // The table grows under the loop; size is re-read each iteration.
        while k.index() < self.table.size() {
            self.hlt_step(k)?;
            k = k.next();
        }
        Ok(())
    }

    /// One HLT step: scan-and-fill every relator at `k`, then define any
    /// actions still missing from its row.
    fn hlt_step(&mut self, k: Coset) -> Result<(), OutOfMemory> {
        for w in &self.relators {
            if !self.table.is_alive(k) {
                return Ok(());
            }
            self.table.scan_and_fill(k, w, false)?;
        }
        if self.table.is_alive(k) {
            for x in self.table.alphabet().gens() {
                if !self.table.is_defined(k, x) {
                    self.table.define(k, x, false)?;
                }
            }
        }
        Ok(())
    }

    fn hlt_lookahead(&mut self, threshold: usize) -> Result<(), EnumerationError> {
        self.seed(false)?;
        let mut k = Coset::FIRST;
        while k.index() < self.table.size() {
            if self.table.is_alive(k) && self.table.size() > threshold {
                debug!(
                    "size {} over threshold {threshold}: lookahead at {k}",
                    self.table.size()
                );
                self.lookahead(k);
                match self.table.compress_resuming(k) {
                    Some(position) => k = position,
                    // The rest of the table was dead: enumeration complete.
                    None => return Ok(()),
                }
                if self.table.size() > threshold {
                    return Err(EnumerationError::ThresholdExceeded {
                        threshold,
                        size: self.table.size(),
                    });
                }
            }
            self.hlt_step(k)?;
            k = k.next();
        }
        Ok(())
    }

    /// Scan-only pass: every relator at every live coset from `from` on.
    ///
    /// Discovers coincidences without allocating; shared by HLT+lookahead
    /// and the Felsch overflow fallback.
    fn lookahead(&mut self, from: Coset) {
        debug!("lookahead from {from} over {} rows", self.table.size());
        let mut k = from;
        while k.index() < self.table.size() {
            if self.table.is_alive(k) {
                for w in &self.relators {
                    if !self.table.is_alive(k) {
                        break;
                    }
                    self.table.scan(k, w, false);
                }
            }
            k = k.next();
        }
    }
}
