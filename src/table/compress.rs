// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Post-processing passes over the coset table.
//!
//! [`CosetTable::compress`] discards dead rows and renumbers the survivors
//! contiguously; [`CosetTable::standardize`] renumbers a completed table
//! into a canonical form that is independent of the order cosets were
//! discovered, so tables produced by different strategies compare equal.
//!
//! Both passes build an explicit old-to-new index map and apply it in a
//! single pass over the rows; entries are rewritten in both directions by
//! construction because every edge's endpoints are remapped together.

use log::debug;

use super::{Coset, CosetTable};

impl CosetTable {
    /// Discard dead rows, renumbering live cosets in index order.
    ///
    /// Afterwards every index in `[0, size())` is alive and the equivalence
    /// relation is the identity.
    pub fn compress(&mut self) {
        self.compress_resuming(Coset::FIRST);
    }

    /// Compress while an enumeration is mid-iteration at `current`.
    ///
    /// Returns the renumbered position to resume from: `current`'s new
    /// index if it is alive, otherwise the new index of the next live coset
    /// after it, or `None` when `current` fell off the end of the table
    /// (the remaining tail was dead and enumeration is complete).
    pub fn compress_resuming(&mut self, current: Coset) -> Option<Coset> {
        let old_size = self.rows.len();
        let mut new_index: Vec<Option<Coset>> = vec![None; old_size];
        let mut next = 0;
        for k in 0..old_size {
            if self.is_alive(Coset::new(k)) {
                new_index[k] = Some(Coset::new(next));
                next += 1;
            }
        }
        debug!("compress: {} rows -> {} rows", old_size, next);

        // Resume position: current itself, or the first live coset after it.
        let resume = (current.index()..old_size)
            .find_map(|k| new_index[k]);

        let rows = std::mem::take(&mut self.rows);
        self.rows = rows
            .into_iter()
            .enumerate()
            .filter(|(k, _)| new_index[*k].is_some())
            .map(|(_, row)| {
                row.into_iter()
                    .map(|entry| {
                        entry.map(|t| {
                            new_index[t.index()]
                                .expect("live row points at a dead coset")
                        })
                    })
                    .collect()
            })
            .collect();
        self.equiv.reset(next);
        debug_assert_eq!(self.live, next);
        resume
    }

    /// Renumber a compressed, fully defined table into canonical form.
    ///
    /// Walks the table in (coset, generator) order; each coset receives the
    /// next canonical number the first time it appears as a target. The
    /// resulting numbering depends only on the permutation action, so the
    /// pass is idempotent.
    ///
    /// # Panics
    ///
    /// Panics (in debug builds) unless every coset is alive and every
    /// action is defined; call [`compress`] first and only after a
    /// successful enumeration.
    ///
    /// [`compress`]: CosetTable::compress
    pub fn standardize(&mut self) {
        let n = self.rows.len();
        debug_assert!((0..n).all(|k| self.is_alive(Coset::new(k))), "standardize before compress");

        // First-visit numbering: coset 0 keeps its place, targets are
        // numbered in the order the walk first encounters them.
        let mut new_index: Vec<Option<Coset>> = vec![None; n];
        let mut order: Vec<Coset> = Vec::with_capacity(n);
        new_index[0] = Some(Coset::FIRST);
        order.push(Coset::FIRST);
        let mut next = 1;
        let mut visit = 0;
        while visit < order.len() {
            let k = order[visit];
            for x in self.alphabet.gens() {
                let t = self.act(k, x).expect("standardize requires a complete table");
                if new_index[t.index()].is_none() {
                    new_index[t.index()] = Some(Coset::new(next));
                    order.push(t);
                    next += 1;
                }
            }
            visit += 1;
        }
        debug_assert_eq!(next, n, "table is not a transitive action");

        let mut rows = vec![Vec::new(); n];
        for (k, row) in std::mem::take(&mut self.rows).into_iter().enumerate() {
            let new_k = new_index[k].expect("unvisited coset in complete table");
            rows[new_k.index()] = row
                .into_iter()
                .map(|entry| entry.map(|t| new_index[t.index()].unwrap()))
                .collect();
        }
        self.rows = rows;
    }
}
