// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Equivalence relation over coset indices.
//!
//! Coincidence resolution identifies coset placeholders; this union-find
//! structure tracks the identification. Each class is represented by its
//! smallest member, so `parent[k] <= k` always, and a coset is alive exactly
//! when it is its own representative.
//!
//! Keeping the smaller index as survivor is load-bearing: compression and
//! standardization rely on indices only ever decreasing under merging.

use super::Coset;

/// Union-find over coset indices, smallest index as representative.
#[derive(Debug, Clone)]
pub struct EquivRelation {
    parent: Vec<Coset>,
}

impl EquivRelation {
    /// Create a relation over `n` cosets, each in its own class.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).map(Coset::new).collect(),
        }
    }

    /// Number of cosets tracked.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True when no cosets are tracked.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Append a fresh coset as its own singleton class.
    pub fn push(&mut self) -> Coset {
        let k = Coset::new(self.parent.len());
        self.parent.push(k);
        k
    }

    /// Parent link of `k` without path compression.
    pub fn link(&self, k: Coset) -> Coset {
        self.parent[k.index()]
    }

    /// True when `k` represents its own class.
    pub fn is_rep(&self, k: Coset) -> bool {
        self.parent[k.index()] == k
    }

    /// The minimal element of `k`'s class, compressing visited links to
    /// point directly at it.
    pub fn rep(&mut self, k: Coset) -> Coset {
        // First pass: find the minimum.
        let mut l = k;
        let mut m = self.parent[l.index()];
        while m < l {
            l = m;
            m = self.parent[l.index()];
        }
        // Second pass: redirect the chain at the minimum.
        let mut m = k;
        let mut n = self.parent[m.index()];
        while n < m {
            self.parent[m.index()] = l;
            m = n;
            n = self.parent[m.index()];
        }
        l
    }

    /// Union the classes of `k` and `l`, keeping the smaller representative.
    ///
    /// Returns the now-obsolete larger representative, or `None` when the
    /// classes were already equal.
    pub fn merge(&mut self, k: Coset, l: Coset) -> Option<Coset> {
        let k = self.rep(k);
        let l = self.rep(l);
        if k < l {
            self.parent[l.index()] = k;
            Some(l)
        } else if l < k {
            self.parent[k.index()] = l;
            Some(k)
        } else {
            None
        }
    }

    /// Reset to `n` singleton classes. Used after compression, when every
    /// surviving coset is alive again under its new index.
    pub fn reset(&mut self, n: usize) {
        self.parent.clear();
        self.parent.extend((0..n).map(Coset::new));
    }
}
