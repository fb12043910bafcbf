// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared helpers for the integration tests.

use todd_coxeter::{Enumerator, Method, Presentation};

/// All three strategies, with a lookahead threshold generous enough that
/// recovery never triggers on the small test presentations.
pub const ALL_METHODS: [Method; 3] = [
    Method::Hlt,
    Method::HltLookahead { threshold: 10_000 },
    Method::Felsch,
];

/// Build a presentation from relator and subgroup-generator strings.
pub fn presentation(rank: usize, relators: &[&str], subgroup: &[&str]) -> Presentation {
    let mut p = Presentation::new(rank).expect("valid rank");
    for r in relators {
        p.relator(r).expect("valid relator");
    }
    for g in subgroup {
        p.subgroup_generator(g).expect("valid subgroup generator");
    }
    p
}

/// Run one enumeration to completion and hand back the enumerator.
pub fn enumerate(p: &Presentation, method: Method) -> Enumerator {
    let mut e = Enumerator::new(p, method);
    e.enumerate().expect("enumeration should succeed");
    e
}
