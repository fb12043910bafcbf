// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end enumeration scenarios, run across all three strategies.
//!
//! The expected indices are classical: the strategies differ in how they
//! grow the table, never in the index they report.

mod common;

use common::{enumerate, presentation, ALL_METHODS};
use todd_coxeter::{EnumerationError, Enumerator, Method};

#[test]
fn test_free_group_index_two_subgroup() {
    // <a | > with H = <a^2>: the even powers of a, index 2.
    let p = presentation(1, &[], &["aa"]);
    for method in ALL_METHODS {
        let e = enumerate(&p, method);
        assert_eq!(e.index(), 2, "method {method:?}");
    }
}

#[test]
fn test_trivial_relator_collapses_to_one_coset() {
    // <a | a>: a is the identity, so G is trivial and the index is 1.
    let p = presentation(1, &["a"], &[]);
    for method in ALL_METHODS {
        let e = enumerate(&p, method);
        assert_eq!(e.index(), 1, "method {method:?}");
    }
}

#[test]
fn test_s3_trivial_subgroup() {
    // S3 = <a, b | a^2, b^3, (ab)^2>, H = {1}: the index is |S3| = 6.
    let p = presentation(2, &["aa", "bbb", "abab"], &[]);
    for method in ALL_METHODS {
        let e = enumerate(&p, method);
        assert_eq!(e.index(), 6, "method {method:?}");
    }
}

#[test]
fn test_s3_cyclic_subgroup() {
    // Same S3 with H = <a>: index 3.
    let p = presentation(2, &["aa", "bbb", "abab"], &["a"]);
    for method in ALL_METHODS {
        let e = enumerate(&p, method);
        assert_eq!(e.index(), 3, "method {method:?}");
    }
}

#[test]
fn test_dihedral_group_of_order_eight() {
    // D4 = <a, b | a^4, b^2, (ab)^2>.
    let p = presentation(2, &["aaaa", "bb", "abab"], &[]);
    for method in ALL_METHODS {
        let e = enumerate(&p, method);
        assert_eq!(e.index(), 8, "method {method:?}");
    }
    let p = presentation(2, &["aaaa", "bb", "abab"], &["a"]);
    for method in ALL_METHODS {
        let e = enumerate(&p, method);
        assert_eq!(e.index(), 2, "method {method:?}");
    }
}

#[test]
fn test_strategies_agree_on_table_size_after_compression() {
    let p = presentation(2, &["aa", "bbb", "abab"], &[]);
    for method in ALL_METHODS {
        let mut e = enumerate(&p, method);
        e.table_mut().compress();
        assert_eq!(e.table().size(), 6, "method {method:?}");
        assert_eq!(e.index(), 6, "method {method:?}");
    }
}

#[test]
fn test_unsatisfiable_threshold_is_an_error_not_a_hang() {
    // Index 6 cannot fit under a threshold of 2, however often the table
    // is compressed.
    let p = presentation(2, &["aa", "bbb", "abab"], &[]);
    let mut e = Enumerator::new(&p, Method::HltLookahead { threshold: 2 });
    match e.enumerate() {
        Err(EnumerationError::ThresholdExceeded { threshold: 2, size }) => {
            assert!(size > 2);
        }
        other => panic!("expected ThresholdExceeded, got {other:?}"),
    }
}

#[test]
fn test_coset_cap_reports_out_of_memory() {
    let p = presentation(2, &["aa", "bbb", "abab"], &[]);
    for method in ALL_METHODS {
        let mut e = Enumerator::with_max_cosets(&p, method, 3);
        match e.enumerate() {
            Err(EnumerationError::OutOfMemory(err)) => assert_eq!(err.size, 3),
            other => panic!("expected OutOfMemory for {method:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_generous_threshold_never_triggers_recovery() {
    // With the threshold far above the final size, HLT+lookahead must
    // behave exactly like plain HLT.
    let p = presentation(2, &["aaaa", "bb", "abab"], &[]);
    let plain = enumerate(&p, Method::Hlt);
    let look = enumerate(&p, Method::HltLookahead { threshold: 10_000 });
    assert_eq!(plain.index(), look.index());
    assert_eq!(plain.table_size(), look.table_size());
}
