// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural invariants of completed coset tables.

mod common;

use common::{enumerate, presentation, ALL_METHODS};
use todd_coxeter::{render, Coset, CosetTable};

/// Every defined edge of a live coset must have its reverse edge.
fn assert_row_symmetry(table: &CosetTable) {
    for (k, row) in table.live_rows() {
        for (x, entry) in table.alphabet().gens().zip(row) {
            if let Some(l) = entry {
                assert!(table.is_alive(*l), "live {k:?} points at dead {l:?}");
                assert_eq!(
                    table.act(*l, x.inverse()),
                    Some(k),
                    "missing reverse edge for {k:?} --{x:?}--> {l:?}"
                );
            }
        }
    }
}

#[test]
fn test_row_symmetry_after_each_strategy() {
    let p = presentation(2, &["aa", "bbb", "abab"], &["b"]);
    for method in ALL_METHODS {
        let e = enumerate(&p, method);
        assert_row_symmetry(e.table());
    }
}

#[test]
fn test_compress_leaves_only_live_rows() {
    let p = presentation(2, &["aa", "bbb", "abab"], &[]);
    for method in ALL_METHODS {
        let mut e = enumerate(&p, method);
        let live = e.index();
        let table = e.table_mut();
        table.compress();
        assert_eq!(table.size(), live);
        for k in 0..table.size() {
            assert!(table.is_alive(Coset::new(k)));
        }
        assert_row_symmetry(table);
    }
}

#[test]
fn test_standardize_is_idempotent() {
    let p = presentation(2, &["aaaa", "bb", "abab"], &[]);
    for method in ALL_METHODS {
        let mut e = enumerate(&p, method);
        let table = e.table_mut();
        table.compress();
        table.standardize();
        let once = render::table_to_string(table);
        table.standardize();
        let twice = render::table_to_string(table);
        assert_eq!(once, twice, "method {method:?}");
    }
}

#[test]
fn test_standardized_tables_agree_across_strategies() {
    // Standardization yields a canonical numbering of the coset action,
    // independent of the order the strategies discovered the cosets.
    let p = presentation(2, &["aa", "bbb", "abab"], &[]);
    let mut rendered = Vec::new();
    for method in ALL_METHODS {
        let mut e = enumerate(&p, method);
        let table = e.table_mut();
        table.compress();
        table.standardize();
        rendered.push(render::table_to_string(table));
    }
    assert_eq!(rendered[0], rendered[1]);
    assert_eq!(rendered[0], rendered[2]);
}

#[test]
fn test_standardized_table_is_a_permutation_action() {
    // In a completed table every generator acts as a permutation of the
    // cosets: each column hits every coset exactly once.
    let p = presentation(2, &["aaaa", "bb", "abab"], &[]);
    let mut e = enumerate(&p, todd_coxeter::Method::Felsch);
    let table = e.table_mut();
    table.compress();
    table.standardize();
    let n = table.size();
    for x in table.alphabet().gens() {
        let mut seen = vec![false; n];
        for k in 0..n {
            let t = table.act(Coset::new(k), x).expect("complete table");
            assert!(!seen[t.index()], "column {x:?} is not a permutation");
            seen[t.index()] = true;
        }
    }
}
