// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text rendering of a coset table.
//!
//! Rendering is a presentation concern: cosets are numbered from 1 and
//! columns carry the generator letters. Undefined entries print as `-`,
//! which only appears when rendering an incomplete table.

use std::io::{self, Write};

use itertools::Itertools;

use crate::table::CosetTable;

/// Write the live rows of `table`, 1-based, one coset per line.
///
/// ```text
///    a A b B
/// 1: 2 2 3 3
/// 2: 1 1 3 3
/// ...
/// ```
pub fn write_table(table: &CosetTable, out: &mut impl Write) -> io::Result<()> {
    let alphabet = table.alphabet();
    let width = digits(table.size());
    let header = alphabet
        .gens()
        .map(|x| format!("{:>width$}", alphabet.char_of_gen(x)))
        .join(" ");
    writeln!(out, "{:width$}  {header}", "")?;
    for (k, row) in table.live_rows() {
        let entries = row
            .iter()
            .map(|entry| match entry {
                Some(t) => format!("{:>width$}", t.index() + 1),
                None => format!("{:>width$}", "-"),
            })
            .join(" ");
        writeln!(out, "{:>width$}: {entries}", k.index() + 1)?;
    }
    Ok(())
}

/// Render to a string, for logs and tests.
pub fn table_to_string(table: &CosetTable) -> String {
    let mut buffer = Vec::new();
    write_table(table, &mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("rendered table is ASCII")
}

fn digits(n: usize) -> usize {
    n.max(1).ilog10() as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::enumerate::{Enumerator, Method};
    use crate::presentation::Presentation;

    #[test]
    fn test_digits() {
        assert_eq!(digits(1), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(100), 3);
    }

    #[test]
    fn test_render_cyclic_group() {
        // Z/2 = <a | a^2>: two cosets swapped by a.
        let mut p = Presentation::new(1).unwrap();
        p.relator("aa").unwrap();
        let mut e = Enumerator::new(&p, Method::Hlt);
        e.enumerate().unwrap();
        let mut table = e.into_table();
        table.compress();
        table.standardize();
        let rendered = table_to_string(&table);
        assert_eq!(rendered, "   a A\n1: 2 2\n2: 1 1\n");
    }

    #[test]
    fn test_render_incomplete_entry() {
        let alphabet = Alphabet::new(1).unwrap();
        let table = CosetTable::new(alphabet, usize::MAX);
        let rendered = table_to_string(&table);
        assert!(rendered.contains('-'));
    }
}
