// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `tc`: command-line driver for the Todd-Coxeter routines.
//!
//! Reads a presentation (rank, relators, subgroup generators) from a file
//! or standard input, runs the chosen enumeration strategy, and reports
//! the index of H in G. Small completed tables are printed compressed and
//! standardized; pass `--print-table` to force printing.
//!
//! Exit codes distinguish the terminal outcomes: 1 for usage or input
//! errors, 2 when the table ran out of memory, 3 when the lookahead
//! threshold could not be met.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use todd_coxeter::{render, EnumerationError, Enumerator, Method, Presentation};

/// Do not print tables with more rows than this unless asked to.
const PRINT_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    /// HLT: eager definitions, lazy coincidence discovery.
    Hlt,
    /// HLT with lookahead above --threshold.
    Lookahead,
    /// Felsch: minimal definitions with immediate deduction checking.
    Felsch,
}

/// Compute the index of a subgroup H in a finitely presented group G.
///
/// The presentation format is line-based: the rank first, then the
/// defining relators of G terminated by a line holding ".", then the
/// generators of H terminated the same way. Words use a,b,... for the
/// generators and A,B,... for their inverses. Blank lines and lines
/// starting with "#" are ignored.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Presentation file; standard input when omitted.
    file: Option<PathBuf>,

    /// Enumeration strategy.
    #[arg(long, value_enum, default_value_t = MethodArg::Hlt)]
    method: MethodArg,

    /// Table-size threshold for --method lookahead.
    #[arg(long, default_value_t = 1000)]
    threshold: usize,

    /// Fail with out-of-memory beyond this many cosets.
    #[arg(long)]
    max_cosets: Option<usize>,

    /// Print the compressed, standardized table regardless of size.
    #[arg(long)]
    print_table: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("tc: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("unable to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("unable to read standard input")?;
            buffer
        }
    };
    let presentation = Presentation::parse(&text).context("invalid presentation")?;

    let method = match args.method {
        MethodArg::Hlt => Method::Hlt,
        MethodArg::Lookahead => Method::HltLookahead { threshold: args.threshold },
        MethodArg::Felsch => Method::Felsch,
    };
    let max_cosets = args.max_cosets.unwrap_or(usize::MAX);
    let mut enumerator = Enumerator::with_max_cosets(&presentation, method, max_cosets);

    match enumerator.enumerate() {
        Ok(()) => {}
        Err(EnumerationError::OutOfMemory(err)) => {
            eprintln!("tc: {err}");
            return Ok(ExitCode::from(2));
        }
        Err(err @ EnumerationError::ThresholdExceeded { .. }) => {
            eprintln!("tc: {err}; try again with a bigger threshold");
            return Ok(ExitCode::from(3));
        }
    }

    println!("The index of H in G is {}.", enumerator.index());
    println!(
        "The coset table had size {} before compression.",
        enumerator.table_size()
    );
    if args.print_table || enumerator.index() <= PRINT_LIMIT {
        let mut table = enumerator.into_table();
        table.compress();
        table.standardize();
        println!("\nCompressed and standardized coset table:\n");
        let stdout = io::stdout();
        render::write_table(&table, &mut stdout.lock())?;
        stdout.lock().flush()?;
    }
    Ok(ExitCode::SUCCESS)
}
