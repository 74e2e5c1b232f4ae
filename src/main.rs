// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line display for the Nat Database facts table.
//!
//! Takes one decimal natural number and prints the same table the page
//! renders: square root, the three unpairings, and the catalog permutation.

use nat_facts::facts::NumberFacts;
use nat_facts::perm::PermutationCatalog;
use num_bigint::BigUint;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let raw = match (args.next(), args.next()) {
        (Some(raw), None) => raw,
        _ => {
            eprintln!("usage: natfacts <natural-number>");
            return ExitCode::FAILURE;
        }
    };
    let value: BigUint = match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("natfacts: '{}' is not a natural number", raw);
            return ExitCode::FAILURE;
        }
    };

    let mut catalog = PermutationCatalog::new();
    print!("{}", NumberFacts::compute(&value, &mut catalog));
    ExitCode::SUCCESS
}
