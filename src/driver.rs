//! Interactive demonstration: sort a fixed sample, then one line of integers read from the user.

use std::io::{BufRead, Write};
use std::num::ParseIntError;

use thiserror::Error;
use tracing::debug;

use crate::merge_sort::{merge_sort, merge_sorted};

pub const SAMPLE: [i64; 7] = [38, 27, 43, 3, 9, 82, 10];

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("invalid integer {token:?}: {source}")]
    Parse {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("no input line to sort")]
    MissingInput,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a whitespace-separated line of integers. The first bad token aborts the whole line.
pub fn parse_numbers(line: &str) -> Result<Vec<i64>, DriverError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|source| DriverError::Parse {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

pub fn run_demo<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<(), DriverError> {
    writeln!(output, "Unsorted array: {:?}", SAMPLE)?;
    writeln!(output, "Sorted array: {:?}", merge_sorted(&SAMPLE))?;

    write!(output, "Enter numbers separated by spaces: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(DriverError::MissingInput);
    }
    let mut numbers = parse_numbers(&line)?;
    debug!(count = numbers.len(), "parsed user input");

    merge_sort(&mut numbers);
    writeln!(output, "Sorted user array: {:?}", numbers)?;
    Ok(())
}
