//! Loads the integer column from a header-plus-rows CSV file.
//!
//! The first physical line is the header and is skipped whatever it holds.
//! Every following line carries at least two integer fields. The first one
//! is checked and discarded, the second one is the value handed to the
//! sort. Extra trailing fields are ignored. A blank data line is a parse
//! error.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, Trim};

use crate::error::IngestError;

const KEY_FIELD: usize = 0;
const VALUE_FIELD: usize = 1;
const FIRST_DATA_LINE: u64 = 2;

pub fn read_numbers(path: &Path) -> Result<Vec<i64>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_numbers(file)
}

/// Parses the whole input or fails; callers never see a partial sequence.
pub fn parse_numbers<R: io::Read>(input: R) -> Result<Vec<i64>, IngestError> {
    let body = read_body(BufReader::new(input))?;

    // One physical line per record: no quoting, only `\n` ends a record.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut values = Vec::new();
    let mut record = StringRecord::new();
    let mut line = FIRST_DATA_LINE;
    while reader.read_record(&mut record)? {
        let value = parse_row(&record, line)?;
        values.try_reserve(1)?;
        values.push(value);
        line += 1;
    }

    Ok(values)
}

/// Drops the header line and returns the data lines, rejecting blank ones.
///
/// The CSV reader silently skips empty lines, so they are caught here where
/// physical line numbers are still known.
fn read_body<B: BufRead>(mut input: B) -> Result<String, IngestError> {
    let mut line = String::new();
    if input.read_line(&mut line).map_err(csv::Error::from)? == 0 {
        return Err(IngestError::MissingHeader);
    }

    let mut body = String::new();
    let mut line_no = 1u64;
    loop {
        line.clear();
        if input.read_line(&mut line).map_err(csv::Error::from)? == 0 {
            break;
        }
        line_no += 1;
        if line.trim().is_empty() {
            return Err(IngestError::MissingField {
                line: line_no,
                found: 0,
            });
        }
        body.try_reserve(line.len())?;
        body.push_str(&line);
    }

    Ok(body)
}

fn parse_row(record: &StringRecord, line: u64) -> Result<i64, IngestError> {
    if record.len() <= VALUE_FIELD {
        return Err(IngestError::MissingField {
            line,
            found: record.len(),
        });
    }

    parse_field(record, KEY_FIELD, line)?;
    parse_field(record, VALUE_FIELD, line)
}

fn parse_field(record: &StringRecord, field: usize, line: u64) -> Result<i64, IngestError> {
    let raw = &record[field];
    raw.parse::<i64>()
        .map_err(|_| IngestError::InvalidInteger {
            line,
            field,
            value: raw.to_owned(),
        })
}
