//! Error types for loading, sorting and reporting.

use std::collections::TryReserveError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures while turning an input file into a sequence of integers.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read input")]
    Read(#[from] csv::Error),
    #[error("missing header line")]
    MissingHeader,
    #[error("line {line}: expected at least 2 fields, found {found}")]
    MissingField { line: u64, found: usize },
    #[error("line {line}: field {field} is not an integer: {value:?}")]
    InvalidInteger {
        line: u64,
        field: usize,
        value: String,
    },
    #[error("out of memory while reading input")]
    Alloc(#[from] TryReserveError),
}

/// Adjacent pair found out of order after sorting.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Inversion {
    pub index: usize,
    pub left: i64,
    pub right: i64,
}

impl fmt::Display for Inversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a[{}]={} > a[{}]={}",
            self.index - 1,
            self.left,
            self.index,
            self.right
        )
    }
}

/// Everything that makes a run exit with a failure status.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("could not read numbers from file {path}")]
    Ingest {
        path: PathBuf,
        #[source]
        source: IngestError,
    },
    #[error("no numbers found in file {0}")]
    EmptyInput(PathBuf),
    #[error("could not allocate scratch buffer of size {len}")]
    ScratchAlloc {
        len: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("implementation error: {0}")]
    Unsorted(Inversion),
    #[error("failed to write report")]
    Output(#[from] io::Error),
}

/// Renders `err` followed by one indented line per source, outermost first.
pub fn format_chain(err: &dyn std::error::Error) -> String {
    let mut out = format!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    out
}
