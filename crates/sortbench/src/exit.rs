//! Process exit statuses.

use crate::error::RunError;
use crate::run::RunSummary;

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;

/// Argument errors fail the process; `--help` and `--version` also come
/// back from clap as errors but are not failures.
pub fn for_usage_error(err: &clap::Error) -> u8 {
    if err.use_stderr() { FAILURE } else { SUCCESS }
}

pub fn for_run(result: &Result<RunSummary, RunError>) -> u8 {
    match result {
        Ok(_) => SUCCESS,
        Err(_) => FAILURE,
    }
}
