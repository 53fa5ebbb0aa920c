use std::io::Write;

use hybrid_sort::{SortContext, find_inversion, hybrid_merge_sort_with_ctx};
use log::{debug, info};

use crate::config::Config;
use crate::error::{Inversion, RunError};
use crate::ingest;
use crate::report;
use crate::stopwatch::{Stopwatch, Timing};

/// Outcome of a run that sorted and verified its input.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub len: usize,
    pub timing: Timing,
}

/// Loads the input, sorts it once and checks the result, writing the
/// report lines to `out`.
///
/// A detected inversion is written to `out` before the error is returned.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary, RunError> {
    let mut values = ingest::read_numbers(&config.path).map_err(|source| RunError::Ingest {
        path: config.path.clone(),
        source,
    })?;
    if values.is_empty() {
        return Err(RunError::EmptyInput(config.path.clone()));
    }
    info!("read {} values from {}", values.len(), config.path.display());

    let len = values.len();
    let mut ctx = SortContext::<i64>::try_for_len(len)
        .map_err(|source| RunError::ScratchAlloc { len, source })?;
    let params = config.sort_params();
    debug!(
        "insertion threshold {}, scratch buffer of {} elements",
        params.insertion_threshold,
        ctx.scratch_len()
    );

    report::write_size(out, len)?;

    let watch = Stopwatch::start();
    hybrid_merge_sort_with_ctx(&mut values, &mut ctx, params);
    let timing = watch.stop();
    info!("sorted {len} values in {:.6}s", timing.elapsed);

    report::write_timing(out, &timing)?;

    if let Some(inversion) = check_sorted(&values) {
        report::write_inversion(out, &inversion)?;
        out.flush()?;
        return Err(RunError::Unsorted(inversion));
    }

    report::write_success(out)?;
    out.flush()?;
    Ok(RunSummary { len, timing })
}

pub fn check_sorted(values: &[i64]) -> Option<Inversion> {
    find_inversion(values).map(|index| Inversion {
        index,
        left: values[index - 1],
        right: values[index],
    })
}
