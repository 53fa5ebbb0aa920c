//! Plain-text lines printed to stdout during a run.

use std::io::{self, Write};

use crate::error::Inversion;
use crate::stopwatch::Timing;

pub const SUCCESS_MARKER: &str = "-Success-";

pub fn write_size<W: Write>(out: &mut W, len: usize) -> io::Result<()> {
    writeln!(out, "Array size = {len}")
}

pub fn write_timing<W: Write>(out: &mut W, timing: &Timing) -> io::Result<()> {
    writeln!(out, "Start = {:.2}", timing.start)?;
    writeln!(out, "End = {:.2}", timing.end)?;
    writeln!(out, "Elapsed = {:.2}", timing.elapsed)
}

pub fn write_success<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{SUCCESS_MARKER}")
}

pub fn write_inversion<W: Write>(out: &mut W, inversion: &Inversion) -> io::Result<()> {
    writeln!(out, "Implementation error: {inversion}")
}
