use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Wall-clock stopwatch.
///
/// Start and end are reported as seconds since the Unix epoch. The elapsed
/// time comes from a monotonic clock, so it is never negative even if the
/// system clock jumps during the measurement.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    started_at: f64,
    started: Instant,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub start: f64,
    pub end: f64,
    pub elapsed: f64,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started_at: epoch_seconds(SystemTime::now()),
            started: Instant::now(),
        }
    }

    pub fn stop(self) -> Timing {
        let elapsed = self.started.elapsed().as_secs_f64();
        Timing {
            start: self.started_at,
            end: self.started_at + elapsed,
            elapsed,
        }
    }
}

fn epoch_seconds(at: SystemTime) -> f64 {
    // A clock set before 1970 reads as the epoch itself.
    at.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
