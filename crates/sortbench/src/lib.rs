pub mod config;
pub mod error;
pub mod exit;
pub mod ingest;
pub mod report;
pub mod run;
pub mod stopwatch;

pub use config::Config;
pub use error::{IngestError, Inversion, RunError};
pub use run::{RunSummary, run};
