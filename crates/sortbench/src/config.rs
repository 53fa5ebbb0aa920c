use std::path::PathBuf;

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use hybrid_sort::{DEFAULT_INSERTION_THRESHOLD, SortParams};

/// Sort the integers of a CSV file with a hybrid merge sort and time it.
///
/// Log verbosity follows `RUST_LOG` (default: warn).
#[derive(Clone, Debug, Parser)]
#[command(name = "sortbench", version)]
pub struct Config {
    /// CSV file with a header line and `key,value` integer rows
    pub path: PathBuf,

    /// Partitions of at most this many elements are finished by insertion sort
    #[arg(
        long,
        default_value_t = DEFAULT_INSERTION_THRESHOLD,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
    )]
    pub threshold: usize,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            threshold: DEFAULT_INSERTION_THRESHOLD,
        }
    }

    pub fn sort_params(&self) -> SortParams {
        SortParams::with_threshold(self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn path_only_uses_default_threshold() {
        let config = Config::try_parse_from(["sortbench", "numbers.csv"]).unwrap();
        assert_eq!(config.path, PathBuf::from("numbers.csv"));
        assert_eq!(config.threshold, DEFAULT_INSERTION_THRESHOLD);
        assert_eq!(config.sort_params(), SortParams::default());
    }

    #[test]
    fn threshold_override() {
        let config =
            Config::try_parse_from(["sortbench", "numbers.csv", "--threshold", "8"]).unwrap();
        assert_eq!(config.sort_params().insertion_threshold, 8);
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let missing = Config::try_parse_from(["sortbench"]).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::MissingRequiredArgument);

        let extra = Config::try_parse_from(["sortbench", "a.csv", "b.csv"]).unwrap_err();
        assert_eq!(extra.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn threshold_parses_as_usize() {
        let config =
            Config::try_parse_from(["sortbench", "a.csv", "--threshold", "4096"]).unwrap();
        assert_eq!(config.threshold, 4096_usize);

        assert!(Config::try_parse_from(["sortbench", "a.csv", "--threshold", "-1"]).is_err());
    }

    #[test]
    fn rejects_zero_threshold() {
        let err = Config::try_parse_from(["sortbench", "a.csv", "--threshold", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn definition_is_valid() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
