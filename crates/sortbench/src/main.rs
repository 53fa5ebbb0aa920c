use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;
use sortbench::error::format_chain;
use sortbench::{Config, RunError, exit, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(exit::for_usage_error(&err));
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&config, &mut out);
    match &result {
        Ok(_) => {}
        // Already reported on stdout.
        Err(RunError::Unsorted(inversion)) => error!("sort produced an inversion: {inversion}"),
        Err(err) => eprintln!("{}", format_chain(err)),
    }
    ExitCode::from(exit::for_run(&result))
}
