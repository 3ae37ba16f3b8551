use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use factorial_cli::cli::Cli;
use factorial_cli::cli::flags::{TRACING_ENV, parse_bool_env};
use factorial_cli::config::RunConfig;
use factorial_cli::logging;
use factorial_cli::runner::{Runner, worker_stack_size};

fn main() -> ExitCode {
    logging::init(parse_bool_env(TRACING_ENV));

    let cli = Cli::parse();
    let cfg = match cli.to_run_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    match run(cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected methods on a worker thread whose stack covers the
/// configured recursion budget.
fn run(cfg: RunConfig) -> Result<()> {
    if let Ok(json) = serde_json::to_string(&cfg) {
        debug!("run config: {}", json);
    }
    let stack = worker_stack_size(cfg.recursion_limit);
    info!("spawning runner with {} KiB stack", stack / 1024);

    let handle = std::thread::Builder::new()
        .name("factorial-runner".into())
        .stack_size(stack)
        .spawn(move || {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            Runner::new(&cfg).run(&mut out).map(|reports| reports.len())
        })
        .context("failed to spawn runner thread")?;

    let ran = handle
        .join()
        .map_err(|_| anyhow!("runner thread panicked"))?
        .context("failed to write results")?;
    debug!("{} method(s) reported", ran);
    Ok(())
}
