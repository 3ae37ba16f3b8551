//! Runs the configured strategies in order and prints their reports.

mod report;

pub use report::{MethodReport, Outcome, format_seconds};

use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, UnwindSafe};
use std::time::Instant;

use num_bigint::BigUint;

use crate::config::RunConfig;
use crate::error::FactorialError;
use crate::factorial::Strategy;

/// Stack reserved per unit of recursion budget on the worker thread.
const STACK_BYTES_PER_FRAME: usize = 1024;
const BASE_STACK_BYTES: usize = 8 * 1024 * 1024;

/// Stack size for a worker thread that must survive `recursion_limit` frames.
pub fn worker_stack_size(recursion_limit: usize) -> usize {
    BASE_STACK_BYTES.saturating_add(recursion_limit.saturating_mul(STACK_BYTES_PER_FRAME))
}

pub struct Runner<'a> {
    config: &'a RunConfig,
}

impl<'a> Runner<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// Run every selected strategy, writing each report to `out` as soon as
    /// it completes. Per-method failures never abort the run; only I/O errors
    /// on `out` are returned.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<Vec<MethodReport>> {
        let n = self.config.n;
        let limit = self.config.recursion_limit;
        self.run_with(out, move |strategy: Strategy| strategy.compute(n, limit))
    }

    /// Same as `run`, with `compute` standing in for the strategies.
    pub(crate) fn run_with<W, F>(&self, out: &mut W, compute: F) -> io::Result<Vec<MethodReport>>
    where
        W: Write,
        F: Fn(Strategy) -> Result<BigUint, FactorialError> + Copy + UnwindSafe,
    {
        let n = self.config.n;
        let mut reports = Vec::with_capacity(2);
        for &strategy in self.config.method.strategies() {
            let report = measure(strategy, n, self.config.time, move || compute(strategy));
            report.write_to(out)?;
            reports.push(report);
        }
        out.flush()?;
        Ok(reports)
    }
}

/// Invoke `compute` for `strategy`, containing panics and optionally timing it.
pub fn measure<F>(strategy: Strategy, n: i64, time: bool, compute: F) -> MethodReport
where
    F: FnOnce() -> Result<BigUint, FactorialError> + UnwindSafe,
{
    let started = Instant::now();
    let result = panic::catch_unwind(compute);
    let elapsed = started.elapsed();
    log::debug!(
        "{} n={} finished in {:.6}s",
        strategy,
        n,
        elapsed.as_secs_f64()
    );

    let outcome = match result {
        Ok(Ok(v)) => Outcome::Value(v),
        Ok(Err(e)) => {
            if let FactorialError::StackExhausted { limit, .. } = &e {
                log::warn!("{} exhausted recursion budget {} at n={}", strategy, limit, n);
            }
            Outcome::Failed(e)
        }
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            log::warn!("{} panicked on n={}: {}", strategy, n, msg);
            Outcome::Panicked(msg)
        }
    };
    MethodReport {
        strategy,
        n,
        outcome,
        elapsed: time.then_some(elapsed),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
