//! Per-method result lines.

use std::io::{self, Write};
use std::time::Duration;

use num_bigint::BigUint;

use crate::error::FactorialError;
use crate::factorial::Strategy;

/// What a single strategy invocation ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(BigUint),
    Failed(FactorialError),
    /// The computation panicked; holds the panic payload message.
    Panicked(String),
}

#[derive(Debug, Clone)]
pub struct MethodReport {
    pub strategy: Strategy,
    pub n: i64,
    pub outcome: Outcome,
    /// Set only when timing was requested.
    pub elapsed: Option<Duration>,
}

impl MethodReport {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Value(_))
    }

    /// Write the report lines. The timing line follows the value line and is
    /// omitted for failed runs.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let label = self.strategy.label();
        match &self.outcome {
            Outcome::Value(v) => {
                writeln!(out, "{}: {}", label, v)?;
                if let Some(d) = self.elapsed {
                    writeln!(out, "{} time: {} sec", label, format_seconds(d))?;
                }
            }
            Outcome::Failed(FactorialError::StackExhausted { n, .. }) => {
                writeln!(out, "{}: RecursionError (stack too deep for n={})", label, n)?;
            }
            Outcome::Failed(e) => writeln!(out, "{}: error: {}", label, e)?,
            Outcome::Panicked(msg) => writeln!(out, "{}: error: {}", label, msg)?,
        }
        Ok(())
    }
}

/// Seconds with microsecond precision, e.g. `0.000123`.
pub fn format_seconds(d: Duration) -> String {
    format!("{:.6}", d.as_secs_f64())
}
