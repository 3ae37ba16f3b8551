//! Factorial strategies.
//!
//! Both strategies compute the same exact value; they differ only in how the
//! product is formed. `Strategy` is the handle the runner dispatches on.

mod iterative;
mod recursive;

pub use iterative::factorial_iterative;
pub use recursive::{DEFAULT_RECURSION_LIMIT, factorial_recursive, factorial_recursive_with_limit};

use num_bigint::BigUint;

use crate::error::FactorialError;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Strategy {
    Iterative,
    Recursive,
}

impl Strategy {
    /// Label used as the prefix of every output line for this strategy.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Iterative => "Iterative",
            Self::Recursive => "Recursive",
        }
    }

    /// Run this strategy. `recursion_limit` only applies to `Recursive`.
    pub fn compute(&self, n: i64, recursion_limit: usize) -> Result<BigUint, FactorialError> {
        match self {
            Self::Iterative => factorial_iterative(n),
            Self::Recursive => factorial_recursive_with_limit(n, recursion_limit),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
