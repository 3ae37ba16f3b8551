use num_bigint::BigUint;
use num_traits::One;

use crate::error::FactorialError;

/// Depth budget used when none is configured.
pub const DEFAULT_RECURSION_LIMIT: usize = 5_000;

/// Recursive factorial with the default depth budget.
pub fn factorial_recursive(n: i64) -> Result<BigUint, FactorialError> {
    factorial_recursive_with_limit(n, DEFAULT_RECURSION_LIMIT)
}

/// Recursive factorial. Every call for `k >= 1` is one frame of depth; a call
/// that would go past `limit` frames fails with `StackExhausted`.
pub fn factorial_recursive_with_limit(n: i64, limit: usize) -> Result<BigUint, FactorialError> {
    let k = u64::try_from(n).map_err(|_| FactorialError::InvalidArgument)?;
    descend(k, 1, limit).ok_or(FactorialError::StackExhausted { n, limit })
}

fn descend(k: u64, depth: usize, limit: usize) -> Option<BigUint> {
    if depth > limit {
        return None;
    }
    if k <= 1 {
        return Some(BigUint::one());
    }
    let rest = descend(k - 1, depth + 1, limit)?;
    Some(rest * k)
}
