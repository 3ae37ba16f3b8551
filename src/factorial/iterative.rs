use num_bigint::BigUint;
use num_traits::One;

use crate::error::FactorialError;

/// Iterative factorial. Stack usage is constant in `n`.
pub fn factorial_iterative(n: i64) -> Result<BigUint, FactorialError> {
    let n = u64::try_from(n).map_err(|_| FactorialError::InvalidArgument)?;
    let mut acc = BigUint::one();
    for i in 2..=n {
        acc *= i;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(factorial_iterative(0).unwrap(), BigUint::one());
        assert_eq!(factorial_iterative(1).unwrap(), BigUint::one());
    }

    #[test]
    fn small_values() {
        assert_eq!(factorial_iterative(5).unwrap(), BigUint::from(120u32));
        assert_eq!(factorial_iterative(10).unwrap(), BigUint::from(3_628_800u32));
        assert_eq!(
            factorial_iterative(20).unwrap(),
            BigUint::from(2_432_902_008_176_640_000u64)
        );
    }

    #[test]
    fn exceeds_u64_without_truncation() {
        // 25! = 15511210043330985984000000
        let expected: BigUint = "15511210043330985984000000".parse().unwrap();
        assert_eq!(factorial_iterative(25).unwrap(), expected);
    }

    #[test]
    fn large_n_digit_count() {
        // 1000! has 2568 decimal digits
        let v = factorial_iterative(1000).unwrap();
        assert_eq!(v.to_string().len(), 2568);
    }

    #[test]
    fn sign_boundary() {
        assert_eq!(factorial_iterative(2).unwrap(), BigUint::from(2u32));
        assert_eq!(factorial_iterative(-2), Err(FactorialError::InvalidArgument));
    }

    #[test]
    fn negative_rejected() {
        assert_eq!(factorial_iterative(-1), Err(FactorialError::InvalidArgument));
        assert_eq!(
            factorial_iterative(i64::MIN),
            Err(FactorialError::InvalidArgument)
        );
    }
}
