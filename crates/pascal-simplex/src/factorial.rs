//! Precomputed factorial table and the direct multinomial coefficient.
//!
//! Building a simplex of `layers` layers needs `0!..(layers-1)!`. The table
//! computes them once with one multiplication each and hands out borrowed
//! values, so every coefficient costs only the `d` multiplications of its
//! denominator plus one exact division.

use num_bigint::BigUint;
use num_traits::One;

/// Table of `n!` for `n` in `0..len`.
#[derive(Debug, Clone)]
pub struct Factorials {
    values: Vec<BigUint>,
}

impl Factorials {
    /// Creates a table holding `0!` through `(len - 1)!`.
    ///
    /// `0!` is always present, so `with_len(0)` still holds one entry.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        let mut table = Self {
            values: vec![BigUint::one()],
        };
        table.ensure(len);
        table
    }

    /// Extends the table so that `n!` is available for every `n < len`.
    pub fn ensure(&mut self, len: usize) {
        while self.values.len() < len {
            let n = self.values.len();
            let next = &self.values[n - 1] * BigUint::from(n);
            self.values.push(next);
        }
    }

    /// Returns `n!` if the table covers `n`.
    #[must_use]
    pub fn get(&self, n: usize) -> Option<&BigUint> {
        self.values.get(n)
    }

    /// Number of factorials held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: `0!` is present from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for Factorials {
    fn default() -> Self {
        Self::with_len(1)
    }
}

/// Computes `(k_1 + ... + k_d)! / (k_1! ... k_d!)` directly.
///
/// Uses the product of binomial coefficients `C(k_1, k_1) C(k_1+k_2, k_2) ...`
/// so that no intermediate division leaves a remainder. An empty slice is the
/// empty product, 1.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use pascal_simplex::multinomial;
///
/// assert_eq!(multinomial(&[2, 1, 1]), BigUint::from(12u32));
/// assert_eq!(multinomial(&[4]), BigUint::from(1u32));
/// ```
#[must_use]
pub fn multinomial(parts: &[usize]) -> BigUint {
    let mut result = BigUint::one();
    let mut total = 0usize;
    for &k in parts {
        for j in 1..=k {
            total += 1;
            // result * total / j stays integral: it is C(total, j) times the
            // previous factors.
            result = result * BigUint::from(total) / BigUint::from(j);
        }
    }
    result
}
