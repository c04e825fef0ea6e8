//! The linear recurrence satisfied by hypersums.
//!
//! For dimension `d >= 2` and slope `m`:
//!
//! ```text
//! x_n = 1                              for n <= m
//! x_n = x_{n-1} + (d - 1) x_{n-(m+1)}  for n > m
//! ```
//!
//! Dimension 1 gives all ones, which the recurrence also yields since the
//! second term vanishes. Expanding the recurrence gives the explicit sum
//! `x_L = sum_i C(L - i*m, i) (d - 1)^i` computed by [`hypersum_closed_form`].

use std::collections::VecDeque;

use num_bigint::BigUint;
use num_traits::{One, Pow, Zero};
use tracing::debug;

use crate::error::{Result, SimplexError};
use crate::factorial::multinomial;

/// Returns the first `length` terms of the recurrence.
///
/// # Errors
///
/// Returns [`SimplexError::InvalidParameter`] if `dimension` or `slope` is
/// zero.
///
/// # Example
///
/// ```
/// use pascal_simplex::sequence;
///
/// let cows: Vec<u32> = sequence(2, 2, 10)?
///     .iter()
///     .map(|v| v.try_into().unwrap())
///     .collect();
/// assert_eq!(cows, [1, 1, 1, 2, 3, 4, 6, 9, 13, 19]);
/// # Ok::<(), pascal_simplex::SimplexError>(())
/// ```
pub fn sequence(dimension: usize, slope: usize, length: usize) -> Result<Vec<BigUint>> {
    SimplexError::require_positive("dimension", dimension)?;
    SimplexError::require_positive("slope", slope)?;

    if dimension == 1 {
        return Ok(vec![BigUint::one(); length]);
    }

    let coefficient = BigUint::from(dimension - 1);
    let mut terms: Vec<BigUint> = Vec::with_capacity(length);
    for n in 0..length {
        let term = if n <= slope {
            BigUint::one()
        } else {
            &terms[n - 1] + &coefficient * &terms[n - slope - 1]
        };
        terms.push(term);
    }

    debug!(dimension, slope, length, "computed formula sequence");
    Ok(terms)
}

/// Unbounded iterator over the recurrence that keeps only the last
/// `slope + 1` terms.
#[derive(Debug, Clone)]
pub struct SequenceIter {
    coefficient: BigUint,
    slope: usize,
    window: VecDeque<BigUint>,
    n: usize,
}

impl SequenceIter {
    /// Starts the recurrence for `dimension` and `slope` at `x_0`.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::InvalidParameter`] if `dimension` or `slope`
    /// is zero.
    pub fn new(dimension: usize, slope: usize) -> Result<Self> {
        SimplexError::require_positive("dimension", dimension)?;
        SimplexError::require_positive("slope", slope)?;
        Ok(Self {
            coefficient: BigUint::from(dimension - 1),
            slope,
            window: VecDeque::with_capacity(slope + 1),
            n: 0,
        })
    }
}

impl Iterator for SequenceIter {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        // window holds x_{n-(m+1)} ..= x_{n-1} once n > m
        let term = match (self.window.front(), self.window.back()) {
            (Some(oldest), Some(previous)) if self.n > self.slope => {
                previous + &self.coefficient * oldest
            }
            _ => BigUint::one(),
        };
        if self.window.len() == self.slope + 1 {
            self.window.pop_front();
        }
        self.window.push_back(term.clone());
        self.n += 1;
        Some(term)
    }
}

/// Hypersum of `layer` as the explicit sum `sum_i C(layer - i*slope, i) (d-1)^i`.
///
/// # Errors
///
/// Returns [`SimplexError::InvalidParameter`] if `dimension` or `slope` is
/// zero.
pub fn hypersum_closed_form(dimension: usize, slope: usize, layer: usize) -> Result<BigUint> {
    SimplexError::require_positive("dimension", dimension)?;
    SimplexError::require_positive("slope", slope)?;

    let base = BigUint::from(dimension - 1);
    let mut sum = BigUint::zero();
    let mut step = 0usize;
    while let Some(top) = step
        .checked_mul(slope)
        .and_then(|offset| layer.checked_sub(offset))
    {
        if step > top {
            break;
        }
        let choose = multinomial(&[top - step, step]);
        sum += choose * Pow::pow(&base, step);
        step += 1;
    }
    Ok(sum)
}
