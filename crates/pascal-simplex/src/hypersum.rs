//! Hyperplane sums over a Pascal simplex.
//!
//! The hypersum of layer `L` at slope `m` walks back through layers
//! `L, L - m, L - 2m, ...` and, at step `i`, adds the whole subtree at outer
//! index `i`. With the descending ordering of [`crate::simplex`] that subtree
//! is every entry whose first part equals `L - i*m - i`, so for dimension 2
//! and slope 1 the walk is the classic shallow diagonal of Pascal's Triangle
//! and the sums are the Fibonacci numbers.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{Result, SimplexError};
use crate::simplex::{Simplex, SimplexNode};

/// Computes one hypersum per layer of `simplex`.
///
/// # Errors
///
/// Returns [`SimplexError::InvalidParameter`] if `slope` is zero.
///
/// # Example
///
/// ```
/// use pascal_simplex::{build, hypersums};
///
/// let sums = hypersums(&build(8, 2)?, 1)?;
/// let fib: Vec<u32> = sums.iter().map(|v| v.try_into().unwrap()).collect();
/// assert_eq!(fib, [1, 1, 2, 3, 5, 8, 13, 21]);
/// # Ok::<(), pascal_simplex::SimplexError>(())
/// ```
pub fn hypersums(simplex: &Simplex, slope: usize) -> Result<Vec<BigUint>> {
    hypersums_of_layers(simplex.layers(), slope)
}

/// Computes one hypersum per entry of `layers`.
///
/// Layer `L` only reads layers `0..=L`, so the sums of a prefix of a larger
/// simplex are the prefix of its sums.
///
/// # Errors
///
/// Returns [`SimplexError::InvalidParameter`] if `slope` is zero.
pub fn hypersums_of_layers(layers: &[SimplexNode], slope: usize) -> Result<Vec<BigUint>> {
    SimplexError::require_positive("slope", slope)?;
    Ok((0..layers.len())
        .map(|layer| layer_hypersum(layers, layer, slope))
        .collect())
}

fn layer_hypersum(layers: &[SimplexNode], layer: usize, slope: usize) -> BigUint {
    let mut sum = BigUint::zero();
    let mut step = 0usize;
    while let Some(index) = step
        .checked_mul(slope)
        .and_then(|offset| layer.checked_sub(offset))
    {
        match &layers[index] {
            // one-dimensional layers are bare ones
            SimplexNode::Scalar(_) => return BigUint::one(),
            SimplexNode::Nested(children) => {
                // an index past the end contributes nothing; keep walking
                if let Some(child) = children.get(step) {
                    sum += child.total();
                }
            }
        }
        step += 1;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::build;

    fn as_u64(values: &[BigUint]) -> Vec<u64> {
        values.iter().map(|v| u64::try_from(v).unwrap()).collect()
    }

    #[test]
    fn triangle_slope_one_is_fibonacci() -> Result<()> {
        let sums = hypersums(&build(15, 2)?, 1)?;
        assert_eq!(
            as_u64(&sums),
            [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610]
        );
        Ok(())
    }

    #[test]
    fn triangle_slope_two_is_narayana() -> Result<()> {
        let sums = hypersums(&build(15, 2)?, 2)?;
        assert_eq!(
            as_u64(&sums),
            [1, 1, 1, 2, 3, 4, 6, 9, 13, 19, 28, 41, 60, 88, 129]
        );
        Ok(())
    }

    #[test]
    fn one_dimension_is_all_ones_for_any_slope() -> Result<()> {
        let simplex = build(9, 1)?;
        for slope in 1..5 {
            assert_eq!(as_u64(&hypersums(&simplex, slope)?), [1; 9]);
        }
        Ok(())
    }

    #[test]
    fn zero_slope_is_rejected() -> Result<()> {
        let err = hypersums(&build(3, 2)?, 0).unwrap_err();
        assert!(matches!(
            err,
            SimplexError::InvalidParameter {
                parameter: "slope",
                ..
            }
        ));
        Ok(())
    }

    #[test]
    fn empty_simplex_has_no_sums() -> Result<()> {
        assert!(hypersums(&build(0, 3)?, 2)?.is_empty());
        Ok(())
    }

    #[test]
    fn prefix_sums_match_smaller_simplex() -> Result<()> {
        let large = build(12, 3)?;
        let small = build(7, 3)?;
        assert_eq!(
            hypersums_of_layers(&large.layers()[..7], 2)?,
            hypersums(&small, 2)?
        );
        Ok(())
    }

    #[test]
    fn tetrahedron_slope_one() -> Result<()> {
        // x_n = x_{n-1} + 2 x_{n-2}: the Jacobsthal numbers
        let sums = hypersums(&build(10, 3)?, 1)?;
        assert_eq!(as_u64(&sums), [1, 1, 3, 5, 11, 21, 43, 85, 171, 341]);
        Ok(())
    }
}
