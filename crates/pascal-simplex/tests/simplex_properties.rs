//! Property-based tests for simplex construction and hyperplane sums.
//!
//! Parameters stay small: a dimension-`d` simplex of `k` layers holds
//! `C(k + d - 1, d)` coefficients.

use num_bigint::BigUint;
use num_traits::Pow;
use pascal_simplex::{
    build, hypersum_closed_form, hypersums, multinomial, sequence, SimplexBuilder, SimplexNode,
};
use proptest::prelude::*;

/// Walks every scalar of `layer` together with its parts in nesting order.
fn visit(
    node: &SimplexNode,
    remaining: usize,
    prefix: &mut Vec<usize>,
    out: &mut Vec<(Vec<usize>, BigUint)>,
) {
    match node {
        SimplexNode::Scalar(value) => {
            let mut parts = prefix.clone();
            parts.push(remaining);
            out.push((parts, value.clone()));
        }
        SimplexNode::Nested(children) => {
            for (i, child) in children.iter().enumerate() {
                let part = remaining - i;
                prefix.push(part);
                visit(child, i, prefix, out);
                prefix.pop();
            }
        }
    }
}

fn binomial(n: usize, k: usize) -> usize {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

// =============================================================================
// Construction Properties
// =============================================================================

proptest! {
    /// build(k, d) has exactly k layers
    #[test]
    fn prop_layer_count(layers in 0usize..12, dimension in 1usize..6) {
        let simplex = build(layers, dimension).unwrap();
        prop_assert_eq!(simplex.len(), layers);
        prop_assert_eq!(simplex.dimension(), dimension);
    }

    /// layer x holds C(x + d - 1, d - 1) scalars
    #[test]
    fn prop_entry_count(layers in 1usize..12, dimension in 1usize..6) {
        let simplex = build(layers, dimension).unwrap();
        for (x, layer) in simplex.iter().enumerate() {
            prop_assert_eq!(layer.scalar_count(), binomial(x + dimension - 1, dimension - 1));
        }
    }

    /// layer x sums to d^x
    #[test]
    fn prop_layer_sum_is_power(layers in 1usize..12, dimension in 1usize..6) {
        let simplex = build(layers, dimension).unwrap();
        for (x, sum) in simplex.layer_sums().into_iter().enumerate() {
            prop_assert_eq!(sum, Pow::pow(BigUint::from(dimension), x));
        }
    }

    /// every scalar is the multinomial coefficient of its parts
    #[test]
    fn prop_scalars_are_multinomial(layers in 1usize..9, dimension in 1usize..5) {
        let simplex = build(layers, dimension).unwrap();
        for (x, layer) in simplex.iter().enumerate() {
            let mut entries = Vec::new();
            visit(layer, x, &mut Vec::new(), &mut entries);
            for (parts, value) in entries {
                prop_assert_eq!(parts.len(), dimension);
                prop_assert_eq!(parts.iter().sum::<usize>(), x);
                prop_assert_eq!(value, multinomial(&parts));
            }
        }
    }

    /// a smaller build is a prefix of a larger one
    #[test]
    fn prop_prefix_stable(small in 0usize..8, extra in 0usize..5, dimension in 1usize..5) {
        let mut builder = SimplexBuilder::new();
        let large = builder.build(small + extra, dimension).unwrap();
        let short = builder.build(small, dimension).unwrap();
        prop_assert_eq!(&large.layers()[..small], short.layers());
    }
}

// =============================================================================
// Hypersum Properties
// =============================================================================

proptest! {
    /// hypersums agree with the recurrence
    #[test]
    fn prop_hypersums_match_sequence(layers in 0usize..14, dimension in 1usize..6, slope in 1usize..6) {
        let simplex = build(layers, dimension).unwrap();
        prop_assert_eq!(hypersums(&simplex, slope).unwrap(), sequence(dimension, slope, layers).unwrap());
    }

    /// hypersums agree with the explicit binomial sum
    #[test]
    fn prop_hypersums_match_closed_form(layers in 1usize..12, dimension in 1usize..5, slope in 1usize..5) {
        let sums = hypersums(&build(layers, dimension).unwrap(), slope).unwrap();
        for (layer, sum) in sums.iter().enumerate() {
            prop_assert_eq!(sum, &hypersum_closed_form(dimension, slope, layer).unwrap());
        }
    }

    /// output length always equals the number of layers
    #[test]
    fn prop_hypersum_length(layers in 0usize..10, dimension in 1usize..5, slope in 1usize..8) {
        let simplex = build(layers, dimension).unwrap();
        prop_assert_eq!(hypersums(&simplex, slope).unwrap().len(), layers);
    }

    /// repeated calls return identical values
    #[test]
    fn prop_idempotent(layers in 0usize..10, dimension in 1usize..5, slope in 1usize..5) {
        let first = hypersums(&build(layers, dimension).unwrap(), slope).unwrap();
        let second = hypersums(&build(layers, dimension).unwrap(), slope).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(sequence(dimension, slope, layers).unwrap(), sequence(dimension, slope, layers).unwrap());
    }

    /// slopes at or beyond the length leave only the seeds
    #[test]
    fn prop_steep_slope_is_all_ones(layers in 0usize..8, dimension in 1usize..6) {
        let terms = sequence(dimension, layers.max(1), layers).unwrap();
        prop_assert!(terms.iter().all(|t| *t == BigUint::from(1u32)));
    }
}
