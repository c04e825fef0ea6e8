//! Exhaustive cross-check of hypersums against the recurrence.
//!
//! For every `dimension in [1, max_dimension)`, `slope in [1, max_slope)` and
//! `length in [1, max_length)` the sweep compares the hypersums of a
//! `length`-layer simplex with the first `length` formula terms. Every
//! mismatch is logged and recorded; the sweep never stops early.
//!
//! One simplex of `max_length - 1` layers is built per dimension and each
//! length is checked against its prefix, which is exactly the simplex a
//! `length`-layer build would produce.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::formula::sequence;
use crate::hypersum::hypersums_of_layers;
use crate::report::{format_sequence, CheckResult, Parameters, ValidationReport};
use crate::simplex::{Simplex, SimplexBuilder};

/// Exclusive upper bounds of a validation sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationBounds {
    /// Dimensions `1..max_dimension` are checked.
    pub max_dimension: usize,
    /// Slopes `1..max_slope` are checked.
    pub max_slope: usize,
    /// Lengths `1..max_length` are checked.
    pub max_length: usize,
}

impl ValidationBounds {
    /// Number of `(dimension, slope, length)` triples the sweep covers.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        let span = |max: usize| max.saturating_sub(1);
        span(self.max_dimension) * span(self.max_slope) * span(self.max_length)
    }
}

impl Default for ValidationBounds {
    fn default() -> Self {
        Self {
            max_dimension: 10,
            max_slope: 10,
            max_length: 18,
        }
    }
}

/// Runs the sweep and returns whether every triple agreed.
///
/// # Example
///
/// ```
/// assert!(pascal_simplex::validate(4, 4, 8));
/// ```
#[must_use]
pub fn validate(max_dimension: usize, max_slope: usize, max_length: usize) -> bool {
    validate_report(&ValidationBounds {
        max_dimension,
        max_slope,
        max_length,
    })
    .all_passed()
}

/// Runs the sweep and returns one result per triple.
#[must_use]
pub fn validate_report(bounds: &ValidationBounds) -> ValidationReport {
    sweep(bounds, sequence)
}

/// Reference terms for `(dimension, slope, length)`.
type Formula = fn(usize, usize, usize) -> Result<Vec<BigUint>>;

fn sweep(bounds: &ValidationBounds, formula: Formula) -> ValidationReport {
    let mut report = ValidationReport::new();
    let layers = bounds.max_length.saturating_sub(1);
    let mut builder = SimplexBuilder::with_capacity(layers);

    for dimension in 1..bounds.max_dimension {
        match builder.build(layers, dimension) {
            Ok(simplex) => check_dimension(&simplex, bounds, formula, &mut report),
            Err(err) => {
                warn!(dimension, error = %err, "simplex construction failed");
                for slope in 1..bounds.max_slope {
                    for length in 1..bounds.max_length {
                        report.push(CheckResult::fail_with_details(
                            Parameters {
                                dimension,
                                slope,
                                length,
                            },
                            "simplex construction failed",
                            vec![err.to_string()],
                        ));
                    }
                }
            }
        }
    }

    info!(
        checked = report.results.len(),
        failed = report.failure_count(),
        "validation sweep finished"
    );
    report
}

fn check_dimension(
    simplex: &Simplex,
    bounds: &ValidationBounds,
    formula: Formula,
    report: &mut ValidationReport,
) {
    let dimension = simplex.dimension();
    for slope in 1..bounds.max_slope {
        for length in 1..bounds.max_length {
            let parameters = Parameters {
                dimension,
                slope,
                length,
            };
            report.push(check(simplex, parameters, formula));
        }
    }
}

/// Compares hypersums and formula for one triple. `simplex` must have at
/// least `parameters.length` layers.
fn check(simplex: &Simplex, parameters: Parameters, formula: Formula) -> CheckResult {
    let Parameters {
        dimension,
        slope,
        length,
    } = parameters;

    let observed = match simplex
        .layers()
        .get(..length)
        .ok_or_else(|| format!("simplex has only {} layers", simplex.len()))
        .and_then(|layers| hypersums_of_layers(layers, slope).map_err(|e| e.to_string()))
    {
        Ok(sums) => sums,
        Err(detail) => {
            return CheckResult::fail_with_details(parameters, "hypersums failed", vec![detail])
        }
    };
    let expected = match formula(dimension, slope, length) {
        Ok(terms) => terms,
        Err(err) => {
            return CheckResult::fail_with_details(
                parameters,
                "formula failed",
                vec![err.to_string()],
            )
        }
    };

    if observed == expected {
        return CheckResult::pass(parameters, "hypersums match formula");
    }

    let mismatches = observed
        .iter()
        .zip(&expected)
        .filter(|(a, b)| a != b)
        .count();
    let observed = format_sequence(&observed);
    let expected = format_sequence(&expected);
    warn!(
        dimension,
        slope,
        length,
        hypersums = %observed,
        formula = %expected,
        "hypersums disagree with formula"
    );
    CheckResult::fail_with_details(
        parameters,
        format!("{mismatches} of {length} terms differ"),
        vec![
            format!("hypersums: {observed}"),
            format!("formula:   {expected}"),
        ],
    )
}
