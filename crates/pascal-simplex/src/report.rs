//! Validation report types: per-triple results and their aggregation.

use std::fmt;

use num_bigint::BigUint;
use serde::Serialize;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Hypersums and formula agree.
    Pass,
    /// The check found a mismatch or could not run.
    Failure,
}

/// The `(dimension, slope, length)` triple a check was run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parameters {
    /// Simplex dimension.
    pub dimension: usize,
    /// Hyperplane slope.
    pub slope: usize,
    /// Number of layers and sequence terms compared.
    pub length: usize,
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dimension={} slope={} length={}",
            self.dimension, self.slope, self.length
        )
    }
}

/// A single check result.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Parameters the check ran with.
    pub parameters: Parameters,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Additional detail lines, such as both sequences on a mismatch.
    pub details: Vec<String>,
}

impl CheckResult {
    /// Creates a passing result.
    pub fn pass(parameters: Parameters, message: impl Into<String>) -> Self {
        Self {
            parameters,
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// Creates a failure result with detail lines.
    pub fn fail_with_details(
        parameters: Parameters,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            parameters,
            message: message.into(),
            severity: Severity::Failure,
            details,
        }
    }

    /// Returns true if this result represents a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated results of a validation sweep.
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    /// Every check in sweep order.
    pub results: Vec<CheckResult>,
}

impl ValidationReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Returns the count of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Returns the count of passed checks.
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.results.len() - self.failure_count()
    }

    /// Iterates the failed checks.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// Returns true if no check failed. An empty sweep passes.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Renders a sequence as `[a, b, c]`.
#[must_use]
pub fn format_sequence(values: &[BigUint]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: Parameters = Parameters {
        dimension: 3,
        slope: 2,
        length: 4,
    };

    #[test]
    fn empty_report_passes() {
        let report = ValidationReport::new();
        assert!(report.all_passed());
        assert_eq!(report.pass_count(), 0);
    }

    #[test]
    fn counts_failures() {
        let mut report = ValidationReport::new();
        report.push(CheckResult::pass(PARAMS, "ok"));
        report.push(CheckResult::fail_with_details(PARAMS, "bad", vec!["x".into()]));
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.pass_count(), 1);
        assert!(!report.all_passed());
        assert_eq!(report.failures().next().map(|r| r.message.as_str()), Some("bad"));
    }

    #[test]
    fn formats() {
        assert_eq!(PARAMS.to_string(), "dimension=3 slope=2 length=4");
        let seq = [BigUint::from(1u32), BigUint::from(12u32)];
        assert_eq!(format_sequence(&seq), "[1, 12]");
        assert_eq!(format_sequence(&[]), "[]");
    }
}
