//! Pascal simplices and their hyperplane sums.
//!
//! A Pascal simplex generalizes Pascal's Triangle to `d` dimensions: layer
//! `x` holds the multinomial coefficients `x! / (k_1! ... k_d!)` for every
//! split of `x` into `d` non-negative parts. Summing entries along a
//! hyperplane of slope `m` gives one value per layer, and those values obey
//! a short linear recurrence.
//!
//! # Components
//!
//! | Component | Entry point | Cost |
//! |-----------|-------------|------|
//! | Simplex construction | [`build`], [`SimplexBuilder`] | O(layers^d) entries |
//! | Hyperplane sums | [`hypersums`] | one walk per layer |
//! | Recurrence | [`sequence`], [`SequenceIter`] | O(length) |
//! | Cross-check | [`validate`], [`validate_report`] | full parameter sweep |
//!
//! # Example
//!
//! ```
//! use pascal_simplex::{build, hypersums, sequence};
//!
//! let tetrahedron = build(12, 3)?;
//! let sums = hypersums(&tetrahedron, 2)?;
//! assert_eq!(sums, sequence(3, 2, 12)?);
//! # Ok::<(), pascal_simplex::SimplexError>(())
//! ```
//!
//! All arithmetic is exact (`num_bigint::BigUint`); every operation is a pure
//! function of its arguments.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod error;
pub mod factorial;
pub mod formula;
pub mod hypersum;
pub mod report;
pub mod simplex;
pub mod validate;

pub use error::{Result, SimplexError};
pub use factorial::{multinomial, Factorials};
pub use formula::{hypersum_closed_form, sequence, SequenceIter};
pub use hypersum::{hypersums, hypersums_of_layers};
pub use num_bigint::BigUint;
pub use report::{CheckResult, Parameters, Severity, ValidationReport};
pub use simplex::{build, Simplex, SimplexBuilder, SimplexNode};
pub use validate::{validate, validate_report, ValidationBounds};
