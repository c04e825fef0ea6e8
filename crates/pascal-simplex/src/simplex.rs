//! Pascal simplices and their construction.
//!
//! Layer `x` of a dimension-`d` simplex holds one multinomial coefficient
//! `x! / (k_1! ... k_d!)` for every way of writing `x` as `d` ordered
//! non-negative parts. The layer is nested `d - 1` levels deep: each level
//! fixes one part, and the last part is implied by what remains.
//!
//! # Index Ordering
//!
//! Every level enumerates its part in **descending** order. Nested index `i`
//! at a level with `r` units left to distribute holds the entries whose part
//! at that level equals `r - i`. For dimension 3, layer 4 therefore reads
//!
//! ```text
//! [[1], [4, 4], [6, 12, 6], [4, 12, 12, 4], [1, 4, 6, 4, 1]]
//! ```
//!
//! The hypersum walk in [`crate::hypersum`] addresses entries by this
//! ordering; the two must not disagree.

use std::fmt;
use std::ops::Index;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use tracing::debug;

use crate::error::{Result, SimplexError};
use crate::factorial::Factorials;

/// One slot of a simplex: either a coefficient or a nested level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimplexNode {
    /// A multinomial coefficient.
    Scalar(BigUint),
    /// An ordered level of further nodes.
    Nested(Vec<SimplexNode>),
}

impl SimplexNode {
    /// Sum of every scalar reachable from this node.
    #[must_use]
    pub fn total(&self) -> BigUint {
        let mut sum = BigUint::zero();
        self.accumulate(&mut sum);
        sum
    }

    fn accumulate(&self, sum: &mut BigUint) {
        match self {
            Self::Scalar(value) => *sum += value,
            Self::Nested(children) => {
                for child in children {
                    child.accumulate(sum);
                }
            }
        }
    }

    /// Number of scalars reachable from this node.
    #[must_use]
    pub fn scalar_count(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Nested(children) => children.iter().map(Self::scalar_count).sum(),
        }
    }

    /// Scalars in depth-first order.
    #[must_use]
    pub fn flatten(&self) -> Vec<&BigUint> {
        let mut out = Vec::with_capacity(self.scalar_count());
        self.collect_scalars(&mut out);
        out
    }

    fn collect_scalars<'a>(&'a self, out: &mut Vec<&'a BigUint>) {
        match self {
            Self::Scalar(value) => out.push(value),
            Self::Nested(children) => {
                for child in children {
                    child.collect_scalars(out);
                }
            }
        }
    }

    /// Nesting depth: 0 for a scalar, 1 for a level of scalars, and so on.
    ///
    /// An empty level has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Scalar(_) => 0,
            Self::Nested(children) => 1 + children.first().map_or(0, Self::depth),
        }
    }

    /// Child `index` of a nested node; `None` for scalars or out-of-range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SimplexNode> {
        match self {
            Self::Scalar(_) => None,
            Self::Nested(children) => children.get(index),
        }
    }

    /// The coefficient, if this node is a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&BigUint> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Nested(_) => None,
        }
    }
}

impl From<u32> for SimplexNode {
    fn from(value: u32) -> Self {
        Self::Scalar(BigUint::from(value))
    }
}

impl<T: Into<SimplexNode>> From<Vec<T>> for SimplexNode {
    fn from(children: Vec<T>) -> Self {
        Self::Nested(children.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for SimplexNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Nested(children) => {
                f.write_str("[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Scalars become JSON numbers when they fit in `u64` and decimal strings
/// otherwise; levels become arrays.
impl Serialize for SimplexNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(value) => match value.to_u64() {
                Some(small) => serializer.serialize_u64(small),
                None => serializer.serialize_str(&value.to_str_radix(10)),
            },
            Self::Nested(children) => {
                let mut seq = serializer.serialize_seq(Some(children.len()))?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
        }
    }
}

/// A fully built Pascal simplex. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Simplex {
    dimension: usize,
    layers: Vec<SimplexNode>,
}

impl Simplex {
    /// Number of parts each layer index is split into.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when the simplex has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer `x`, if present.
    #[must_use]
    pub fn layer(&self, x: usize) -> Option<&SimplexNode> {
        self.layers.get(x)
    }

    /// All layers in order.
    #[must_use]
    pub fn layers(&self) -> &[SimplexNode] {
        &self.layers
    }

    /// Iterates the layers in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SimplexNode> {
        self.layers.iter()
    }

    /// Sum of each layer; layer `x` sums to `dimension^x`.
    #[must_use]
    pub fn layer_sums(&self) -> Vec<BigUint> {
        self.layers.iter().map(SimplexNode::total).collect()
    }
}

impl Index<usize> for Simplex {
    type Output = SimplexNode;

    fn index(&self, x: usize) -> &SimplexNode {
        &self.layers[x]
    }
}

impl<'a> IntoIterator for &'a Simplex {
    type Item = &'a SimplexNode;
    type IntoIter = std::slice::Iter<'a, SimplexNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, layer) in self.layers.iter().enumerate() {
            writeln!(f, "{x}: {layer}")?;
        }
        Ok(())
    }
}

/// Builds simplices while keeping its factorial table between builds.
///
/// ```
/// use pascal_simplex::SimplexBuilder;
///
/// let mut builder = SimplexBuilder::new();
/// let triangle = builder.build(5, 2)?;
/// assert_eq!(triangle[4].to_string(), "[1, 4, 6, 4, 1]");
/// # Ok::<(), pascal_simplex::SimplexError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimplexBuilder {
    factorials: Factorials,
}

impl SimplexBuilder {
    /// Creates a builder with only `0!` precomputed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose table already covers simplices of up to
    /// `layers` layers.
    #[must_use]
    pub fn with_capacity(layers: usize) -> Self {
        Self {
            factorials: Factorials::with_len(layers),
        }
    }

    /// Builds a simplex of `layers` layers in `dimension` dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::InvalidParameter`] if `dimension` is zero and
    /// [`SimplexError::ArithmeticInconsistency`] if a coefficient division
    /// leaves a remainder.
    pub fn build(&mut self, layers: usize, dimension: usize) -> Result<Simplex> {
        SimplexError::require_positive("dimension", dimension)?;
        self.factorials.ensure(layers);

        let layers = (0..layers)
            .map(|x| {
                let numerator = self.factorial(x)?;
                self.descend(numerator, x, dimension - 1, &BigUint::from(1u32))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            layers = layers.len(),
            dimension,
            entries = layers.iter().map(SimplexNode::scalar_count).sum::<usize>(),
            "built simplex"
        );
        Ok(Simplex { dimension, layers })
    }

    /// Emits the level that distributes `remaining` over `free + 1` parts.
    ///
    /// With no free index left the last part takes the whole remainder and
    /// the coefficient is emitted; in one dimension this is the whole layer.
    fn descend(
        &self,
        numerator: &BigUint,
        remaining: usize,
        free: usize,
        denominator: &BigUint,
    ) -> Result<SimplexNode> {
        if free == 0 {
            let denominator = denominator * self.factorial(remaining)?;
            let (quotient, remainder) = numerator.div_rem(&denominator);
            if !remainder.is_zero() {
                return Err(SimplexError::ArithmeticInconsistency {
                    detail: format!(
                        "{numerator} is not divisible by {denominator} (remainder {remainder})"
                    ),
                });
            }
            return Ok(SimplexNode::Scalar(quotient));
        }

        (0..=remaining)
            .rev()
            .map(|part| {
                let denominator = denominator * self.factorial(part)?;
                self.descend(numerator, remaining - part, free - 1, &denominator)
            })
            .collect::<Result<Vec<_>>>()
            .map(SimplexNode::Nested)
    }

    fn factorial(&self, n: usize) -> Result<&BigUint> {
        self.factorials
            .get(n)
            .ok_or_else(|| SimplexError::ArithmeticInconsistency {
                detail: format!(
                    "{n}! requested beyond the factorial table ({} entries)",
                    self.factorials.len()
                ),
            })
    }
}

/// Builds a simplex of `layers` layers in `dimension` dimensions.
///
/// # Errors
///
/// Returns [`SimplexError::InvalidParameter`] if `dimension` is zero.
///
/// # Example
///
/// ```
/// use pascal_simplex::build;
///
/// let tetrahedron = build(5, 3)?;
/// assert_eq!(
///     tetrahedron[4].to_string(),
///     "[[1], [4, 4], [6, 12, 6], [4, 12, 12, 4], [1, 4, 6, 4, 1]]"
/// );
/// # Ok::<(), pascal_simplex::SimplexError>(())
/// ```
pub fn build(layers: usize, dimension: usize) -> Result<Simplex> {
    SimplexBuilder::with_capacity(layers).build(layers, dimension)
}
