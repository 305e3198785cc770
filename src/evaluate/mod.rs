//! Lazy polynomial-value generation and stable weighted-sum evaluation.
//!
//! This module consumes recurrence triples and produces values:
//! - [`PolynomialValues`] / [`tree`] — one value array per degree at a set
//!   of evaluation points, holding only the two most recent arrays
//! - [`ProductValues`] / [`product_tree`] — tensor products over several
//!   coordinate axes, grouped by total degree
//! - [`clenshaw`] — Σ w_k p_k(x) by backward recurrence, without
//!   materializing the value tree

mod clenshaw;
mod line;
mod product;

use thiserror::Error;

pub use clenshaw::{clenshaw, clenshaw_scalar};
pub use line::{tree, PolynomialValues};
pub use product::{product_tree, ProductError, ProductValues};

/// Error type for shape mismatches between points, weights and coefficients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Clenshaw expects one weight per degree, degree 0 included.
    #[error("expected {expected} expansion weights (one per degree), got {actual}")]
    WeightCount {
        /// Required number of weights: coefficient count + 1.
        expected: usize,
        /// Number of weights supplied.
        actual: usize,
    },

    /// The product generator needs at least one coordinate axis.
    #[error("product generator needs at least one coordinate axis")]
    NoAxes,

    /// All coordinate axes must hold the same number of points.
    #[error("axis {axis} has {actual} points, expected {expected}")]
    AxisLength {
        /// Index of the offending axis.
        axis: usize,
        /// Point count of axis 0.
        expected: usize,
        /// Point count found.
        actual: usize,
    },
}
