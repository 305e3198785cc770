//! # ortho-rs
//!
//! Orthogonal polynomial recurrences and stable evaluation.
//!
//! This crate provides the core building blocks for working with classical
//! orthogonal polynomial bases:
//! - Recurrence-coefficient generators (Jacobi, Gegenbauer, Chebyshev of
//!   the first kind, Legendre, generalized Laguerre) under three
//!   standardizations
//! - A lazy value generator evaluating the three-term recurrence over
//!   arbitrary point sets, in one dimension or as tensor products
//! - Clenshaw's algorithm for numerically stable evaluation of weighted
//!   polynomial sums
//! - Dual arithmetic modes: `f64`, or exact arbitrary-precision rationals,
//!   producing identical coefficients
//!
//! Every family satisfies
//!
//! p_{k+1}(x) = p_k(x) · (x·a_k − b_k) − p_{k−1}(x) · c_k
//!
//! with p_{−1} ≡ 0 and a constant p_0. The coefficient arrays aligned by
//! this convention feed Jacobi-matrix constructions (e.g., for Gaussian
//! quadrature); note that c[0] does not exist and is represented by an
//! explicit [`Coefficient::NotApplicable`] sentinel.
//!
//! # Example
//!
//! ```
//! use ortho_rs::{clenshaw_scalar, coefficients, Family, Standardization};
//!
//! // Monic Legendre expansion Σ w_k P_k evaluated at x = 1 via Clenshaw.
//! let legendre: Family<f64> = Family::legendre();
//! let rc = coefficients(5, &legendre, Standardization::Monic).unwrap();
//! let weights = [1.0; 6];
//! let value = clenshaw_scalar(&1.0, &weights, &rc).unwrap();
//! assert!(value.is_finite());
//! ```

pub mod evaluate;
pub mod recurrence;
pub mod scalar;

// Re-export main types for convenience
pub use evaluate::{
    clenshaw, clenshaw_scalar, product_tree, tree, PolynomialValues, ProductError, ProductValues,
    ShapeError,
};
pub use recurrence::{
    coefficients, Coefficient, ConfigError, Family, RecurrenceCoefficients, RecurrenceStep,
    RecurrenceStream, Standardization,
};
pub use scalar::{ArithmeticError, Rat, Scalar};
