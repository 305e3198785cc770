//! The scalar abstraction shared by the numeric and exact modes.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};
use thiserror::Error;

/// Error type for arithmetic that cannot be carried out in the requested
/// mode. In exact mode this means the result is not a rational number; in
/// numeric mode it guards against silent NaN results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Square root of a rational that is not a perfect square.
    #[error("{value} has no exact square root")]
    InexactSqrt {
        /// The radicand, rendered for the error message.
        value: String,
    },

    /// Square root of a negative value.
    #[error("square root of negative value {value}")]
    NegativeSqrt {
        /// The offending radicand.
        value: String,
    },

    /// Gamma function at a point where the result is not an exact rational.
    #[error("gamma({value}) is not an exact rational")]
    InexactGamma {
        /// The gamma argument.
        value: String,
    },

    /// Gamma function at a pole (zero or a negative integer).
    #[error("gamma({value}) has a pole")]
    GammaPole {
        /// The gamma argument.
        value: String,
    },

    /// Power with an exponent the mode cannot represent exactly.
    #[error("{base}^{exponent} cannot be computed exactly")]
    InexactPow {
        /// Base of the power.
        base: String,
        /// Exponent of the power.
        exponent: String,
    },

    /// The orthonormal standardization scales coefficients by square roots
    /// of norm ratios, which are irrational for essentially all parameters.
    #[error("orthonormal standardization requires square roots with no exact rational value")]
    IrrationalNormalization,
}

/// Scalar type for recurrence-coefficient formulas.
///
/// Implemented for `f64` (numeric mode) and [`Rat`](super::Rat) (exact
/// mode). The recurrence formulas only ever build values from integers and
/// integer ratios, combined with ring operations, so an exact implementation
/// stays exact for rational family parameters.
pub trait Scalar:
    Clone
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Zero
    + One
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// True for exact (arbitrary-precision rational) arithmetic. Lets
    /// constructors reject configurations that exact mode cannot honor
    /// before any coefficient is produced.
    const EXACT: bool;

    /// The scalar representing the integer `n`.
    fn from_int(n: i64) -> Self;

    /// The scalar representing `numer / denom`.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero.
    fn from_ratio(numer: i64, denom: i64) -> Self;

    /// Square root, if representable in this mode.
    fn sqrt(&self) -> Result<Self, ArithmeticError>;

    /// Gamma function, if representable in this mode.
    fn gamma(&self) -> Result<Self, ArithmeticError>;

    /// `self` raised to `exponent`, if representable in this mode.
    fn pow(&self, exponent: &Self) -> Result<Self, ArithmeticError>;

    /// Closest floating-point value, for tolerance comparisons.
    fn to_f64(&self) -> f64;
}
