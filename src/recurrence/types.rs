//! Shared data types for recurrence-coefficient generation.

use std::fmt;

use thiserror::Error;

use crate::scalar::ArithmeticError;

/// Scale convention for a polynomial family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standardization {
    /// Leading coefficient 1 for every degree.
    Monic,
    /// Classical scale with p_n(1) = C(n+α, n). Jacobi/Gegenbauer-specific.
    UnitAtOne,
    /// Orthonormal with respect to the family's weight function.
    Normal,
}

impl fmt::Display for Standardization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Standardization::Monic => write!(f, "monic"),
            Standardization::UnitAtOne => write!(f, "p(1) = C(n+alpha, n)"),
            Standardization::Normal => write!(f, "normal"),
        }
    }
}

/// A recurrence coefficient that may be undefined.
///
/// Only c at index 0 is ever [`NotApplicable`](Coefficient::NotApplicable):
/// the first recurrence step has no p_{−1} term, so its c coefficient does
/// not exist. Representing it as a tagged value (instead of NaN or zero)
/// forces downstream code to skip it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coefficient<T> {
    /// A defined coefficient.
    Value(T),
    /// No coefficient exists at this index.
    NotApplicable,
}

impl<T> Coefficient<T> {
    /// The contained value, or `None` for the undefined slot.
    pub fn value(&self) -> Option<&T> {
        match self {
            Coefficient::Value(v) => Some(v),
            Coefficient::NotApplicable => None,
        }
    }

    /// True unless this is the undefined slot.
    pub fn is_applicable(&self) -> bool {
        matches!(self, Coefficient::Value(_))
    }
}

/// One recurrence triple.
///
/// The step at stream index k produces the degree-(k+1) value:
/// p_{k+1} = p_k · (x·a − b) − p_{k−1} · c. Only the index-0 step carries
/// `c = NotApplicable`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceStep<T> {
    /// Multiplier of x.
    pub a: T,
    /// Constant shift.
    pub b: T,
    /// Multiplier of the second-previous value; undefined at index 0.
    pub c: Coefficient<T>,
}

/// A finite block of recurrence coefficients: p0 plus n aligned triples.
///
/// The arrays are aligned 1:1 by step index; consumers that build Jacobi
/// matrices read a, b, c from index 1 upward and must skip the undefined
/// c[0] slot.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceCoefficients<T> {
    /// Value of the degree-0 polynomial (a constant).
    pub p0: T,
    /// Multipliers of x, one per step.
    pub a: Vec<T>,
    /// Constant shifts, one per step.
    pub b: Vec<T>,
    /// Second-previous-value multipliers; index 0 is `NotApplicable`.
    pub c: Vec<Coefficient<T>>,
}

impl<T: Clone> RecurrenceCoefficients<T> {
    /// Number of recurrence steps (the length of each array). The tree of
    /// values this block supports has degrees 0..=len().
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// True when no steps are available (degree 0 only).
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Replay the stored triples as a finite step iterator.
    pub fn steps(&self) -> impl Iterator<Item = RecurrenceStep<T>> + '_ {
        self.a
            .iter()
            .zip(self.b.iter())
            .zip(self.c.iter())
            .map(|((a, b), c)| RecurrenceStep {
                a: a.clone(),
                b: b.clone(),
                c: c.clone(),
            })
    }
}

/// Error type for invalid generator configurations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The family does not define this standardization.
    #[error("standardization \"{standardization}\" is not supported for the {family} family")]
    UnsupportedStandardization {
        /// Family name.
        family: &'static str,
        /// The rejected standardization.
        standardization: Standardization,
    },

    /// A family parameter outside the range where the weight is integrable.
    #[error("{family} parameter {name} = {value} must be greater than -1")]
    ParameterOutOfRange {
        /// Family name.
        family: &'static str,
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: String,
    },

    /// The requested arithmetic mode cannot represent the coefficients.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
