//! Family dispatch: one closed enum mapping each polynomial family to its
//! recurrence stream.

use super::jacobi::JacobiStream;
use super::laguerre::LaguerreStream;
use super::types::{ConfigError, RecurrenceCoefficients, RecurrenceStep, Standardization};
use crate::scalar::Scalar;

/// An orthogonal polynomial family, fully determined by its parameters.
///
/// Gegenbauer, Chebyshev and Legendre are parameter special cases of
/// Jacobi and share its stream:
/// - Gegenbauer(α) = Jacobi(α, α)
/// - Chebyshev (first kind) = Gegenbauer(−1/2)
/// - Legendre = Jacobi(0, 0)
#[derive(Debug, Clone, PartialEq)]
pub enum Family<T> {
    /// Jacobi with weight (1−x)^a (1+x)^b.
    Jacobi {
        /// Exponent of (1−x).
        a: T,
        /// Exponent of (1+x).
        b: T,
    },
    /// Gegenbauer (ultraspherical), weight (1−x²)^α.
    Gegenbauer {
        /// Exponent of (1−x²).
        alpha: T,
    },
    /// Chebyshev polynomials of the first kind.
    Chebyshev1,
    /// Legendre polynomials.
    Legendre,
    /// Generalized Laguerre, weight x^α e^{−x}.
    Laguerre {
        /// Exponent of x.
        alpha: T,
    },
}

impl<T: Scalar> Family<T> {
    /// Jacobi(a, b).
    pub fn jacobi(a: T, b: T) -> Self {
        Family::Jacobi { a, b }
    }

    /// Gegenbauer(α).
    pub fn gegenbauer(alpha: T) -> Self {
        Family::Gegenbauer { alpha }
    }

    /// Chebyshev polynomials of the first kind.
    pub fn chebyshev1() -> Self {
        Family::Chebyshev1
    }

    /// Legendre polynomials.
    pub fn legendre() -> Self {
        Family::Legendre
    }

    /// Generalized Laguerre(α).
    pub fn laguerre(alpha: T) -> Self {
        Family::Laguerre { alpha }
    }

    /// Family name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Family::Jacobi { .. } => "Jacobi",
            Family::Gegenbauer { .. } => "Gegenbauer",
            Family::Chebyshev1 => "Chebyshev1",
            Family::Legendre => "Legendre",
            Family::Laguerre { .. } => "Laguerre",
        }
    }

    /// Resolve this family to its recurrence stream.
    ///
    /// Validation is eager: unsupported (family, standardization) pairings,
    /// out-of-range parameters and exact-mode conflicts all fail here, not
    /// on first use.
    pub fn stream(
        &self,
        standardization: Standardization,
    ) -> Result<RecurrenceStream<T>, ConfigError> {
        match self {
            Family::Jacobi { a, b } => Ok(RecurrenceStream::Jacobi(
                JacobiStream::with_family_name(a.clone(), b.clone(), standardization, "Jacobi")?,
            )),
            Family::Gegenbauer { alpha } => {
                Ok(RecurrenceStream::Jacobi(JacobiStream::with_family_name(
                    alpha.clone(),
                    alpha.clone(),
                    standardization,
                    "Gegenbauer",
                )?))
            }
            Family::Chebyshev1 => {
                // The exact rational -1/2, in either mode.
                let half = T::from_ratio(-1, 2);
                Ok(RecurrenceStream::Jacobi(JacobiStream::with_family_name(
                    half.clone(),
                    half,
                    standardization,
                    "Chebyshev1",
                )?))
            }
            Family::Legendre => Ok(RecurrenceStream::Jacobi(JacobiStream::with_family_name(
                T::zero(),
                T::zero(),
                standardization,
                "Legendre",
            )?)),
            Family::Laguerre { alpha } => {
                if standardization != Standardization::Monic {
                    return Err(ConfigError::UnsupportedStandardization {
                        family: "Laguerre",
                        standardization,
                    });
                }
                Ok(RecurrenceStream::Laguerre(LaguerreStream::new(
                    alpha.clone(),
                )?))
            }
        }
    }
}

/// A recurrence stream for any family: an unbounded iterator of triples.
#[derive(Debug, Clone)]
pub enum RecurrenceStream<T> {
    /// Jacobi and its special cases.
    Jacobi(JacobiStream<T>),
    /// Generalized Laguerre.
    Laguerre(LaguerreStream<T>),
}

impl<T: Scalar> RecurrenceStream<T> {
    /// The constant degree-0 value under the stream's standardization.
    pub fn p0(&self) -> &T {
        match self {
            RecurrenceStream::Jacobi(stream) => stream.p0(),
            RecurrenceStream::Laguerre(stream) => stream.p0(),
        }
    }
}

impl<T: Scalar> Iterator for RecurrenceStream<T> {
    type Item = RecurrenceStep<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            RecurrenceStream::Jacobi(stream) => stream.next(),
            RecurrenceStream::Laguerre(stream) => stream.next(),
        }
    }
}

/// Compute the first `n` recurrence triples plus p0 for a family.
///
/// `n = 0` returns p0 with empty coefficient arrays.
pub fn coefficients<T: Scalar>(
    n: usize,
    family: &Family<T>,
    standardization: Standardization,
) -> Result<RecurrenceCoefficients<T>, ConfigError> {
    let mut stream = family.stream(standardization)?;
    let p0 = stream.p0().clone();

    let mut a = Vec::with_capacity(n);
    let mut b = Vec::with_capacity(n);
    let mut c = Vec::with_capacity(n);
    for step in stream.by_ref().take(n) {
        a.push(step.a);
        b.push(step.b);
        c.push(step.c);
    }
    Ok(RecurrenceCoefficients { p0, a, b, c })
}
