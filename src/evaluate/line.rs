//! Lazy one-dimensional polynomial values.
//!
//! [`PolynomialValues`] walks the three-term recurrence forward, yielding
//! one value array per degree while keeping only the two most recent
//! arrays as state:
//!
//! p_0 = p0 (broadcast over the points)
//! p_1 = p_0 · (x·a_0 − b_0)                      (no second-previous term)
//! p_{k+1} = p_k · (x·a_k − b_k) − p_{k−1} · c_k   for k ≥ 1

use std::mem;

use crate::recurrence::{
    Coefficient, ConfigError, Family, RecurrenceCoefficients, RecurrenceStep, RecurrenceStream,
    Standardization,
};
use crate::scalar::Scalar;

/// Lazy sequence of polynomial value arrays, one per degree.
///
/// The sequence length follows the triple source: unbounded for a family
/// stream, finite for a replayed coefficient block. Single pass; state is
/// discarded as the iterator advances.
#[derive(Debug, Clone)]
pub struct PolynomialValues<T, S> {
    source: S,
    points: Vec<T>,
    p0: T,
    prev: Vec<T>,
    prev_prev: Vec<T>,
    degree: usize,
}

impl<T: Scalar, S: Iterator<Item = RecurrenceStep<T>>> PolynomialValues<T, S> {
    /// Create a generator from an explicit triple source.
    pub fn new(p0: T, source: S, points: &[T]) -> Self {
        Self {
            source,
            points: points.to_vec(),
            p0,
            prev: Vec::new(),
            prev_prev: Vec::new(),
            degree: 0,
        }
    }
}

impl<T: Scalar> PolynomialValues<T, RecurrenceStream<T>> {
    /// Create an unbounded generator for a family at the given points.
    pub fn from_family(
        family: &Family<T>,
        standardization: Standardization,
        points: &[T],
    ) -> Result<Self, ConfigError> {
        let stream = family.stream(standardization)?;
        let p0 = stream.p0().clone();
        Ok(Self::new(p0, stream, points))
    }
}

impl<T: Scalar> PolynomialValues<T, std::vec::IntoIter<RecurrenceStep<T>>> {
    /// Create a finite generator replaying a stored coefficient block.
    /// Yields exactly `coefficients.len() + 1` arrays (degrees 0..=n).
    pub fn from_coefficients(coefficients: &RecurrenceCoefficients<T>, points: &[T]) -> Self {
        let steps: Vec<_> = coefficients.steps().collect();
        Self::new(coefficients.p0.clone(), steps.into_iter(), points)
    }
}

impl<T: Scalar, S: Iterator<Item = RecurrenceStep<T>>> Iterator for PolynomialValues<T, S> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let values = if self.degree == 0 {
            vec![self.p0.clone(); self.points.len()]
        } else {
            let step = self.source.next()?;
            // The c coefficient multiplies p_{k-1}, which exists only from
            // the second step on. The index-0 step never contributes one.
            let c = match (&step.c, self.degree) {
                (_, 1) => None,
                (Coefficient::Value(c), _) => Some(c.clone()),
                (Coefficient::NotApplicable, degree) => panic!(
                    "recurrence coefficient c[{}] must be defined",
                    degree - 1
                ),
            };
            let mut values = Vec::with_capacity(self.points.len());
            for (i, x) in self.points.iter().enumerate() {
                let mut value =
                    self.prev[i].clone() * (x.clone() * step.a.clone() - step.b.clone());
                if let Some(c) = &c {
                    value = value - self.prev_prev[i].clone() * c.clone();
                }
                values.push(value);
            }
            values
        };

        self.prev_prev = mem::replace(&mut self.prev, values.clone());
        self.degree += 1;
        Some(values)
    }
}

/// Materialize the value tree for degrees 0..=n at the given points.
///
/// Exactly equivalent to taking the first n+1 items of the lazy generator.
///
/// # Example
///
/// ```
/// use ortho_rs::{tree, Family, Standardization};
///
/// let legendre: Family<f64> = Family::legendre();
/// let values = tree(2, &[0.5], &legendre, Standardization::Monic).unwrap();
/// // Monic P_2(x) = x² − 1/3
/// assert!((values[2][0] - (0.25 - 1.0 / 3.0)).abs() < 1e-14);
/// ```
pub fn tree<T: Scalar>(
    n: usize,
    points: &[T],
    family: &Family<T>,
    standardization: Standardization,
) -> Result<Vec<Vec<T>>, ConfigError> {
    let values = PolynomialValues::from_family(family, standardization, points)?;
    Ok(values.take(n + 1).collect())
}
