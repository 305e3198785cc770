//! Clenshaw evaluation of orthogonal-polynomial expansions.
//!
//! Computes S(x) = Σ_{k=0}^{n} w_k p_k(x) by backward recurrence over the
//! same (a, b, c) triples that define the polynomials:
//!
//! u_k = w_k + (x·a_k − b_k) u_{k+1} − c_{k+1} u_{k+2},  k = n..0
//! S(x) = p0 · u_0
//!
//! Only two accumulators are live at a time. For large n this is
//! numerically preferable to materializing every p_k and summing, because
//! the backward pass avoids the cancellation amplification of naive
//! high-degree accumulation.

use super::ShapeError;
use crate::recurrence::{Coefficient, RecurrenceCoefficients};
use crate::scalar::Scalar;

/// Evaluate Σ w_k p_k at each point.
///
/// `weights` must hold one entry per degree, degree 0 included, so its
/// length is `coefficients.len() + 1`.
pub fn clenshaw<T: Scalar>(
    points: &[T],
    weights: &[T],
    coefficients: &RecurrenceCoefficients<T>,
) -> Result<Vec<T>, ShapeError> {
    check_weights(weights, coefficients)?;
    Ok(points
        .iter()
        .map(|x| clenshaw_point(x, weights, coefficients))
        .collect())
}

/// Evaluate Σ w_k p_k at a single point.
pub fn clenshaw_scalar<T: Scalar>(
    x: &T,
    weights: &[T],
    coefficients: &RecurrenceCoefficients<T>,
) -> Result<T, ShapeError> {
    check_weights(weights, coefficients)?;
    Ok(clenshaw_point(x, weights, coefficients))
}

fn check_weights<T: Scalar>(
    weights: &[T],
    coefficients: &RecurrenceCoefficients<T>,
) -> Result<(), ShapeError> {
    let expected = coefficients.len() + 1;
    if weights.len() != expected {
        return Err(ShapeError::WeightCount {
            expected,
            actual: weights.len(),
        });
    }
    Ok(())
}

fn clenshaw_point<T: Scalar>(
    x: &T,
    weights: &[T],
    coefficients: &RecurrenceCoefficients<T>,
) -> T {
    let n = coefficients.len();
    if n == 0 {
        return weights[0].clone() * coefficients.p0.clone();
    }

    // u_{k+1} and u_{k+2}; the first pass (k = n-1) has u_{k+2} = 0 and
    // needs no c, so the undefined c[0] slot is never read.
    let mut u_next = weights[n].clone();
    let mut u_after = T::zero();
    for k in (0..n).rev() {
        let shift = x.clone() * coefficients.a[k].clone() - coefficients.b[k].clone();
        let mut u = weights[k].clone() + shift * u_next.clone();
        if k + 1 < n {
            let c = match &coefficients.c[k + 1] {
                Coefficient::Value(c) => c.clone(),
                Coefficient::NotApplicable => {
                    panic!("recurrence coefficient c[{}] must be defined", k + 1)
                }
            };
            u = u - c * u_after.clone();
        }
        u_after = std::mem::replace(&mut u_next, u);
    }
    coefficients.p0.clone() * u_next
}
