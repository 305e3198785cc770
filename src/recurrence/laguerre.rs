//! Generalized Laguerre recurrence coefficients.
//!
//! Laguerre polynomials L_n^{(α)} are orthogonal on [0, ∞) with weight
//! x^α e^{−x}. Only the monic standardization is defined for this family;
//! the triples are (array index k):
//!
//! a_k = −1/(k+1)
//! b_k = −(2k+1+α)/(k+1)
//! c_k = (k+α)/(k+1)          for k ≥ 1, c_0 undefined

use super::types::{Coefficient, ConfigError, RecurrenceStep};
use crate::scalar::Scalar;

/// Unbounded stream of generalized Laguerre recurrence triples.
#[derive(Debug, Clone)]
pub struct LaguerreStream<T> {
    alpha: T,
    p0: T,
    k: usize,
}

impl<T: Scalar> LaguerreStream<T> {
    /// Create a stream for Laguerre(α). Fails if α ≤ −1 (the weight is not
    /// integrable). α = 0 gives the classical Laguerre polynomials.
    pub fn new(alpha: T) -> Result<Self, ConfigError> {
        if alpha <= T::from_int(-1) {
            return Err(ConfigError::ParameterOutOfRange {
                family: "Laguerre",
                name: "alpha",
                value: alpha.to_string(),
            });
        }
        Ok(Self {
            alpha,
            p0: T::one(),
            k: 0,
        })
    }

    /// The constant degree-0 value.
    pub fn p0(&self) -> &T {
        &self.p0
    }
}

impl<T: Scalar> Iterator for LaguerreStream<T> {
    type Item = RecurrenceStep<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.k;
        self.k += 1;

        let next = T::from_int(k as i64 + 1);
        let a = T::from_int(-1) / next.clone();
        let b = -((T::from_int(2 * k as i64 + 1) + self.alpha.clone()) / next.clone());
        let c = if k == 0 {
            Coefficient::NotApplicable
        } else {
            Coefficient::Value((T::from_int(k as i64) + self.alpha.clone()) / next)
        };
        Some(RecurrenceStep { a, b, c })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Rat;

    fn rat(numer: i64, denom: i64) -> Rat {
        <Rat as Scalar>::from_ratio(numer, denom)
    }

    #[test]
    fn test_classical_first_steps() {
        let mut stream = LaguerreStream::<Rat>::new(rat(0, 1)).unwrap();

        let first = stream.next().unwrap();
        assert_eq!(first.a, rat(-1, 1));
        assert_eq!(first.b, rat(-1, 1));
        assert_eq!(first.c, Coefficient::NotApplicable);

        let second = stream.next().unwrap();
        assert_eq!(second.a, rat(-1, 2));
        assert_eq!(second.b, rat(-3, 2));
        assert_eq!(second.c, Coefficient::Value(rat(1, 2)));
    }

    #[test]
    fn test_alpha_shifts_coefficients() {
        let mut stream = LaguerreStream::new(2.0).unwrap();
        let first = stream.next().unwrap();
        // b_0 = -(1+α)
        assert!((first.b + 3.0).abs() < 1e-14);
    }

    #[test]
    fn test_invalid_alpha_rejected() {
        assert!(LaguerreStream::new(-1.0).is_err());
        assert!(LaguerreStream::new(-0.5).is_ok());
    }
}
