//! Jacobi recurrence coefficients.
//!
//! Jacobi polynomials P_n^{(a,b)} are orthogonal on [−1, 1] with weight
//! (1−x)^a (1+x)^b. All interval families in this crate (Gegenbauer,
//! Chebyshev first kind, Legendre) are parameter special cases of this
//! stream.
//!
//! The monic coefficients are the classical closed forms
//! (with N = 2k + a + b):
//!
//! b_k = (b² − a²) / (N(N+2))            for k ≥ 1, b_0 = (b−a)/(a+b+2)
//! c_k = 4k(k+a)(k+b)(k+a+b) / (N²(N+1)(N−1))   for k ≥ 2
//! c_1 = 4(1+a)(1+b) / ((2+a+b)²(3+a+b))
//!
//! The k = 0 and k = 1 forms are the general formulas with their removable
//! singularities cancelled (at a+b = 0 and a+b = −1 respectively; the
//! latter is exactly the Chebyshev case). The other standardizations are
//! exact closed-form rescalings of the monic forms, never numeric ratios
//! of polynomial values.

use super::types::{Coefficient, ConfigError, RecurrenceStep, Standardization};
use crate::scalar::{ArithmeticError, Scalar};

fn int<T: Scalar>(n: i64) -> T {
    T::from_int(n)
}

/// Unbounded stream of Jacobi recurrence triples.
///
/// Construction validates the parameters and standardization eagerly; after
/// that the stream is infallible and never ends.
#[derive(Debug, Clone)]
pub struct JacobiStream<T> {
    a: T,
    b: T,
    standardization: Standardization,
    p0: T,
    k: usize,
}

impl<T: Scalar> JacobiStream<T> {
    /// Create a stream for Jacobi(a, b) under the given standardization.
    ///
    /// Fails if a ≤ −1 or b ≤ −1 (the weight is not integrable), or if the
    /// orthonormal standardization is requested in exact mode (its
    /// coefficients are square roots of rationals, which have no exact
    /// rational representation).
    pub fn new(a: T, b: T, standardization: Standardization) -> Result<Self, ConfigError> {
        Self::with_family_name(a, b, standardization, "Jacobi")
    }

    /// Same as [`new`](Self::new), reporting errors under a derived
    /// family's name.
    pub(crate) fn with_family_name(
        a: T,
        b: T,
        standardization: Standardization,
        family: &'static str,
    ) -> Result<Self, ConfigError> {
        let minus_one = int::<T>(-1);
        if a <= minus_one {
            return Err(ConfigError::ParameterOutOfRange {
                family,
                name: "a",
                value: a.to_string(),
            });
        }
        if b <= minus_one {
            return Err(ConfigError::ParameterOutOfRange {
                family,
                name: "b",
                value: b.to_string(),
            });
        }
        if standardization == Standardization::Normal && T::EXACT {
            return Err(ConfigError::Arithmetic(
                ArithmeticError::IrrationalNormalization,
            ));
        }

        let p0 = match standardization {
            Standardization::Monic | Standardization::UnitAtOne => T::one(),
            Standardization::Normal => {
                // 1 / sqrt of the zeroth moment of the weight.
                let moment = weight_integral(&a, &b)?;
                T::one() / Scalar::sqrt(&moment)?
            }
        };

        Ok(Self {
            a,
            b,
            standardization,
            p0,
            k: 0,
        })
    }

    /// The constant degree-0 value under this standardization.
    pub fn p0(&self) -> &T {
        &self.p0
    }

    /// Monic shift b_k.
    fn monic_b(&self, k: usize) -> T {
        let a = self.a.clone();
        let b = self.b.clone();
        if k == 0 {
            (b.clone() - a.clone()) / (a + b + int(2))
        } else {
            let n = int::<T>(2 * k as i64) + a.clone() + b.clone();
            (b.clone() * b - a.clone() * a) / (n.clone() * (n + int(2)))
        }
    }

    /// Monic second-previous multiplier c_k, defined for k ≥ 1.
    fn monic_c(&self, k: usize) -> T {
        debug_assert!(k >= 1, "c_0 does not exist");
        let a = self.a.clone();
        let b = self.b.clone();
        let one = T::one();
        if k == 1 {
            let s = a.clone() + b.clone() + int(2);
            int::<T>(4) * (a + one.clone()) * (b + one.clone())
                / (s.clone() * s.clone() * (s + one))
        } else {
            let kk = int::<T>(k as i64);
            let n = int::<T>(2 * k as i64) + a.clone() + b.clone();
            int::<T>(4)
                * kk.clone()
                * (kk.clone() + a.clone())
                * (kk.clone() + b.clone())
                * (kk + a + b)
                / (n.clone() * n.clone() * (n.clone() + one.clone()) * (n - one))
        }
    }

    /// Ratio γ_{k+1}/γ_k of classical leading coefficients, where
    /// γ_n = Γ(2n+a+b+1) / (2^n n! Γ(n+a+b+1)). Closed form, exact for
    /// rational parameters; the k = 0 case is the cancelled form of the
    /// removable singularity at a+b = −1.
    fn leading_ratio(&self, k: usize) -> T {
        let a = self.a.clone();
        let b = self.b.clone();
        let one = T::one();
        if k == 0 {
            (a + b + int(2)) / int(2)
        } else {
            let m = int::<T>(2 * k as i64) + a.clone() + b.clone();
            (m.clone() + one.clone()) * (m + int(2))
                / (int::<T>(2) * int::<T>(k as i64 + 1) * (int::<T>(k as i64) + a + b + one))
        }
    }

    /// sqrt of the monic c_k, used by the orthonormal rescaling. With the
    /// parameters validated at construction every monic c_k is positive,
    /// and exact mode never reaches this path.
    fn norm_ratio_sqrt(&self, k: usize) -> T {
        Scalar::sqrt(&self.monic_c(k)).expect("monic c_k is positive for validated parameters")
    }
}

/// Zeroth moment of the Jacobi weight:
/// ∫ (1−x)^a (1+x)^b dx = 2^{a+b+1} Γ(a+1)Γ(b+1) / Γ(a+b+2).
fn weight_integral<T: Scalar>(a: &T, b: &T) -> Result<T, ArithmeticError> {
    let one = T::one();
    let exponent = a.clone() + b.clone() + one.clone();
    let power = Scalar::pow(&int::<T>(2), &exponent)?;
    let gamma_a = Scalar::gamma(&(a.clone() + one.clone()))?;
    let gamma_b = Scalar::gamma(&(b.clone() + one.clone()))?;
    let gamma_ab = Scalar::gamma(&(a.clone() + b.clone() + int(2)))?;
    Ok(power * gamma_a * gamma_b / gamma_ab)
}

impl<T: Scalar> Iterator for JacobiStream<T> {
    type Item = RecurrenceStep<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.k;
        self.k += 1;

        let step = match self.standardization {
            Standardization::Monic => RecurrenceStep {
                a: T::one(),
                b: self.monic_b(k),
                c: if k == 0 {
                    Coefficient::NotApplicable
                } else {
                    Coefficient::Value(self.monic_c(k))
                },
            },
            Standardization::UnitAtOne => {
                let rho = self.leading_ratio(k);
                let c = if k == 0 {
                    Coefficient::NotApplicable
                } else {
                    Coefficient::Value(rho.clone() * self.leading_ratio(k - 1) * self.monic_c(k))
                };
                RecurrenceStep {
                    a: rho.clone(),
                    b: rho * self.monic_b(k),
                    c,
                }
            }
            Standardization::Normal => {
                let s_next = self.norm_ratio_sqrt(k + 1);
                let c = if k == 0 {
                    Coefficient::NotApplicable
                } else {
                    Coefficient::Value(self.norm_ratio_sqrt(k) / s_next.clone())
                };
                RecurrenceStep {
                    a: T::one() / s_next.clone(),
                    b: self.monic_b(k) / s_next,
                    c,
                }
            }
        };
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Rat;

    fn rat(numer: i64, denom: i64) -> Rat {
        <Rat as Scalar>::from_ratio(numer, denom)
    }

    fn monic_c_values(stream: JacobiStream<f64>, n: usize) -> Vec<f64> {
        stream
            .take(n)
            .skip(1)
            .map(|step| *step.c.value().expect("c defined beyond index 0"))
            .collect()
    }

    #[test]
    fn test_legendre_monic_betas() {
        // β_k = k² / (4k² − 1)
        let stream = JacobiStream::new(0.0, 0.0, Standardization::Monic).unwrap();
        let c = monic_c_values(stream, 5);
        let expected = [1.0 / 3.0, 4.0 / 15.0, 9.0 / 35.0, 16.0 / 63.0];
        for (got, want) in c.iter().zip(expected) {
            assert!((got - want).abs() < 1e-14, "{} vs {}", got, want);
        }
    }

    #[test]
    fn test_chebyshev_monic_betas() {
        // β_1 = 1/2, β_k = 1/4 afterwards
        let stream = JacobiStream::new(-0.5, -0.5, Standardization::Monic).unwrap();
        let c = monic_c_values(stream, 6);
        assert!((c[0] - 0.5).abs() < 1e-14);
        for &beta in &c[1..] {
            assert!((beta - 0.25).abs() < 1e-14);
        }
    }

    #[test]
    fn test_first_c_is_not_applicable() {
        let mut stream = JacobiStream::<Rat>::new(
            rat(0, 1),
            rat(0, 1),
            Standardization::Monic,
        )
        .unwrap();
        let first = stream.next().unwrap();
        assert_eq!(first.c, Coefficient::NotApplicable);
        let second = stream.next().unwrap();
        assert_eq!(second.c, Coefficient::Value(rat(1, 3)));
    }

    #[test]
    fn test_normal_legendre_leading_terms() {
        let stream = JacobiStream::new(0.0, 0.0, Standardization::Normal).unwrap();
        // p0 = 1/√2, first a = √3 so that p1 = √(3/2)·x
        assert!((stream.p0() - 1.0 / 2.0_f64.sqrt()).abs() < 1e-14);
        let first = stream.clone().next().unwrap();
        assert!((first.a - 3.0_f64.sqrt()).abs() < 1e-14);
        assert!(first.b.abs() < 1e-14);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(JacobiStream::new(-1.0, 0.0, Standardization::Monic).is_err());
        assert!(JacobiStream::new(0.0, -1.5, Standardization::Monic).is_err());
    }

    #[test]
    fn test_exact_normal_rejected() {
        let result = JacobiStream::<Rat>::new(
            rat(0, 1),
            rat(0, 1),
            Standardization::Normal,
        );
        assert!(matches!(result, Err(ConfigError::Arithmetic(_))));
    }
}
