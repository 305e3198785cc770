//! Exact mode: arbitrary-precision rationals.

use num_bigint::BigInt;
use num_integer::Roots;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive};

use super::traits::{ArithmeticError, Scalar};

/// Exact scalar: a reduced ratio of arbitrary-precision integers.
pub type Rat = BigRational;

impl Scalar for Rat {
    const EXACT: bool = true;

    fn from_int(n: i64) -> Self {
        Rat::from_integer(BigInt::from(n))
    }

    fn from_ratio(numer: i64, denom: i64) -> Self {
        assert!(denom != 0, "ratio denominator must be nonzero");
        Rat::new(BigInt::from(numer), BigInt::from(denom))
    }

    fn sqrt(&self) -> Result<Self, ArithmeticError> {
        if self.is_negative() {
            return Err(ArithmeticError::NegativeSqrt {
                value: self.to_string(),
            });
        }
        // A reduced ratio is a perfect square iff numerator and denominator
        // both are.
        let numer_root = Roots::sqrt(self.numer());
        let denom_root = Roots::sqrt(self.denom());
        if &(&numer_root * &numer_root) == self.numer()
            && &(&denom_root * &denom_root) == self.denom()
        {
            Ok(Rat::new(numer_root, denom_root))
        } else {
            Err(ArithmeticError::InexactSqrt {
                value: self.to_string(),
            })
        }
    }

    fn gamma(&self) -> Result<Self, ArithmeticError> {
        // Γ(n) = (n-1)! is rational only at the positive integers.
        if !self.is_integer() {
            return Err(ArithmeticError::InexactGamma {
                value: self.to_string(),
            });
        }
        if !self.is_positive() {
            return Err(ArithmeticError::GammaPole {
                value: self.to_string(),
            });
        }
        let n = self.to_integer();
        let mut factorial = BigInt::one();
        let mut i = BigInt::one();
        while i < n {
            factorial *= &i;
            i += 1;
        }
        Ok(Rat::from_integer(factorial))
    }

    fn pow(&self, exponent: &Self) -> Result<Self, ArithmeticError> {
        let inexact = || ArithmeticError::InexactPow {
            base: self.to_string(),
            exponent: exponent.to_string(),
        };
        if !exponent.is_integer() {
            return Err(inexact());
        }
        let exp = exponent.to_integer().to_i32().ok_or_else(inexact)?;
        Ok(Rat::pow(self, exp))
    }

    fn to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }
}
