//! Three-term-recurrence coefficients for orthogonal polynomial families.
//!
//! Every family here satisfies a recurrence of the form
//!
//! p_{k+1}(x) = p_k(x) · (x·a_k − b_k) − p_{k−1}(x) · c_k
//!
//! with p_{−1} ≡ 0 and a constant p_0. This module produces the (a, b, c)
//! triples, either as a finite [`RecurrenceCoefficients`] block via
//! [`coefficients`] or as an unbounded lazy [`RecurrenceStream`].
//!
//! Families:
//! - Jacobi(a, b) — weight (1−x)^a (1+x)^b on [−1, 1]; the engine all
//!   interval families reduce to
//! - Gegenbauer(α) = Jacobi(α, α)
//! - Chebyshev (first kind) = Gegenbauer(−1/2)
//! - Legendre = Jacobi(0, 0)
//! - generalized Laguerre(α) — weight x^α e^{−x} on [0, ∞), monic only
//!
//! The c triple at index 0 would multiply p_{−1} and is therefore
//! meaningless; it is represented by [`Coefficient::NotApplicable`] rather
//! than a numeric sentinel, so it can never be consumed silently.

mod family;
mod jacobi;
mod laguerre;
mod types;

pub use family::{coefficients, Family, RecurrenceStream};
pub use jacobi::JacobiStream;
pub use laguerre::LaguerreStream;
pub use types::{
    Coefficient, ConfigError, RecurrenceCoefficients, RecurrenceStep, Standardization,
};
