//! Dual-mode arithmetic: IEEE floating point or exact rationals.
//!
//! Every recurrence formula in this crate is written once, generically over
//! the [`Scalar`] trait, and instantiated for either:
//! - `f64` — fast floating-point evaluation, or
//! - [`Rat`] (arbitrary-precision rationals) — exact evaluation, where every
//!   coefficient is a reduced rational number.
//!
//! Because both modes share the same formula code, they cannot drift apart:
//! a coefficient that is 1/3 in exact mode is 0.333... in numeric mode, by
//! construction. Constants enter formulas only through [`Scalar::from_int`]
//! and [`Scalar::from_ratio`], never as floating-point literals.
//!
//! Operations that have no exact result (square roots of non-squares, the
//! gamma function away from the positive integers) fail with
//! [`ArithmeticError`] in exact mode rather than silently falling back to
//! floating point.

mod float;
mod rational;
mod traits;

pub use rational::Rat;
pub use traits::{ArithmeticError, Scalar};
