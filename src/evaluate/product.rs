//! Tensor-product polynomial values over multi-dimensional domains.
//!
//! For d coordinate axes, the level at total degree m holds the
//! C(m+d−1, d−1) products P_{i_0}(x_0)···P_{i_{d−1}}(x_{d−1}) with
//! i_0 + ... + i_{d−1} = m. Levels are emitted in dimension-major order
//! (leading-axis degree descending), so repeated construction enumerates
//! identically.
//!
//! Each axis owns an independently-constructed 1-D generator; no state is
//! shared across axes. The common choice is orthonormal Legendre on the
//! cube, but any family/standardization works.

use thiserror::Error;

use super::line::PolynomialValues;
use super::ShapeError;
use crate::recurrence::{ConfigError, Family, RecurrenceStream, Standardization};
use crate::scalar::Scalar;

/// Error type for multivariate generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductError {
    /// Invalid family/standardization configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Mismatched axis shapes.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

struct AxisValues<T: Scalar> {
    generator: PolynomialValues<T, RecurrenceStream<T>>,
    /// 1-D values for every degree up to the current level.
    degrees: Vec<Vec<T>>,
}

/// Lazy sequence of tensor-product value levels, one per total degree.
pub struct ProductValues<T: Scalar> {
    axes: Vec<AxisValues<T>>,
    level: usize,
}

impl<T: Scalar> ProductValues<T> {
    /// Create a generator over the given coordinate axes. Every axis must
    /// hold the same number of points; all axes share the family and
    /// standardization but evaluate through independent 1-D generators.
    pub fn new(
        family: &Family<T>,
        standardization: Standardization,
        axes: &[Vec<T>],
    ) -> Result<Self, ProductError> {
        if axes.is_empty() {
            return Err(ShapeError::NoAxes.into());
        }
        let expected = axes[0].len();
        for (i, axis) in axes.iter().enumerate().skip(1) {
            if axis.len() != expected {
                return Err(ShapeError::AxisLength {
                    axis: i,
                    expected,
                    actual: axis.len(),
                }
                .into());
            }
        }

        let mut states = Vec::with_capacity(axes.len());
        for axis in axes {
            let generator = PolynomialValues::from_family(family, standardization, axis)?;
            states.push(AxisValues {
                generator,
                degrees: Vec::new(),
            });
        }
        Ok(Self {
            axes: states,
            level: 0,
        })
    }

    /// Number of coordinate axes.
    pub fn dimension(&self) -> usize {
        self.axes.len()
    }
}

impl<T: Scalar> Iterator for ProductValues<T> {
    type Item = Vec<Vec<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        // Family streams are unbounded, so each axis always yields the
        // next degree.
        for axis in &mut self.axes {
            let values = axis.generator.next()?;
            axis.degrees.push(values);
        }

        let level = self.level;
        self.level += 1;

        let mut out = Vec::new();
        let mut index = vec![0usize; self.axes.len()];
        emit_level(&self.axes, level, 0, &mut index, &mut out);
        Some(out)
    }
}

/// Enumerate all degree splits of `remaining` over the axes from `dim` on,
/// leading-axis degree descending, multiplying out each completed split.
fn emit_level<T: Scalar>(
    axes: &[AxisValues<T>],
    remaining: usize,
    dim: usize,
    index: &mut Vec<usize>,
    out: &mut Vec<Vec<T>>,
) {
    if dim + 1 == axes.len() {
        index[dim] = remaining;
        let mut product = axes[0].degrees[index[0]].clone();
        for (j, axis) in axes.iter().enumerate().skip(1) {
            for (value, factor) in product.iter_mut().zip(&axis.degrees[index[j]]) {
                *value = value.clone() * factor.clone();
            }
        }
        out.push(product);
        return;
    }
    for degree in (0..=remaining).rev() {
        index[dim] = degree;
        emit_level(axes, remaining - degree, dim + 1, index, out);
    }
}

/// Materialize the product levels for total degrees 0..=n.
pub fn product_tree<T: Scalar>(
    n: usize,
    axes: &[Vec<T>],
    family: &Family<T>,
    standardization: Standardization,
) -> Result<Vec<Vec<Vec<T>>>, ProductError> {
    let values = ProductValues::new(family, standardization, axes)?;
    Ok(values.take(n + 1).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_sizes_two_axes() {
        let axes = vec![vec![0.1, 0.2], vec![0.3, 0.4]];
        let levels =
            product_tree(4, &axes, &Family::legendre(), Standardization::Normal).unwrap();
        for (m, level) in levels.iter().enumerate() {
            assert_eq!(level.len(), m + 1, "level {} size", m);
            for entry in level {
                assert_eq!(entry.len(), 2);
            }
        }
    }

    #[test]
    fn test_single_axis_reduces_to_line() {
        let points = vec![-0.5, 0.0, 0.5];
        let axes = vec![points.clone()];
        let levels =
            product_tree(5, &axes, &Family::legendre(), Standardization::Normal).unwrap();
        let line = super::super::line::tree(
            5,
            &points,
            &Family::legendre(),
            Standardization::Normal,
        )
        .unwrap();
        for (m, level) in levels.iter().enumerate() {
            assert_eq!(level.len(), 1);
            for (got, want) in level[0].iter().zip(&line[m]) {
                assert!((got - want).abs() < 1e-14);
            }
        }
    }

    #[test]
    fn test_mismatched_axes_rejected() {
        let axes = vec![vec![0.0, 1.0], vec![0.0]];
        let result = ProductValues::new(&Family::legendre(), Standardization::Normal, &axes);
        assert!(matches!(result, Err(ProductError::Shape(_))));

        let empty: Vec<Vec<f64>> = Vec::new();
        let result = ProductValues::new(&Family::legendre(), Standardization::Normal, &empty);
        assert!(matches!(
            result,
            Err(ProductError::Shape(ShapeError::NoAxes))
        ));
    }

    #[test]
    fn test_deterministic_order() {
        // Level 2 in two axes: degrees (2,0), (1,1), (0,2).
        let axes = vec![vec![0.3], vec![0.7]];
        let levels =
            product_tree(2, &axes, &Family::legendre(), Standardization::Normal).unwrap();
        let x = super::super::line::tree(
            2,
            &axes[0],
            &Family::legendre(),
            Standardization::Normal,
        )
        .unwrap();
        let y = super::super::line::tree(
            2,
            &axes[1],
            &Family::legendre(),
            Standardization::Normal,
        )
        .unwrap();
        let expected = [
            x[2][0] * y[0][0],
            x[1][0] * y[1][0],
            x[0][0] * y[2][0],
        ];
        for (got, want) in levels[2].iter().zip(expected) {
            assert!((got[0] - want).abs() < 1e-14);
        }
    }
}
