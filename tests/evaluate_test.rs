//! Evaluation tests: value trees, Clenshaw summation, and tensor products
//! checked against closed forms and against each other.

use ortho_rs::{
    clenshaw, clenshaw_scalar, coefficients, product_tree, tree, Family, PolynomialValues,
    ProductError, Rat, Scalar, ShapeError, Standardization,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn rat(numer: i64, denom: i64) -> Rat {
    <Rat as Scalar>::from_ratio(numer, denom)
}

#[test]
fn legendre_monic_exact_values() {
    let family = Family::<Rat>::legendre();
    let points = [rat(1, 1), rat(1, 2), rat(2, 1)];
    let values = tree(5, &points, &family, Standardization::Monic).unwrap();

    // Monic P_5(x) = x⁵ − 10x³/9 + 5x/21
    assert_eq!(values[5][0], rat(8, 63));
    assert_eq!(values[5][1], rat(23, 2016));
    assert_eq!(values[5][2], rat(1486, 63));
}

#[test]
fn laguerre_closed_form() {
    // L_2(x) = (x² − 4x + 2) / 2
    let family = Family::laguerre(0.0);
    let points = [0.0, 1.0, 5.0];
    let values = tree(2, &points, &family, Standardization::Monic).unwrap();
    for (value, &x) in values[2].iter().zip(&points) {
        assert!((value - (x * x - 4.0 * x + 2.0) / 2.0).abs() < 1e-14);
    }
}

#[test]
fn chebyshev_unit_at_one_exact_values() {
    // p(1) = C(n + alpha, n) scaling with alpha = -1/2:
    //   p1 = x/2, p2 = 3x²/4 − 3/8, p3 = 5x³/4 − 15x/16,
    //   p4 = 35x⁴/16 − 35x²/16 + 35/128.
    let family = Family::<Rat>::chebyshev1();
    let x = rat(1, 3);
    let values = tree(4, &[x], &family, Standardization::UnitAtOne).unwrap();

    assert_eq!(values[0][0], rat(1, 1));
    assert_eq!(values[1][0], rat(1, 6));
    assert_eq!(values[2][0], rat(3, 36) - rat(3, 8));
    assert_eq!(values[3][0], rat(5, 108) - rat(15, 48));
    assert_eq!(
        values[4][0],
        rat(35, 1296) - rat(35, 144) + rat(35, 128)
    );
}

#[test]
fn unit_at_one_is_rescaled_monic() {
    // The UnitAtOne leading coefficient is the running product of its own
    // a-coefficients, so the two standardizations must agree after
    // rescaling. Exact arithmetic makes the check sharp.
    let family = Family::jacobi(rat(1, 2), rat(5, 2));
    let points = [rat(-1, 3), rat(7, 10)];
    let monic = tree(6, &points, &family, Standardization::Monic).unwrap();
    let unit = tree(6, &points, &family, Standardization::UnitAtOne).unwrap();
    let rc = coefficients(6, &family, Standardization::UnitAtOne).unwrap();

    let mut leading = rat(1, 1);
    for n in 0..=6 {
        for (m, u) in monic[n].iter().zip(&unit[n]) {
            assert_eq!(u, &(m.clone() * leading.clone()));
        }
        if n < 6 {
            leading = leading * rc.a[n].clone();
        }
    }
}

#[test]
fn tree_matches_lazy_generator() {
    let family = Family::gegenbauer(1.5);
    let points = [-0.9, -0.2, 0.4, 0.8];
    let eager = tree(7, &points, &family, Standardization::Normal).unwrap();

    let lazy = PolynomialValues::from_family(&family, Standardization::Normal, &points).unwrap();
    let collected: Vec<Vec<f64>> = lazy.take(8).collect();
    assert_eq!(eager.len(), collected.len());
    for (row_eager, row_lazy) in eager.iter().zip(&collected) {
        for (a, b) in row_eager.iter().zip(row_lazy) {
            assert!((a - b).abs() < 1e-14);
        }
    }
}

#[test]
fn clenshaw_matches_direct_sum() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 8;
    let points: Vec<f64> = (0..16).map(|_| rng.gen_range(-1.0..1.0)).collect();

    let cases = [
        (Family::legendre(), Standardization::Monic),
        (Family::chebyshev1(), Standardization::UnitAtOne),
        (Family::jacobi(0.5, 1.5), Standardization::Normal),
    ];
    for (family, standardization) in cases {
        let weights: Vec<f64> = (0..=n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let rc = coefficients(n, &family, standardization).unwrap();
        let sums = clenshaw(&points, &weights, &rc).unwrap();

        let values = tree(n, &points, &family, standardization).unwrap();
        for (i, sum) in sums.iter().enumerate() {
            let direct: f64 = weights
                .iter()
                .zip(&values)
                .map(|(w, row)| w * row[i])
                .sum();
            assert!((sum - direct).abs() < 1e-14);
        }
    }
}

#[test]
fn clenshaw_all_ones_at_one() {
    // At x = 1 an all-ones expansion just sums the polynomial values.
    let n = 6;
    let family = Family::<f64>::legendre();
    let rc = coefficients(n, &family, Standardization::Monic).unwrap();
    let weights = vec![1.0; n + 1];
    let sum = clenshaw_scalar(&1.0, &weights, &rc).unwrap();

    let values = tree(n, &[1.0], &family, Standardization::Monic).unwrap();
    let direct: f64 = values.iter().map(|row| row[0]).sum();
    assert!((sum - direct).abs() < 1e-14);
}

#[test]
fn clenshaw_exact() {
    let family = Family::<Rat>::legendre();
    let rc = coefficients(4, &family, Standardization::Monic).unwrap();
    let weights = [rat(1, 1), rat(-1, 2), rat(1, 3), rat(0, 1), rat(2, 7)];
    let x = rat(3, 5);
    let sum = clenshaw_scalar(&x, &weights, &rc).unwrap();

    let values = tree(4, &[x], &family, Standardization::Monic).unwrap();
    let mut direct = rat(0, 1);
    for (w, row) in weights.iter().zip(&values) {
        direct = direct + w.clone() * row[0].clone();
    }
    assert_eq!(sum, direct);
}

#[test]
fn clenshaw_weight_count_checked() {
    let rc = coefficients(3, &Family::<f64>::legendre(), Standardization::Monic).unwrap();
    let result = clenshaw(&[0.0], &[1.0, 2.0], &rc);
    assert_eq!(
        result,
        Err(ShapeError::WeightCount {
            expected: 4,
            actual: 2,
        })
    );
}

#[test]
fn product_matches_explicit_one_dimensional_products() {
    let family = Family::<f64>::legendre();
    let axes = [vec![-0.5, 0.1, 0.9], vec![0.3, -0.7, 0.6]];
    let levels = product_tree(3, &axes, &family, Standardization::Normal).unwrap();

    let x_tree = tree(3, &axes[0], &family, Standardization::Normal).unwrap();
    let y_tree = tree(3, &axes[1], &family, Standardization::Normal).unwrap();

    for (m, level) in levels.iter().enumerate() {
        assert_eq!(level.len(), m + 1);
        // Leading-axis degree runs from m down to 0 within a level.
        for (slot, row) in level.iter().enumerate() {
            let (i, j) = (m - slot, slot);
            for (k, value) in row.iter().enumerate() {
                let expected = x_tree[i][k] * y_tree[j][k];
                assert!((value - expected).abs() < 1e-14);
            }
        }
    }
}

#[test]
fn product_level_sizes_in_three_dimensions() {
    let family = Family::<f64>::legendre();
    let axes = [vec![0.1, 0.2], vec![0.3, 0.4], vec![0.5, 0.6]];
    let levels = product_tree(4, &axes, &family, Standardization::Monic).unwrap();

    // Level m holds C(m + 2, 2) combinations.
    let expected = [1, 3, 6, 10, 15];
    assert_eq!(levels.len(), expected.len());
    for (level, want) in levels.iter().zip(expected) {
        assert_eq!(level.len(), want);
    }
}

#[test]
fn product_propagates_configuration_errors() {
    let family = Family::<Rat>::legendre();
    let axes = [vec![rat(0, 1)], vec![rat(1, 2)]];
    let result = product_tree(2, &axes, &family, Standardization::Normal);
    assert!(matches!(result, Err(ProductError::Config(_))));

    let family = Family::<f64>::legendre();
    let result = product_tree(2, &[], &family, Standardization::Monic);
    assert!(matches!(
        result,
        Err(ProductError::Shape(ShapeError::NoAxes))
    ));
}
