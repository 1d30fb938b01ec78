use approx::assert_relative_eq;
use bezmat_core::traits::Shape;
use bezmat_core::{BezmatError, MAX_DEGREE};
use bezmat_geometry::{
    curve_derivative, curve_eval, curve_first_derivative, evaluate_curve, rational_curve_eval,
    rational_surface_eval, surface_eval,
};
use bezmat_math::{PointArray, PointGrid, WeightArray, WeightGrid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_points(rng: &mut StdRng, count: usize, dim: usize) -> PointArray {
    let rows: Vec<Vec<f64>> = (0..count)
        .map(|_| (0..dim).map(|_| rng.gen_range(-5.0..5.0)).collect())
        .collect();
    PointArray::from_rows(&rows).unwrap()
}

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, dim: usize) -> PointGrid {
    let nested: Vec<Vec<Vec<f64>>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| (0..dim).map(|_| rng.gen_range(-5.0..5.0)).collect())
                .collect()
        })
        .collect();
    PointGrid::from_nested(&nested).unwrap()
}

/// Reference evaluation by repeated linear interpolation.
fn de_casteljau(points: &[Vec<f64>], t: f64) -> Vec<f64> {
    let mut work = points.to_vec();
    for level in 1..points.len() {
        for i in 0..points.len() - level {
            for k in 0..work[i].len() {
                work[i][k] = (1.0 - t) * work[i][k] + t * work[i + 1][k];
            }
        }
    }
    work[0].clone()
}

fn assert_rows_close(actual: &PointArray, expected: &[Vec<f64>], epsilon: f64) {
    assert_eq!(actual.len(), expected.len());
    for (s, row) in expected.iter().enumerate() {
        for (a, e) in actual.point(s).iter().zip(row) {
            assert_relative_eq!(*a, *e, epsilon = epsilon, max_relative = epsilon);
        }
    }
}

#[test]
fn test_matches_de_casteljau() {
    let mut rng = StdRng::seed_from_u64(7);
    for degree in 0..=10 {
        let points = random_points(&mut rng, degree + 1, 3);
        let result = curve_eval(&points, 150).unwrap();
        let rows = points.to_rows();
        let expected: Vec<Vec<f64>> = (0..150)
            .map(|s| de_casteljau(&rows, s as f64 / 149.0))
            .collect();
        assert_rows_close(&result, &expected, 1e-9);
    }
}

#[test]
fn test_endpoints_interpolate_for_every_degree() {
    let mut rng = StdRng::seed_from_u64(11);
    for degree in 0..=MAX_DEGREE {
        let points = random_points(&mut rng, degree + 1, 2);
        let result = curve_eval(&points, 2).unwrap();
        assert_eq!(result.point(0), points.point(0), "degree {}", degree);
        assert_eq!(result.point(1), points.point(degree), "degree {}", degree);
    }
}

#[test]
fn test_first_derivative_matches_central_difference() {
    let mut rng = StdRng::seed_from_u64(3);
    let rows: Vec<Vec<f64>> = (0..6)
        .map(|_| (0..2).map(|_| rng.gen_range(0.0..1.0)).collect())
        .collect();
    let points = PointArray::from_rows(&rows).unwrap();

    let nt = 2001;
    let h = 1.0 / (nt - 1) as f64;
    let curve = curve_eval(&points, nt).unwrap();
    let derivative = curve_first_derivative(&points, nt).unwrap();

    for s in 1..nt - 1 {
        let ahead = curve.point(s + 1);
        let behind = curve.point(s - 1);
        let exact = derivative.point(s);
        for k in 0..2 {
            let approx = (ahead[k] - behind[k]) / (2.0 * h);
            assert!(
                (approx - exact[k]).abs() <= 1e-4 * exact[k].abs().max(1.0),
                "sample {} coordinate {}: {} vs {}",
                s,
                k,
                approx,
                exact[k]
            );
        }
    }
}

#[test]
fn test_second_derivative_matches_difference_of_first() {
    let mut rng = StdRng::seed_from_u64(5);
    let points = random_points(&mut rng, 5, 3);
    let params: Vec<f64> = (1..20).map(|i| i as f64 / 20.0).collect();
    let h = 1e-5;
    let second = evaluate_curve(&points, &params, 2).unwrap();
    let ahead: Vec<f64> = params.iter().map(|t| t + h).collect();
    let behind: Vec<f64> = params.iter().map(|t| t - h).collect();
    let d_ahead = evaluate_curve(&points, &ahead, 1).unwrap();
    let d_behind = evaluate_curve(&points, &behind, 1).unwrap();
    for s in 0..params.len() {
        for k in 0..3 {
            let approx = (d_ahead.as_matrix()[(s, k)] - d_behind.as_matrix()[(s, k)]) / (2.0 * h);
            let exact = second.as_matrix()[(s, k)];
            assert!((approx - exact).abs() <= 1e-4 * exact.abs().max(1.0));
        }
    }
}

#[test]
fn test_derivative_vanishes_at_and_above_degree() {
    let mut rng = StdRng::seed_from_u64(13);
    for degree in 1..8 {
        let points = random_points(&mut rng, degree + 1, 3);
        for order in degree..degree + 3 {
            for nt in [1, 2, 17] {
                let d = curve_derivative(&points, nt, order).unwrap();
                assert_eq!(d.shape(), vec![nt, 3]);
                assert!(d.is_zero());
            }
        }
        let below = curve_derivative(&points, 17, degree - 1).unwrap();
        assert!(!below.is_zero());
    }
}

#[test]
fn test_surface_is_separable() {
    // Evaluating every u-row as a curve in v, then every resulting column as
    // a curve in u, must reproduce the surface.
    let mut rng = StdRng::seed_from_u64(17);
    let grid = random_grid(&mut rng, 4, 6, 3);
    let (nu, nv) = (7, 9);
    let surface = surface_eval(&grid, nu, nv).unwrap();
    assert_eq!(surface.shape(), vec![nu, nv, 3]);

    let along_v: Vec<PointArray> = grid
        .layers()
        .iter()
        .map(|layer| curve_eval(&PointArray::from_matrix(layer.clone()).unwrap(), nv).unwrap())
        .collect();
    for j in 0..nv {
        let column: Vec<Vec<f64>> = along_v.iter().map(|c| c.point(j)).collect();
        let column = curve_eval(&PointArray::from_rows(&column).unwrap(), nu).unwrap();
        for i in 0..nu {
            for (a, b) in surface.point(i, j).iter().zip(column.point(i)) {
                assert_relative_eq!(*a, b, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_surface_single_sample_is_first_corner() {
    let mut rng = StdRng::seed_from_u64(19);
    let grid = random_grid(&mut rng, 5, 3, 3);
    let surface = surface_eval(&grid, 1, 1).unwrap();
    assert_eq!(surface.point(0, 0), grid.point(0, 0));
}

#[test]
fn test_rational_unit_weights_round_trip() {
    let mut rng = StdRng::seed_from_u64(23);
    for degree in 0..=9 {
        let points = random_points(&mut rng, degree + 1, 3);
        let rational = rational_curve_eval(&points, &WeightArray::uniform(degree + 1), 150).unwrap();
        let polynomial = curve_eval(&points, 150).unwrap();
        assert_rows_close(&rational, &polynomial.to_rows(), 1e-9);

        let grid = random_grid(&mut rng, degree + 1, 3, 3);
        let rational =
            rational_surface_eval(&grid, &WeightGrid::uniform(degree + 1, 3), 20, 10).unwrap();
        let polynomial = surface_eval(&grid, 20, 10).unwrap();
        for (a, b) in rational
            .to_nested()
            .iter()
            .flatten()
            .flatten()
            .zip(polynomial.to_nested().iter().flatten().flatten())
        {
            assert_relative_eq!(*a, *b, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_rational_curve_is_weighted_average() {
    // C(t) = sum(w_i B_i p_i) / sum(w_i B_i), checked directly.
    let mut rng = StdRng::seed_from_u64(29);
    let points = random_points(&mut rng, 10, 3);
    let weights: Vec<f64> = (0..10).map(|_| rng.gen_range(0.01..10.0)).collect();
    let result = rational_curve_eval(&points, &WeightArray::new(weights.clone()), 150).unwrap();

    let rows = points.to_rows();
    for s in 0..150 {
        let t = s as f64 / 149.0;
        let lifted: Vec<Vec<f64>> = rows
            .iter()
            .zip(&weights)
            .map(|(p, &w)| {
                let mut q: Vec<f64> = p.iter().map(|c| c * w).collect();
                q.push(w);
                q
            })
            .collect();
        let h = de_casteljau(&lifted, t);
        for k in 0..3 {
            assert_relative_eq!(
                result.as_matrix()[(s, k)],
                h[k] / h[3],
                epsilon = 1e-9,
                max_relative = 1e-9
            );
        }
    }
}

#[test]
fn test_reference_scenario() {
    let points = PointArray::from_rows(&[
        vec![0.0, 0.0],
        vec![0.3, 0.5],
        vec![0.7, -0.4],
        vec![1.0, 0.0],
    ])
    .unwrap();
    let result = curve_eval(&points, 150).unwrap();
    assert_eq!(result.shape(), vec![150, 2]);
    assert_eq!(result.point(0), vec![0.0, 0.0]);
    assert_eq!(result.point(149), vec![1.0, 0.0]);

    let rational = rational_curve_eval(&points, &WeightArray::new(vec![1.0; 4]), 150).unwrap();
    assert_rows_close(&rational, &result.to_rows(), 1e-12);

    assert!(!curve_derivative(&points, 150, 2).unwrap().is_zero());
    assert!(curve_derivative(&points, 150, 3).unwrap().is_zero());
}

#[test]
fn test_errors_leave_no_partial_results() {
    let ragged = PointArray::from_rows(&[vec![0.0, 0.0], vec![1.0]]);
    assert!(matches!(ragged, Err(BezmatError::InvalidShape(_))));

    let too_high = PointArray::zeros(MAX_DEGREE + 2, 2);
    let err = curve_eval(&too_high, 10).unwrap_err();
    assert!(matches!(err, BezmatError::UnsupportedDegree { degree, .. } if degree == MAX_DEGREE + 1));
}
