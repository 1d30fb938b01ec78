//! Bernstein-to-power-basis coefficient matrices.

use bezmat_core::{BezmatError, Result, MAX_DEGREE};
use bezmat_math::binomial::binomial;
use nalgebra::DMatrix;

/// The `(n + 1) x (n + 1)` matrix `M(n)` mapping the power basis
/// `[t^n, t^(n-1), ..., 1]` to the degree-`n` Bernstein basis.
///
/// Column `i` holds the power-basis coefficients of `B_{i,n}(t)`; row `k`
/// corresponds to `t^(n - k)`. Entries are exact integers, kept both as
/// `i64` and as an `f64` matrix for multiplication.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientMatrix {
    degree: usize,
    exact: Vec<i64>,
    matrix: DMatrix<f64>,
}

impl CoefficientMatrix {
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn size(&self) -> usize {
        self.degree + 1
    }

    /// Exact entry `M[k, i]`.
    pub fn entry(&self, k: usize, i: usize) -> i64 {
        self.exact[k * self.size() + i]
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn to_integer_rows(&self) -> Vec<Vec<i64>> {
        self.exact.chunks(self.size()).map(<[i64]>::to_vec).collect()
    }
}

/// `M(n)[k, i] = (-1)^(n-k-i) * C(n, i) * C(n-i, n-k-i)`, or zero when
/// `n - k - i < 0`. Masked cells return before any parity is taken, so a
/// negative power is never formed.
fn entry(degree: usize, k: usize, i: usize) -> i64 {
    let diff = degree as i64 - k as i64 - i as i64;
    if diff < 0 {
        return 0;
    }
    let safe_diff = diff as usize;
    let sign = if safe_diff % 2 == 0 { 1 } else { -1 };
    sign * binomial(degree, i) as i64 * binomial(degree - i, safe_diff) as i64
}

/// Build `M(degree)`; the caller guarantees `degree <= MAX_DEGREE`.
pub(crate) fn build(degree: usize) -> CoefficientMatrix {
    let size = degree + 1;
    let exact: Vec<i64> = (0..size)
        .flat_map(|k| (0..size).map(move |i| entry(degree, k, i)))
        .collect();
    let matrix = DMatrix::from_fn(size, size, |k, i| exact[k * size + i] as f64);
    CoefficientMatrix {
        degree,
        exact,
        matrix,
    }
}

/// Generate `M(degree)` without touching any cache.
///
/// Degrees above `MAX_DEGREE` have entries that are not exactly
/// representable in `f64` and fail with `UnsupportedDegree`.
pub fn generate(degree: usize) -> Result<CoefficientMatrix> {
    if degree > MAX_DEGREE {
        return Err(BezmatError::UnsupportedDegree {
            degree,
            max: MAX_DEGREE,
        });
    }
    Ok(build(degree))
}
