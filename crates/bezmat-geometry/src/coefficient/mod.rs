//! Coefficient matrix generation and caching.

mod cache;
mod generator;

use bezmat_core::Result;
use bezmat_math::power::power_matrix;
use nalgebra::DMatrix;

pub use cache::CoefficientCache;
pub use generator::{generate, CoefficientMatrix};

/// Bernstein basis values on the parameters `t`: `P^T * M(degree)`, shape
/// `t.len() x (degree + 1)`. Entry `(s, i)` is `B_{i,degree}(t[s])`.
pub fn bernstein_basis(cache: &CoefficientCache, degree: usize, t: &[f64]) -> Result<DMatrix<f64>> {
    let m = cache.get(degree)?;
    Ok(power_matrix(degree, t).tr_mul(m.as_matrix()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bezmat_math::binomial::binomial;

    #[test]
    fn test_bernstein_basis_matches_closed_form() {
        let cache = CoefficientCache::default();
        let t = [0.0, 0.2, 0.5, 0.9, 1.0];
        for degree in 0..8 {
            let basis = bernstein_basis(&cache, degree, &t).unwrap();
            assert_eq!(basis.shape(), (t.len(), degree + 1));
            for (s, &ts) in t.iter().enumerate() {
                for i in 0..=degree {
                    let expected = binomial(degree, i) as f64
                        * ts.powi(i as i32)
                        * (1.0 - ts).powi((degree - i) as i32);
                    assert_relative_eq!(basis[(s, i)], expected, epsilon = 1e-12);
                }
            }
        }
    }
}
