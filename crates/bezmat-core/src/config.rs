//! Evaluation settings shared by the coefficient cache and the evaluators.

/// Highest degree for which every coefficient matrix entry, and every
/// partial sum of a column's absolute values, stays below 2^53. Products
/// with the power basis at `t = 0` and `t = 1` are then exact in `f64`
/// regardless of summation order.
pub const MAX_DEGREE: usize = 35;

/// Degrees generated eagerly when a cache is created.
pub const DEFAULT_PRECOMPUTED_DEGREE: usize = 31;

/// What the rational evaluators do when a homogeneous divisor is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum DegenerateWeightPolicy {
    /// Fail with `BezmatError::DegenerateWeight`.
    #[default]
    Error,
    /// Divide anyway and let IEEE infinities/NaNs through.
    Propagate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EvalConfig {
    /// Degrees `0..=precomputed_degree` are generated when the cache is built.
    pub precomputed_degree: usize,
    /// Generate degrees above the precomputed range (up to `MAX_DEGREE`) on first use.
    pub extend_on_demand: bool,
    pub degenerate_weights: DegenerateWeightPolicy,
}

impl EvalConfig {
    pub fn new(
        precomputed_degree: usize,
        extend_on_demand: bool,
        degenerate_weights: DegenerateWeightPolicy,
    ) -> Self {
        Self {
            precomputed_degree: precomputed_degree.min(MAX_DEGREE),
            extend_on_demand,
            degenerate_weights,
        }
    }

    /// Precompute 0..=31 and extend lazily, erroring on degenerate weights.
    pub fn default_settings() -> Self {
        Self {
            precomputed_degree: DEFAULT_PRECOMPUTED_DEGREE,
            extend_on_demand: true,
            degenerate_weights: DegenerateWeightPolicy::Error,
        }
    }

    /// Only the precomputed range is served; everything else is unsupported.
    pub fn fixed_range(precomputed_degree: usize) -> Self {
        Self::new(precomputed_degree, false, DegenerateWeightPolicy::Error)
    }

    /// Nothing precomputed; every matrix is built on first request.
    pub fn lazy() -> Self {
        Self {
            precomputed_degree: 0,
            extend_on_demand: true,
            degenerate_weights: DegenerateWeightPolicy::Error,
        }
    }

    pub fn with_degenerate_weights(mut self, policy: DegenerateWeightPolicy) -> Self {
        self.degenerate_weights = policy;
        self
    }

    /// Highest degree this configuration will ever serve.
    pub fn max_degree(self) -> usize {
        if self.extend_on_demand {
            MAX_DEGREE
        } else {
            self.precomputed_degree.min(MAX_DEGREE)
        }
    }

    pub fn supports(self, degree: usize) -> bool {
        degree <= self.max_degree()
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::default_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let config = EvalConfig::default();
        assert_eq!(config.precomputed_degree, 31);
        assert!(config.supports(35));
        assert!(!config.supports(36));
    }

    #[test]
    fn test_fixed_range() {
        let config = EvalConfig::fixed_range(31);
        assert!(config.supports(31));
        assert!(!config.supports(32));
        assert_eq!(EvalConfig::fixed_range(100).max_degree(), MAX_DEGREE);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "precomputed_degree": 8,
            "extend_on_demand": false,
            "degenerate_weights": "Propagate"
        }"#;
        let config: EvalConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_degree(), 8);
        assert_eq!(config.degenerate_weights, DegenerateWeightPolicy::Propagate);
    }
}
