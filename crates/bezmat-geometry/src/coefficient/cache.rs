//! Process-wide memoization of coefficient matrices.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use bezmat_core::{BezmatError, EvalConfig, Result, MAX_DEGREE};

use super::generator::{build, CoefficientMatrix};

static GLOBAL: OnceLock<CoefficientCache> = OnceLock::new();

/// Memoizing lookup of `M(n)` keyed by degree.
///
/// Each degree owns a `OnceLock` slot, so concurrent first use computes a
/// matrix at most once and published matrices are never mutated. Reads
/// after publication take no lock.
#[derive(Debug)]
pub struct CoefficientCache {
    config: EvalConfig,
    slots: Vec<OnceLock<Arc<CoefficientMatrix>>>,
    generated: AtomicUsize,
}

impl CoefficientCache {
    /// Create a cache and eagerly fill `0..=config.precomputed_degree`.
    pub fn new(config: EvalConfig) -> Self {
        let cache = Self {
            config,
            slots: (0..=MAX_DEGREE).map(|_| OnceLock::new()).collect(),
            generated: AtomicUsize::new(0),
        };
        cache.warm_up(config.precomputed_degree);
        cache
    }

    /// The shared cache, created with the default config on first use.
    pub fn global() -> &'static CoefficientCache {
        GLOBAL.get_or_init(|| {
            log::debug!("initializing global coefficient cache");
            Self::new(EvalConfig::default())
        })
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Fill every slot up to `max_degree` (clamped to `MAX_DEGREE`).
    pub fn warm_up(&self, max_degree: usize) {
        for degree in 0..=max_degree.min(MAX_DEGREE) {
            self.slot(degree);
        }
    }

    /// Fetch `M(degree)`, generating it on first request.
    ///
    /// Fails with `UnsupportedDegree` above `config.max_degree()`: beyond
    /// `MAX_DEGREE` always, and above the precomputed range when on-demand
    /// extension is disabled.
    pub fn get(&self, degree: usize) -> Result<Arc<CoefficientMatrix>> {
        if !self.config.supports(degree) {
            return Err(BezmatError::UnsupportedDegree {
                degree,
                max: self.config.max_degree(),
            });
        }
        Ok(Arc::clone(self.slot(degree)))
    }

    pub fn is_cached(&self, degree: usize) -> bool {
        self.slots.get(degree).is_some_and(|s| s.get().is_some())
    }

    pub fn cached_degrees(&self) -> Vec<usize> {
        (0..self.slots.len()).filter(|&d| self.is_cached(d)).collect()
    }

    /// Number of matrices this cache has computed so far.
    pub fn generated_count(&self) -> usize {
        self.generated.load(Ordering::Acquire)
    }

    fn slot(&self, degree: usize) -> &Arc<CoefficientMatrix> {
        self.slots[degree].get_or_init(|| {
            log::debug!("generating coefficient matrix for degree {}", degree);
            self.generated.fetch_add(1, Ordering::AcqRel);
            Arc::new(build(degree))
        })
    }
}

impl Default for CoefficientCache {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}
