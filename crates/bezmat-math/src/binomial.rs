/// Binomial coefficient `C(n, k)`, zero when `k > n`.
///
/// Uses the multiplicative form so intermediate values stay small; exact for
/// every `n` this crate works with.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1)
        result = result * (n - i) as u64 / (i + 1) as u64;
    }
    result
}

/// Falling factorial `n * (n - 1) * ... * (n - r + 1)`; `1.0` when `r == 0`.
pub fn falling_factorial(n: usize, r: usize) -> f64 {
    (0..r).map(|i| n.saturating_sub(i) as f64).product()
}
