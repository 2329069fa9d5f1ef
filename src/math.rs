//! Small numeric helpers.

/// Binomial coefficient `n choose k`, computed exactly at compile time.
///
/// Returns 0 when `k > n`.
///
/// ```
/// assert_eq!(u_qap::math::choose(20, 2), 190);
/// assert_eq!(u_qap::math::choose(5, 0), 1);
/// ```
pub const fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut result = 1;
    let mut i = 1;
    while i <= k {
        // result * (n + 1 - i) is always divisible by i here
        result = result * (n + 1 - i) / i;
        i += 1;
    }
    result
}
