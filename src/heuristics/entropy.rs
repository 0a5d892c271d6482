//! Entropy estimator - approximate unpredictability in bits.

use super::charset_size;

/// Approximates password entropy as `length * log2(charset_size)`.
///
/// This assumes uniform random selection from the estimated alphabet, so
/// it is a coarse upper bound rather than true information content.
/// Returns 0.0 for empty input.
pub fn entropy_bits(password: &str) -> f64 {
    let length = password.chars().count();
    length as f64 * f64::from(charset_size(password)).log2()
}
