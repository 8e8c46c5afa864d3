// =============================================================================
// Snedecor's F Distribution
// =============================================================================
//
// The F distribution is the null distribution of the ratio of two sample
// variances, and the workhorse behind equal-variance screening. Provided
// here:
//
//   - variance_ratio_test: the F statistic and degrees of freedom for two
//     sample summaries
//   - pdf / cdf / pvalue: the distribution itself, through the regularized
//     incomplete beta function
//
// The F test is inherently one-tailed upper: the statistic is formed with
// the larger variance in the numerator, so only the right tail ever carries
// evidence.
//
// Parameter conventions follow the rest of the crate: nonsense degrees of
// freedom (<= 0) produce NaN, x outside the support produces the support
// value (0 density, 0 cumulative mass below zero).
//
// =============================================================================

use crate::distribution::{FTest, SampleSummary};
use crate::special::beta::{beta_reg, ln_beta};

/// F test of the ratio of two sample variances.
///
/// The sample with the larger variance becomes the numerator so the
/// statistic is always >= 1 (on a tie, the first sample wins); `df1` and
/// `df2` track whichever samples end up as numerator and denominator, with
/// `n - 1` degrees of freedom each. The sample means are not consulted.
///
/// # Arguments
/// * `a`, `b` - Sample summaries (variance and n used)
///
/// # Returns
/// `FTest { f, df1, df2 }` with f >= 1.
pub fn variance_ratio_test(a: &SampleSummary, b: &SampleSummary) -> FTest {
    let (num, den) = if a.variance >= b.variance { (a, b) } else { (b, a) };
    FTest {
        f: num.variance / den.variance,
        df1: num.n as f64 - 1.0,
        df2: den.n as f64 - 1.0,
    }
}

/// F density at x with d1 and d2 degrees of freedom.
///
/// Evaluated in log space so large degrees of freedom cannot overflow the
/// intermediate powers. Zero for x <= 0; NaN for non-positive degrees of
/// freedom.
pub fn pdf(x: f64, d1: f64, d2: f64) -> f64 {
    if d1 <= 0.0 || d2 <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    let ln_kernel =
        0.5 * (d1 * (d1 * x).ln() + d2 * d2.ln() - (d1 + d2) * (d1 * x + d2).ln());
    (ln_kernel - x.ln() - ln_beta(0.5 * d1, 0.5 * d2)).exp()
}

/// F cumulative distribution at x: `I_z(d1/2, d2/2)` with
/// `z = d1 x / (d1 x + d2)`.
pub fn cdf(x: f64, d1: f64, d2: f64) -> f64 {
    if d1 <= 0.0 || d2 <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    let z = d1 * x / (d1 * x + d2);
    match beta_reg(0.5 * d1, 0.5 * d2, z) {
        Ok(p) => p,
        Err(_) => f64::NAN,
    }
}

/// Upper-tail probability of the F statistic: `1 - cdf(x, d1, d2)`.
pub fn pvalue(x: f64, d1: f64, d2: f64) -> f64 {
    1.0 - cdf(x, d1, d2)
}
