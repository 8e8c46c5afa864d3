// =============================================================================
// Probability Distributions
// =============================================================================
//
// The two distributions classical two-sample testing runs on:
//
//   - fisher:  Snedecor's F distribution and the variance-ratio test
//   - student: Student's T distribution, pooled/Welch statistics, p-values
//
// Both are thin compositions over the special-function core (`beta_reg`,
// `ln_beta`); neither calls the other's distribution functions. The shared
// input type is `SampleSummary`, the (mean, variance, n) triple a sample
// reduces to for these tests, built by hand from published summary data or
// from a raw sample via `SampleSummary::from_sample`.
//
// =============================================================================

use ndarray::Array1;

use crate::descriptive;
use crate::error::{FerristatsError, Result};

pub mod fisher;
pub mod student;

/// Moments of one sample, as consumed by the two-sample F and T routines.
///
/// `variance` is the *unbiased* sample variance (n-1 denominator), the
/// convention published summary statistics use and the one the pooled and
/// Welch formulas expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub mean: f64,
    pub variance: f64,
    pub n: usize,
}

impl SampleSummary {
    pub fn new(mean: f64, variance: f64, n: usize) -> Self {
        SampleSummary { mean, variance, n }
    }

    /// Reduce a raw sample to its testing moments.
    ///
    /// `descriptive::variance` is the population variance (n denominator);
    /// this rescales it by n/(n-1) to the unbiased form the test routines
    /// expect, which is why at least two observations are required.
    pub fn from_sample(x: &Array1<f64>) -> Result<Self> {
        if x.len() < 2 {
            return Err(FerristatsError::InvalidArgument(
                "at least two observations are required".to_string(),
            ));
        }
        let n = x.len();
        Ok(SampleSummary {
            mean: descriptive::mean(x)?,
            variance: descriptive::variance(x)? * n as f64 / (n as f64 - 1.0),
            n,
        })
    }
}

/// Outcome of the F variance-ratio test.
///
/// `f` is the ratio of the larger sample variance to the smaller (so always
/// >= 1), and `df1`/`df2` are the degrees of freedom of the numerator and
/// denominator samples respectively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FTest {
    pub f: f64,
    pub df1: f64,
    pub df2: f64,
}

/// A T statistic with its degrees of freedom.
///
/// `df` is an integer-valued float for the pooled test and generally
/// fractional for Welch's test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTest {
    pub t: f64,
    pub df: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_from_sample_moments() {
        let x = array![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let s = SampleSummary::from_sample(&x).unwrap();
        assert_abs_diff_eq!(s.mean, 5.0, epsilon = 1e-12);
        // population variance 4, rescaled by 8/7
        assert_abs_diff_eq!(s.variance, 32.0 / 7.0, epsilon = 1e-12);
        assert_eq!(s.n, 8);
    }

    #[test]
    fn test_from_sample_rejects_tiny_samples() {
        assert!(SampleSummary::from_sample(&array![]).is_err());
        assert!(SampleSummary::from_sample(&array![1.0]).is_err());
        assert!(SampleSummary::from_sample(&array![1.0, 2.0]).is_ok());
    }
}
