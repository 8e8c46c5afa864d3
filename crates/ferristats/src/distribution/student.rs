// =============================================================================
// Student's T Distribution
// =============================================================================
//
// Two-sample location testing and the T distribution it runs on.
//
// THE TWO STATISTICS
// ------------------
// With summary data (mean, variance, n) per sample there are two classical
// T statistics:
//
//   - pooled ("Student's"): assumes both samples share one variance, pools
//     the two estimates weighted by their degrees of freedom, and tests on
//     df = n1 + n2 - 2.
//   - welch: drops the shared-variance assumption; the standard error is
//     the sum of the per-sample variance contributions and the degrees of
//     freedom come from the Welch-Satterthwaite approximation (generally
//     not an integer).
//
// `two_sample` picks between them: equal sample sizes always pool (the
// pooled test is robust there), otherwise the F variance-ratio test decides
// whether the variances look different enough (p < 0.05) to require Welch.
//
// P-values are two-tailed by default; `pvalue_one_tailed` halves them for
// directional hypotheses.
//
// =============================================================================

use crate::distribution::{fisher, SampleSummary, TTest};
use crate::special::beta::{beta_reg, ln_beta};

// Significance level of the equal-variance screen inside `two_sample`.
const EQUAL_VARIANCE_ALPHA: f64 = 0.05;

/// Pooled (equal-variance) two-sample T statistic.
///
/// # Arguments
/// * `a`, `b` - Sample summaries with unbiased variances
///
/// # Returns
/// `TTest { t, df }` with `df = n1 + n2 - 2`. The sign of t follows
/// `a.mean - b.mean`.
pub fn pooled(a: &SampleSummary, b: &SampleSummary) -> TTest {
    let (n1, n2) = (a.n as f64, b.n as f64);
    let df = n1 + n2 - 2.0;
    let pooled_variance = ((n1 - 1.0) * a.variance + (n2 - 1.0) * b.variance) / df;
    let t = (a.mean - b.mean) / (pooled_variance * (1.0 / n1 + 1.0 / n2)).sqrt();
    TTest { t, df }
}

/// Welch's (unequal-variance) two-sample T statistic.
///
/// # Returns
/// `TTest { t, df }` with Welch-Satterthwaite degrees of freedom.
pub fn welch(a: &SampleSummary, b: &SampleSummary) -> TTest {
    let (n1, n2) = (a.n as f64, b.n as f64);
    let (c1, c2) = (a.variance / n1, b.variance / n2);
    let se2 = c1 + c2;
    let t = (a.mean - b.mean) / se2.sqrt();
    let df = se2 * se2 / (c1 * c1 / (n1 - 1.0) + c2 * c2 / (n2 - 1.0));
    TTest { t, df }
}

/// Two-sample T test with automatic pooled/Welch selection.
///
/// Equal sample sizes always use the pooled statistic. For unequal sizes
/// the F variance-ratio test screens the variances and Welch's statistic is
/// used only when they differ significantly at the 5% level.
pub fn two_sample(a: &SampleSummary, b: &SampleSummary) -> TTest {
    if a.n == b.n {
        return pooled(a, b);
    }
    let ratio = fisher::variance_ratio_test(a, b);
    if fisher::pvalue(ratio.f, ratio.df1, ratio.df2) < EQUAL_VARIANCE_ALPHA {
        welch(a, b)
    } else {
        pooled(a, b)
    }
}

/// Student density at t with df degrees of freedom.
///
/// Evaluated in log space; NaN for non-positive df.
pub fn pdf(t: f64, df: f64) -> f64 {
    if df <= 0.0 {
        return f64::NAN;
    }
    let ln_pdf =
        -0.5 * df.ln() - ln_beta(0.5, 0.5 * df) - 0.5 * (df + 1.0) * (1.0 + t * t / df).ln();
    ln_pdf.exp()
}

/// Student cumulative distribution at t.
///
/// Uses `I_x(df/2, 1/2)` with `x = df/(df + t^2)`, which gives the
/// two-sided tail mass directly; halving and reflecting it around 0.5
/// makes the function monotonic with `cdf(0, df) = 0.5`.
pub fn cdf(t: f64, df: f64) -> f64 {
    if df <= 0.0 {
        return f64::NAN;
    }
    let x = df / (df + t * t);
    let p = match beta_reg(0.5 * df, 0.5, x) {
        Ok(p) => p,
        Err(_) => return f64::NAN,
    };
    if t >= 0.0 {
        1.0 - 0.5 * p
    } else {
        0.5 * p
    }
}

/// Two-tailed p-value: `2 * (1 - cdf(|t|, df))`.
pub fn pvalue(t: f64, df: f64) -> f64 {
    2.0 * (1.0 - cdf(t.abs(), df))
}

/// One-tailed p-value: half the two-tailed value.
pub fn pvalue_one_tailed(t: f64, df: f64) -> f64 {
    1.0 - cdf(t.abs(), df)
}
