// =============================================================================
// Descriptive Statistics
// =============================================================================
//
// Straightforward reductions over one sample vector: sum, mean, median,
// population variance, standard deviation, signed deviations, min and max.
// Nothing here is numerically delicate; the value of the module is feeding
// clean moments into the two-sample machinery (see
// `SampleSummary::from_sample`).
//
// Sample order only matters for `deviation`, whose output is aligned with
// its input. `median` sorts a working copy and never touches the input.
//
// Statistics that divide by the sample size reject empty samples with
// `EmptyInput`; `sum` of nothing is simply 0.
//
// =============================================================================

use ndarray::Array1;

use crate::error::{FerristatsError, Result};

fn empty(what: &str) -> FerristatsError {
    FerristatsError::EmptyInput(what.to_string())
}

/// Sum of the sample; 0 for an empty sample.
pub fn sum(x: &Array1<f64>) -> f64 {
    x.sum()
}

/// Arithmetic mean.
pub fn mean(x: &Array1<f64>) -> Result<f64> {
    x.mean().ok_or_else(|| empty("mean of an empty sample"))
}

/// Median: middle value of the sorted sample, or the mean of the two middle
/// values for an even-sized sample. Sorts a copy with a stable sort.
pub fn median(x: &Array1<f64>) -> Result<f64> {
    if x.is_empty() {
        return Err(empty("median of an empty sample"));
    }
    let mut sorted = x.to_vec();
    sorted.sort_by(|p, q| p.partial_cmp(q).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok(0.5 * (sorted[mid - 1] + sorted[mid]))
    }
}

/// Population variance: the mean of squared deviations from the mean.
pub fn variance(x: &Array1<f64>) -> Result<f64> {
    let m = mean(x)?;
    Ok(x.iter().map(|xi| (m - xi) * (m - xi)).sum::<f64>() / x.len() as f64)
}

/// Population standard deviation.
pub fn stddev(x: &Array1<f64>) -> Result<f64> {
    Ok(variance(x)?.sqrt())
}

/// Signed deviations from the mean, element-wise `mean(x) - x_i`.
///
/// Note the sign convention: values below the mean deviate positively.
pub fn deviation(x: &Array1<f64>) -> Result<Array1<f64>> {
    let m = mean(x)?;
    Ok(x.mapv(|xi| m - xi))
}

/// Smallest sample value.
pub fn min(x: &Array1<f64>) -> Result<f64> {
    x.iter()
        .copied()
        .reduce(f64::min)
        .ok_or_else(|| empty("min of an empty sample"))
}

/// Largest sample value.
pub fn max(x: &Array1<f64>) -> Result<f64> {
    x.iter()
        .copied()
        .reduce(f64::max)
        .ok_or_else(|| empty("max of an empty sample"))
}
