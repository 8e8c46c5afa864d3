// =============================================================================
// Factorials and Numeric Ranges
// =============================================================================
//
// Small integer-sequence helpers used by the tables and examples around the
// distribution code.
//
// `factorial` multiplies in f64 from the start. Every value through 22! is
// exactly representable (the result's odd part still fits in 53 bits), and
// from 23! on the result carries ordinary rounding error. Past 170! the
// product exceeds f64 range and saturates at infinity, which is the answer
// we want for downstream ratios.
//
// The range constructors step by repeated addition rather than by
// `start + k * step`, so accumulated rounding shows up in long fractional
// ranges. `range_rounded` exists for exactly that situation: it re-rounds
// after each step so grid values stay on the intended decimals.
//
// =============================================================================

use ndarray::Array1;

/// n! as an f64.
///
/// Exact through 22!, rounded above that, and infinite past 170!.
pub fn factorial(n: u64) -> f64 {
    let mut product = 1.0;
    for i in 2..=n {
        product *= i as f64;
    }
    product
}

/// Values from `start` (inclusive) towards `stop` (exclusive) in increments
/// of `step`. A negative `step` counts down; a zero `step` yields nothing.
pub fn range(start: f64, stop: f64, step: f64) -> Array1<f64> {
    collect_range(start, stop, step, None)
}

/// `range(0, stop, 1)`.
pub fn range_to(stop: f64) -> Array1<f64> {
    collect_range(0.0, stop, 1.0, None)
}

/// Like [`range`], but each step is rounded to `digits` decimal places
/// before the bound check, keeping fractional grids free of accumulated
/// rounding error.
pub fn range_rounded(start: f64, stop: f64, step: f64, digits: i32) -> Array1<f64> {
    collect_range(start, stop, step, Some(digits))
}

fn collect_range(start: f64, stop: f64, step: f64, digits: Option<i32>) -> Array1<f64> {
    let mut values = Vec::new();
    let mut x = start;
    while (step > 0.0 && x < stop) || (step < 0.0 && x > stop) {
        values.push(x);
        let next = match digits {
            Some(d) => round_to(x + step, d),
            None => x + step,
        };
        // Rounding can swallow a step smaller than the requested precision;
        // stop rather than loop forever.
        if next == x {
            break;
        }
        x = next;
    }
    Array1::from(values)
}

fn round_to(x: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (x * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(2), 2.0);
        assert_eq!(factorial(3), 6.0);
        assert_eq!(factorial(5), 120.0);
    }

    #[test]
    fn test_factorial_20_is_exact() {
        // 20! = 2432902008176640000 holds in f64 without rounding.
        assert_eq!(factorial(20), 2432902008176640000.0);
    }

    #[test]
    fn test_factorial_strictly_increasing_from_two() {
        // 0! = 1! = 1, so strict growth only starts at n = 2.
        assert_eq!(factorial(1), factorial(0));
        for n in 2..=30 {
            assert!(factorial(n) > factorial(n - 1));
        }
    }

    #[test]
    fn test_factorial_overflows_to_infinity() {
        assert!(factorial(170).is_finite());
        assert!(factorial(171).is_infinite());
        assert!(factorial(200).is_infinite());
    }

    #[test]
    fn test_range_to() {
        assert_eq!(
            range_to(10.0),
            array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
        assert_eq!(range_to(0.0).len(), 0);
    }

    #[test]
    fn test_range_with_stride() {
        assert_eq!(range(0.0, 10.0, 3.0), array![0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_range_counts_down() {
        assert_eq!(
            range(0.0, -10.0, -1.0),
            array![0.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0, -8.0, -9.0]
        );
    }

    #[test]
    fn test_range_moving_away_from_stop_is_empty() {
        assert_eq!(range(1.0, 0.0, 1.0).len(), 0);
        assert_eq!(range(0.0, 1.0, -1.0).len(), 0);
        assert_eq!(range(0.0, 1.0, 0.0).len(), 0);
    }

    #[test]
    fn test_range_rounded_stays_on_grid() {
        // Plain accumulation would visit 0.6000000000000001 instead of 0.6.
        assert_eq!(
            range_rounded(0.0, 1.0, 0.2, 1),
            array![0.0, 0.2, 0.4, 0.6, 0.8]
        );
    }

    #[test]
    fn test_range_rounded_swallowed_step_terminates() {
        // 0.04 rounds to zero at one decimal, so the walk cannot advance.
        assert_eq!(range_rounded(0.0, 1.0, 0.04, 1), array![0.0]);
    }
}
