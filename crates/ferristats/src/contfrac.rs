// =============================================================================
// Continued Fraction Evaluation
// =============================================================================
//
// Generic evaluator for continued fractions of the form
//
//     b0 + a1/(b1 + a2/(b2 + a3/(b3 + ...)))
//
// given a function producing the partial numerators a_n and partial
// denominators b_n for each index n. Classic constants have simple term
// functions (sqrt(2) is b = [1, 2, 2, ...], a = 1), and the regularized
// incomplete beta function in `special::beta` is built on this evaluator.
//
// The fraction is truncated after depth + 1 levels and evaluated by backward
// recurrence: start at term(depth + 1) and fold a_n / (b_n + tail) upward
// until n = 1, then add b_0. Evaluating bottom-up keeps each partial result
// in the well-conditioned direction, so depth 200 reaches full double
// precision for every fraction this library needs.
//
// =============================================================================

/// Truncation depth used by all in-crate callers.
///
/// Deep enough for ~13-15 significant digits on the fractions evaluated here
/// while keeping the worst-case cost fixed and small.
pub const DEFAULT_DEPTH: usize = 200;

/// Evaluate a continued fraction truncated at `depth`.
///
/// `term(n)` must return the pair `(a_n, b_n)` for `n = 0..=depth + 1`: `a_n`
/// is the partial numerator, `b_n` the partial denominator. The value computed
/// is `b0 + a1/(b1 + a2/(b2 + ...))` cut off after `depth + 1` fraction
/// levels, so even depth 0 evaluates `b0 + a1/b1`; `a_0` is never used.
///
/// # Arguments
/// * `depth` - Truncation depth; the deepest term used is `term(depth + 1)`
/// * `term` - Term function producing `(a_n, b_n)`
///
/// # Returns
/// The truncated value. There are no error conditions: whatever the
/// recurrence produces is returned, including infinities for divergent terms.
pub fn eval<F>(depth: usize, term: F) -> f64
where
    F: Fn(usize) -> (f64, f64),
{
    let mut tail = 0.0;
    for n in (1..=depth + 1).rev() {
        let (a_n, b_n) = term(n);
        tail = a_n / (b_n + tail);
    }
    let (_, b_0) = term(0);
    b_0 + tail
}
