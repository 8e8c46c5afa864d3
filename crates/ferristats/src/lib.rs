// =============================================================================
// Ferristats Core Library
// =============================================================================
//
// Classical statistics primitives in pure Rust: the gamma and beta special
// functions, the F and Student's T distributions built on top of them, and
// the two-sample significance tests built on top of those.
//
// STRUCTURE:
// ----------
// The library is organized into modules, each handling a specific concern:
//
//   - contfrac:     Generalized continued-fraction evaluation
//   - special:      Gamma, log-gamma, beta, and incomplete beta functions
//   - distribution: F and Student's T densities, CDFs, p-values, and the
//                   two-sample tests (pooled, Welch, auto-dispatch)
//   - descriptive:  Sums, means, medians, variances over one sample
//   - series:       Factorials and numeric range constructors
//   - memoize:      Caching wrappers for pure functions
//   - error:        Error types used throughout the library
//
// Everything flows upward through that list: the distributions evaluate
// their CDFs through the regularized incomplete beta function, which
// evaluates its continued fraction through `contfrac`.
//
// FOR MAINTAINERS:
// ----------------
// When adding new functionality:
//   1. Add it to the appropriate module (or create a new one)
//   2. Write tests in that module (see existing tests for examples)
//   3. Re-export public items here so users can access them easily
//
// =============================================================================

// Declare our modules - each is in its own file or folder
pub mod contfrac;
pub mod descriptive;
pub mod distribution;
pub mod error;
pub mod memoize;
pub mod series;
pub mod special;

// Re-export commonly used items at the top level for convenience
// Users can write `use ferristats::ln_gamma` instead of
// `use ferristats::special::gamma::ln_gamma`
pub use distribution::{fisher, student, FTest, SampleSummary, TTest};
pub use error::{FerristatsError, Result};
pub use memoize::{FloatKey, Memoized, SyncMemoized};
pub use series::{factorial, range, range_rounded, range_to};
pub use special::{beta, beta_inc, beta_reg, gamma, ln_beta, ln_gamma};
