// =============================================================================
// Special Functions
// =============================================================================
//
// The numeric core of the library: the gamma family (gamma, log-gamma) and
// the beta family (complete, log, incomplete, regularized). The F and T
// distribution modules are thin compositions over these.
//
// Conventions shared by the whole module:
//   - Poles return +Infinity, never NaN
//   - Overflow saturates to +/-Infinity
//   - Where the true mathematical value is complex (log-gamma on the
//     negative axis), only the real part is returned
//
// =============================================================================

pub mod beta;
pub mod gamma;

pub use beta::{beta, beta_inc, beta_reg, ln_beta};
pub use gamma::{gamma, ln_gamma};
