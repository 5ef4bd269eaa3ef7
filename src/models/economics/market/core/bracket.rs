//! Bracket and convergence checks around the bisection solver.
//!
//! Bisection always returns *some* point. These checks make sure that point
//! is a genuine root of the residual before the market reports it.

use twine_solvers::equation::bisection;

use super::{NoEquilibrium, SolveConfig};

/// Verifies that `residual` changes sign exactly once across `bracket`.
///
/// # Errors
///
/// Returns [`NoEquilibrium::Unbracketed`] if either end is not finite or both
/// ends share a sign, and [`NoEquilibrium::Indeterminate`] if the residual is
/// zero at both ends.
pub(super) fn check_bracket(
    bracket: [f64; 2],
    residual: impl Fn(f64) -> f64,
) -> Result<(), NoEquilibrium> {
    let lower = residual(bracket[0]);
    let upper = residual(bracket[1]);

    if !lower.is_finite() || !upper.is_finite() {
        return Err(NoEquilibrium::Unbracketed { lower, upper });
    }

    if lower == 0.0 && upper == 0.0 {
        return Err(NoEquilibrium::Indeterminate);
    }

    if lower * upper > 0.0 {
        return Err(NoEquilibrium::Unbracketed { lower, upper });
    }

    Ok(())
}

/// Accepts a bisection solution only if it converged to a small residual.
///
/// # Errors
///
/// Returns [`NoEquilibrium::NotConverged`] if the solver did not converge or
/// its residual exceeds [`SolveConfig::acceptance_tol`].
pub(super) fn check_converged<I, O>(
    solution: &bisection::Solution<I, O>,
    config: &SolveConfig,
) -> Result<(), NoEquilibrium> {
    let within_tol = solution.residual.abs() <= config.acceptance_tol;

    if solution.status != bisection::Status::Converged || !within_tol {
        return Err(NoEquilibrium::NotConverged {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sign_change() {
        assert!(check_bracket([-10.0, 10.0], |x| 90.0 - 45.0 * x).is_ok());
    }

    #[test]
    fn accepts_root_at_an_end() {
        assert!(check_bracket([0.0, 5.0], |x| -x).is_ok());
    }

    #[test]
    fn rejects_constant_residual() {
        let err = check_bracket([-10.0, 10.0], |_| 90.0).unwrap_err();
        assert_eq!(
            err,
            NoEquilibrium::Unbracketed {
                lower: 90.0,
                upper: 90.0
            }
        );
    }

    #[test]
    fn rejects_coincident_curves() {
        let err = check_bracket([-10.0, 10.0], |_| 0.0).unwrap_err();
        assert_eq!(err, NoEquilibrium::Indeterminate);
    }

    #[test]
    fn rejects_nan_residual() {
        let err = check_bracket([0.0, 1.0], |_| f64::NAN).unwrap_err();
        assert!(matches!(err, NoEquilibrium::Unbracketed { .. }));
    }
}
