use twine_solvers::equation::bisection;

/// Solver configuration shared by the equilibrium and maximum-tax solves.
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the iterated price or tax.
    pub price_tol: f64,

    /// Residual tolerance at which bisection may stop early.
    pub residual_tol: f64,

    /// Largest residual accepted as a solution once the solver stops.
    ///
    /// A solver that stops with a larger residual has not found a root.
    pub acceptance_tol: f64,

    /// Half-width of the seller price bracket and upper end of the tax bracket.
    pub price_limit: f64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            price_tol: 1e-12,
            residual_tol: 1e-12,
            acceptance_tol: 1e-6,
            price_limit: 1e3,
        }
    }
}

impl SolveConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.price_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
