//! Maximum admissible tax under the revenue ceiling.
//!
//! The regulator may not collect more in tax than sellers keep in revenue.
//! Both revenues share the traded quantity, so the ceiling binds where the
//! seller price falls to the tax itself. For the gasoline market this is the
//! root of `2 - 25 t / 45 - t`, i.e. `t = 90 / 70`.

mod problem;

use twine_solvers::equation::bisection;

use super::{
    Market, MarketError, Measure, SolveConfig,
    bracket::{check_bracket, check_converged},
};

use problem::{CeilingProblem, IncidenceModel};

/// The largest admissible tax and the market at that tax.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxTax {
    /// Largest tax at which government revenue does not exceed seller revenue.
    pub tax: f64,

    /// Price received by sellers, equal to the tax at the ceiling.
    pub seller_price: f64,

    /// Price paid by buyers.
    pub buyer_price: f64,

    /// Quantity traded.
    pub quantity: f64,

    /// Remaining `seller_price - tax` at the solution.
    pub residual: f64,

    /// Iteration count performed by the solver.
    pub iters: usize,
}

/// Solves for the tax at which the revenue ceiling binds.
///
/// # Errors
///
/// Returns [`MarketError`] if the ceiling is not crossed within
/// `[-price_limit, price_limit]` or the solver fails to converge. The root
/// may sit at a negative tax when the untaxed seller price is already
/// negative; the seller price equals the tax there, so that case is reported
/// as an out-of-domain seller price, as is a negative quantity.
pub(super) fn solve_max_tax(market: &Market, config: &SolveConfig) -> Result<MaxTax, MarketError> {
    let bracket = [-config.price_limit, config.price_limit];

    check_bracket(bracket, |tax| market.seller_price(tax) - tax)?;

    let solution = bisection::solve(
        &IncidenceModel::new(market),
        &CeilingProblem,
        bracket,
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    check_converged(&solution, config)?;

    let incidence = solution.snapshot.output;
    let seller_price = MarketError::check_domain(Measure::SellerPrice, incidence.seller_price)?;
    let quantity = MarketError::check_domain(Measure::Quantity, incidence.quantity)?;

    Ok(MaxTax {
        tax: solution.x,
        seller_price,
        buyer_price: incidence.buyer_price,
        quantity,
        residual: solution.residual,
        iters: solution.iters,
    })
}
