//! Market-clearing solve under a per-unit tax.
//!
//! Iterates the seller price until quantity demanded at the buyer price
//! equals quantity supplied at the seller price.

mod problem;

use twine_solvers::equation::bisection;

use crate::support::constraint::{Constrained, NonNegative};

use super::{
    Market, MarketError, Measure, SolveConfig,
    bracket::{check_bracket, check_converged},
    buyer_price,
};

use problem::{ClearingModel, ClearingProblem};

/// Prices and quantity at which the taxed market clears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibrium {
    /// Per-unit tax in effect.
    pub tax: f64,

    /// Price received by sellers.
    pub seller_price: f64,

    /// Price paid by buyers, `seller_price + tax`.
    pub buyer_price: f64,

    /// Quantity traded.
    pub quantity: f64,

    /// Excess demand remaining at the solution.
    pub residual: f64,

    /// Iteration count performed by the solver.
    pub iters: usize,
}

/// Solves for the market-clearing seller price.
///
/// The seller price bracket spans `[-price_limit, price_limit]` so that a
/// crossing at a negative price is found and rejected as out of domain
/// rather than reported as missing.
///
/// # Errors
///
/// Returns [`MarketError`] if no single crossing exists in the bracket, the
/// solver fails to converge, or the crossing has a negative price or quantity.
pub(super) fn solve_equilibrium(
    market: &Market,
    tax: Constrained<f64, NonNegative>,
    config: &SolveConfig,
) -> Result<Equilibrium, MarketError> {
    let tax = tax.into_inner();
    let bracket = [-config.price_limit, config.price_limit];

    check_bracket(bracket, |seller_price| {
        market.excess_demand(tax, seller_price)
    })?;

    let model = ClearingModel::new(market, tax);

    let solution = bisection::solve(
        &model,
        &ClearingProblem,
        bracket,
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    check_converged(&solution, config)?;

    let seller_price = MarketError::check_domain(Measure::SellerPrice, solution.x)?;
    let quantity =
        MarketError::check_domain(Measure::Quantity, solution.snapshot.output.supplied)?;

    Ok(Equilibrium {
        tax,
        seller_price,
        buyer_price: buyer_price(tax, seller_price),
        quantity,
        residual: solution.residual,
        iters: solution.iters,
    })
}
