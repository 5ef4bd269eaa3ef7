//! Linear partial-equilibrium market with a per-unit tax.
//!
//! A regulator levies a per-unit tax that drives a wedge between the price
//! buyers pay and the price sellers receive. After the tax is in place four
//! conditions hold at the new equilibrium:
//!
//! - the quantity sold and the buyer price lie on the demand curve,
//! - the quantity sold and the seller price lie on the supply curve,
//! - quantity demanded equals quantity supplied,
//! - the buyer price exceeds the seller price by exactly the tax.
//!
//! The tax is further bounded by an ethical ceiling: government revenue may
//! not exceed seller revenue.

mod bracket;
mod config;
mod curves;
mod equilibrium;
mod error;
mod max_tax;
mod outcome;
mod revenue;
mod schedule;

#[cfg(test)]
mod test_support;

pub use config::SolveConfig;
pub use curves::{LinearDemand, LinearSupply};
pub use equilibrium::Equilibrium;
pub use error::{MarketError, Measure, NoEquilibrium};
pub use max_tax::MaxTax;
pub use outcome::{Burden, Outcome};
pub use revenue::{buyer_price, buyer_revenue, government_revenue, seller_revenue};
pub use schedule::{CurvePoint, MAX_GRID_POINTS, price_grid};

use crate::support::constraint::{Constrained, NonNegative};

use equilibrium::solve_equilibrium;
use max_tax::solve_max_tax;

/// A market defined by a linear demand curve and a linear supply curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Market {
    pub demand: LinearDemand,
    pub supply: LinearSupply,
}

/// Prices and quantity implied by a tax under the closed-form incidence relation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incidence {
    /// Price received by sellers.
    pub seller_price: f64,

    /// Price paid by buyers.
    pub buyer_price: f64,

    /// Quantity traded.
    pub quantity: f64,
}

impl Market {
    /// Creates a market from its demand and supply curves.
    #[must_use]
    pub fn new(demand: LinearDemand, supply: LinearSupply) -> Self {
        Self { demand, supply }
    }

    /// The gasoline market in billions of gallons per year and dollars per gallon.
    ///
    /// Demand is `q_d = 150 - 25 p_d` and supply is `q_s = 60 + 20 p_s`.
    #[must_use]
    pub fn gasoline() -> Self {
        Self::new(
            LinearDemand::new_unchecked(150.0, 25.0),
            LinearSupply::new_unchecked(60.0, 20.0),
        )
    }

    /// Quantity demanded at the given buyer price.
    #[must_use]
    pub fn quantity_demanded(&self, buyer_price: f64) -> f64 {
        self.demand.quantity(buyer_price)
    }

    /// Quantity supplied at the given seller price.
    #[must_use]
    pub fn quantity_supplied(&self, seller_price: f64) -> f64 {
        self.supply.quantity(seller_price)
    }

    /// Excess demand at a seller price when buyers also pay `tax` per unit.
    ///
    /// Zero exactly at the taxed equilibrium.
    #[must_use]
    pub fn excess_demand(&self, tax: f64, seller_price: f64) -> f64 {
        self.quantity_demanded(buyer_price(tax, seller_price))
            - self.quantity_supplied(seller_price)
    }

    /// Seller price implied by a tax, in closed form.
    ///
    /// Solving `a - b (p_s + t) = c + d p_s` gives `p_s = (a - c - b t) / (b + d)`.
    /// For the gasoline market this is `(90 - 25 t) / 45`.
    ///
    /// The result may be negative for a large tax, and is `NaN` when both
    /// curves are perfectly inelastic.
    #[must_use]
    pub fn seller_price(&self, tax: f64) -> f64 {
        let slopes = self.demand.slope() + self.supply.slope();
        if slopes == 0.0 {
            return f64::NAN;
        }
        (self.demand.intercept() - self.supply.intercept() - self.demand.slope() * tax) / slopes
    }

    /// Closed-form prices and quantity at the given tax.
    ///
    /// No domain checks are applied.
    #[must_use]
    pub fn incidence(&self, tax: f64) -> Incidence {
        let seller_price = self.seller_price(tax);
        Incidence {
            seller_price,
            buyer_price: buyer_price(tax, seller_price),
            quantity: self.quantity_supplied(seller_price),
        }
    }

    /// Buyer price at which demand falls to zero.
    ///
    /// Not finite for perfectly inelastic demand; see [`LinearDemand::choke_price`].
    #[must_use]
    pub fn choke_price(&self) -> f64 {
        self.demand.choke_price()
    }

    /// Solves for the market-clearing prices and quantity under a tax.
    ///
    /// The tax is not checked against the ethical ceiling; see [`Market::outcome`].
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NoEquilibrium`] if the curves do not cross once
    /// or the solver fails to converge, and [`MarketError::InvalidDomain`] if
    /// the crossing has a negative price or quantity.
    pub fn equilibrium(
        &self,
        tax: Constrained<f64, NonNegative>,
        config: &SolveConfig,
    ) -> Result<Equilibrium, MarketError> {
        solve_equilibrium(self, tax, config)
    }

    /// Solves for the untaxed equilibrium.
    ///
    /// # Errors
    ///
    /// See [`Market::equilibrium`].
    pub fn free_market(&self, config: &SolveConfig) -> Result<Equilibrium, MarketError> {
        solve_equilibrium(self, NonNegative::zero(), config)
    }

    /// Solves for the largest tax at which government revenue equals seller revenue.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NoEquilibrium`] if no such tax exists within
    /// `[-price_limit, price_limit]` or the solver fails to converge, and
    /// [`MarketError::InvalidDomain`] if the seller price or quantity at that
    /// tax is negative. A negative ceiling tax has a negative seller price.
    pub fn max_tax(&self, config: &SolveConfig) -> Result<MaxTax, MarketError> {
        solve_max_tax(self, config)
    }

    /// Solves the market under an admissible tax and derives its revenues.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::EthicalConstraintViolated`] if `tax` exceeds the
    /// maximum tax, and otherwise any error from [`Market::max_tax`] or
    /// [`Market::equilibrium`].
    pub fn outcome(
        &self,
        tax: Constrained<f64, NonNegative>,
        config: &SolveConfig,
    ) -> Result<Outcome, MarketError> {
        let max_tax = self.max_tax(config)?.tax;

        if tax.get() > max_tax + config.acceptance_tol {
            return Err(MarketError::EthicalConstraintViolated {
                tax: tax.get(),
                max_tax,
            });
        }

        let equilibrium = self.equilibrium(tax, config)?;
        Ok(Outcome::new(&equilibrium, max_tax))
    }

    /// Demand curve as `(quantity, price)` points over the given buyer prices.
    #[must_use]
    pub fn demand_schedule(&self, prices: &[f64]) -> Vec<CurvePoint> {
        schedule::schedule(prices, |price| self.quantity_demanded(price))
    }

    /// Supply curve as `(quantity, price)` points over the given seller prices.
    #[must_use]
    pub fn supply_schedule(&self, prices: &[f64]) -> Vec<CurvePoint> {
        schedule::schedule(prices, |price| self.quantity_supplied(price))
    }

    /// Supply curve as seen by buyers once a tax is levied.
    ///
    /// Each point pairs a buyer price with the quantity sellers offer at that
    /// price less the tax, which shifts the curve up by the tax.
    #[must_use]
    pub fn taxed_supply_schedule(
        &self,
        prices: &[f64],
        tax: Constrained<f64, NonNegative>,
    ) -> Vec<CurvePoint> {
        let tax = tax.get();
        schedule::schedule(prices, |price| self.quantity_supplied(price - tax))
    }
}
