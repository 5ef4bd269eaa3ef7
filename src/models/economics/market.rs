//! Supply-and-demand market under a per-unit tax.
//!
//! [`TaxedMarket`] is the [`twine_core::Model`] for this module: it maps a
//! non-negative tax to the full [`Outcome`] of the market, refusing taxes
//! above the revenue ceiling. The computational core is in the internal
//! `core` module; its public types are re-exported here.
//!
//! # Example
//!
//! ```
//! use market_models::models::economics::market::{Market, SolveConfig, TaxedMarket};
//! use market_models::support::constraint::NonNegative;
//! use twine_core::Model;
//!
//! let model = TaxedMarket::new(Market::gasoline(), SolveConfig::default());
//! let outcome = model.call(&NonNegative::new(1.0).unwrap()).unwrap();
//!
//! assert!(outcome.government_revenue < outcome.seller_revenue);
//! ```

mod core;

pub use self::core::{
    Burden, CurvePoint, Equilibrium, Incidence, LinearDemand, LinearSupply, MAX_GRID_POINTS,
    Market, MarketError, MaxTax, Measure, NoEquilibrium, Outcome, SolveConfig, buyer_price,
    buyer_revenue, government_revenue, price_grid, seller_revenue,
};

use twine_core::Model;

use crate::support::constraint::{Constrained, NonNegative};

/// A market evaluated at a per-unit tax.
#[derive(Debug, Clone, Copy)]
pub struct TaxedMarket {
    market: Market,
    config: SolveConfig,
}

impl TaxedMarket {
    #[must_use]
    pub fn new(market: Market, config: SolveConfig) -> Self {
        Self { market, config }
    }

    /// The underlying market.
    #[must_use]
    pub fn market(&self) -> &Market {
        &self.market
    }
}

impl Model for TaxedMarket {
    type Input = Constrained<f64, NonNegative>;
    type Output = Outcome;
    type Error = MarketError;

    fn call(&self, tax: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.market.outcome(*tax, &self.config)
    }
}
