//! Revenue split of a taxed market.

use super::{Equilibrium, buyer_revenue, government_revenue, seller_revenue};

/// A solved market under an admissible tax, with its revenue figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Per-unit tax in effect.
    pub tax: f64,

    /// Price received by sellers.
    pub seller_price: f64,

    /// Price paid by buyers.
    pub buyer_price: f64,

    /// Quantity traded.
    pub quantity: f64,

    /// Revenue kept by sellers.
    pub seller_revenue: f64,

    /// Total spent by buyers, taxes included.
    pub buyer_expenditure: f64,

    /// Tax collected by the government.
    pub government_revenue: f64,

    /// Largest admissible tax for this market.
    pub max_tax: f64,
}

/// How the price change from a tax is split between buyers and sellers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burden {
    /// Increase in the price buyers pay.
    pub buyers: f64,

    /// Decrease in the price sellers receive.
    pub sellers: f64,
}

impl Outcome {
    pub(super) fn new(equilibrium: &Equilibrium, max_tax: f64) -> Self {
        let Equilibrium {
            tax,
            seller_price,
            buyer_price,
            quantity,
            ..
        } = *equilibrium;

        Self {
            tax,
            seller_price,
            buyer_price,
            quantity,
            seller_revenue: seller_revenue(quantity, seller_price),
            buyer_expenditure: buyer_revenue(quantity, buyer_price),
            government_revenue: government_revenue(tax, quantity),
            max_tax,
        }
    }

    /// Seller revenue given up relative to a baseline, usually the free market.
    #[must_use]
    pub fn seller_revenue_loss(&self, baseline: &Outcome) -> f64 {
        baseline.seller_revenue - self.seller_revenue
    }

    /// Splits the tax into the parts borne by buyers and sellers.
    #[must_use]
    pub fn burden(&self, baseline: &Outcome) -> Burden {
        Burden {
            buyers: self.buyer_price - baseline.buyer_price,
            sellers: baseline.seller_price - self.seller_price,
        }
    }

    /// Welfare lost to the tax relative to a baseline.
    ///
    /// With linear curves this is the triangle between the curves from the
    /// taxed quantity to the baseline quantity, `tax * Δq / 2`.
    #[must_use]
    pub fn deadweight_loss(&self, baseline: &Outcome) -> f64 {
        0.5 * (self.tax - baseline.tax) * (baseline.quantity - self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::models::economics::market::core::test_support::{config, gasoline, tax};

    #[test]
    fn free_market_outcome() {
        let free = gasoline().outcome(tax(0.0), &config()).unwrap();

        assert_relative_eq!(free.seller_price, 2.0, epsilon = 1e-9);
        assert_relative_eq!(free.quantity, 100.0, epsilon = 1e-8);
        assert_relative_eq!(free.seller_revenue, 200.0, epsilon = 1e-7);
        assert_relative_eq!(free.buyer_expenditure, free.seller_revenue);
        assert_eq!(free.government_revenue, 0.0);
    }

    #[test]
    fn expenditure_is_shared_by_sellers_and_government() {
        let outcome = gasoline().outcome(tax(0.8), &config()).unwrap();

        assert_relative_eq!(
            outcome.buyer_expenditure,
            outcome.seller_revenue + outcome.government_revenue,
            epsilon = 1e-9
        );
    }

    #[test]
    fn ceiling_outcome_loses_about_ninety_billion() {
        let market = gasoline();
        let free = market.outcome(tax(0.0), &config()).unwrap();
        let max_tax = market.max_tax(&config()).unwrap().tax;
        let capped = market.outcome(tax(max_tax), &config()).unwrap();

        assert_relative_eq!(
            capped.government_revenue,
            capped.seller_revenue,
            epsilon = 1e-7
        );
        assert_relative_eq!(capped.seller_revenue_loss(&free), 89.795_92, epsilon = 1e-4);
    }

    #[test]
    fn burden_adds_up_to_the_tax() {
        let market = gasoline();
        let free = market.outcome(tax(0.0), &config()).unwrap();
        let taxed = market.outcome(tax(0.9), &config()).unwrap();

        let burden = taxed.burden(&free);

        // Buyers bear d / (b + d) = 20/45 of the tax and sellers b / (b + d) = 25/45.
        assert_relative_eq!(burden.buyers + burden.sellers, 0.9, epsilon = 1e-9);
        assert_relative_eq!(burden.buyers, 0.9 * 20.0 / 45.0, epsilon = 1e-9);
        assert_relative_eq!(burden.sellers, 0.9 * 25.0 / 45.0, epsilon = 1e-9);
    }

    #[test]
    fn deadweight_loss_grows_with_the_tax() {
        let market = gasoline();
        let free = market.outcome(tax(0.0), &config()).unwrap();
        let small = market.outcome(tax(0.45), &config()).unwrap();
        let large = market.outcome(tax(0.9), &config()).unwrap();

        // Each unit of tax removes 25 * 20 / 45 units of quantity.
        assert_relative_eq!(
            small.deadweight_loss(&free),
            0.5 * 0.45 * 0.45 * 500.0 / 45.0,
            epsilon = 1e-7
        );
        assert!(large.deadweight_loss(&free) > small.deadweight_loss(&free));
        assert_eq!(free.deadweight_loss(&free), 0.0);
    }
}
