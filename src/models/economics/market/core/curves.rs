//! Linear demand and supply curves.

use crate::support::constraint::{Constrained, NonNegative};

/// A linear demand curve, `q_d = intercept - slope * p_d`.
///
/// The slope is stored as a non-negative magnitude so the curve can never
/// slope upward. A zero slope is a perfectly inelastic demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDemand {
    intercept: f64,
    slope: f64,
}

impl LinearDemand {
    /// Creates a demand curve from its quantity intercept and slope magnitude.
    #[must_use]
    pub fn new(intercept: f64, slope: Constrained<f64, NonNegative>) -> Self {
        Self {
            intercept,
            slope: slope.into_inner(),
        }
    }

    /// Creates a curve without checking the slope.
    ///
    /// The caller must ensure the slope is non-negative.
    pub(super) fn new_unchecked(intercept: f64, slope: f64) -> Self {
        debug_assert!(slope >= 0.0, "curve slope must be non-negative");
        Self { intercept, slope }
    }

    /// Quantity demanded at zero price.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Decrease in quantity demanded per unit increase in buyer price.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the quantity demanded at the given buyer price.
    #[must_use]
    pub fn quantity(&self, buyer_price: f64) -> f64 {
        self.intercept - self.slope() * buyer_price
    }

    /// Returns the buyer price at which demand falls to zero.
    ///
    /// For a perfectly inelastic curve there is no such price. The result is
    /// infinite, signed like the intercept, when the intercept is nonzero,
    /// and `NaN` when the intercept is also zero.
    #[must_use]
    pub fn choke_price(&self) -> f64 {
        self.intercept / self.slope()
    }
}

/// A linear supply curve, `q_s = intercept + slope * p_s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSupply {
    intercept: f64,
    slope: f64,
}

impl LinearSupply {
    /// Creates a supply curve from its quantity intercept and slope.
    #[must_use]
    pub fn new(intercept: f64, slope: Constrained<f64, NonNegative>) -> Self {
        Self {
            intercept,
            slope: slope.into_inner(),
        }
    }

    /// Creates a curve without checking the slope.
    ///
    /// The caller must ensure the slope is non-negative.
    pub(super) fn new_unchecked(intercept: f64, slope: f64) -> Self {
        debug_assert!(slope >= 0.0, "curve slope must be non-negative");
        Self { intercept, slope }
    }

    /// Quantity supplied at zero price.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Increase in quantity supplied per unit increase in seller price.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the quantity supplied at the given seller price.
    #[must_use]
    pub fn quantity(&self, seller_price: f64) -> f64 {
        self.intercept + self.slope() * seller_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::NonNegative;

    #[test]
    fn demand_falls_with_price() {
        let demand = LinearDemand::new(150.0, NonNegative::new(25.0).unwrap());

        assert_relative_eq!(demand.quantity(0.0), 150.0);
        assert_relative_eq!(demand.quantity(2.0), 100.0);
        assert_relative_eq!(demand.quantity(6.0), 0.0);
        assert_relative_eq!(demand.choke_price(), 6.0);
    }

    #[test]
    fn supply_rises_with_price() {
        let supply = LinearSupply::new(60.0, NonNegative::new(20.0).unwrap());

        assert_relative_eq!(supply.quantity(0.0), 60.0);
        assert_relative_eq!(supply.quantity(2.0), 100.0);
        assert_relative_eq!(supply.quantity(-3.0), 0.0);
    }

    #[test]
    fn curves_are_total_over_reals() {
        let demand = LinearDemand::new(150.0, NonNegative::new(25.0).unwrap());
        let supply = LinearSupply::new(60.0, NonNegative::new(20.0).unwrap());

        assert_relative_eq!(demand.quantity(-2.0), 200.0);
        assert_relative_eq!(demand.quantity(10.0), -100.0);
        assert_relative_eq!(supply.quantity(-10.0), -140.0);
    }

    #[test]
    fn inelastic_demand_never_chokes() {
        let demand = LinearDemand::new(80.0, NonNegative::zero());

        assert_relative_eq!(demand.quantity(1e6), 80.0);
        assert!(demand.choke_price().is_infinite());
        assert!(demand.choke_price() > 0.0);
    }

    #[test]
    fn flat_zero_demand_has_no_choke_price() {
        let demand = LinearDemand::new(0.0, NonNegative::zero());

        assert_relative_eq!(demand.quantity(3.0), 0.0);
        assert!(demand.choke_price().is_nan());
    }
}
