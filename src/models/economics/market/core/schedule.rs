//! Curve schedules for reporting.
//!
//! A schedule is a demand or supply curve sampled over a price grid. Charts
//! plot quantity on the horizontal axis and price on the vertical axis, so
//! points are stored in that order.

use crate::support::constraint::{Constrained, StrictlyPositive};

/// A single `(quantity, price)` point on a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub quantity: f64,
    pub price: f64,
}

impl CurvePoint {
    #[must_use]
    pub fn new(quantity: f64, price: f64) -> Self {
        Self { quantity, price }
    }
}

/// Largest number of points [`price_grid`] will produce.
pub const MAX_GRID_POINTS: u32 = 100_000;

/// Returns evenly spaced prices from `start` up to and including `end`.
///
/// The end point is included when it falls on the grid, allowing for
/// floating-point drift of a small fraction of `step`.
/// The grid is empty if `end < start`, either bound is not finite, or the
/// grid would hold more than [`MAX_GRID_POINTS`] points. Prices too large to
/// be told apart at this step are merged, so the grid strictly increases.
///
/// # Example
///
/// ```
/// use market_models::models::economics::market::price_grid;
/// use market_models::support::constraint::StrictlyPositive;
///
/// let prices = price_grid(0.0, 6.0, StrictlyPositive::new(1.0).unwrap());
/// assert_eq!(prices, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// ```
#[must_use]
pub fn price_grid(start: f64, end: f64, step: Constrained<f64, StrictlyPositive>) -> Vec<f64> {
    let step = step.into_inner();
    let span = (end - start) / step;

    if !start.is_finite() || !span.is_finite() || span < 0.0 {
        return Vec::new();
    }

    let last = (span + 1e-9).floor();
    if last >= f64::from(MAX_GRID_POINTS) {
        return Vec::new();
    }

    let mut prices: Vec<f64> = (0..MAX_GRID_POINTS)
        .map(f64::from)
        .take_while(|i| *i <= last)
        .map(|i| start + step * i)
        .collect();
    prices.dedup();
    prices
}

/// Samples `quantity` at each price.
pub(super) fn schedule(prices: &[f64], quantity: impl Fn(f64) -> f64) -> Vec<CurvePoint> {
    prices
        .iter()
        .map(|&price| CurvePoint::new(quantity(price), price))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn step(value: f64) -> Constrained<f64, StrictlyPositive> {
        StrictlyPositive::new(value).unwrap()
    }

    #[test]
    fn unit_grid_includes_both_ends() {
        let prices = price_grid(0.0, 6.0, step(1.0));
        assert_eq!(prices.len(), 7);
        assert_relative_eq!(prices[0], 0.0);
        assert_relative_eq!(prices[6], 6.0);
    }

    #[test]
    fn fractional_step_tolerates_drift() {
        let prices = price_grid(0.0, 1.0, step(0.1));
        assert_eq!(prices.len(), 11);
        assert_relative_eq!(prices[10], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn off_grid_end_is_excluded() {
        let prices = price_grid(0.0, 2.5, step(1.0));
        assert_eq!(prices, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn reversed_or_infinite_bounds_are_empty() {
        assert!(price_grid(3.0, 1.0, step(1.0)).is_empty());
        assert!(price_grid(0.0, f64::INFINITY, step(1.0)).is_empty());
    }

    #[test]
    fn tiny_step_over_a_wide_range_is_empty() {
        assert!(price_grid(0.0, 6.0, step(1e-9)).is_empty());
        assert!(price_grid(0.0, 1.0, step(f64::MIN_POSITIVE)).is_empty());
    }

    #[test]
    fn grid_at_the_point_limit() {
        let prices = price_grid(0.0, f64::from(MAX_GRID_POINTS - 1), step(1.0));
        assert_eq!(prices.len(), 100_000);
    }

    #[test]
    fn single_large_price_is_one_point() {
        assert_eq!(price_grid(1e18, 1e18, step(1.0)), vec![1e18]);
    }

    #[test]
    fn indistinguishable_prices_are_merged() {
        // Adjacent doubles near 1e18 are 128 apart.
        let prices = price_grid(1e18, 1e18 + 1024.0, step(1.0));

        assert_eq!(prices.len(), 9);
        assert_eq!(prices[0], 1e18);
        assert_eq!(prices[8], 1e18 + 1024.0);
        assert!(prices.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn schedule_keeps_price_order() {
        let points = schedule(&[0.0, 1.0, 2.0], |price| 10.0 - price);
        assert_eq!(
            points,
            vec![
                CurvePoint::new(10.0, 0.0),
                CurvePoint::new(9.0, 1.0),
                CurvePoint::new(8.0, 2.0),
            ]
        );
    }
}
