//! Problem formulation for the market-clearing solve.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::models::economics::market::core::{Market, buyer_price};

/// Quantities on both sides of the market at a candidate seller price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Quantities {
    pub(super) demanded: f64,
    pub(super) supplied: f64,
}

/// Model adapter evaluating both curves at a seller price.
///
/// Buyers pay the seller price plus the tax.
pub(super) struct ClearingModel<'a> {
    market: &'a Market,
    tax: f64,
}

impl<'a> ClearingModel<'a> {
    pub(super) fn new(market: &'a Market, tax: f64) -> Self {
        Self { market, tax }
    }
}

impl Model for ClearingModel<'_> {
    type Input = f64;
    type Output = Quantities;
    type Error = Infallible;

    fn call(&self, seller_price: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(Quantities {
            demanded: self
                .market
                .quantity_demanded(buyer_price(self.tax, *seller_price)),
            supplied: self.market.quantity_supplied(*seller_price),
        })
    }
}

/// Equation problem for market clearing.
///
/// Computes the residual as `demanded - supplied`.
pub(super) struct ClearingProblem;

impl EquationProblem<1> for ClearingProblem {
    type Input = f64;
    type Output = Quantities;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.demanded - output.supplied])
    }
}
