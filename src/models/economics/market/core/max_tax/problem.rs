//! Problem formulation for the maximum-tax solve.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::models::economics::market::core::{Incidence, Market};

/// Model adapter mapping a tax to its closed-form incidence.
pub(super) struct IncidenceModel<'a> {
    market: &'a Market,
}

impl<'a> IncidenceModel<'a> {
    pub(super) fn new(market: &'a Market) -> Self {
        Self { market }
    }
}

impl Model for IncidenceModel<'_> {
    type Input = f64;
    type Output = Incidence;
    type Error = Infallible;

    fn call(&self, tax: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.market.incidence(*tax))
    }
}

/// Equation problem for the revenue ceiling.
///
/// Government revenue `t q` equals seller revenue `p_s q` when `p_s = t`,
/// so the residual is `seller_price - tax`.
pub(super) struct CeilingProblem;

impl EquationProblem<1> for CeilingProblem {
    type Input = f64;
    type Output = Incidence;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, tax: &Self::Input, output: &Self::Output) -> Result<[f64; 1], Self::Error> {
        Ok([output.seller_price - tax])
    }
}
