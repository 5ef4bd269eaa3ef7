use std::fmt;

use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while solving a market.
#[derive(Debug, Error)]
pub enum MarketError {
    /// No unique crossing of the curves was found.
    #[error("no equilibrium: {0}")]
    NoEquilibrium(#[from] NoEquilibrium),

    /// A solved price or quantity is negative and has no economic meaning.
    #[error("invalid domain: {measure}={value}")]
    InvalidDomain {
        /// Which solved value is out of domain.
        measure: Measure,

        /// The offending value.
        value: f64,
    },

    /// The tax would let government revenue exceed seller revenue.
    #[error("tax {tax} exceeds the maximum admissible tax {max_tax}")]
    EthicalConstraintViolated {
        /// Requested tax.
        tax: f64,

        /// Largest tax at which government revenue does not exceed seller revenue.
        max_tax: f64,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Solver(#[from] bisection::Error),
}

impl MarketError {
    /// Rejects a solved value that is negative.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidDomain`] if `value` is negative or `NaN`.
    pub(super) fn check_domain(measure: Measure, value: f64) -> Result<f64, Self> {
        if value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidDomain { measure, value })
        }
    }
}

/// Ways a root search can fail to produce an equilibrium.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NoEquilibrium {
    /// The residual keeps one sign over the whole bracket, or is not finite.
    #[error("residual does not change sign over the bracket: lower={lower}, upper={upper}")]
    Unbracketed {
        /// Residual at the lower end of the bracket.
        lower: f64,

        /// Residual at the upper end of the bracket.
        upper: f64,
    },

    /// The residual is zero at both ends, so every point is a root.
    #[error("residual vanishes at both ends of the bracket")]
    Indeterminate,

    /// The solver stopped without reaching the acceptance tolerance.
    #[error("solver stopped at residual={residual} after {iters} iterations")]
    NotConverged {
        /// Best residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// A solved market value subject to a non-negativity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    SellerPrice,
    Quantity,
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SellerPrice => "seller_price",
            Self::Quantity => "quantity",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_domain_accepts_zero_and_positive() {
        assert_eq!(MarketError::check_domain(Measure::Quantity, 0.0).ok(), Some(0.0));
        assert_eq!(MarketError::check_domain(Measure::SellerPrice, 2.0).ok(), Some(2.0));
    }

    #[test]
    fn check_domain_rejects_negative_and_nan() {
        let err = MarketError::check_domain(Measure::SellerPrice, -0.25).unwrap_err();
        assert!(matches!(
            err,
            MarketError::InvalidDomain {
                measure: Measure::SellerPrice,
                ..
            }
        ));
        assert_eq!(err.to_string(), "invalid domain: seller_price=-0.25");

        assert!(MarketError::check_domain(Measure::Quantity, f64::NAN).is_err());
    }
}
