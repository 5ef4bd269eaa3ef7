use crate::support::constraint::{Constrained, NonNegative};

use super::{Market, SolveConfig};

pub(super) fn gasoline() -> Market {
    Market::gasoline()
}

pub(super) fn config() -> SolveConfig {
    SolveConfig::default()
}

/// Wraps a test tax, which must be non-negative.
pub(super) fn tax(value: f64) -> Constrained<f64, NonNegative> {
    NonNegative::new(value).expect("test taxes are non-negative")
}
