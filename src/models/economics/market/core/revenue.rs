//! Revenue figures derived from an equilibrium.
//!
//! These are plain products of a price (or tax) and a quantity. They take
//! their inputs explicitly so callers can evaluate them at any point, not
//! only at a solved equilibrium.

/// Returns the price the buyer pays given the price the seller receives.
///
/// The per-unit tax is the wedge between the two prices.
#[must_use]
pub fn buyer_price(tax: f64, seller_price: f64) -> f64 {
    seller_price + tax
}

/// Revenue kept by sellers, `q_s * p_s`.
#[must_use]
pub fn seller_revenue(quantity_supplied: f64, seller_price: f64) -> f64 {
    quantity_supplied * seller_price
}

/// Total buyer expenditure, `q_d * p_d`.
#[must_use]
pub fn buyer_revenue(quantity_demanded: f64, buyer_price: f64) -> f64 {
    quantity_demanded * buyer_price
}

/// Tax collected by the government, `tax * q_s`.
#[must_use]
pub fn government_revenue(tax: f64, quantity_supplied: f64) -> f64 {
    tax * quantity_supplied
}
