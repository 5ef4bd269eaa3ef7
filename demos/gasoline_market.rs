//! Effect of a gasoline tax on producers' revenue.
//!
//! Solves the free gasoline market, finds the largest tax the government can
//! levy without collecting more than sellers keep, and prints the revenue
//! split at that tax. The demand and supply schedules are printed as
//! `quantity,price` rows, ready for a plotting tool.
//!
//! # Usage
//!
//! ```text
//! cargo run --example gasoline_market
//! cargo run --example gasoline_market -- 0.5
//! ```
//!
//! The optional argument is a tax in dollars per gallon. Without it the
//! maximum admissible tax is used.

use std::error::Error;

use market_models::{
    models::economics::market::{CurvePoint, Market, SolveConfig, TaxedMarket, price_grid},
    support::constraint::{NonNegative, StrictlyPositive},
};
use twine_core::Model;

fn main() -> Result<(), Box<dyn Error>> {
    let market = Market::gasoline();
    let config = SolveConfig::default();

    // --- Free market ---------------------------------------------------------

    let free = market.free_market(&config)?;
    println!("Free market");
    println!("  price:    ${:.2} per gallon", free.seller_price);
    println!("  quantity: {:.1} billion gallons per year", free.quantity);

    let choke_price = market.choke_price();
    let prices = price_grid(0.0, choke_price, StrictlyPositive::new(1.0)?);
    if prices.is_empty() {
        eprintln!("No price grid up to the choke price {choke_price}; schedules are skipped");
    } else {
        print_schedule("demand", &market.demand_schedule(&prices));
        print_schedule("supply", &market.supply_schedule(&prices));
    }

    // --- Government regulation -----------------------------------------------

    let max_tax = market.max_tax(&config)?;
    println!();
    println!("Maximum tax: ${:.3} per gallon", max_tax.tax);

    let tax = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<f64>().map_err(|err| {
            eprintln!("Invalid tax `{arg}`: expected dollars per gallon, e.g. 0.5");
            err
        })?,
        None => max_tax.tax,
    };

    let model = TaxedMarket::new(market, config);
    let baseline = model.call(&NonNegative::zero())?;
    let outcome = model.call(&NonNegative::new(tax)?)?;

    println!();
    println!("Tax of ${:.3} per gallon", outcome.tax);
    println!("  seller price:       ${:.3}", outcome.seller_price);
    println!("  buyer price:        ${:.3}", outcome.buyer_price);
    println!("  quantity:           {:.3} billion gallons", outcome.quantity);
    println!("  seller revenue:     ${:.3} billion", outcome.seller_revenue);
    println!("  government revenue: ${:.3} billion", outcome.government_revenue);
    println!(
        "  seller revenue lost: ${:.3} billion",
        outcome.seller_revenue_loss(&baseline)
    );
    println!("  deadweight loss:    ${:.3} billion", outcome.deadweight_loss(&baseline));

    if !prices.is_empty() {
        print_schedule(
            "supply with tax",
            &market.taxed_supply_schedule(&prices, NonNegative::new(tax)?),
        );
    }

    Ok(())
}

/// Prints a curve as `quantity,price` rows.
fn print_schedule(name: &str, points: &[CurvePoint]) {
    println!();
    println!("# {name}");
    println!("quantity,price");
    for point in points {
        println!("{:.3},{:.2}", point.quantity, point.price);
    }
}
