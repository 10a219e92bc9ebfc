// demos/pricing_demo.rs

//! Closed-form versus Monte Carlo pricing of a European call
//!
//! This example shows how to:
//! 1. Build validated market parameters and a contract
//! 2. Price the call with the closed-form formula
//! 3. Estimate it by Monte Carlo with increasing sample sizes
//! 4. Recover the volatility from the price

use anyhow::Result;
use bsm_lib::{
    black_scholes_call_delta, black_scholes_call_vega, default_configs, implied_volatility,
    price_call_closed_form, price_call_monte_carlo, MarketParameters, OptionContract,
    SimulationConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Black-Scholes-Merton Call Pricing Demo");
    println!("======================================");

    let market = MarketParameters::new(100.0, 0.03, 0.4, 0.25)?;
    let contract = OptionContract::new(105.0)?;

    println!(
        "S0 = {:.2}, r = {:.2}%, sigma = {:.1}%, T = {:.2}y, K = {:.2}",
        market.spot,
        market.rate * 100.0,
        market.volatility * 100.0,
        market.expiry,
        contract.strike
    );

    println!("\nStep 1: Closed form...");
    let analytic = price_call_closed_form(&market, &contract)?;
    let delta = black_scholes_call_delta(
        market.spot,
        market.rate,
        market.volatility,
        market.expiry,
        contract.strike,
    )?;
    let vega = black_scholes_call_vega(
        market.spot,
        market.rate,
        market.volatility,
        market.expiry,
        contract.strike,
    )?;
    println!("  Price: {:.4}", analytic);
    println!("  Delta: {:.4}", delta);
    println!("  Vega:  {:.4}", vega);

    println!("\nStep 2: Monte Carlo convergence...");
    println!(
        "{:<12} {:<12} {:<12} {:<12}",
        "Draws", "Estimate", "Std Error", "Diff"
    );
    println!("{}", "-".repeat(50));
    for num_draws in [1_000, 10_000, 100_000, 1_000_000] {
        let config = SimulationConfig {
            num_draws,
            ..default_configs::production()
        };
        let estimate = price_call_monte_carlo(&market, &contract, &config)?;
        println!(
            "{:<12} {:<12.4} {:<12.4} {:<+12.4}",
            num_draws,
            estimate.price,
            estimate.std_error,
            estimate.price - analytic
        );
    }

    println!("\nStep 3: Implied volatility from the closed-form price...");
    let iv = implied_volatility(
        analytic,
        market.spot,
        market.rate,
        market.expiry,
        contract.strike,
    )?;
    println!("  Recovered sigma: {:.6}", iv);

    Ok(())
}
