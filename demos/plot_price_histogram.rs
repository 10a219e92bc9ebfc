// Example: plot_price_histogram.rs
// Simulates terminal prices for a call scenario and writes histograms of the
// terminal prices and payoffs as SVG, plus the raw samples as CSV.
//
// Usage:
//     cargo run --example plot_price_histogram -- [scenario.toml]
//
// Without a scenario file the default scenario (S0=100, r=3%, sigma=40%,
// T=0.25, K=105) is used. Output files are written to the working directory.

use std::env;

use anyhow::Result;
use bsm_lib::export::write_samples_csv;
use bsm_lib::histogram::render_svg;
use bsm_lib::{price_call_closed_form, simulate, PricingConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => PricingConfig::from_path(path)?,
        None => PricingConfig::default(),
    };

    // Map the configured verbosity onto a default log filter
    let default_filter = match config.simulation.verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let market = config.market;
    let contract = config.contract;
    let sim = &config.simulation;

    println!(
        "Simulating {} draws (seed {:?}, antithetic {})",
        sim.num_draws, sim.seed, sim.antithetic
    );
    let run = simulate(&market, &contract, sim)?;

    let title_suffix = format!(
        "S0={} r={} sigma={} T={} K={}",
        market.spot, market.rate, market.volatility, market.expiry, contract.strike
    );

    let prices = run.terminal_price_histogram(sim.bins)?;
    render_svg(
        "terminal_prices.svg",
        &prices,
        &format!("Simulated terminal prices | {}", title_suffix),
        "Terminal price S_T",
    )?;
    println!("Chart saved to terminal_prices.svg");

    let payoffs = run.payoff_histogram(sim.bins)?;
    render_svg(
        "payoffs.svg",
        &payoffs,
        &format!("Call payoffs | {}", title_suffix),
        "Payoff max(S_T - K, 0)",
    )?;
    println!("Chart saved to payoffs.svg");

    write_samples_csv("samples.csv", &run.draws, &run.terminal_prices, &run.payoffs)?;
    println!("Samples saved to samples.csv");

    println!(
        "\nMonte Carlo: {:.4} ± {:.4}",
        run.estimate.price, run.estimate.std_error
    );
    match price_call_closed_form(&market, &contract) {
        Ok(price) => println!("Closed form: {:.4}", price),
        Err(e) => println!("Closed form undefined: {}", e),
    }

    Ok(())
}
