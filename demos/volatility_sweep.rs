//! Reprice the reference call across a grid of volatilities, rates and
//! expiries, reusing one set of seeded draws per sweep.

use anyhow::Result;
use bsm_lib::{
    default_configs, sweep, MarketParameters, OptionContract, SweepParameter, SweepPoint,
};
use tracing_subscriber::EnvFilter;

fn print_sweep(label: &str, points: &[SweepPoint]) {
    println!("\n{label}");
    println!(
        "{:<10} {:<12} {:<12} {:<12}",
        "Value", "Closed", "MC", "Std Error"
    );
    println!("{}", "-".repeat(48));
    for point in points {
        let closed = point
            .closed_form
            .map(|p| format!("{:.4}", p))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "{:<10.3} {:<12} {:<12.4} {:<12.4}",
            point.value, closed, point.monte_carlo.price, point.monte_carlo.std_error
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let market = MarketParameters::new(100.0, 0.03, 0.4, 0.25)?;
    let contract = OptionContract::new(105.0)?;
    let config = default_configs::fast();

    let vols: Vec<f64> = (0..=10).map(|i| 0.1 * i as f64).collect();
    let points = sweep(&market, &contract, SweepParameter::Volatility, &vols, &config)?;
    print_sweep("Volatility sweep", &points);

    let rates = [0.0, 0.01, 0.03, 0.05, 0.1];
    let points = sweep(&market, &contract, SweepParameter::Rate, &rates, &config)?;
    print_sweep("Rate sweep", &points);

    let expiries = [0.0, 0.1, 0.25, 0.5, 1.0, 2.0];
    let points = sweep(&market, &contract, SweepParameter::Expiry, &expiries, &config)?;
    print_sweep("Expiry sweep", &points);

    Ok(())
}
