use bsm_lib::{default_configs, price_call_monte_carlo, MarketParameters, OptionContract};

fn main() -> anyhow::Result<()> {
    let market = MarketParameters::new(100.0, 0.03, 0.4, 0.25)?;
    let contract = OptionContract::new(105.0)?;

    println!("BSM-lib Default Configuration Examples\n");

    // 1. Fast configuration for development
    println!("1. Fast Configuration (good for development):");
    let fast_config = default_configs::fast();
    println!("   Draws: {}", fast_config.num_draws);
    println!("   Seed: {:?}", fast_config.seed);
    println!("   Histogram bins: {}", fast_config.bins);
    println!("   Use case: Development, quick prototyping\n");

    // 2. Production configuration
    println!("2. Production Configuration (convergence checks):");
    let prod_config = default_configs::production();
    println!("   Draws: {}", prod_config.num_draws);
    println!("   Std error warning: {:?}", prod_config.max_std_error);
    println!("   Use case: Comparing against the closed form\n");

    // 3. Research configuration
    println!("3. Research Configuration (high precision):");
    let research_config = default_configs::research();
    println!("   Draws: {}", research_config.num_draws);
    println!("   Antithetic: {}", research_config.antithetic);
    println!("   Use case: Smooth histograms, tight error bars\n");

    // 4. Minimal configuration
    println!("4. Minimal Configuration (quick testing):");
    let minimal_config = default_configs::minimal();
    println!("   Draws: {}", minimal_config.num_draws);
    println!("   Use case: Unit tests, debugging\n");

    println!("Pricing with the minimal configuration...");
    let estimate = price_call_monte_carlo(&market, &contract, &minimal_config)?;
    println!(
        "   Estimate: {:.4} ± {:.4} ({} draws)",
        estimate.price, estimate.std_error, estimate.num_draws
    );

    // Customising a preset
    let mut custom = default_configs::fast();
    custom.seed = None; // Fresh entropy every run
    custom.antithetic = true;
    let estimate = price_call_monte_carlo(&market, &contract, &custom)?;
    println!(
        "   Custom (unseeded, antithetic): {:.4} ± {:.4}",
        estimate.price, estimate.std_error
    );

    Ok(())
}
