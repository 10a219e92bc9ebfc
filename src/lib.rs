//! # BSM-Lib: Black-Scholes-Merton European Call Pricing
//!
//! `bsm-lib` prices European call options two independent ways and lets the
//! results be compared side by side:
//!
//! - **Closed form**: the analytic Black-Scholes-Merton formula, discounted
//!   continuously with `e^(-rT)`.
//! - **Monte Carlo**: terminal prices simulated under geometric Brownian motion
//!   from injected standard normal draws, averaged and discounted with simple
//!   interest `1 / (1 + rT)`.
//!
//! The two discounting conventions are intentionally different and are not
//! reconciled; for typical rates and expiries the gap is well below the Monte
//! Carlo sampling error.
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_lib::{price_call_closed_form, price_call_monte_carlo, default_configs};
//! use bsm_lib::{MarketParameters, OptionContract};
//!
//! let market = MarketParameters::new(100.0, 0.03, 0.4, 0.25)?;
//! let contract = OptionContract::new(105.0)?;
//!
//! let analytic = price_call_closed_form(&market, &contract)?;
//! let estimate = price_call_monte_carlo(&market, &contract, &default_configs::minimal())?;
//!
//! println!("closed form {:.4}, monte carlo {:.4} ± {:.4}",
//!          analytic, estimate.price, estimate.std_error);
//! # Ok::<(), bsm_lib::PricingError>(())
//! ```
//!
//! The raw pricers in [`models::bs`] and [`models::monte_carlo`] take plain
//! `f64` arguments and a caller-supplied draw slice for full control over the
//! random source.
//!
//! ## Configuration Presets
//!
//! - `production()`: one million draws, warns above 0.05 standard error
//! - `fast()`: 100k draws for development
//! - `research()`: ten million antithetic draws
//! - `minimal()`: a thousand draws for smoke tests

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod export;
pub mod histogram;
pub mod models;
pub mod params;
pub mod sampling;

// ================================================================================================
// IMPORTS
// ================================================================================================

use tracing::{debug, info, warn};

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Configuration
pub use config::{PricingConfig, SimulationConfig};

// Errors
pub use error::{PricingError, PricingResult};

// Value types
pub use params::{MarketParameters, OptionContract};

// Pricers
pub use models::bs::{
    black_scholes_call, black_scholes_call_delta, black_scholes_call_vega, implied_volatility,
};
pub use models::monte_carlo::{
    call_payoffs, discounted_estimate, monte_carlo_call_estimate, monte_carlo_call_price,
    simulate_terminal_prices, MonteCarloEstimate,
};

// Sampling and output
pub use histogram::Histogram;
pub use sampling::StandardNormalSampler;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured simulation settings for common use cases.
///
/// - [`production()`]: convergence-grade sample size
/// - [`fast()`]: development settings
/// - [`research()`]: high-precision settings
/// - [`minimal()`]: quick validation settings
pub mod default_configs {
    use crate::config::SimulationConfig;

    /// One million draws with a 0.05 standard-error warning threshold.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bsm_lib::default_configs;
    ///
    /// let config = default_configs::production();
    /// assert_eq!(config.num_draws, 1_000_000);
    /// ```
    pub fn production() -> SimulationConfig {
        SimulationConfig::production()
    }

    /// 100,000 draws with summary logging.
    pub fn fast() -> SimulationConfig {
        SimulationConfig::fast()
    }

    /// Ten million antithetic draws with detailed logging.
    ///
    /// **Use Cases:**
    /// - Checking convergence against the closed form
    /// - Producing smooth histograms
    pub fn research() -> SimulationConfig {
        SimulationConfig::research()
    }

    /// A thousand draws; unit tests and smoke checks.
    pub fn minimal() -> SimulationConfig {
        SimulationConfig::minimal()
    }
}

// ================================================================================================
// PRICING ENTRY POINTS
// ================================================================================================

/// Closed-form Black-Scholes-Merton call price for validated value types.
///
/// # Errors
///
/// Zero volatility or zero expiry, which leave `d1` undefined.
pub fn price_call_closed_form(
    market: &MarketParameters,
    contract: &OptionContract,
) -> PricingResult<f64> {
    black_scholes_call(
        market.spot,
        market.rate,
        market.volatility,
        market.expiry,
        contract.strike,
    )
}

/// Monte Carlo call estimate using draws from a sampler built from `config`.
///
/// Logs a warning when the standard error exceeds
/// [`SimulationConfig::max_std_error`].
pub fn price_call_monte_carlo(
    market: &MarketParameters,
    contract: &OptionContract,
    config: &SimulationConfig,
) -> PricingResult<MonteCarloEstimate> {
    Ok(simulate(market, contract, config)?.estimate)
}

/// Everything a single simulation produced, index-aligned.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub draws: Vec<f64>,
    pub terminal_prices: Vec<f64>,
    pub payoffs: Vec<f64>,
    pub estimate: MonteCarloEstimate,
}

impl SimulationRun {
    /// Histogram of the simulated terminal prices.
    pub fn terminal_price_histogram(&self, bins: usize) -> PricingResult<Histogram> {
        Histogram::from_samples(&self.terminal_prices, bins)
    }

    /// Histogram of the call payoffs.
    pub fn payoff_histogram(&self, bins: usize) -> PricingResult<Histogram> {
        Histogram::from_samples(&self.payoffs, bins)
    }
}

/// Run a full simulation and keep the intermediate samples.
///
/// Use this instead of [`price_call_monte_carlo`] when the samples are needed
/// for plotting or export.
pub fn simulate(
    market: &MarketParameters,
    contract: &OptionContract,
    config: &SimulationConfig,
) -> PricingResult<SimulationRun> {
    market.validate()?;
    contract.validate()?;
    config.validate()?;

    let mut sampler = StandardNormalSampler::from_config(config);
    let draws = sampler.draw(config.num_draws)?;

    let terminal_prices = simulate_terminal_prices(
        market.spot,
        market.rate,
        market.volatility,
        market.expiry,
        &draws,
    )?;
    let payoffs = call_payoffs(&terminal_prices, contract.strike)?;
    let estimate = discounted_estimate(&payoffs, market.rate, market.expiry)?;

    if config.verbosity > 0 {
        info!(
            num_draws = estimate.num_draws,
            price = estimate.price,
            std_error = estimate.std_error,
            "monte carlo run complete"
        );
    }
    if let Some(tol) = config.max_std_error {
        if estimate.std_error > tol {
            warn!(
                std_error = estimate.std_error,
                tolerance = tol,
                num_draws = estimate.num_draws,
                "monte carlo standard error above tolerance; increase num_draws"
            );
        }
    }

    Ok(SimulationRun {
        draws,
        terminal_prices,
        payoffs,
        estimate,
    })
}

// ================================================================================================
// PARAMETER SWEEPS
// ================================================================================================

/// Market input varied by [`sweep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepParameter {
    Rate,
    Volatility,
    Expiry,
}

/// Prices at one point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    /// Value taken by the swept parameter
    pub value: f64,
    /// Closed-form price, `None` where it is undefined (σ = 0 or T = 0)
    pub closed_form: Option<f64>,
    pub monte_carlo: MonteCarloEstimate,
}

/// Reprice under a range of values for one market input.
///
/// Every point reuses the same draws, so differences between points reflect
/// the parameter change rather than sampling noise.
///
/// # Errors
///
/// Any out-of-domain value in `values`, or an empty `values` slice.
pub fn sweep(
    market: &MarketParameters,
    contract: &OptionContract,
    parameter: SweepParameter,
    values: &[f64],
    config: &SimulationConfig,
) -> PricingResult<Vec<SweepPoint>> {
    error::validation::non_empty(values)?;
    market.validate()?;
    contract.validate()?;
    config.validate()?;

    let draws = StandardNormalSampler::from_config(config).draw(config.num_draws)?;

    values
        .iter()
        .map(|&value| -> PricingResult<SweepPoint> {
            let point_market = match parameter {
                SweepParameter::Rate => market.with_rate(value)?,
                SweepParameter::Volatility => market.with_volatility(value)?,
                SweepParameter::Expiry => market.with_expiry(value)?,
            };

            let closed_form = if point_market.volatility > 0.0 && point_market.expiry > 0.0 {
                Some(price_call_closed_form(&point_market, contract)?)
            } else {
                None
            };
            let monte_carlo = monte_carlo_call_estimate(
                point_market.spot,
                point_market.rate,
                point_market.volatility,
                point_market.expiry,
                contract.strike,
                &draws,
            )?;

            debug!(?parameter, value, ?closed_form, mc = monte_carlo.price, "sweep point");
            Ok(SweepPoint {
                value,
                closed_form,
                monte_carlo,
            })
        })
        .collect()
}

/// Price the scenario described by a [`PricingConfig`].
///
/// Returns the closed-form price (when defined) and the Monte Carlo estimate.
pub fn price_config(config: &PricingConfig) -> PricingResult<(Option<f64>, MonteCarloEstimate)> {
    config.validate()?;
    let closed_form = if config.market.volatility > 0.0 && config.market.expiry > 0.0 {
        Some(price_call_closed_form(&config.market, &config.contract)?)
    } else {
        None
    };
    let estimate = price_call_monte_carlo(&config.market, &config.contract, &config.simulation)?;
    Ok((closed_form, estimate))
}
