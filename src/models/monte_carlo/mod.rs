//! Monte Carlo pricing of European calls under geometric Brownian motion.
//!
//! Randomness is injected: every function here takes a slice of standard
//! normal draws and is otherwise pure. Draw `i` always produces terminal price
//! `i` and payoff `i`.
//!
//! ```text
//! S_T = S0 · exp[(r − σ²/2)·T + σ·√T·z]
//! payoff = max(S_T − K, 0)
//! PV = mean(payoff) / (1 + r·T)
//! ```
//!
//! Present value uses **simple-interest** discounting, unlike the continuous
//! `e^(−rT)` factor of the closed-form pricer in [`crate::models::bs`]. The two
//! estimates therefore differ by the gap between `1/(1 + rT)` and `e^(−rT)`,
//! which is second order in `rT`.

use tracing::debug;

use crate::error::{validation, PricingResult};

/// Price estimate together with its sampling error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloEstimate {
    /// Discounted mean payoff (present value)
    pub price: f64,
    /// Undiscounted mean payoff
    pub forward_value: f64,
    /// Standard error of `price`, sample std-dev of payoffs / √n, discounted
    pub std_error: f64,
    /// Number of draws the estimate is based on
    pub num_draws: usize,
}

#[allow(non_snake_case)]
fn validate_market(S0: f64, r: f64, sigma: f64, T: f64) -> PricingResult<()> {
    validation::positive("spot", S0)?;
    validation::finite("rate", r)?;
    validation::non_negative("volatility", sigma)?;
    validation::non_negative("expiry", T)?;
    Ok(())
}

/// Map each standard normal draw to a terminal price.
///
/// With `T = 0` the diffusion term vanishes and every output equals `S0`; with
/// `sigma = 0` every output equals `S0·e^(rT)`.
///
/// # Errors
///
/// [`crate::PricingError::EmptySampleSet`] when `draws` is empty, and
/// [`crate::PricingError::InvalidParameter`] for invalid `S0`, `r`, `sigma` or
/// `T`.
#[allow(non_snake_case)]
pub fn simulate_terminal_prices(
    S0: f64,
    r: f64,
    sigma: f64,
    T: f64,
    draws: &[f64],
) -> PricingResult<Vec<f64>> {
    validation::non_empty(draws)?;
    validate_market(S0, r, sigma, T)?;

    let drift = (r - 0.5 * sigma * sigma) * T;
    let diffusion = sigma * T.sqrt();

    Ok(draws
        .iter()
        .map(|&z| S0 * (drift + diffusion * z).exp())
        .collect())
}

/// Call payoff `max(S_T − K, 0)` for each terminal price, in order.
#[allow(non_snake_case)]
pub fn call_payoffs(terminal_prices: &[f64], K: f64) -> PricingResult<Vec<f64>> {
    validation::positive("strike", K)?;
    Ok(terminal_prices
        .iter()
        .map(|&s_t| call_payoff(s_t, K))
        .collect())
}

#[allow(non_snake_case)]
#[inline]
fn call_payoff(s_t: f64, K: f64) -> f64 {
    if s_t > K {
        s_t - K
    } else {
        0.0
    }
}

/// Monte Carlo present value of a European call together with its standard
/// error.
///
/// # Errors
///
/// [`crate::PricingError::EmptySampleSet`] when `draws` is empty, and
/// [`crate::PricingError::InvalidParameter`] for out-of-domain inputs.
#[allow(non_snake_case)]
pub fn monte_carlo_call_estimate(
    S0: f64,
    r: f64,
    sigma: f64,
    T: f64,
    K: f64,
    draws: &[f64],
) -> PricingResult<MonteCarloEstimate> {
    let terminal_prices = simulate_terminal_prices(S0, r, sigma, T, draws)?;
    let payoffs = call_payoffs(&terminal_prices, K)?;
    discounted_estimate(&payoffs, r, T)
}

/// Average call payoffs and discount with simple interest, `1 / (1 + r·T)`.
///
/// The standard error is the sample standard deviation of `payoffs` over √n,
/// discounted by the same factor.
///
/// # Errors
///
/// [`crate::PricingError::InvalidParameter`] naming `rate` when `1 + r·T <= 0`,
/// where the simple-interest factor is infinite or negative.
#[allow(non_snake_case)]
pub fn discounted_estimate(payoffs: &[f64], r: f64, T: f64) -> PricingResult<MonteCarloEstimate> {
    validation::non_empty(payoffs)?;
    validation::finite("rate", r)?;
    validation::non_negative("expiry", T)?;
    validation::simple_interest_discountable(r, T)?;

    let n = payoffs.len() as f64;
    let forward_value = payoffs.iter().sum::<f64>() / n;
    let discount = 1.0 / (1.0 + r * T);
    let price = forward_value * discount;

    // Two-pass variance; the one-pass form cancels badly for near-constant payoffs
    let variance = if payoffs.len() > 1 {
        payoffs
            .iter()
            .map(|p| (p - forward_value).powi(2))
            .sum::<f64>()
            / (n - 1.0)
    } else {
        0.0
    };
    let std_error = (variance / n).sqrt() * discount;

    debug!(
        num_draws = payoffs.len(),
        forward_value, price, std_error, "monte carlo call estimate"
    );

    Ok(MonteCarloEstimate {
        price,
        forward_value,
        std_error,
        num_draws: payoffs.len(),
    })
}

/// Monte Carlo present value of a European call.
///
/// Equivalent to `monte_carlo_call_estimate(..)?.price`.
#[allow(non_snake_case)]
pub fn monte_carlo_call_price(
    S0: f64,
    r: f64,
    sigma: f64,
    T: f64,
    K: f64,
    draws: &[f64],
) -> PricingResult<f64> {
    monte_carlo_call_estimate(S0, r, sigma, T, K, draws).map(|est| est.price)
}
