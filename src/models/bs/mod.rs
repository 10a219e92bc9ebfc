// Closed-form Black-Scholes-Merton pricing for European calls, with the two
// first-order Greeks and an implied-volatility inversion. Discounting is
// continuous, e^(-rT).

use roots::{find_root_brent, SimpleConvergency};
use tracing::debug;

use crate::error::{validation, PricingError, PricingResult};
use crate::models::utils::{norm_cdf, norm_pdf};

/// Search bracket for implied volatility.
const IV_LOWER: f64 = 1e-6;
const IV_UPPER: f64 = 5.0;

/// Preconditions of the closed form: σ·√T must be strictly positive.
#[allow(non_snake_case)]
fn validate_inputs(S0: f64, r: f64, sigma: f64, T: f64, K: f64) -> PricingResult<()> {
    validation::positive("spot", S0)?;
    validation::finite("rate", r)?;
    validation::positive("volatility", sigma)?;
    validation::positive("expiry", T)?;
    validation::positive("strike", K)?;
    Ok(())
}

#[allow(non_snake_case)]
fn d1_d2(S0: f64, r: f64, sigma: f64, T: f64, K: f64) -> (f64, f64) {
    let sigma_sqrt_t = sigma * T.sqrt();
    let d1 = ((S0 / K).ln() + (r + 0.5 * sigma * sigma) * T) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Price of a European call option under Black-Scholes-Merton assumptions.
///
/// ```text
/// d1 = [ln(S0/K) + (r + σ²/2)·T] / (σ·√T)
/// d2 = d1 − σ·√T
/// C  = Φ(d1)·S0 − Φ(d2)·K·e^(−rT)
/// ```
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] when `S0`, `K`, `sigma` or `T` is not
/// strictly positive, or `r` is not finite. Extreme magnitudes are not
/// rejected; overflow in `exp` yields `inf` as usual.
#[allow(non_snake_case)]
pub fn black_scholes_call(S0: f64, r: f64, sigma: f64, T: f64, K: f64) -> PricingResult<f64> {
    validate_inputs(S0, r, sigma, T, K)?;
    let (d1, d2) = d1_d2(S0, r, sigma, T, K);
    let price = norm_cdf(d1) * S0 - norm_cdf(d2) * K * (-r * T).exp();
    debug!(S0, r, sigma, T, K, d1, d2, price, "closed-form call price");
    Ok(price)
}

/// Call delta, ∂C/∂S0 = Φ(d1).
#[allow(non_snake_case)]
pub fn black_scholes_call_delta(S0: f64, r: f64, sigma: f64, T: f64, K: f64) -> PricingResult<f64> {
    validate_inputs(S0, r, sigma, T, K)?;
    let (d1, _) = d1_d2(S0, r, sigma, T, K);
    Ok(norm_cdf(d1))
}

/// Call vega, ∂C/∂σ = S0·φ(d1)·√T (per unit of volatility, not per 1%).
#[allow(non_snake_case)]
pub fn black_scholes_call_vega(S0: f64, r: f64, sigma: f64, T: f64, K: f64) -> PricingResult<f64> {
    validate_inputs(S0, r, sigma, T, K)?;
    let (d1, _) = d1_d2(S0, r, sigma, T, K);
    Ok(S0 * norm_pdf(d1) * T.sqrt())
}

/// Volatility at which [`black_scholes_call`] reproduces `price`.
///
/// Uses Brent's method on `[1e-6, 5.0]`. The price must lie strictly inside
/// the no-arbitrage band `(max(S0 − K·e^(−rT), 0), S0)`.
#[allow(non_snake_case)]
pub fn implied_volatility(price: f64, S0: f64, r: f64, T: f64, K: f64) -> PricingResult<f64> {
    validation::positive("price", price)?;
    validation::positive("spot", S0)?;
    validation::finite("rate", r)?;
    validation::positive("expiry", T)?;
    validation::positive("strike", K)?;

    let lower_bound = (S0 - K * (-r * T).exp()).max(0.0);
    if price <= lower_bound || price >= S0 {
        return Err(PricingError::NoImpliedVolatility {
            price,
            reason: format!(
                "outside no-arbitrage band ({:.6}, {:.6})",
                lower_bound, S0
            ),
        });
    }

    let objective = |sigma: f64| {
        let (d1, d2) = d1_d2(S0, r, sigma, T, K);
        norm_cdf(d1) * S0 - norm_cdf(d2) * K * (-r * T).exp() - price
    };

    let mut convergency = SimpleConvergency {
        eps: 1e-12,
        max_iter: 200,
    };
    match find_root_brent(IV_LOWER, IV_UPPER, &objective, &mut convergency) {
        Ok(sigma) => {
            debug!(price, sigma, "implied volatility solved");
            Ok(sigma)
        }
        Err(e) => Err(PricingError::NoImpliedVolatility {
            price,
            reason: format!("root finding failed in [{IV_LOWER}, {IV_UPPER}]: {e:?}"),
        }),
    }
}
