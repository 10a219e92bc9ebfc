//! Value types describing the market and the contract being priced.
//!
//! Both types are plain `Copy` values. The constructors enforce the invariants
//! shared by every pricer (positive spot and strike, non-negative volatility
//! and expiry); the closed-form pricer additionally rejects zero volatility and
//! zero expiry at call time.

use crate::error::{validation, PricingResult};

/// Market state under geometric Brownian motion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters {
    /// Spot price of the underlying, S₀
    pub spot: f64,
    /// Risk-free rate, r (as decimal)
    pub rate: f64,
    /// Volatility, σ (as decimal, e.g. 0.4 for 40%)
    pub volatility: f64,
    /// Time to expiry in years, T
    pub expiry: f64,
}

impl MarketParameters {
    /// Create validated market parameters.
    pub fn new(spot: f64, rate: f64, volatility: f64, expiry: f64) -> PricingResult<Self> {
        let params = Self {
            spot,
            rate,
            volatility,
            expiry,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the invariants. Fields are public, so values built with struct
    /// literal syntax or deserialized from config are re-checked here.
    pub fn validate(&self) -> PricingResult<()> {
        validation::positive("spot", self.spot)?;
        validation::finite("rate", self.rate)?;
        validation::non_negative("volatility", self.volatility)?;
        validation::non_negative("expiry", self.expiry)?;
        Ok(())
    }

    /// Copy with a different risk-free rate.
    pub fn with_rate(&self, rate: f64) -> PricingResult<Self> {
        Self::new(self.spot, rate, self.volatility, self.expiry)
    }

    /// Copy with a different volatility.
    pub fn with_volatility(&self, volatility: f64) -> PricingResult<Self> {
        Self::new(self.spot, self.rate, volatility, self.expiry)
    }

    /// Copy with a different time to expiry.
    pub fn with_expiry(&self, expiry: f64) -> PricingResult<Self> {
        Self::new(self.spot, self.rate, self.volatility, expiry)
    }

    /// Deterministic forward S₀·e^(rT); every terminal price when σ = 0.
    pub fn forward(&self) -> f64 {
        self.spot * (self.rate * self.expiry).exp()
    }
}

/// A European call contract.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Strike price, K
    pub strike: f64,
}

impl OptionContract {
    pub fn new(strike: f64) -> PricingResult<Self> {
        let contract = Self { strike };
        contract.validate()?;
        Ok(contract)
    }

    pub fn validate(&self) -> PricingResult<()> {
        validation::positive("strike", self.strike)
    }

    /// Intrinsic value max(S − K, 0) at a given underlying price.
    pub fn intrinsic_value(&self, underlying: f64) -> f64 {
        (underlying - self.strike).max(0.0)
    }
}
