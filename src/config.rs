use crate::error::{PricingError, PricingResult};
use crate::params::{MarketParameters, OptionContract};

/// Monte Carlo simulation settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of standard normal draws per estimate
    #[cfg_attr(feature = "serde", serde(default = "default_num_draws"))]
    pub num_draws: usize,

    /// Random seed for reproducibility (None = seed from entropy)
    #[cfg_attr(feature = "serde", serde(default = "default_seed"))]
    pub seed: Option<u64>,

    /// Pair every draw `z` with `-z`
    #[cfg_attr(feature = "serde", serde(default))]
    pub antithetic: bool,

    /// Histogram bin count for simulated price plots
    #[cfg_attr(feature = "serde", serde(default = "default_bins"))]
    pub bins: usize,

    /// Verbosity level (0=silent, 1=summary, 2=detailed)
    #[cfg_attr(feature = "serde", serde(default))]
    pub verbosity: u8,

    /// Warn when an estimate's standard error exceeds this value
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_std_error: Option<f64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_draws: default_num_draws(),
            seed: default_seed(),
            antithetic: false,
            bins: default_bins(),
            verbosity: 0, // Silent by default for library use
            max_std_error: None,
        }
    }
}

impl SimulationConfig {
    /// One million draws, the sample size used for convergence checks
    pub fn production() -> Self {
        Self {
            num_draws: 1_000_000,
            max_std_error: Some(0.05),
            ..Self::default()
        }
    }

    /// Fast configuration for development and testing
    pub fn fast() -> Self {
        Self {
            num_draws: 100_000,
            bins: 40,
            verbosity: 1,
            ..Self::default()
        }
    }

    /// High-precision configuration with antithetic pairing
    pub fn research() -> Self {
        Self {
            num_draws: 10_000_000,
            antithetic: true,
            bins: 100,
            verbosity: 2,
            max_std_error: Some(0.005),
            ..Self::default()
        }
    }

    /// Minimal configuration for quick validation and debugging
    pub fn minimal() -> Self {
        Self {
            num_draws: 1_000,
            bins: 20,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> PricingResult<()> {
        if self.num_draws == 0 {
            return Err(PricingError::InvalidConfig(
                "num_draws must be at least 1".to_string(),
            ));
        }
        if self.bins == 0 {
            return Err(PricingError::InvalidConfig(
                "bins must be at least 1".to_string(),
            ));
        }
        if let Some(tol) = self.max_std_error {
            if !(tol.is_finite() && tol > 0.0) {
                return Err(PricingError::InvalidConfig(format!(
                    "max_std_error must be finite and > 0, got {tol}"
                )));
            }
        }
        Ok(())
    }
}

/// A complete pricing scenario: market, contract and simulation settings.
///
/// Loadable from TOML:
///
/// ```toml
/// [market]
/// spot = 100.0
/// rate = 0.03
/// volatility = 0.4
/// expiry = 0.25
///
/// [contract]
/// strike = 105.0
///
/// [simulation]
/// num_draws = 500000
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingConfig {
    pub market: MarketParameters,
    pub contract: OptionContract,
    #[cfg_attr(feature = "serde", serde(default))]
    pub simulation: SimulationConfig,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            market: MarketParameters {
                spot: 100.0,
                rate: 0.03,
                volatility: 0.4,
                expiry: 0.25,
            },
            contract: OptionContract { strike: 105.0 },
            simulation: SimulationConfig::default(),
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> PricingResult<()> {
        self.market.validate()?;
        self.contract.validate()?;
        self.simulation.validate()
    }

    /// Parse and validate a TOML document.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }
}

fn default_num_draws() -> usize {
    1_000_000
}

fn default_seed() -> Option<u64> {
    Some(123456)
}

fn default_bins() -> usize {
    50
}
