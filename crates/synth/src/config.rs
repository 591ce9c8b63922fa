//! Configuration for synthetic error generation.

use crate::error::SynthError;

/// Default fraction of the base error used as the noise mean.
pub const DEFAULT_MEAN_FRACTION: f64 = 0.05;

/// Default standard deviation of the injected noise.
pub const DEFAULT_SIGMA: f64 = 1.0;

/// Parameters of the synthetic error draw.
///
/// Each (period, station) pair receives one sample from
/// `Normal(base * mean_fraction, sigma)`.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Multiplier applied to the base error to get the noise mean.
    mean_fraction: f64,
    /// Standard deviation of the noise (0 = no noise).
    sigma: f64,
    /// Optional RNG seed for reproducibility.
    seed: Option<u64>,
}

impl SynthConfig {
    /// Creates a configuration with the default fraction and sigma.
    pub fn new() -> Self {
        Self {
            mean_fraction: DEFAULT_MEAN_FRACTION,
            sigma: DEFAULT_SIGMA,
            seed: None,
        }
    }

    /// Sets the mean fraction.
    pub fn with_mean_fraction(mut self, fraction: f64) -> Self {
        self.mean_fraction = fraction;
        self
    }

    /// Sets the noise standard deviation.
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Sets the RNG seed for reproducibility.
    ///
    /// [`synthesize_errors`](crate::synthesize_errors) draws from the RNG it
    /// is given and does not read this field; use [`SynthConfig::rng`] to get
    /// an RNG seeded from it.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the mean fraction.
    pub fn mean_fraction(&self) -> f64 {
        self.mean_fraction
    }

    /// Returns the noise standard deviation.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the RNG seed, if set.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Builds an RNG from the configured seed, or from OS entropy if unset.
    pub fn rng(&self) -> rand::rngs::StdRng {
        crate::make_rng(self.seed)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SynthError> {
        if !self.mean_fraction.is_finite() || self.mean_fraction < 0.0 {
            return Err(SynthError::InvalidConfig {
                reason: format!(
                    "mean_fraction must be finite and >= 0, got {}",
                    self.mean_fraction
                ),
            });
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(SynthError::InvalidConfig {
                reason: format!("sigma must be finite and >= 0, got {}", self.sigma),
            });
        }
        Ok(())
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self::new()
    }
}
