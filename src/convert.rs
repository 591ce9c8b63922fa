//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use mtsynth_synth::SynthConfig;

use crate::config::ErrorToml;

/// Builds a [`SynthConfig`] from the TOML error configuration.
///
/// An optional seed is forwarded to the synthesizer RNG.
pub fn build_synth_config(error: &ErrorToml, seed: Option<u64>) -> Result<SynthConfig> {
    let mut cfg = SynthConfig::new()
        .with_mean_fraction(error.mean_fraction)
        .with_sigma(error.sigma);
    if let Some(s) = seed {
        cfg = cfg.with_seed(s);
    }
    cfg.validate().context("invalid [error] configuration")?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_convert() {
        let cfg = build_synth_config(&ErrorToml::default(), None).expect("valid");
        assert!((cfg.mean_fraction() - 0.05).abs() < f64::EPSILON);
        assert_eq!(cfg.seed(), None);
    }

    #[test]
    fn seed_is_forwarded() {
        let cfg = build_synth_config(&ErrorToml::default(), Some(3)).expect("valid");
        assert_eq!(cfg.seed(), Some(3));
    }

    #[test]
    fn negative_sigma_rejected() {
        let toml = ErrorToml {
            mean_fraction: 0.05,
            sigma: -1.0,
        };
        let err = build_synth_config(&toml, None).unwrap_err();
        assert!(format!("{err:#}").contains("sigma"));
    }
}
