use std::path::PathBuf;

use serde::Deserialize;

/// Top-level mtsynth configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SynthToml {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Error model settings.
    #[serde(default)]
    pub error: ErrorToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default = "default_comment")]
    pub comment: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            comment: default_comment(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("synth_error.dat")
}
fn default_comment() -> String {
    "# Data with a synthetic error".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorToml {
    #[serde(default = "default_mean_fraction")]
    pub mean_fraction: f64,
    #[serde(default = "default_sigma")]
    pub sigma: f64,
}

impl Default for ErrorToml {
    fn default() -> Self {
        Self {
            mean_fraction: default_mean_fraction(),
            sigma: default_sigma(),
        }
    }
}

fn default_mean_fraction() -> f64 {
    mtsynth_synth::DEFAULT_MEAN_FRACTION
}
fn default_sigma() -> f64 {
    mtsynth_synth::DEFAULT_SIGMA
}
