//! Synthesize command: read a ModEM file, assign synthetic errors, write it out.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use mtsynth_modem::{read_modem, write_modem};
use mtsynth_synth::synthesize_errors;

use crate::cli::Cli;
use crate::config::SynthToml;
use crate::convert;

/// Run the load -> synthesize -> write pipeline.
pub fn run(cli: Cli) -> Result<()> {
    let _cmd = info_span!("synthesize").entered();

    // 1. Load optional TOML config
    let config = match cli.config {
        Some(ref config_path) => {
            let toml_str = std::fs::read_to_string(config_path)
                .with_context(|| format!("failed to read config: {}", config_path.display()))?;
            toml::from_str::<SynthToml>(&toml_str).context("failed to parse config TOML")?
        }
        None => SynthToml::default(),
    };

    // 2. Merge CLI flags over the config file
    let seed = cli.seed.or(config.seed);
    let output = cli.output.unwrap_or(config.output.path);
    let synth_cfg = convert::build_synth_config(&config.error, seed)?;

    // 3. Read input
    info!(path = %cli.input.display(), "reading ModEM data");
    let mut data = read_modem(&cli.input)
        .with_context(|| format!("failed to read ModEM data: {}", cli.input.display()))?;

    // 4. Assign synthetic errors
    let mut rng = synth_cfg.rng();
    let summary = synthesize_errors(&mut data, &synth_cfg, &mut rng)
        .context("synthetic error assignment failed")?;
    info!(
        n_pairs = summary.n_pairs(),
        min = summary.min(),
        max = summary.max(),
        "errors synthesized"
    );

    // 5. Write output only after every pair succeeded
    info!(path = %output.display(), "writing ModEM data");
    write_modem(&output, &data, &config.output.comment)
        .with_context(|| format!("failed to write ModEM data: {}", output.display()))?;

    Ok(())
}
