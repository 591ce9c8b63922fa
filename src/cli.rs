use std::path::PathBuf;

use clap::Parser;

/// Assign synthetic errors to magnetotelluric impedance data.
#[derive(Parser)]
#[command(
    name = "mtsynth",
    version,
    about = "Assign synthetic errors to ModEM impedance data"
)]
pub struct Cli {
    /// Path to the input ModEM data file.
    pub input: PathBuf,

    /// Output data file (default: synth_error.dat).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to an optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
