mod cli;
mod config;
mod convert;
mod logging;
mod synth_cmd;

use std::process;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = synth_cmd::run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
