//! Command-line entry point for the hospital appointment tracker.

use env_logger::Env;
use hospital::{HospitalCli, HospitalConfig, Registry};
use log::info;
use std::io;

fn main() {
    let config = HospitalConfig::default();
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_filter.as_str()))
        .init();

    let registry = Registry::from_config(&config);
    info!("Starting with {} doctor(s)", registry.doctors().len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut cli = HospitalCli::new(registry, stdin.lock(), stdout.lock());

    if let Err(e) = cli.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
