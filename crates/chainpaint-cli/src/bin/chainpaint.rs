//! Command-line entry point for chainpaint.

use std::process;

use chainpaint_cli::Args;
use clap::Parser as _;

fn main() {
    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(err) = chainpaint_cli::run(&args) {
        log::error!("{err}");
        process::exit(1);
    }
}
