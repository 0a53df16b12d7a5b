mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::ExodusConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        },
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = ExodusConfig::load(cli.config.as_deref())?;
    let clock = config.clock(cli.mtc)?;
    let command = cli.command.as_ref().unwrap_or(&Command::Now);
    commands::run(command, &clock)
}
