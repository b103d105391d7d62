// src/bin/cli.rs
use clap::Parser;
use ctr_verify::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run(cli::Cli::parse())
}
