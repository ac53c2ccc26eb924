use account_engine::{ScenarioConfig, core::scenario, logging};
use clap::Parser;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Runs a savings and a current account through a fixed sequence of deposits and withdrawals."
)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();

    logging::init();

    let config = ScenarioConfig::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    scenario::run(&mut out, &config)?;
    out.flush()?;

    Ok(())
}
