use anyhow::{Context, Result};
use clap::Parser;
use poker_hands::rounds::{tally_reader, OnInvalid};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(version = poker_hands::VERSION, about = "Count two-player five-card poker wins.")]
struct Cli {
    /// File with one round per line: ten cards, the first five for player 1.
    path: PathBuf,
    /// Skip malformed lines instead of stopping at the first one.
    #[clap(long)]
    skip_invalid: bool,
    /// Log every round.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let on_invalid = if cli.skip_invalid { OnInvalid::Skip } else { OnInvalid::Abort };

    let file =
        File::open(&cli.path).with_context(|| format!("cannot open {}", cli.path.display()))?;
    let tally = tally_reader(BufReader::new(file), on_invalid)
        .with_context(|| format!("cannot tally {}", cli.path.display()))?;

    println!("Player 1: {}", tally.player_one);
    println!("Player 2: {}", tally.player_two);
    Ok(())
}
