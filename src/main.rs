use anyhow::{Context, Result};
use chrono::{Local, NaiveTime};
use clap::Parser;
use precise_range::{StringTable, logger, parse_instant, precise_diff_with};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "precise-range",
    version,
    about = "Human-readable calendar difference between two dates"
)]
struct Cli {
    /// Start date (YYYY-MM-DD, YYYY-MM-DD HH:MM:SS or RFC 3339)
    from: String,

    /// End date, defaults to today
    to: Option<String>,

    /// JSON file overriding the built-in unit words
    #[arg(long, value_name = "FILE")]
    strings: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let from = parse_instant(&cli.from)
        .with_context(|| format!("Failed to parse start date '{}'", cli.from))?;
    let to = match &cli.to {
        Some(raw) => {
            parse_instant(raw).with_context(|| format!("Failed to parse end date '{raw}'"))?
        }
        None => Local::now().date_naive().and_time(NaiveTime::MIN),
    };

    let strings = match &cli.strings {
        Some(path) => StringTable::from_path(path)
            .with_context(|| format!("Failed to load string table from {}", path.display()))?,
        None => StringTable::german().clone(),
    };

    debug!(%from, %to, "computing precise range");
    println!("{}", precise_diff_with(&strings, from, to));

    Ok(())
}
