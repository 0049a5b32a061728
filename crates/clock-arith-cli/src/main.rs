use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Add an hours:minutes duration to a 12-hour clock time.
#[derive(Parser, Debug)]
#[command(name = "add-time", version, about)]
struct Cli {
    /// Start time, e.g. "3:00 PM"
    start: String,

    /// Duration to add as H:MM, e.g. "24:20" (minutes may exceed 59)
    duration: String,

    /// Weekday of the start time, any letter case
    #[arg(short, long)]
    day: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "clock_arith=debug,add_time=debug"
    } else {
        "clock_arith=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let added = clock_arith::add_time_detailed(&cli.start, &cli.duration, cli.day.as_deref())
        .with_context(|| format!("cannot add '{}' to '{}'", cli.duration, cli.start))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&added).context("failed to serialize result")?;
        println!("{json}");
    } else {
        println!("{added}");
    }

    Ok(())
}
