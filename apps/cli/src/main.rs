use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sample questions from a packaged deck archive.
#[derive(Parser, Debug)]
#[command(name = "deck-sampler", version, about)]
struct Cli {
    /// Path to the deck archive (.apkg).
    deck_path: PathBuf,

    /// Number of cards to sample.
    #[arg(long, default_value_t = 10)]
    samples: usize,

    /// Go through every card in the deck.
    #[arg(long, conflicts_with = "samples")]
    all: bool,

    /// Log load and sample counts.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let requested = if cli.all { usize::MAX } else { cli.samples };
    deck_sampler::run(&cli.deck_path, requested)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
