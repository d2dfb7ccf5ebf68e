use cardq::config::Config;
use cardq::report::{render_json, render_text};
use cardq::samples::SAMPLE_QUERIES;
use cardq::Extractor;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardq", about = "cardq — inspect how search queries are split into terms")]
struct Cli {
    /// Queries to inspect. Each is reported on its own line.
    queries: Vec<String>,

    /// Run the built-in sample queries instead.
    #[arg(long)]
    samples: bool,

    /// Print one JSON object per query, including highlight patterns.
    #[arg(long)]
    json: bool,

    /// Read settings from this file instead of ~/.config/cardq/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "off" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load config, using defaults");
            Config::defaults()
        }),
    };
    let extractor = Extractor::new(&config.search);
    tracing::debug!(?config, "cardq started");

    let queries: Vec<&str> = if cli.samples {
        SAMPLE_QUERIES.to_vec()
    } else {
        cli.queries.iter().map(String::as_str).collect()
    };

    for query in queries {
        if cli.json {
            println!("{}", render_json(&extractor, query)?);
        } else {
            println!("{}", render_text(&extractor, query));
        }
    }
    Ok(())
}
