use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use feedsnap::config::FetchConfig;
use feedsnap::feed::FeedFetcher;
use feedsnap::{FeedRequest, Limits, Pipeline};

#[derive(Parser, Debug)]
#[command(
    name = "feedsnap",
    about = "Fetch an RSS/Atom feed and print a filtered, sorted snapshot as JSON"
)]
struct Args {
    /// URL of the feed to fetch (http, https, or file)
    feed_url: String,

    /// Maximum number of items to return after filtering (default 10)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=500))]
    max_items: Option<u64>,

    /// Keep items published on or after this date (ISO 8601)
    #[arg(long, value_name = "DATE")]
    from_date: Option<String>,

    /// Keep items published on or before this date (ISO 8601)
    #[arg(long, value_name = "DATE")]
    to_date: Option<String>,

    /// Optional TOML config file with fetch settings (timeouts, user agent)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure JSON.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => FetchConfig::load(path)?,
        None => FetchConfig::default(),
    };

    let request = FeedRequest {
        feed_url: args.feed_url,
        max_items: args.max_items.map(|n| n as usize),
        from_date: args.from_date,
        to_date: args.to_date,
    };

    tracing::info!(
        feed_url = %request.feed_url,
        max_items = ?request.max_items,
        from_date = ?request.from_date,
        to_date = ?request.to_date,
        "Executing feed request"
    );

    let fetcher = FeedFetcher::new(&config)?;
    let pipeline = Pipeline::new(fetcher, Limits::default());

    match pipeline.run(&request).await {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
