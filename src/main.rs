use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use wedgefetch::config::PipelineConfig;
use wedgefetch::pipeline;

const DEFAULT_URL: &str =
    "https://wwwmpa.mpa-garching.mpg.de/galform/virgo/hubble/deepwedge.tar.gz";

/// Fetch the Deep Wedge galaxy-cluster catalog and convert it to CSV.
#[derive(Parser)]
#[command(name = "wedgefetch", version)]
struct Cli {
    /// Output CSV file
    #[arg(default_value = "deepwedge.csv")]
    outfile: PathBuf,

    /// URL of the catalog dump, or a path to a local copy
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    clobber: bool,

    /// Log at debug level (RUST_LOG still wins if set)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    let env =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let config = PipelineConfig {
        source: cli.url,
        outfile: cli.outfile,
        clobber: cli.clobber,
    };

    let client = Client::new();
    let summary = pipeline::run(&client, &config).await?;
    info!(
        records = summary.records,
        "wrote {}",
        summary.outfile.display()
    );
    Ok(())
}
