//! Command-line interface for spiral-matrix.
//!
//! Fetches a URL, extracts the square matrix from the response body, and
//! prints it in counter-clockwise spiral order.
//!
//! Usage:
//!   spiral-matrix `<url>` [--timeout `<secs>`] [--verbose]
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use spiral_matrix::{spiral_from_url, BigUint, FetchConfig, HttpFetcher};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "spiral-matrix", version, about = "Read a square matrix from a URL in counter-clockwise spiral order")]
struct Cli {
    /// URL whose response body holds the matrix
    url: String,

    /// Overall deadline for the request, in seconds
    #[arg(short, long, default_value_t = FetchConfig::default().timeout.as_secs())]
    timeout: u64,

    /// Log request progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = FetchConfig::default().with_timeout(Duration::from_secs(cli.timeout));
    let fetcher = match HttpFetcher::new(config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match spiral_from_url(&fetcher, &cli.url).await {
        Ok(spiral) => {
            println!("{}", render(&spiral));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Formats the spiral as a bracketed, comma-separated list.
fn render(spiral: &[BigUint]) -> String {
    let values: Vec<String> = spiral.iter().map(BigUint::to_string).collect();
    format!("[{}]", values.join(", "))
}

/// Installs a stderr subscriber honoring `RUST_LOG`, defaulting to `warn`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
