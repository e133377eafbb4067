//! linexml CLI binary.

use anyhow::Result;
use linexml::{cli::Cli, output};
use tracing_subscriber::EnvFilter;

/// Main entry point for the linexml CLI.
///
/// Uses tokio's current_thread runtime; the conversion is a single sequential pass.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=linexml_records=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("linexml=info,linexml_records=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting linexml");

    let cli = Cli::parse_args();
    let config = cli.output_config();

    if let Err(e) = cli.execute(&config).await {
        eprintln!("{}", output::error(&e.to_string(), &config));
        std::process::exit(1);
    }

    tracing::debug!("linexml completed successfully");
    Ok(())
}
