//! Heat map CLI.
//!
//! `heatmap render` fetches the dataset once and writes an HTML, SVG or PNG
//! file; `heatmap serve` renders the chart for every HTTP request.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use heatmap::config::HeatmapConfig;
use heatmap::fetch::{DatasetClient, DatasetSource};
use heatmap::output::{render_chart, OutputFormat};
use heatmap::server::{run_server, AppState};

#[derive(Parser, Debug)]
#[command(name = "heatmap")]
#[command(about = "Global temperature variance heat map renderer")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "HEATMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the dataset once and write the chart to a file
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,

        /// Output path (default: heatmap.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the chart over HTTP, rendering on every page load
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Listen address
        #[arg(short, long, env = "HEATMAP_LISTEN_ADDR")]
        listen: Option<String>,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Read the dataset from a local JSON file instead of the network
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Dataset URL
    #[arg(long, env = "HEATMAP_DATA_URL")]
    url: Option<String>,
}

impl SourceArgs {
    fn resolve(&self, config: &HeatmapConfig) -> DatasetSource {
        match (&self.input, &self.url) {
            (Some(path), _) => DatasetSource::File(path.clone()),
            (None, Some(url)) => DatasetSource::Url(url.clone()),
            (None, None) => DatasetSource::Url(config.source.url.clone()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let config = HeatmapConfig::load(cli.config.as_deref())?;
    let renderer = config
        .chart
        .renderer()
        .context("Invalid chart configuration")?;

    match cli.command {
        Commands::Render {
            source,
            format,
            output,
        } => {
            let source = source.resolve(&config);
            let output =
                output.unwrap_or_else(|| PathBuf::from(format!("heatmap.{}", format.extension())));

            info!(%source, format = ?format, output = %output.display(), "Rendering heat map");

            let client = DatasetClient::new(source, config.source.timeout())?;
            let dataset = client.load().await.context("Failed to load dataset")?;
            let chart = render_chart(&renderer, &dataset, format)?;

            tokio::fs::write(&output, &chart.bytes)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;

            info!(
                cells = chart.summary.cells,
                skipped = chart.summary.skipped,
                bytes = chart.bytes.len(),
                output = %output.display(),
                "Heat map written"
            );
        }
        Commands::Serve { source, listen } => {
            let source = source.resolve(&config);
            let listen = listen.unwrap_or_else(|| config.server.listen.clone());
            let addr: SocketAddr = listen
                .parse()
                .with_context(|| format!("Invalid listen address: {}", listen))?;

            let client = DatasetClient::new(source, config.source.timeout())?;
            let state = Arc::new(AppState::new(client, renderer));
            run_server(state, addr).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_comes_from_flag_only() {
        let cli = Cli::try_parse_from(["heatmap", "render"]).unwrap();
        assert_eq!(cli.log_level, "info");

        let cli = Cli::try_parse_from(["heatmap", "--log-level", "debug", "render"]).unwrap();
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_input_file_wins_over_url() {
        let cli = Cli::try_parse_from([
            "heatmap",
            "render",
            "--input",
            "data.json",
            "--url",
            "https://example.com/data.json",
        ])
        .unwrap();
        let Commands::Render { source, .. } = cli.command else {
            panic!("expected render command");
        };

        assert_eq!(
            source.resolve(&HeatmapConfig::default()),
            DatasetSource::File(PathBuf::from("data.json"))
        );
    }
}
