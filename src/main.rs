use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rerankd::{serve, Container, ServerConfig};

#[derive(Parser)]
#[command(name = "rerankd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Port to listen on (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Cross-encoder model to load (overrides TRANSFORMER_MODEL)
    #[arg(short, long)]
    model: Option<String>,

    /// Serve deterministic mock scores instead of loading a model
    #[arg(long)]
    mock_scoring: bool,

    /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
    #[arg(long)]
    public: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }
    config.mock_scoring = cli.mock_scoring;
    config.public = cli.public;

    info!("Scoring model: {}", config.model);
    let container = Arc::new(Container::new(config)?);

    serve(container).await
}
