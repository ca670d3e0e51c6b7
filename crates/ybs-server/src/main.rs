//! Yellow Books semantic search server

use clap::Parser;
use ybs_server::run;

/// Command line interface
#[derive(Parser, Debug)]
#[command(name = "ybs")]
#[command(about = "Yellow Books semantic search server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Port to listen on, overriding configuration
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.port).await
}
