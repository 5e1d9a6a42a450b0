use anyhow::Result;
use clap::{Parser, Subcommand};

/// saiyana - Saiyana Logistics marketing site
#[derive(Parser)]
#[command(name = "saiyana")]
#[command(about = "Marketing site and quote-request relay for Saiyana Logistics", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit a contact message or quote request to a running server
    Submit(saiyana::cli::SubmitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = saiyana::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    saiyana::observability::init_logging(&config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => saiyana::cli::serve(config, host, port).await,
        Commands::Submit(args) => saiyana::cli::submit(args).await,
    }
}
