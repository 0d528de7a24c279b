//! supermarkt-scanner - Compare supermarket product prices from the terminal

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use supermarkt_scanner::commands::{CommandOutput, SearchCommand, SizesCommand};
use supermarkt_scanner::config::{Config, OutputFormat};
use supermarkt_scanner::filters::SizeSelection;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "supermarkt-scanner",
    version,
    about = "Compare supermarket product prices across stores",
    long_about = "Searches a price-comparison backend and shows matching products from every store side by side, grouped by package size."
)]
struct Cli {
    /// Backend base URL
    #[arg(short, long, global = true, env = "SCANNER_BACKEND")]
    backend: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "SCANNER_PROXY")]
    proxy: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for products
    #[command(alias = "s")]
    Search {
        /// Search query (e.g. "cola zero", "jupiler")
        query: String,

        /// Only show this package size ("all" for every size)
        #[arg(long)]
        size: Option<SizeSelection>,

        /// Show which stores answered
        #[arg(long)]
        status: bool,
    },

    /// List the package sizes available for a query
    Sizes {
        /// Search query
        query: String,
    },
}

fn print_output(output: CommandOutput) {
    if let Some(notice) = &output.notice {
        eprintln!("{}", notice);
    }
    if !output.body.is_empty() {
        println!("{}", output.body);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(backend) = cli.backend {
        config.backend_url = backend;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = Some(timeout);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    match cli.command {
        Commands::Search { query, size, status } => {
            if let Some(size) = size {
                config.size = size;
            }
            config.show_status |= status;

            let cmd = SearchCommand::new(config);
            print_output(cmd.execute(&query).await?);
        }

        Commands::Sizes { query } => {
            let cmd = SizesCommand::new(config);
            print_output(cmd.execute(&query).await?);
        }
    }

    Ok(())
}
