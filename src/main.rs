use anyhow::Result;
use clap::Parser;
use grocery_price_api::config::Config;
use grocery_price_api::server;
use tracing_subscriber::EnvFilter;

/// Grocery price API server.
#[derive(Parser)]
#[command(name = "grocery-price-api")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(long)]
    listen: Option<String>,

    /// Log format (`text` or `json`), overrides `LOG_FORMAT`
    #[arg(long)]
    log_format: Option<String>,

    /// Disable per-IP rate limiting
    #[arg(long)]
    no_rate_limit: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    if cli.no_rate_limit {
        config.rate_limit_enabled = false;
    }
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
