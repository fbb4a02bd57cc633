use clap::Parser;
use petclinic::config::{self, ServiceKind};
use petclinic::server;
use tracing_subscriber::EnvFilter;

/// Pet clinic record services.
#[derive(Parser)]
#[command(name = "petclinic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service to run
    #[arg(value_enum)]
    service: ServiceKind,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env(cli.service)?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.print_summary();

    server::run(config).await
}
