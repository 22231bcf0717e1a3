//! Folio - portfolio and blog front end
//!
//! Serves the compiled web UI and the runtime settings it reads on start.

mod server;

use clap::{Parser, Subcommand};
use folio_core::config::FolioConfig;
use server::FolioServer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = folio_core::VERSION)]
#[command(about = "Portfolio and blog front end", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    config: Option<String>,

    /// Bind address
    #[arg(long, env = "FOLIO_BIND_ADDRESS")]
    bind: Option<String>,

    /// Port number
    #[arg(short, long, env = "FOLIO_PORT")]
    port: Option<u16>,

    /// Directory holding the compiled UI bundle
    #[arg(long, env = "FOLIO_DIST_DIR")]
    dist_dir: Option<String>,

    /// Base URL of the content backend API
    #[arg(long, env = "FOLIO_API_BASE")]
    api_base: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FOLIO_LOG_LEVEL")]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web UI (default)
    Serve,

    /// Print the effective configuration as TOML
    Config,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => FolioConfig::from_file(path)?,
        None => FolioConfig::from_env(),
    };
    apply_overrides(&mut config, &cli);
    config.validate()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Version => {
            println!("folio {}", folio_core::VERSION);
        }
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
        Commands::Serve => {
            init_logging(&config);
            FolioServer::new(config).run().await?;
        }
    }

    Ok(())
}

fn apply_overrides(config: &mut FolioConfig, cli: &Cli) {
    if let Some(bind) = &cli.bind {
        config.server.bind_address = bind.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dist_dir) = &cli.dist_dir {
        config.server.dist_dir = dist_dir.into();
    }
    if let Some(api_base) = &cli.api_base {
        config.backend.api_base = api_base.clone();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
}

fn init_logging(config: &FolioConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
