//! HSH router
//!
//! ```text
//!   BASE_URL / config file
//!          │
//!          ▼
//!   ┌─────────────┐    ┌──────────────┐    ┌──────────────┐
//!   │   config    │───▶│  WebHistory  │───▶│    Router    │
//!   └─────────────┘    └──────────────┘    │ + RouteTable │
//!                                          └──────┬───────┘
//!                                                 │
//!                        ┌────────────────────────┼──────────────┐
//!                        ▼                        ▼              ▼
//!                    `serve`                  `routes`       `resolve`
//!               (history-mode host)        (print table)   (one URL)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use hsh_router::config::{load_config, load_from_env, AppConfig};
use hsh_router::lifecycle::{signals, Shutdown};
use hsh_router::observability::init_logging;
use hsh_router::{AppServer, Router};

#[derive(Parser)]
#[command(name = "hsh-router")]
#[command(about = "Route table and history-mode host for the HSH app", long_about = None)]
struct Cli {
    /// TOML config file; defaults plus BASE_URL when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the app shell for every route
    Serve,
    /// List routes with their hrefs
    Routes,
    /// Show which route a URL resolves to
    Resolve { url: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config: AppConfig = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_from_env()?,
    };
    init_logging(&config.observability.log_level);

    match cli.command {
        Commands::Serve => {
            let listener = TcpListener::bind(&config.listener.bind_address).await?;
            let shutdown = Shutdown::new();
            let server = AppServer::new(config);

            let rx = shutdown.subscribe();
            let signal_shutdown = shutdown.clone();
            tokio::spawn(async move {
                signals::trigger_on_ctrl_c(&signal_shutdown).await;
            });

            server.run(listener, rx).await?;
            tracing::info!("Shutdown complete");
        }
        Commands::Routes => {
            let router = Router::from_config(&config);
            for route in router.table() {
                let href = router.href_for(&route.name)?;
                println!("{:<10} {:<12} {:<12} {}", route.name, route.path, route.view, href);
            }
        }
        Commands::Resolve { url } => {
            let router = Router::from_config(&config);
            match router.resolve(&url) {
                Some(resolved) => println!(
                    "{} -> {} ({})",
                    url,
                    resolved.route.name,
                    resolved.route.view
                ),
                None => {
                    eprintln!("{}: no matching route", url);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
