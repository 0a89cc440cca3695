//! Bolster MCP Server entry point.

use bolster_mcp::calendar::AvailabilityChecker;
use bolster_mcp::{profile, run_server, BolsterServer, Config};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Bolster MCP: curated resources and availability tools for Andrew Bolster
#[derive(Parser, Debug)]
#[command(name = "bolster-mcp")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the MCP server (default)
    Serve {
        /// Transport: "stdio" or "http"
        #[arg(short, long)]
        transport: Option<String>,
        /// HTTP port (http transport only)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Check calendar availability once and print the summary
    Availability {
        /// Start date in YYYY-MM-DD format (defaults to today)
        #[arg(short, long)]
        start_date: Option<String>,
        /// Number of days to check ahead
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// List the resource URIs this server exposes
    Resources,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Availability { start_date, days }) => {
            run_availability(&args.config, start_date, days).await
        }
        Some(Command::Resources) => {
            for resource in profile::resources() {
                println!("{}  {}", resource.uri, resource.description);
            }
            Ok(())
        }
        Some(Command::Serve { transport, port }) => {
            run_mcp_server(&args.config, transport, port, args.json_logs).await
        }
        None => run_mcp_server(&args.config, None, None, args.json_logs).await,
    }
}

/// Run the availability evaluator once from the terminal.
async fn run_availability(
    config_path: &Option<String>,
    start_date: Option<String>,
    days: Option<u32>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI commands
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(config_path)?;
    let checker = AvailabilityChecker::new(&config.calendar)
        .map_err(bolster_mcp::BolsterError::Availability)?;
    let summary = checker.check(start_date.as_deref(), days).await?;
    println!("{summary}");
    Ok(())
}

/// Run the MCP server with the selected transport.
async fn run_mcp_server(
    config_path: &Option<String>,
    transport: Option<String>,
    port: Option<u16>,
    json_logs: bool,
) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Bolster MCP Server v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(config_path)?;

    // Override transport from CLI args only if explicitly provided
    if let Some(ref t) = transport {
        config.server.transport = match t.as_str() {
            "http" => bolster_mcp::config::TransportType::Http,
            _ => bolster_mcp::config::TransportType::Stdio,
        };
    }
    if let Some(p) = port {
        config.server.http_port = p;
    }

    tracing::info!(
        transport = ?config.server.transport,
        feed_url = %config.calendar.feed_url,
        "Configuration loaded"
    );

    let server = BolsterServer::new(config.clone())?;
    run_server(server, config.server.transport, config.server.http_port).await?;

    Ok(())
}

fn load_config(config_path: &Option<String>) -> anyhow::Result<Config> {
    let config = if let Some(path) = config_path {
        Config::from_file(path)?
    } else {
        Config::load()?
    };
    Ok(config)
}
