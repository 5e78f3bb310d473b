use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tareas_core::{SqliteTaskRepository, TaskService};
use tareas_web::{routes, AppContext};

#[derive(Parser)]
#[command(name = "tareas-web")]
#[command(about = "SQL-backed to-do list web server", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = 8000, env = "TAREAS_PORT")]
    port: u16,

    /// Bind address (use 0.0.0.0 for LAN access)
    #[arg(long, default_value = "127.0.0.1", env = "TAREAS_BIND")]
    bind: String,

    /// Path to the SQLite database file (created if missing)
    #[arg(long, default_value = "todo.db", env = "TAREAS_DB")]
    db: PathBuf,

    /// Log level when RUST_LOG is unset (error|warn|info|debug|trace)
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let repo = SqliteTaskRepository::connect(&cli.db).await?;
    let ctx = AppContext::new(TaskService::new(repo));

    let addr: SocketAddr = format!("{}:{}", cli.bind, cli.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("tareas listening on http://{}", addr);
    axum::serve(listener, routes::build_router(ctx)).await?;
    Ok(())
}
