use std::path::PathBuf;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use attendance_engine::telemetry;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "attendance-engine",
    about = "Serve the attendance policy and payroll deduction engine over HTTP",
    version
)]
struct Cli {
    /// Path to the engine configuration file
    #[arg(long, default_value = "config/engine.yaml")]
    config: PathBuf,
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The log level lives in the configuration, so the subscriber can only
    // be installed once it has been read.
    let loader = ConfigLoader::load(&cli.config)?;
    telemetry::init(&loader.server().log_level)?;

    let policy = loader.policy();
    info!(
        path = %cli.config.display(),
        office_start_time = %policy.office_start_time,
        grace_period_minutes = policy.grace_period_minutes,
        late_arrivals_per_day = policy.late_arrivals_per_day,
        "Loaded engine configuration"
    );

    let host = cli.host.unwrap_or_else(|| loader.server().host.clone());
    let port = cli.port.unwrap_or(loader.server().port);
    let addr = format!("{}:{}", host, port);

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "attendance engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
