use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use w12x_dashboard::api::HttpListingApi;
use w12x_dashboard::config::DashboardConfig;
use w12x_dashboard::controller::{run, Dashboard};
use w12x_dashboard::render::paint::paint_stdout;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, the table owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DashboardConfig::default();
    info!("🚗 W123/W124 diesel dashboard");
    info!("Backend: {}", config.base_url);
    info!("Refreshing every {} minutes", config.refresh_interval.as_secs() / 60);

    let api = HttpListingApi::new(config.clone())?;
    let dashboard = Dashboard::new(Arc::new(api), config);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run(dashboard, stdin, |screen| {
        if let Err(e) = paint_stdout(screen) {
            warn!("Failed to paint dashboard: {}", e);
        }
    })
    .await
}
