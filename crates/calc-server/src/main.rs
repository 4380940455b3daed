mod config;
mod telemetry;
mod wiring;

use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = config::Config::from_env()?;
    telemetry::init(&config.log_filter)?;

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(addr = %listener.local_addr()?, "trading calculator listening");

    axum::serve(listener, wiring::build_app()).await?;
    Ok(())
}
