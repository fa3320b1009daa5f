mod config;
mod wiring;

use std::error::Error;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = config::Config::from_env()?;
    let app = wiring::build_app(&config)?;
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("quote proxy listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
