mod app;
mod finder;
mod routes;
mod services;
mod types;
mod utils;

use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = app::AppConfig::from_env();
    info!(
        overpass = %config.overpass_host,
        routing = %config.routing_host,
        "Starting app on {}...",
        config.bind_addr
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app::gen_app(config)).await
}
