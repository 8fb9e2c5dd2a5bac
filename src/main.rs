use tracing_subscriber::EnvFilter;

use fowazz::config::Config;
use fowazz::routes::configure_routes;
use fowazz::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    config.warn_missing();

    let state = AppState::from_config(&config);
    let routes = configure_routes(state, &config.frontend_origins);

    tracing::info!(
        port = config.port,
        max_connections = config.max_connections,
        "starting Fowazz server"
    );

    warp::serve(routes).run(([127, 0, 0, 1], config.port)).await;
}
