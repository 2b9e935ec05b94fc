use forceclose::{api, config::Config, MarketBook};
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let markets = match config.markets_file.as_deref() {
        Some(path) => match MarketBook::from_json_file(path) {
            Ok(book) => book,
            Err(e) => {
                eprintln!("Failed to load markets: {}", e);
                std::process::exit(1);
            }
        },
        None => MarketBook::default(),
    };

    tracing::info!(
        markets = markets.len(),
        chains = config.supported_chains.len(),
        first_cooldown = config.cooldowns.first_cooldown,
        second_cooldown = config.cooldowns.second_cooldown,
        min_sig_period = config.cooldowns.min_sig_period,
        "configuration loaded"
    );

    let port = config.port;
    let app = api::create_router(api::AppState::new(config, markets));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
