use axum::extract::State;
use axum::Json;

use super::AppState;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Reports what the service loaded at startup.
pub async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ready",
        "markets": state.markets.len(),
        "chains": state.config.supported_chains.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::{ForceCooldowns, MarketBook};

    fn state() -> AppState {
        let config = Config {
            port: 0,
            cooldowns: ForceCooldowns::new(1, 1, 1),
            supported_chains: crate::chains::CLIENT_CHAINS.to_vec(),
            fallback_chain: crate::chains::FALLBACK_CHAIN_ID,
            markets_file: None,
        };
        AppState::new(config, MarketBook::default())
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_ready_reports_loaded_data() {
        let Json(body) = ready(State(state())).await;
        assert_eq!(body["status"], "ready");
        assert_eq!(body["markets"], 0);
        assert_eq!(body["chains"], 8);
    }
}
