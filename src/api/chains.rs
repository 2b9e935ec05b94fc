use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::chains::{app_chains, ChainInfo, SupportedChainId};
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainsResponse {
    pub chains: Vec<ChainInfo>,
    pub fallback_chain_id: u64,
}

pub async fn list_chains(State(state): State<AppState>) -> Json<ChainsResponse> {
    Json(ChainsResponse {
        chains: app_chains(&state.config.supported_chains),
        fallback_chain_id: state.config.fallback_chain.id(),
    })
}

pub async fn get_chain(
    Path(chain_id): Path<u64>,
    State(state): State<AppState>,
) -> Result<Json<ChainInfo>, AppError> {
    let chain = SupportedChainId::try_from(chain_id)?;
    if !state.config.supported_chains.contains(&chain) {
        return Err(AppError::NotFound(format!(
            "chain {} is not enabled",
            chain_id
        )));
    }
    Ok(Json(chain.info()))
}
