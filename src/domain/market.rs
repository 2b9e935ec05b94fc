//! Market metadata and a read-only lookup book.

use crate::domain::MarketId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Static market metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: MarketId,
    pub name: String,
    pub symbol: String,
    pub quantity_precision: u32,
}

#[derive(Debug, Error)]
pub enum MarketBookError {
    #[error("failed to read markets file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid markets file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Markets indexed by id.
#[derive(Debug, Clone, Default)]
pub struct MarketBook {
    markets: HashMap<MarketId, Market>,
}

impl MarketBook {
    pub fn new(markets: Vec<Market>) -> Self {
        Self {
            markets: markets.into_iter().map(|m| (m.id, m)).collect(),
        }
    }

    /// Load a JSON array of markets.
    pub fn from_json_file(path: &str) -> Result<Self, MarketBookError> {
        let content = std::fs::read_to_string(path).map_err(|source| MarketBookError::Io {
            path: path.to_string(),
            source,
        })?;
        let markets: Vec<Market> =
            serde_json::from_str(&content).map_err(|source| MarketBookError::Parse {
                path: path.to_string(),
                source,
            })?;
        Ok(Self::new(markets))
    }

    pub fn get(&self, id: MarketId) -> Option<&Market> {
        self.markets.get(&id)
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}
