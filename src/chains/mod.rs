//! Supported networks and their static metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

mod definitions;

pub use definitions::chain_info;

/// Networks the platform is deployed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum SupportedChainId {
    Mainnet,
    Bsc,
    Polygon,
    Fantom,
    Mantle,
    Base,
    Mode,
    Arbitrum,
    Blast,
    Bera,
}

impl SupportedChainId {
    /// Every supported chain, in registry order.
    pub const ALL: [SupportedChainId; 10] = [
        SupportedChainId::Fantom,
        SupportedChainId::Bsc,
        SupportedChainId::Base,
        SupportedChainId::Polygon,
        SupportedChainId::Arbitrum,
        SupportedChainId::Mainnet,
        SupportedChainId::Mantle,
        SupportedChainId::Blast,
        SupportedChainId::Mode,
        SupportedChainId::Bera,
    ];

    pub fn id(&self) -> u64 {
        match self {
            SupportedChainId::Mainnet => 1,
            SupportedChainId::Bsc => 56,
            SupportedChainId::Polygon => 137,
            SupportedChainId::Fantom => 250,
            SupportedChainId::Mantle => 5000,
            SupportedChainId::Base => 8453,
            SupportedChainId::Mode => 34443,
            SupportedChainId::Arbitrum => 42161,
            SupportedChainId::Blast => 81457,
            SupportedChainId::Bera => 80094,
        }
    }

    /// Websocket RPC endpoint, available on a subset of chains.
    pub fn websocket_url(&self) -> Option<&'static str> {
        match self {
            SupportedChainId::Polygon => Some("wss://polygon.drpc.org"),
            SupportedChainId::Bsc => Some("wss://bsc-rpc.publicnode.com"),
            SupportedChainId::Mantle => Some("wss://mantle-rpc.publicnode.com"),
            SupportedChainId::Base => Some("wss://base-rpc.publicnode.com"),
            SupportedChainId::Blast => Some("wss://blast.drpc.org"),
            SupportedChainId::Arbitrum => Some("wss://arbitrum-one-rpc.publicnode.com"),
            _ => None,
        }
    }

    pub fn info(&self) -> ChainInfo {
        chain_info(*self)
    }
}

impl fmt::Display for SupportedChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("unsupported chain id {0}")]
    Unsupported(u64),
}

impl TryFrom<u64> for SupportedChainId {
    type Error = ChainError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        SupportedChainId::ALL
            .into_iter()
            .find(|chain| chain.id() == id)
            .ok_or(ChainError::Unsupported(id))
    }
}

impl From<SupportedChainId> for u64 {
    fn from(chain: SupportedChainId) -> Self {
        chain.id()
    }
}

/// Chains offered by the client app, in display order.
pub const CLIENT_CHAINS: [SupportedChainId; 8] = [
    SupportedChainId::Polygon,
    SupportedChainId::Bsc,
    SupportedChainId::Mantle,
    SupportedChainId::Base,
    SupportedChainId::Blast,
    SupportedChainId::Mode,
    SupportedChainId::Arbitrum,
    SupportedChainId::Bera,
];

/// Chain selected when the wallet is on an unsupported network.
pub const FALLBACK_CHAIN_ID: SupportedChainId = SupportedChainId::Polygon;

/// Shared Multicall3 deployment address.
pub const MULTICALL3_ADDRESS: &str = "0xcA11bde05977b3631167028862bE2a173976CA11";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockExplorer {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Multicall3 {
    pub address: &'static str,
    pub block_created: u64,
}

/// Chain metadata consumed by wallet and network plumbing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub id: u64,
    pub name: &'static str,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub websocket_url: Option<&'static str>,
    pub block_explorer: BlockExplorer,
    pub multicall3: Multicall3,
    pub testnet: bool,
}

/// Metadata for every supported chain.
pub fn all_chains() -> Vec<ChainInfo> {
    SupportedChainId::ALL.iter().map(SupportedChainId::info).collect()
}

/// Metadata for `chains`, preserving their order.
pub fn app_chains(chains: &[SupportedChainId]) -> Vec<ChainInfo> {
    chains.iter().map(SupportedChainId::info).collect()
}
