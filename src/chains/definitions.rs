use super::{
    BlockExplorer, ChainInfo, Multicall3, NativeCurrency, SupportedChainId, MULTICALL3_ADDRESS,
};

const ETHER: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

pub fn chain_info(chain: SupportedChainId) -> ChainInfo {
    let (name, native_currency, rpc_urls, block_explorer, block_created) = match chain {
        SupportedChainId::Mainnet => (
            "Ethereum",
            ETHER,
            vec!["https://cloudflare-eth.com"],
            explorer("Etherscan", "https://etherscan.io"),
            14_353_601,
        ),
        SupportedChainId::Bsc => (
            "BNB Smart Chain",
            NativeCurrency {
                name: "BNB",
                symbol: "BNB",
                decimals: 18,
            },
            vec!["https://rpc.ankr.com/bsc"],
            explorer("BscScan", "https://bscscan.com"),
            15_921_452,
        ),
        SupportedChainId::Polygon => (
            "Polygon",
            NativeCurrency {
                name: "MATIC",
                symbol: "MATIC",
                decimals: 18,
            },
            vec!["https://polygon-rpc.com"],
            explorer("PolygonScan", "https://polygonscan.com"),
            25_770_160,
        ),
        SupportedChainId::Fantom => (
            "Fantom",
            NativeCurrency {
                name: "Fantom",
                symbol: "FTM",
                decimals: 18,
            },
            vec!["https://rpc.ankr.com/fantom"],
            explorer("FTMScan", "https://ftmscan.com"),
            33_001_987,
        ),
        SupportedChainId::Mantle => (
            "Mantle",
            NativeCurrency {
                name: "MNT",
                symbol: "MNT",
                decimals: 18,
            },
            vec!["https://rpc.mantle.xyz"],
            explorer("Mantle Explorer", "https://mantlescan.xyz"),
            304_717,
        ),
        SupportedChainId::Base => (
            "Base",
            ETHER,
            vec!["https://mainnet.base.org"],
            explorer("Basescan", "https://basescan.org"),
            5_022,
        ),
        SupportedChainId::Mode => (
            "Mode Mainnet",
            ETHER,
            vec!["https://mainnet.mode.network"],
            explorer("Modescan", "https://modescan.io"),
            2_465_882,
        ),
        SupportedChainId::Arbitrum => (
            "Arbitrum One",
            ETHER,
            vec!["https://arb1.arbitrum.io/rpc"],
            explorer("Arbiscan", "https://arbiscan.io"),
            7_654_707,
        ),
        SupportedChainId::Blast => (
            "Blast",
            ETHER,
            vec!["https://rpc.blast.io"],
            explorer("Blastscan", "https://blastscan.io"),
            212_929,
        ),
        SupportedChainId::Bera => (
            "Berachain",
            NativeCurrency {
                name: "BERA Token",
                symbol: "BERA",
                decimals: 18,
            },
            vec!["https://rpc.berachain.com"],
            explorer("Berascan", "https://berascan.com"),
            0,
        ),
    };

    ChainInfo {
        id: chain.id(),
        name,
        native_currency,
        rpc_urls,
        websocket_url: chain.websocket_url(),
        block_explorer,
        multicall3: Multicall3 {
            address: MULTICALL3_ADDRESS,
            block_created,
        },
        testnet: false,
    }
}

fn explorer(name: &'static str, url: &'static str) -> BlockExplorer {
    BlockExplorer { name, url }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bera_metadata() {
        let info = chain_info(SupportedChainId::Bera);
        assert_eq!(info.id, 80094);
        assert_eq!(info.name, "Berachain");
        assert_eq!(info.native_currency.symbol, "BERA");
        assert_eq!(info.rpc_urls, vec!["https://rpc.berachain.com"]);
        assert_eq!(info.block_explorer.url, "https://berascan.com");
        assert_eq!(info.multicall3.block_created, 0);
        assert!(info.websocket_url.is_none());
        assert!(!info.testnet);
    }

    #[test]
    fn test_every_chain_has_rpc_and_explorer() {
        for chain in SupportedChainId::ALL {
            let info = chain_info(chain);
            assert!(!info.rpc_urls.is_empty(), "{} has no rpc", chain);
            assert!(info.block_explorer.url.starts_with("https://"));
            assert_eq!(info.multicall3.address, MULTICALL3_ADDRESS);
        }
    }
}
