use serde::{Deserialize, Serialize};

/// The network environment an asset is deployed on. Each swap pair is tagged
/// to one EVM chain and one Bitcoin chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
    EthereumLocalnet,
    EthereumSepolia,
    BitcoinRegtest,
    BitcoinTestnet,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Symbol {
    Wbtc,
    Btc,
}

/// An opaque asset identifier from the orderbook's fixed registry.
///
/// The application never inspects these beyond equality; they are handed
/// straight through to [`SwapService::swap`](crate::SwapService::swap).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    pub chain: Chain,
    pub symbol: Symbol,
    pub decimals: u8,
}

/// The fixed asset registry, keyed by network environment.
pub mod assets {
    pub mod ethereum_localnet {
        use crate::{Asset, Chain, Symbol};

        pub const WBTC: Asset = Asset {
            chain: Chain::EthereumLocalnet,
            symbol: Symbol::Wbtc,
            decimals: 8,
        };
    }

    pub mod ethereum_sepolia {
        use crate::{Asset, Chain, Symbol};

        pub const WBTC: Asset = Asset {
            chain: Chain::EthereumSepolia,
            symbol: Symbol::Wbtc,
            decimals: 8,
        };
    }

    pub mod bitcoin_regtest {
        use crate::{Asset, Chain, Symbol};

        pub const BTC: Asset = Asset {
            chain: Chain::BitcoinRegtest,
            symbol: Symbol::Btc,
            decimals: 8,
        };
    }

    pub mod bitcoin_testnet {
        use crate::{Asset, Chain, Symbol};

        pub const BTC: Asset = Asset {
            chain: Chain::BitcoinTestnet,
            symbol: Symbol::Btc,
            decimals: 8,
        };
    }
}
