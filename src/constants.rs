use garden_client::{assets, Asset};

/// Flat fee taken by the swap backend: 0.3%.
pub const SWAP_FEE_RATE: f64 = 0.003;

/// Both sides of the pair quote in 8 fractional digits (satoshi precision).
pub const BTC_DECIMALS: u8 = 8;

/// The two fixed assets this form transacts, selected by network feature.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AssetPair {
    pub wbtc: Asset,
    pub btc: Asset,
}

#[cfg(not(feature = "testnet"))]
pub const ASSET_PAIR: AssetPair = AssetPair {
    wbtc: assets::ethereum_localnet::WBTC,
    btc: assets::bitcoin_regtest::BTC,
};

#[cfg(feature = "testnet")]
pub const ASSET_PAIR: AssetPair = AssetPair {
    wbtc: assets::ethereum_sepolia::WBTC,
    btc: assets::bitcoin_testnet::BTC,
};
