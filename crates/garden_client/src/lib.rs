//! Client-side interfaces to everything the swap form talks to: the EVM
//! wallet, the Bitcoin-side client, and the Garden orderbook. The app only
//! ever sees these traits; concrete connectors are injected by the host.

mod asset;
mod error;

pub use asset::{assets, Asset, Chain, Symbol};
pub use error::Error;

use async_trait::async_trait;

/// An EVM wallet connection, e.g. MetaMask.
///
/// Connection status is tracked reactively by the application; this trait
/// only carries the connect request itself.
#[async_trait(?Send)]
pub trait WalletConnector {
    async fn connect(&self) -> Result<(), Error>;
}

/// A Bitcoin-side handle able to derive a receive address for the current
/// session key.
#[async_trait(?Send)]
pub trait ChainClient {
    async fn get_address(&self) -> Result<String, Error>;
}

/// The swap-execution backend. Amounts are integer base units (×10^8 from
/// display units); asset identifiers come from the fixed registry.
#[async_trait(?Send)]
pub trait SwapService {
    async fn swap(
        &self,
        send_asset: Asset,
        receive_asset: Asset,
        send_amount: u64,
        receive_amount: u64,
    ) -> Result<String, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records every swap request it receives and returns a fixed order id.
    struct RecordingBackend {
        calls: RefCell<Vec<(Asset, Asset, u64, u64)>>,
    }

    impl RecordingBackend {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl SwapService for RecordingBackend {
        async fn swap(
            &self,
            send_asset: Asset,
            receive_asset: Asset,
            send_amount: u64,
            receive_amount: u64,
        ) -> Result<String, Error> {
            self.calls
                .borrow_mut()
                .push((send_asset, receive_asset, send_amount, receive_amount));
            Ok("order-1".to_string())
        }
    }

    #[test]
    fn swap_call_passes_assets_and_base_units_through() {
        let backend = RecordingBackend::new();

        let order = block_on(backend.swap(
            assets::ethereum_localnet::WBTC,
            assets::bitcoin_regtest::BTC,
            200_000_000,
            199_400_000,
        ))
        .unwrap();

        assert_eq!(order, "order-1");
        assert_eq!(
            *backend.calls.borrow(),
            vec![(
                assets::ethereum_localnet::WBTC,
                assets::bitcoin_regtest::BTC,
                200_000_000,
                199_400_000,
            )]
        );
    }

    #[test]
    fn registry_assets_are_distinct_per_environment() {
        assert_ne!(
            assets::ethereum_localnet::WBTC,
            assets::ethereum_sepolia::WBTC
        );
        assert_ne!(assets::bitcoin_regtest::BTC, assets::bitcoin_testnet::BTC);
        assert_eq!(assets::ethereum_localnet::WBTC.symbol, Symbol::Wbtc);
        assert_eq!(assets::bitcoin_regtest::BTC.symbol, Symbol::Btc);
    }

    #[test]
    fn assets_serialize_with_environment_tags() {
        let json = serde_json::to_string(&assets::ethereum_localnet::WBTC).unwrap();
        assert_eq!(
            json,
            r#"{"chain":"ethereum_localnet","symbol":"WBTC","decimals":8}"#
        );
    }
}
