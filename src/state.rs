use garden_client::{ChainClient, SwapService, WalletConnector};
use leptos::prelude::*;
use std::rc::Rc;

/// Reactive wallet state. `connected` is the readiness input the rest of the
/// app subscribes to; the connector itself is an injected handle, installed
/// by the host after mount.
#[derive(Copy, Clone)]
pub struct WalletSignals {
    pub connected: RwSignal<bool>,
    pub connector: RwSignal<Option<Rc<dyn WalletConnector>>, LocalStorage>,
}

impl WalletSignals {
    pub fn new() -> Self {
        Self {
            connected: RwSignal::new(false),
            connector: RwSignal::new_local(None),
        }
    }

    pub fn install(&self, connector: Rc<dyn WalletConnector>) {
        self.connector.set(Some(connector));
    }
}

impl Default for WalletSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the session key has been signed. Flipped by the host once its
/// signing flow completes; the form only ever reads it.
#[derive(Copy, Clone)]
pub struct SignerSignals {
    pub signed: RwSignal<bool>,
}

impl SignerSignals {
    pub fn new() -> Self {
        Self {
            signed: RwSignal::new(false),
        }
    }
}

impl Default for SignerSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Injected service handles: the Garden orderbook client and the
/// Bitcoin-side client. Both start absent; submission and address fetching
/// are no-ops until the host installs them.
#[derive(Copy, Clone)]
pub struct GardenServices {
    pub garden: RwSignal<Option<Rc<dyn SwapService>>, LocalStorage>,
    pub bitcoin: RwSignal<Option<Rc<dyn ChainClient>>, LocalStorage>,
}

impl GardenServices {
    pub fn new() -> Self {
        Self {
            garden: RwSignal::new_local(None),
            bitcoin: RwSignal::new_local(None),
        }
    }

    pub fn set_swap_service(&self, garden: Rc<dyn SwapService>) {
        self.garden.set(Some(garden));
    }

    pub fn set_chain_client(&self, bitcoin: Rc<dyn ChainClient>) {
        self.bitcoin.set(Some(bitcoin));
    }
}

impl Default for GardenServices {
    fn default() -> Self {
        Self::new()
    }
}
