use leptos::{ev::MouseEvent, prelude::*};
use tracing::{debug, error, info};

mod components;
pub mod constants;
mod error;
pub mod state;
pub mod swap;
pub mod utils;

pub use error::Error;

use state::{GardenServices, SignerSignals, WalletSignals};
use swap::Swap;
use utils::alert;

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Global Contexts. The host installs concrete connector/service handles
    // into these after mount; everything starts disconnected and empty.
    provide_context(WalletSignals::new());
    provide_context(SignerSignals::new());
    provide_context(GardenServices::new());

    let wallet = use_context::<WalletSignals>().expect("wallet signals context missing!");
    let signer = use_context::<SignerSignals>().expect("signer signals context missing!");

    Effect::new(move |_| {
        debug!(
            "wallet connected?: {}, session signed?: {}",
            wallet.connected.get(),
            signer.signed.get()
        )
    });

    // Actions

    let connect_wallet_action: Action<(), bool> =
        Action::new_unsync_with_value(Some(false), move |_: &()| async move {
            let Some(connector) = wallet.connector.get_untracked() else {
                alert("wallet not found");
                wallet.connected.set(false);
                return false;
            };

            debug!("Trying to connect wallet...");
            match connector.connect().await {
                Ok(()) => {
                    wallet.connected.set(true);
                    debug!("wallet is connected");
                    true
                }
                Err(e) => {
                    wallet.connected.set(false);
                    error!("{}", Error::Wallet(e.to_string()));
                    false
                }
            }
        });

    // on:click handlers

    let connect_wallet = move |_: MouseEvent| {
        connect_wallet_action.dispatch(());
    };

    view! {
        <div class="swap-component">
            <div class="swap-component-top-section">
                <span class="swap-title">"Swap"</span>
                <button
                    class=move || {
                        format!(
                            "connect-metamask button-{}",
                            if wallet.connected.get() { "black" } else { "white" },
                        )
                    }
                    on:click=connect_wallet
                    disabled=connect_wallet_action.pending()
                >
                    {move || {
                        if wallet.connected.get() { "Connected" } else { "Connect Metamask" }
                    }}
                </button>
            </div>
            <hr />
            <Swap />
        </div>
    }
}
