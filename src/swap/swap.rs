use super::amounts::{apply_edit, AmountField, AmountState};
use super::direction::Direction;
use super::submit::{permissive_amount, plan_submission, SwapParams};
use crate::components::{InputField, ToggleSwitch};
use crate::error::Error;
use crate::state::{GardenServices, SignerSignals, WalletSignals};
use leptos::{ev, prelude::*};
use tracing::{debug, error, info, warn};

#[component]
pub fn Swap() -> impl IntoView {
    info!("rendering <Swap/>");

    on_cleanup(move || {
        info!("cleaning up <Swap/>");
    });

    let wallet = use_context::<WalletSignals>().expect("wallet signals context missing!");
    let signer = use_context::<SignerSignals>().expect("signer signals context missing!");
    let services = use_context::<GardenServices>().expect("garden services context missing!");

    let amounts = RwSignal::new(AmountState::default());
    let direction = RwSignal::new(Direction::default());
    let receive_address = RwSignal::new(String::default());

    // Readiness is derived, never stored: connected AND signed.
    let ready = Signal::derive(move || wallet.connected.get() && signer.signed.get());

    // -- receive-address auto-fetch

    let fetch_address: Action<(), Result<String, Error>> =
        Action::new_unsync(move |_: &()| async move {
            let Some(bitcoin) = services.bitcoin.get_untracked() else {
                return Err(Error::generic("no chain client installed"));
            };
            bitcoin
                .get_address()
                .await
                .inspect(|address| debug!("fetched receive address: {address}"))
                .inspect_err(|error| error!("address fetch failed: {error}"))
                .map_err(Error::from)
        });

    // One-shot, keyed to the (handle, signed) pair becoming true. The
    // explicit flag keeps a handle swapped in later from re-issuing the
    // fetch and stomping a manual edit.
    let address_fetched = RwSignal::new(false);
    Effect::new(move |_| {
        let has_client = services.bitcoin.with(Option::is_some);
        if has_client && signer.signed.get() && !address_fetched.get_untracked() {
            address_fetched.set(true);
            fetch_address.dispatch(());
        }
    });

    // Fire-and-forget: the fetched address lands whenever it resolves,
    // last writer wins against manual edits.
    Effect::new(move |_| {
        if let Some(Ok(address)) = fetch_address.value().get() {
            receive_address.set(address);
        }
    });

    // -- submission

    let swap: Action<SwapParams, Result<String, Error>> =
        Action::new_unsync(move |params: &SwapParams| {
            let params = params.clone();
            async move {
                let Some(garden) = services.garden.get_untracked() else {
                    return Err(Error::generic("swap service missing"));
                };

                debug!(
                    "submitting swap: {}",
                    serde_json::to_string_pretty(&params).unwrap_or_default()
                );

                garden
                    .swap(
                        params.send_asset,
                        params.receive_asset,
                        params.send_amount,
                        params.receive_amount,
                    )
                    .await
                    .inspect(|order| info!("swap order created: {order}"))
                    .inspect_err(|error| error!("swap failed: {error}"))
                    .map_err(Error::from)
            }
        });

    let handle_swap = move |_: ev::MouseEvent| {
        if swap.pending().get_untracked() {
            warn!("swap already in flight, ignoring");
            return;
        }

        let has_service = services.garden.with_untracked(Option::is_some);
        let Some(params) = plan_submission(
            &amounts.get_untracked(),
            direction.get_untracked(),
            has_service,
            permissive_amount,
        ) else {
            return;
        };

        // Optimistic clear: the form resets as soon as the call is issued,
        // not when it resolves.
        amounts.set(AmountState::default());
        swap.dispatch(params);
    };

    // The only mutation path into the displayed amounts. Destination edits
    // are routed through the same function and ignored there.
    let change_amount = move |field: AmountField, value: String| {
        amounts.set(apply_edit(&amounts.get_untracked(), field, value));
    };

    let toggle_direction = Callback::new(move |_: ()| {
        direction.update(|direction| *direction = direction.toggled());
    });

    let source_amount = Signal::derive(move || amounts.get().source.unwrap_or_default());
    let destination_amount = Signal::derive(move || amounts.get().destination.unwrap_or_default());

    view! {
        <div class="swap-component-middle-section">
            <InputField
                id="wbtc"
                label="Send WBTC"
                value=source_amount
                on_change=Callback::new(move |value: String| {
                    change_amount(AmountField::Source, value)
                })
            />
            <InputField id="btc" label="Receive BTC" value=destination_amount readonly=true />
        </div>
        <hr />
        <div class="swap-component-bottom-section">
            <div>
                <label for="receive-address">"Receive address"</label>
                <div class="input-component">
                    <input
                        id="receive-address"
                        placeholder=move || {
                            if direction.get().is_wbtc_to_btc() {
                                "Enter BTC Address"
                            } else {
                                "Enter ETH Address"
                            }
                        }
                        prop:value=move || receive_address.get()
                        on:input=move |ev| receive_address.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <ToggleSwitch
                checked=Signal::derive(move || direction.get().is_wbtc_to_btc())
                on_toggle=toggle_direction
                left_label="BTC to WBTC"
                right_label="WBTC to BTC"
            />
            <button
                class=move || {
                    format!(
                        "button-{}",
                        if wallet.connected.get() { "white" } else { "black" },
                    )
                }
                disabled=move || !ready.get() || swap.pending().get()
                on:click=handle_swap
            >
                "Swap"
            </button>
        </div>
    }
}
