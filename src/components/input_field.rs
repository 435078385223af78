use leptos::prelude::*;

/// A labeled amount input with the asset tag on the right. Read-only fields
/// (the computed destination amount) simply omit the change callback.
#[component]
pub fn InputField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] readonly: bool,
    #[prop(optional, into)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id>{label}</label>
            <div class="input-component">
                <input
                    id=id
                    placeholder="0"
                    type="number"
                    readonly=readonly
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        if let Some(on_change) = on_change {
                            on_change.run(event_target_value(&ev));
                        }
                    }
                />
                <button>{id.to_uppercase()}</button>
            </div>
        </div>
    }
}
