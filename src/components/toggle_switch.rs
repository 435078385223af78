use leptos::prelude::*;

/// The direction slider. `checked` corresponds to the default direction
/// (wrapped token → native chain).
#[component]
pub fn ToggleSwitch(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    left_label: &'static str,
    right_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="toggle-switch-container">
            <span class=move || if checked.get() { "" } else { "active" }>{left_label}</span>
            <label class="toggle-switch">
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |_| on_toggle.run(())
                />
                <span class="slider round"></span>
            </label>
            <span class=move || if checked.get() { "active" } else { "" }>{right_label}</span>
        </div>
    }
}
