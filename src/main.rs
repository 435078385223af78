use garden_swap_leptos::App;
use leptos::prelude::*;
use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    fmt()
        .with_writer(
            MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG),
        )
        .with_max_level(tracing::Level::DEBUG)
        // For some reason, if we don't do this in the browser, we get
        // a runtime error.
        .without_time()
        .init();

    mount_to_body(App);
}
