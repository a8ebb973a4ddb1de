// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::Echo;

fn main() {
    dioxus::launch(App);
}

/// Desktop shell around the shared echo panel.
#[component]
fn App() -> Element {
    rsx! {
        Echo {}
    }
}
