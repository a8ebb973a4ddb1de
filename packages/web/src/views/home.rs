//! Landing page hosting the echo panel.

use dioxus::prelude::*;
use ui::Echo;

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "home",
            h1 { "Echo Client" }
            p { class: "tagline",
                "Send some text to the server and see it echoed back."
            }
            Echo {}
        }
    }
}
