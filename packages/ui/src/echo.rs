//! Echo panel component.

use std::rc::Rc;

use dioxus::prelude::*;

use api::{EchoClient, EchoConfig, HttpTransport, SubmitError};
use echo_core::{BLANK_INPUT_NOTICE, DisplayState, render_display};

const ECHO_CSS: Asset = asset!("/assets/styling/echo.css");

/// Echo panel: posts the field contents to the echo endpoint and shows
/// the response (or failure) in the output area.
#[component]
pub fn Echo() -> Element {
    let mut input = use_signal(String::new);
    let mut display = use_signal(|| DisplayState::Hidden);

    // One client per mounted panel. The token issuer lives as long as
    // the component, so overlapping submissions resolve to the latest.
    let client: Rc<EchoClient<HttpTransport>> = use_hook(|| {
        let config = EchoConfig::from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default echo config");
            EchoConfig::default()
        });
        Rc::new(EchoClient::from_config(&config))
    });

    let submit = move |_| {
        let client = Rc::clone(&client);
        let text = input();
        spawn(async move {
            let outcome = client.submit(&text, move |state| display.set(state)).await;
            if let Err(SubmitError::BlankInput) = outcome {
                // Blocking notification; the output area is left untouched.
                let _ = document::eval(&format!("alert('{BLANK_INPUT_NOTICE}')"));
            }
        });
    };

    let state = display();
    let rendered = render_display(&state);

    rsx! {
        document::Link { rel: "stylesheet", href: ECHO_CSS }
        div {
            id: "echo",
            h4 { "Echo Test" }
            input {
                id: "echo-input",
                placeholder: "Type here to echo...",
                value: "{input}",
                oninput: move |event| input.set(event.value()),
            }
            button {
                id: "echo-send",
                onclick: submit,
                "Send"
            }

            if state.is_visible() {
                div {
                    id: "echo-result",
                    dangerous_inner_html: "{rendered}",
                }
            }
        }
    }
}
