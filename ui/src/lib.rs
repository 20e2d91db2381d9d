// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod retry;
mod screens;

use std::time::Duration;

use api::currency::Currency;
use app_state::AppStateMut;
use components::controls::Container;
use components::dropdown::OutsideClicks;
use components::status_line::StatusLine;
use components::status_line::StatusMessage;
use components::theme_toggle::ThemeToggle;
use retry::FetchProgress;
use screens::converter::ConverterScreen;

/// How many times the startup currency load is attempted before giving up.
const LOAD_ATTEMPTS: u32 = 4;

/// Fixed pause between load attempts. The hosted rate service spins down
/// when idle and can take this long to come back.
const LOAD_RETRY_DELAY: Duration = Duration::from_secs(30);

/// How long the "server is live" notice stays on screen.
const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(3);

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: asset!("/assets/css/converter.css"),
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Create signals for mutable state at the top level of the component.
    let currencies = use_signal(Vec::<Currency>::new);
    let status = use_signal(|| None::<StatusMessage>);
    let dark_mode = use_signal(|| false);

    // Provide the mutable state by passing the already created signals.
    use_context_provider(|| AppStateMut {
        currencies,
        status,
        dark_mode,
    });
    let mut state = use_context::<AppStateMut>();

    // Clicks that bubble all the way up here landed outside every dropdown;
    // each open list subscribes and closes itself.
    let mut outside_clicks = use_signal(|| 0u32);
    use_context_provider(|| OutsideClicks(outside_clicks));

    // Restore the persisted theme choice. Runs independently of the currency
    // load so a slow backend cannot delay it.
    use_future(move || async move {
        if let Some(prefs) = compat::load_prefs().await {
            state.dark_mode.set(prefs.dark_mode());
        }
    });

    use_future(move || async move {
        load_currencies(state).await;
    });

    let dark = (state.dark_mode)();
    let theme_class = if dark { "dark-mode" } else { "light-mode" };
    let theme_color = if dark { "#1e1e1e" } else { "#ffffff" };

    rsx! {
        document::Meta {
            name: "theme-color",
            content: "{theme_color}",
        }
        div {
            class: "app {theme_class}",
            onclick: move |_| outside_clicks.with_mut(|n| *n = n.wrapping_add(1)),
            Container {
                header {
                    class: "app-header",
                    h1 { "Currency Converter" }
                    ThemeToggle {}
                }
                StatusLine {}
                // The dropdowns are useless over an empty registry, so the
                // converter form only mounts once the load has succeeded.
                if !state.currencies.read().is_empty() {
                    ConverterScreen {}
                }
            }
        }
    }
}

/// Populates the shared currency registry, riding out slow backend starts.
async fn load_currencies(mut state: AppStateMut) {
    let mut status = state.status;

    let loaded = retry::fetch_with_retry(
        LOAD_ATTEMPTS,
        LOAD_RETRY_DELAY,
        |_| api::currencies(),
        |progress| match progress {
            FetchProgress::Attempt(1) => status.set(Some(StatusMessage::progress(
                "Waking up the server, this may take a moment...",
            ))),
            FetchProgress::Attempt(n) => status.set(Some(StatusMessage::progress(format!(
                "Server is starting... Retrying attempt {n}..."
            )))),
            FetchProgress::Cleared => status.set(None),
        },
    )
    .await;

    match loaded {
        Ok(list) => {
            dioxus_logger::tracing::info!("currency registry loaded: {} entries", list.len());
            state.currencies.set(list);
            status.set(Some(StatusMessage::success(
                "Server is live! You're ready to convert.",
            )));
            // The notice is transient. Only clear if it is still the one
            // showing, so a later warning is not wiped.
            spawn(async move {
                compat::sleep(SUCCESS_NOTICE_TTL).await;
                let still_success = status.peek().as_ref().is_some_and(|m| m.kind().is_success());
                if still_success {
                    status.set(None);
                }
            });
        }
        Err(e) => {
            dioxus_logger::tracing::warn!("giving up on currency load: {e}");
            status.set(Some(StatusMessage::error(
                "Failed to load currencies. The server might be down. Please try again later.",
            )));
        }
    }
}
