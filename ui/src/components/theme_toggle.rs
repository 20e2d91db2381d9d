//! The light/dark theme switch.

#![allow(non_snake_case)]

use api::prefs::UserPrefs;
use dioxus::prelude::*;

use crate::app_state::AppStateMut;
use crate::compat;

/// An icon button that flips the theme and persists the choice on every
/// toggle. The active theme itself is applied by the app root as a CSS class.
#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppStateMut>();
    let dark = (state.dark_mode)();

    let icon = if dark {
        asset!("/assets/icons/night-mode.svg")
    } else {
        asset!("/assets/icons/light-mode.svg")
    };
    let title = if dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    rsx! {
        img {
            class: "theme-toggle",
            src: "{icon}",
            alt: "Toggle theme",
            title: "{title}",
            onclick: move |_| {
                let enabled = !*state.dark_mode.peek();
                state.dark_mode.set(enabled);
                spawn(async move {
                    if !compat::store_prefs(&UserPrefs::new(enabled)).await {
                        dioxus_logger::tracing::warn!("failed to persist theme preference");
                    }
                });
            },
        }
    }
}
