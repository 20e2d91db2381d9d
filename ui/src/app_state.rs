//! Defines the mutable, reactive state for the application's UI.

use api::currency::Currency;
use dioxus::prelude::*;

use crate::components::status_line::StatusMessage;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The currency registry. Empty until the first successful load, then
    /// replaced wholesale; both dropdown widgets read from it.
    pub currencies: Signal<Vec<Currency>>,
    /// The one message currently occupying the status area, if any.
    pub status: Signal<Option<StatusMessage>>,
    /// Whether the dark theme is active.
    pub dark_mode: Signal<bool>,
}
