//! The shared status area: a single line of transient progress, success,
//! warning, or error text.

#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::app_state::AppStateMut;

/// What flavor of notice is showing; drives the icon and styling.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum StatusKind {
    Progress,
    Success,
    Warning,
    Error,
}

impl StatusKind {
    fn icon(&self) -> &'static str {
        match self {
            Self::Progress => "⚙️",
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Error => "❌",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            Self::Progress => "status-progress",
            Self::Success => "status-success",
            Self::Warning => "status-warning",
            Self::Error => "status-error",
        }
    }
}

/// One user-facing notice. Plain text; the icon comes from the kind.
#[derive(Clone, PartialEq, Debug)]
pub struct StatusMessage {
    kind: StatusKind,
    text: String,
}

impl StatusMessage {
    pub fn progress(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Progress,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Renders whatever message currently occupies the status area. Always
/// present in the layout so messages do not shift the page when they appear.
#[component]
pub fn StatusLine() -> Element {
    let state = use_context::<AppStateMut>();
    let message = state.status.read().clone();

    rsx! {
        p {
            class: "status-line",
            "aria-live": "polite",
            if let Some(message) = message {
                span {
                    class: "{message.kind().css_class()}",
                    "{message.kind().icon()} {message.text()}"
                }
            }
        }
    }
}
