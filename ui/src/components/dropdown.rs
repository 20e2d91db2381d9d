//! The searchable currency dropdown.
//!
//! Filtering and keyboard navigation operate on a plain in-memory
//! [`ListModel`]; the component only projects that model into the DOM.

#![allow(non_snake_case)]

use std::collections::HashMap;
use std::rc::Rc;

use api::currency::Currency;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::html::input_data::keyboard_types::Modifiers;
use dioxus::html::MountedData;
use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;

/// Bumped by the app root whenever a click bubbles up past every widget;
/// each open dropdown subscribes and closes itself in response.
#[derive(Clone, Copy)]
pub struct OutsideClicks(pub Signal<u32>);

/// The rendered rows plus the keyboard highlight, kept apart from the DOM
/// so navigation can be exercised without a browser.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct ListModel {
    items: Vec<Currency>,
    highlight: Option<usize>,
}

impl ListModel {
    /// Substring match, case-insensitive, over code OR name.
    pub fn filter(registry: &[Currency], search: &str) -> Vec<Currency> {
        let needle = search.to_lowercase();
        registry
            .iter()
            .filter(|c| {
                c.code.to_lowercase().contains(&needle) || c.name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Replaces the rendered rows wholesale. Any highlight is stale against
    /// a new row set and is dropped.
    pub fn set_items(&mut self, items: Vec<Currency>) {
        self.items = items;
        self.highlight = None;
    }

    pub fn items(&self) -> &[Currency] {
        &self.items
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn highlighted(&self) -> Option<&Currency> {
        self.highlight.and_then(|i| self.items.get(i))
    }

    /// Moves the highlight down one row, clamped to the last row.
    pub fn highlight_next(&mut self) {
        let Some(last) = self.items.len().checked_sub(1) else {
            return;
        };
        self.highlight = Some(match self.highlight {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    /// Moves the highlight up one row, clamped to the first row. A widget
    /// with nothing highlighted stays that way.
    pub fn highlight_prev(&mut self) {
        if let Some(i) = self.highlight {
            self.highlight = Some(i.saturating_sub(1));
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CurrencyDropdownProps {
    /// Signal backing the input field's text; a selection writes the
    /// chosen currency's code into it.
    pub value: Signal<String>,
    /// Whether the list is showing. Owned by the screen so actions like
    /// swapping can close it from outside.
    pub open: Signal<bool>,
    /// The shared currency registry.
    pub registry: Signal<Vec<Currency>>,
    pub placeholder: String,
    /// Where this widget registers its own input element, for siblings to
    /// focus programmatically.
    pub handle: Signal<Option<Rc<MountedData>>>,
    /// Input focused when Tab is pressed. None for the last widget in the
    /// sequence.
    #[props(optional)]
    pub tab_forward: Option<Signal<Option<Rc<MountedData>>>>,
    /// Input focused when Shift+Tab is pressed on the last widget, wrapping
    /// back to the first field.
    #[props(optional)]
    pub tab_back: Option<Signal<Option<Rc<MountedData>>>>,
    /// The sibling widget's open flag; focusing this widget closes it.
    #[props(optional)]
    pub sibling_open: Option<Signal<bool>>,
}

pub fn CurrencyDropdown(mut props: CurrencyDropdownProps) -> Element {
    let mut model = use_signal(ListModel::default);
    // Mounted handles of rendered rows, keyed by currency code. Entries for
    // rows that were filtered out go stale; scrolling them is a no-op.
    let mut row_handles = use_signal(HashMap::<String, Rc<MountedData>>::new);

    let mut value = props.value;
    let mut open = props.open;
    let registry = props.registry;

    let dismiss = use_context::<OutsideClicks>().0;
    use_effect(move || {
        dismiss();
        open.set(false);
    });

    let items = model.read().items().to_vec();
    let highlight = model.read().highlight();

    rsx! {
        div {
            class: "dropdown",
            input {
                class: "dropdown-input",
                r#type: "text",
                placeholder: "{props.placeholder}",
                value: "{value}",
                autocomplete: "off",
                spellcheck: "false",
                onmounted: move |evt| props.handle.set(Some(evt.data.clone())),
                // Clicking the input must not count as an outside click.
                onclick: move |evt| evt.stop_propagation(),
                onfocus: move |_| {
                    if let Some(mut sibling) = props.sibling_open {
                        sibling.set(false);
                    }
                    // Show the whole registry, unfiltered, regardless of any
                    // text already in the field.
                    model.with_mut(|m| m.set_items(registry.read().clone()));
                    open.set(true);
                },
                oninput: move |evt| {
                    let text = evt.value();
                    let filtered = ListModel::filter(&registry.read(), &text);
                    open.set(!filtered.is_empty());
                    model.with_mut(|m| m.set_items(filtered));
                    value.set(text);
                },
                onkeydown: move |evt| {
                    match evt.key() {
                        Key::ArrowDown => {
                            evt.prevent_default();
                            model.with_mut(|m| m.highlight_next());
                            scroll_to_highlight(model, row_handles);
                        }
                        Key::ArrowUp => {
                            evt.prevent_default();
                            model.with_mut(|m| m.highlight_prev());
                            scroll_to_highlight(model, row_handles);
                        }
                        Key::Enter => {
                            evt.prevent_default();
                            // No-op while the list is hidden or nothing is
                            // highlighted.
                            if open() {
                                let selected = model.read().highlighted().cloned();
                                if let Some(currency) = selected {
                                    value.set(currency.code.clone());
                                    open.set(false);
                                }
                            }
                        }
                        Key::Tab => {
                            let shift = evt.modifiers().contains(Modifiers::SHIFT);
                            if !shift {
                                if let Some(next) = props.tab_forward {
                                    evt.prevent_default();
                                    focus(next);
                                }
                            } else if props.tab_forward.is_none() {
                                if let Some(first) = props.tab_back {
                                    evt.prevent_default();
                                    focus(first);
                                }
                            }
                        }
                        _ => {}
                    }
                },
            }
            if open() {
                div {
                    class: "dropdown-list",
                    role: "listbox",
                    // Clicks on the list (rows included) stay inside the
                    // widget.
                    onclick: move |evt| evt.stop_propagation(),
                    for (index, currency) in items.into_iter().enumerate() {
                        div {
                            key: "{currency.code}",
                            class: if highlight == Some(index) { "dropdown-item highlight" } else { "dropdown-item" },
                            role: "option",
                            onmounted: {
                                let code = currency.code.clone();
                                move |evt: Event<MountedData>| {
                                    row_handles.write().insert(code.clone(), evt.data.clone());
                                }
                            },
                            onclick: {
                                let code = currency.code.clone();
                                move |_| {
                                    value.set(code.clone());
                                    open.set(false);
                                }
                            },
                            "{currency.label()}"
                        }
                    }
                }
            }
        }
    }
}

/// Focuses the input registered under `target`, if it has mounted.
fn focus(target: Signal<Option<Rc<MountedData>>>) {
    if let Some(el) = target.peek().clone() {
        spawn(async move {
            el.set_focus(true).await.ok();
        });
    }
}

/// Brings the highlighted row into view after keyboard navigation.
fn scroll_to_highlight(
    model: Signal<ListModel>,
    row_handles: Signal<HashMap<String, Rc<MountedData>>>,
) {
    let Some(code) = model.peek().highlighted().map(|c| c.code.clone()) else {
        return;
    };
    let Some(row) = row_handles.peek().get(&code).cloned() else {
        return;
    };
    spawn(async move {
        row.scroll_to(ScrollBehavior::Instant).await.ok();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(code: &str, name: &str) -> Currency {
        Currency {
            code: code.into(),
            name: name.into(),
        }
    }

    fn registry() -> Vec<Currency> {
        vec![
            currency("USD", "US Dollar"),
            currency("EUR", "Euro"),
            currency("GBP", "British Pound"),
        ]
    }

    #[test]
    fn empty_search_keeps_the_full_registry() {
        assert_eq!(ListModel::filter(&registry(), ""), registry());
    }

    #[test]
    fn filter_matches_code_or_name_case_insensitively() {
        let filtered = ListModel::filter(&registry(), "eu");
        assert_eq!(filtered, vec![currency("EUR", "Euro")]);

        let by_name = ListModel::filter(&registry(), "POUND");
        assert_eq!(by_name, vec![currency("GBP", "British Pound")]);

        assert!(ListModel::filter(&registry(), "zzz").is_empty());
    }

    #[test]
    fn highlight_walks_down_and_clamps_at_the_last_row() {
        let mut model = ListModel::default();
        model.set_items(registry());
        assert_eq!(model.highlight(), None);

        model.highlight_next();
        assert_eq!(model.highlight(), Some(0));
        model.highlight_next();
        model.highlight_next();
        assert_eq!(model.highlight(), Some(2));
        // Clamped; repeated presses stay on the last row.
        model.highlight_next();
        assert_eq!(model.highlight(), Some(2));
        assert_eq!(model.highlighted(), Some(&currency("GBP", "British Pound")));
    }

    #[test]
    fn highlight_walks_up_and_clamps_at_the_first_row() {
        let mut model = ListModel::default();
        model.set_items(registry());

        // Nothing highlighted: ArrowUp stays inert.
        model.highlight_prev();
        assert_eq!(model.highlight(), None);

        model.highlight_next();
        model.highlight_next();
        model.highlight_prev();
        assert_eq!(model.highlight(), Some(0));
        model.highlight_prev();
        assert_eq!(model.highlight(), Some(0));
    }

    #[test]
    fn repopulating_resets_the_highlight() {
        let mut model = ListModel::default();
        model.set_items(registry());
        model.highlight_next();
        assert_eq!(model.highlight(), Some(0));

        model.set_items(ListModel::filter(&registry(), "eu"));
        assert_eq!(model.highlight(), None);
        assert_eq!(model.items().len(), 1);
    }

    #[test]
    fn empty_list_never_gains_a_highlight() {
        let mut model = ListModel::default();
        model.set_items(Vec::new());
        model.highlight_next();
        model.highlight_next();
        assert_eq!(model.highlight(), None);
        assert_eq!(model.highlighted(), None);
    }
}
