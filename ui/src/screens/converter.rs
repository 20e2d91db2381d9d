//! The conversion form: two searchable currency fields, an amount, and the
//! result line.

#![allow(non_snake_case)]

use std::rc::Rc;

use api::conversion::Conversion;
use dioxus::html::MountedData;
use dioxus::prelude::*;

use crate::app_state::AppStateMut;
use crate::components::controls::{Button, Card};
use crate::components::dropdown::CurrencyDropdown;
use crate::components::status_line::StatusMessage;

#[component]
pub fn ConverterScreen() -> Element {
    let mut state = use_context::<AppStateMut>();

    let mut from_value = use_signal(String::new);
    let mut to_value = use_signal(String::new);
    let mut amount_value = use_signal(String::new);
    let mut result_text = use_signal(|| None::<String>);

    let mut from_open = use_signal(|| false);
    let mut to_open = use_signal(|| false);
    let mut swap_rotated = use_signal(|| false);

    let from_handle = use_signal(|| None::<Rc<MountedData>>);
    let to_handle = use_signal(|| None::<Rc<MountedData>>);

    let mut convert = move || {
        // A fresh request always starts with a clean result area.
        result_text.set(None);

        let request = match validate(&from_value.read(), &to_value.read(), &amount_value.read()) {
            Ok(request) => request,
            Err(e) => {
                state.status.set(Some(StatusMessage::warning(e.to_string())));
                return;
            }
        };

        state
            .status
            .set(Some(StatusMessage::progress("Converting...")));

        // One attempt per button press; failures here are terminal and leave
        // the registry and both dropdowns untouched.
        spawn(async move {
            match api::convert(request.from.clone(), request.to.clone(), request.amount).await {
                Ok(conversion) => {
                    result_text.set(Some(format_result(&request, &conversion)));
                    state.status.set(None);
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("conversion request failed: {e}");
                    result_text.set(None);
                    state.status.set(Some(StatusMessage::error(
                        "Failed to fetch conversion. Please try again.",
                    )));
                }
            }
        });
    };

    rsx! {
        Card {
            div {
                class: "converter-row",
                CurrencyDropdown {
                    value: from_value,
                    open: from_open,
                    registry: state.currencies,
                    placeholder: "From currency",
                    handle: from_handle,
                    tab_forward: to_handle,
                    sibling_open: to_open,
                }
                button {
                    class: if swap_rotated() { "swap-btn rotate" } else { "swap-btn" },
                    r#type: "button",
                    title: "Swap currencies",
                    onclick: move |_| {
                        swap_rotated.toggle();
                        let previous_from = from_value.peek().clone();
                        let previous_to = to_value.peek().clone();
                        from_value.set(previous_to);
                        to_value.set(previous_from);
                        from_open.set(false);
                        to_open.set(false);
                    },
                    "⇅"
                }
                CurrencyDropdown {
                    value: to_value,
                    open: to_open,
                    registry: state.currencies,
                    placeholder: "To currency",
                    handle: to_handle,
                    tab_back: from_handle,
                    sibling_open: from_open,
                }
            }
            label {
                class: "amount-field",
                "Amount"
                input {
                    r#type: "number",
                    min: "0",
                    placeholder: "Enter amount",
                    value: "{amount_value}",
                    oninput: move |evt| amount_value.set(evt.value()),
                }
            }
            Button {
                on_click: move |_| convert(),
                "Convert"
            }
            if let Some(text) = result_text() {
                p {
                    class: "result",
                    "{text}"
                }
            }
        }
    }
}

/// A validated conversion request, ready to send.
#[derive(Debug, Clone, PartialEq)]
struct ConversionRequest {
    from: String,
    to: String,
    /// The text exactly as the user typed it, echoed back in the result.
    amount_raw: String,
    amount: f64,
}

/// Why a conversion was not attempted. The messages are shown verbatim as
/// status warnings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
enum ValidationError {
    #[error("Please select both 'from' and 'to' currencies.")]
    MissingCurrency,
    #[error("Please enter a valid amount greater than zero.")]
    InvalidAmount,
}

/// Checks the three raw field values in order, stopping at the first
/// problem. No request leaves the app unless this passes.
fn validate(from: &str, to: &str, amount: &str) -> Result<ConversionRequest, ValidationError> {
    if from.is_empty() || to.is_empty() {
        return Err(ValidationError::MissingCurrency);
    }

    let parsed = amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
        .ok_or(ValidationError::InvalidAmount)?;

    Ok(ConversionRequest {
        from: from.to_string(),
        to: to.to_string(),
        amount_raw: amount.to_string(),
        amount: parsed,
    })
}

/// Renders the result line, e.g. `100 USD = 92.50 EUR (Rate: 0.925)`.
fn format_result(request: &ConversionRequest, conversion: &Conversion) -> String {
    format!(
        "{} {} = {:.2} {} (Rate: {})",
        request.amount_raw, request.from, conversion.converted_amount, request.to, conversion.rate
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_currencies_are_caught_before_the_amount() {
        assert_eq!(
            validate("", "EUR", "100").unwrap_err(),
            ValidationError::MissingCurrency
        );
        // `to` missing wins over the bad amount; validation short-circuits.
        assert_eq!(
            validate("USD", "", "0").unwrap_err(),
            ValidationError::MissingCurrency
        );
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        for amount in ["0", "-3", "", "abc", "NaN"] {
            assert_eq!(
                validate("USD", "EUR", amount).unwrap_err(),
                ValidationError::InvalidAmount,
                "amount {amount:?} should be rejected",
            );
        }
    }

    #[test]
    fn a_valid_request_keeps_the_raw_amount_text() {
        let request = validate("USD", "EUR", "100").unwrap();
        assert_eq!(request.amount, 100.0);
        assert_eq!(request.amount_raw, "100");
    }

    #[test]
    fn result_line_matches_the_display_format() {
        let request = validate("USD", "EUR", "100").unwrap();
        let conversion = Conversion {
            converted_amount: 92.5,
            rate: 0.925,
        };
        assert_eq!(
            format_result(&request, &conversion),
            "100 USD = 92.50 EUR (Rate: 0.925)"
        );
    }
}
