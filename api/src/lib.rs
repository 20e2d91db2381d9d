//! This crate contains the shared wire types and fullstack server functions.
//!
//! The browser client never talks to the rate service directly; it calls the
//! server functions below, which proxy to the configured backend.

pub mod backend;
pub mod conversion;
pub mod currency;
pub mod prefs;

use backend::RateService;
use conversion::Conversion;
use currency::Currency;
use dioxus::prelude::*;

pub type ApiError = anyhow::Error;

/// Fetches the full list of currencies known to the rate service.
///
/// A single attempt: any non-2xx response or malformed body surfaces as an
/// error, and the caller decides whether to retry.
#[get("/api/currencies")]
pub async fn currencies() -> Result<Vec<Currency>, ApiError> {
    let service = RateService::from_env();
    let list = service.currencies().await?;
    dioxus_logger::tracing::info!("rate service returned {} currencies", list.len());
    Ok(list)
}

/// Converts `amount` from one currency to another via the rate service.
#[get("/api/convert")]
pub async fn convert(from: String, to: String, amount: f64) -> Result<Conversion, ApiError> {
    let service = RateService::from_env();
    Ok(service.convert(&from, &to, amount).await?)
}
