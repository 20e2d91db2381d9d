//! Client for the external rate service the converter proxies.

use crate::conversion::Conversion;
use crate::currency::Currency;
use crate::ApiError;

/// Fallback base URL when no environment override is present. The hosted
/// instance sleeps when idle, hence the retry tolerance on the client side.
const DEFAULT_BASE: &str = "https://currency-converter-backend-hux8.onrender.com";

/// Connection settings for the rate service.
pub struct RateService {
    base: String,
}

impl RateService {
    /// Creates a `RateService` from environment variables, with a
    /// conservative in-code default.
    ///
    /// # Environment Variables
    /// - `CONVERTER_API_BASE`: absolute URL (or relative proxy path) of the
    ///   rate service, without a trailing slash.
    pub fn from_env() -> Self {
        let base = std::env::var("CONVERTER_API_BASE").unwrap_or_else(|_| DEFAULT_BASE.to_string());
        Self { base }
    }

    /// Creates a `RateService` against an explicit base URL.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// `GET {base}/currencies`, parsed as the registry payload.
    pub async fn currencies(&self) -> Result<Vec<Currency>, ApiError> {
        let url = format!("{}/currencies", self.base);
        let client = reqwest::Client::new();
        let list = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Currency>>()
            .await?;
        Ok(list)
    }

    /// `GET {base}/convert?from=&to=&amount=`, parsed as a [`Conversion`].
    pub async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<Conversion, ApiError> {
        let url = format!("{}/convert", self.base);
        let amount = amount.to_string();
        let client = reqwest::Client::new();
        let conversion = client
            .get(&url)
            .query(&[("from", from), ("to", to), ("amount", &amount)])
            .send()
            .await?
            .error_for_status()?
            .json::<Conversion>()
            .await?;
        Ok(conversion)
    }
}
