//! The conversion result returned by the rate service.

use serde::Deserialize;
use serde::Serialize;

/// The outcome of one conversion request.
///
/// The backend speaks camelCase; field names are mapped accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    /// The amount expressed in the target currency.
    pub converted_amount: f64,
    /// The exchange rate that was applied.
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_payload() {
        let conversion: Conversion =
            serde_json::from_str(r#"{"convertedAmount":92.5,"rate":0.925}"#).unwrap();
        assert_eq!(
            conversion,
            Conversion {
                converted_amount: 92.5,
                rate: 0.925,
            }
        );
    }

    #[test]
    fn rejects_payload_without_rate() {
        assert!(serde_json::from_str::<Conversion>(r#"{"convertedAmount":92.5}"#).is_err());
    }
}
