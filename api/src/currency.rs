//! Defines the currency record served by the rate service.

use serde::Deserialize;
use serde::Serialize;

/// One entry of the currency registry.
///
/// Records are immutable once fetched. Uniqueness of `code` is the rate
/// service's responsibility; this side only displays what it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code, e.g. "USD".
    pub code: String,
    /// Full display name, e.g. "US Dollar".
    pub name: String,
}

impl Currency {
    /// The one-line label shown in dropdown rows, e.g. "USD - US Dollar".
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_joins_code_and_name() {
        let usd = Currency {
            code: "USD".into(),
            name: "US Dollar".into(),
        };
        assert_eq!(usd.label(), "USD - US Dollar");
    }

    #[test]
    fn deserializes_registry_payload() {
        let list: Vec<Currency> =
            serde_json::from_str(r#"[{"code":"USD","name":"US Dollar"},{"code":"EUR","name":"Euro"}]"#)
                .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].code, "USD");
        assert_eq!(list[1].name, "Euro");
    }
}
