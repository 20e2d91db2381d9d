use serde::Deserialize;
use serde::Serialize;

/// Represents all user prefs. Persisted by the host environment: browser
/// local storage on web, a JSON file on native.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    dark_mode: bool,
}

impl UserPrefs {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light_mode() {
        assert!(!UserPrefs::default().dark_mode());
    }
}
