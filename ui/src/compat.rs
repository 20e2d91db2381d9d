// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use api::prefs::UserPrefs;
    use std::time::Duration;

    const PREFS_KEY: &str = "converter.prefs";

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Reads the persisted preferences from browser local storage.
    pub async fn load_prefs() -> Option<UserPrefs> {
        let raw = local_storage()?.get_item(PREFS_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    /// Writes the preferences to browser local storage. Returns `false` when
    /// storage is unavailable (private browsing, quota).
    pub async fn store_prefs(prefs: &UserPrefs) -> bool {
        let Some(storage) = local_storage() else {
            return false;
        };
        match serde_json::to_string(prefs) {
            Ok(raw) => storage.set_item(PREFS_KEY, &raw).is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use api::prefs::UserPrefs;
    use std::path::PathBuf;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn prefs_path() -> PathBuf {
        std::env::var_os("CONVERTER_PREFS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("converter-prefs.json"))
    }

    /// Reads the persisted preferences from the prefs file.
    pub async fn load_prefs() -> Option<UserPrefs> {
        let raw = tokio::fs::read_to_string(prefs_path()).await.ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Writes the preferences to the prefs file.
    pub async fn store_prefs(prefs: &UserPrefs) -> bool {
        let Ok(raw) = serde_json::to_string(prefs) else {
            return false;
        };
        tokio::fs::write(prefs_path(), raw).await.is_ok()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn prefs_round_trip_through_file() {
            let path = std::env::temp_dir().join("converter-prefs-test.json");
            std::env::set_var("CONVERTER_PREFS_PATH", &path);

            assert!(store_prefs(&UserPrefs::new(true)).await);
            let loaded = load_prefs().await.unwrap();
            assert!(loaded.dark_mode());

            std::env::remove_var("CONVERTER_PREFS_PATH");
            let _ = std::fs::remove_file(path);
        }
    }
}
