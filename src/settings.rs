//! Player preferences
//!
//! Persisted in LocalStorage. Game rules are fixed constants and never live
//! here.

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Use the high-contrast palette
    pub high_contrast: bool,
    /// Show the tick counter in the HUD
    pub show_ticks: bool,
    /// Let the autopilot steer
    pub demo_mode: bool,
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "car_racer_settings";

    /// Parse stored settings, falling back to defaults on bad data.
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn toggle_demo_mode(&mut self) {
        self.demo_mode = !self.demo_mode;
    }

    pub fn toggle_high_contrast(&mut self) {
        self.high_contrast = !self.high_contrast;
    }

    pub fn toggle_show_ticks(&mut self) {
        self.show_ticks = !self.show_ticks;
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match serde_json::to_string(self) {
                Ok(json) => {
                    if storage.set_item(Self::STORAGE_KEY, &json).is_ok() {
                        log::info!("Settings saved");
                    }
                }
                Err(e) => log::warn!("Could not serialize settings: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_all_off() {
        let settings = Settings::default();
        assert!(!settings.high_contrast);
        assert!(!settings.show_ticks);
        assert!(!settings.demo_mode);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"demo_mode":true}"#);
        assert!(settings.demo_mode);
        assert!(!settings.high_contrast);
        assert!(!settings.show_ticks);
    }

    #[test]
    fn test_corrupt_json_falls_back() {
        assert_eq!(Settings::from_json("{not json"), Settings::default());
        assert_eq!(Settings::from_json(r#"{"demo_mode":"yes"}"#), Settings::default());
    }

    #[test]
    fn test_toggles() {
        let mut settings = Settings::default();
        settings.toggle_demo_mode();
        settings.toggle_high_contrast();
        assert!(settings.demo_mode);
        assert!(settings.high_contrast);
        settings.toggle_demo_mode();
        assert!(!settings.demo_mode);
        settings.toggle_show_ticks();
        assert!(settings.show_ticks);
    }
}
