//! Dark/light theme preference
//!
//! The only persisted state: LocalStorage key `rotunda-theme`, raw value
//! `"dark"` or `"light"`.

use serde::{Deserialize, Serialize};

use crate::layout::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(*self)
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "rotunda-theme";

    /// Load the saved preference from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(value)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(theme) = Self::from_str(&value) {
                    log::info!("Loaded theme preference: {}", theme.as_str());
                    return theme;
                }
                log::warn!("Ignoring unknown theme preference {:?}", value);
            }
        }

        log::info!("Using default theme");
        Self::default()
    }

    /// Save the preference to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, self.as_str());
            log::info!("Theme saved ({})", self.as_str());
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No {} storage on native, using default", Self::STORAGE_KEY);
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Theme colours for the scene and the panels around it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    // === Page ===
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub accent: Color,
    pub border: Color,

    // === Utilities ===
    pub water: Color,
    pub power: Color,
    pub sewage: Color,
    pub data: Color,

    // === Scene ===
    pub ground: Color,
    pub park: Color,
    pub bridge: Color,
    pub bridge_edge: Color,
    pub section_edge: Color,
    pub tunnel: Color,
    pub solar: Color,
    pub window_glow: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg_primary: Color::rgb(0x02, 0x06, 0x17),
                bg_secondary: Color::rgb(0x1e, 0x29, 0x3b),
                bg_tertiary: Color::rgb(0x33, 0x41, 0x55),
                text_primary: Color::rgb(0xf8, 0xfa, 0xfc),
                text_secondary: Color::rgb(0xcb, 0xd5, 0xe1),
                text_tertiary: Color::rgb(0x94, 0xa3, 0xb8),
                accent: Color::rgb(0x60, 0xa5, 0xfa),
                border: Color::rgb(0x33, 0x41, 0x55),

                water: Color::rgb(0x06, 0xb6, 0xd4),
                power: Color::rgb(0xfb, 0xbf, 0x24),
                sewage: Color::rgb(0x6b, 0x72, 0x80),
                data: Color::rgb(0x8b, 0x5c, 0xf6),

                ground: Color::rgb(0x0f, 0x17, 0x2a),
                park: Color::rgb(0x06, 0x4e, 0x3b),
                bridge: Color::rgb(0xcb, 0xd5, 0xe1),
                bridge_edge: Color::rgb(0x47, 0x55, 0x69),
                section_edge: Color::rgb(0x27, 0x1a, 0x10),
                tunnel: Color::rgb(0x47, 0x55, 0x69),
                solar: Color::rgb(0x31, 0x2e, 0x81),
                window_glow: Color::rgb(0xfb, 0xbf, 0x24),
            },
            Theme::Light => Self {
                bg_primary: Color::rgb(0xf8, 0xfa, 0xfc),
                bg_secondary: Color::rgb(0xff, 0xff, 0xff),
                bg_tertiary: Color::rgb(0xf1, 0xf5, 0xf9),
                text_primary: Color::rgb(0x0f, 0x17, 0x2a),
                text_secondary: Color::rgb(0x47, 0x55, 0x69),
                text_tertiary: Color::rgb(0x64, 0x74, 0x8b),
                accent: Color::rgb(0x3b, 0x82, 0xf6),
                border: Color::rgb(0xe2, 0xe8, 0xf0),

                water: Color::rgb(0x08, 0x91, 0xb2),
                power: Color::rgb(0xf5, 0x9e, 0x0b),
                sewage: Color::rgb(0x9c, 0xa3, 0xaf),
                data: Color::rgb(0x7c, 0x3a, 0xed),

                ground: Color::rgb(0xf1, 0xf5, 0xf9),
                park: Color::rgb(0xbb, 0xf7, 0xd0),
                bridge: Color::rgb(0x64, 0x74, 0x8b),
                bridge_edge: Color::rgb(0xcb, 0xd5, 0xe1),
                section_edge: Color::rgb(0x94, 0xa3, 0xb8),
                tunnel: Color::rgb(0x94, 0xa3, 0xb8),
                solar: Color::rgb(0x63, 0x66, 0xf1),
                window_glow: Color::rgb(0xfb, 0xbf, 0x24),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored_values() {
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str(" Light "), Some(Theme::Light));
        assert_eq!(Theme::from_str("sepia"), None);
        assert_eq!(Theme::Light.as_str(), "light");
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::load().is_dark());
    }

    #[test]
    fn test_toggle_and_palettes_differ() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_ne!(Theme::Dark.palette().ground, Theme::Light.palette().ground);
        assert_eq!(Theme::Dark.palette().bg_primary.to_string(), "#020617");
    }
}
