// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// System mode asks the OS and defaults to dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        // System depends on the host, it only needs to not panic.
        let _ = ThemeMode::System.iced_theme();
    }

    #[test]
    fn theme_mode_is_stored_in_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            theme_mode: ThemeMode,
        }

        let text = toml::to_string(&Wrapper {
            theme_mode: ThemeMode::Dark,
        })
        .expect("serialize");
        assert_eq!(text.trim(), "theme_mode = \"dark\"");

        let parsed: Wrapper = toml::from_str("theme_mode = \"system\"").expect("parse");
        assert_eq!(parsed.theme_mode, ThemeMode::System);
    }
}
