// SPDX-License-Identifier: MPL-2.0
//! Theme mode stored in the settings and its resolution to an iced theme.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the OS setting.
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the effective theme is dark. `System` asks the OS and falls
    /// back to dark when it cannot tell.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => false,
                Ok(mode) => {
                    tracing::trace!(?mode, "system theme");
                    true
                }
                Err(err) => {
                    tracing::debug!(%err, "system theme unknown, using dark");
                    true
                }
            },
        }
    }

    /// The built-in iced theme the widgets are drawn with.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
