//! Theme — light/dark mode and the DOM state each mode implies.
//!
//! The page is reconciled from a [`ThemeView`], which is derived from a
//! [`ThemeMode`] alone. Nothing here touches the DOM.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Key under which the theme preference is persisted.
pub const STORAGE_KEY: &str = "theme";

/// Id of the `<style>` element injected while dark mode is active.
pub const OVERRIDE_STYLE_ID: &str = "force-dark-mode";

/// Id of the checkbox that toggles the theme.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Selector of the icon next to the toggle.
pub const ICON_SELECTOR: &str = ".theme-icon i";

/// Flat backgrounds forced in dark mode, overriding gradient or lighter
/// section backgrounds from the regular dark theme.
pub const FORCE_DARK_CSS: &str = "\
html.dark-mode,
html.dark-mode body {
    background: #000000 !important;
    background-color: #000000 !important;
}
section,
header,
.hero,
.about,
.services,
.portfolio,
footer {
    background: #000000 !important;
    background-image: none !important;
}
.portfolio-item,
.service-card,
.portfolio-info {
    background: #0a0a0a !important;
    background-image: none !important;
}
";

/// Visual theme of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Value persisted in the key-value store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class carried by the root element while this mode is active.
    #[must_use]
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "light-mode",
            Self::Dark => "dark-mode",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Mode selected by the toggle checkbox: checked means dark.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    /// Resolve the startup mode from a stored value.
    ///
    /// Absent or unrecognised values resolve to `fallback`.
    #[must_use]
    pub fn resolve(stored: Option<&str>, fallback: Self) -> Self {
        stored
            .and_then(|value| value.parse().ok())
            .unwrap_or(fallback)
    }

    /// Desired DOM state for this mode.
    #[must_use]
    pub fn view(self) -> ThemeView {
        match self {
            Self::Dark => ThemeView {
                add_class: Self::Dark.root_class(),
                remove_class: Self::Light.root_class(),
                toggle_checked: true,
                icon_class: "fas fa-sun",
                override_stylesheet: true,
            },
            Self::Light => ThemeView {
                add_class: Self::Light.root_class(),
                remove_class: Self::Dark.root_class(),
                toggle_checked: false,
                icon_class: "fas fa-moon",
                override_stylesheet: false,
            },
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ValidationError::UnknownTheme(other.to_string())),
        }
    }
}

/// Everything the page must show for a given [`ThemeMode`].
///
/// The checked/icon pairing looks inverted (dark shows a sun) on purpose:
/// the icon advertises the mode the toggle switches *to*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeView {
    pub add_class: &'static str,
    pub remove_class: &'static str,
    pub toggle_checked: bool,
    pub icon_class: &'static str,
    /// Whether the [`OVERRIDE_STYLE_ID`] stylesheet must be present.
    pub override_stylesheet: bool,
}
