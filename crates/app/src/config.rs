//! Site configuration — TOML block with key-value overrides.
//!
//! The page may embed a `<script type="application/toml" id="folio-config">`
//! block. Every field has a sensible default so the block is optional.
//! Overrides (browser storage keys) take precedence over block values.

use serde::Deserialize;

use folio_domain::theme::ThemeMode;

/// Override key for the log filter.
pub const LOG_OVERRIDE_KEY: &str = "folio.log";

/// Override key for the fallback theme.
pub const THEME_OVERRIDE_KEY: &str = "folio.theme.default";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub scroll: ScrollConfig,
    pub filter: FilterConfig,
    pub typewriter: TypewriterConfig,
    pub logging: LoggingConfig,
    pub banner: BannerConfig,
}

/// Theme settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Mode used when no preference is stored.
    pub default: ThemeMode,
}

/// Scroll thresholds, in pixels unless noted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scroll offset past which the navbar gets its shadow.
    pub navbar_threshold: f64,
    /// Scroll offset past which the back-to-top button shows.
    pub back_to_top_threshold: f64,
    /// How far ahead of a section's top it becomes the active one.
    pub section_lookahead: f64,
    /// Fixed navbar height subtracted from anchor targets.
    pub anchor_offset: f64,
    /// Fraction of the viewport the skills section must enter.
    pub skills_viewport_fraction: f64,
    /// How far inside the viewport a reveal target must be.
    pub reveal_offset: f64,
    /// Delay before skill bars fill, in milliseconds.
    pub skill_fill_delay_ms: u32,
}

/// Portfolio filter settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Delay between an item's entering and shown styles, in milliseconds.
    pub settle_delay_ms: u32,
}

/// Typewriter settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Selector of the heading to animate.
    pub selector: String,
    /// Delay between characters, in milliseconds.
    pub char_delay_ms: u32,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

pub const DEFAULT_BANNER_TITLE: &str = "🛡️ Sulaiman Alazemi - Cybersecurity Portfolio";
pub const DEFAULT_BANNER_CONTACT: &str = "alroot777@gmail.com";

/// Console banner text.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub title: String,
    /// Empty means no contact line.
    pub contact: String,
}

impl SiteConfig {
    /// Parse an optional TOML block, apply overrides from `lookup`, validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn load(
        source: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match source {
            Some(text) => Self::from_toml(text)?,
            None => Self::default(),
        };
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Parse)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup(LOG_OVERRIDE_KEY) {
            self.logging.filter = val;
        }
        if let Some(val) = lookup(THEME_OVERRIDE_KEY) {
            if let Ok(mode) = val.parse() {
                self.theme.default = mode;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let scroll = &self.scroll;
        for (name, value) in [
            ("scroll.navbar_threshold", scroll.navbar_threshold),
            ("scroll.back_to_top_threshold", scroll.back_to_top_threshold),
            ("scroll.section_lookahead", scroll.section_lookahead),
            ("scroll.anchor_offset", scroll.anchor_offset),
            ("scroll.reveal_offset", scroll.reveal_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }
        if !(0.0..=1.0).contains(&scroll.skills_viewport_fraction) {
            return Err(ConfigError::Validation(
                "scroll.skills_viewport_fraction must be within 0..=1".to_string(),
            ));
        }
        if self.typewriter.selector.trim().is_empty() {
            return Err(ConfigError::Validation(
                "typewriter.selector must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 50.0,
            back_to_top_threshold: 500.0,
            section_lookahead: 200.0,
            anchor_offset: 80.0,
            skills_viewport_fraction: 0.75,
            reveal_offset: 100.0,
            skill_fill_delay_ms: 100,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 50,
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            selector: ".hero h1".to_string(),
            char_delay_ms: 100,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_BANNER_TITLE.to_string(),
            contact: DEFAULT_BANNER_CONTACT.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse site config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
