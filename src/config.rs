//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content directory next to `data/` and overrides the stock defaults
//! key by key:
//!
//! ```text
//! content/
//! ├── config.toml        # optional, sparse overrides
//! ├── assets/            # copied verbatim to the site root
//! └── data/
//!     ├── about.json
//!     ├── experience.json
//!     ├── skills.json
//!     ├── projects.json
//!     └── awards.json
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Portfolio"
//! owner = "Your Name"
//! logo = "YN"                 # Logo text; triple-click opens the admin viewer
//! tagline = "Software Developer"
//! profile_image = "placeholder.svg"
//! copyright = "© Your Name. All rights reserved."
//! base_path = "/"             # URL prefix the site is served under
//!
//! [behavior]
//! default_language = "ko"     # "ko" or "en"
//! logo_clicks = 3             # Clicks that open the admin viewer
//! logo_window_ms = 1000       # Max gap between those clicks
//! reveal_threshold = 0.1      # Fraction on screen before a section animates in
//! nav_offset_px = 80          # Fixed-header height subtracted when jumping
//! show_unavailable = false    # Show a notice instead of the skeleton on load failure
//!
//! [colors.light]
//! primary = "#6d28d9"
//! accent = "#db2777"
//! background = "#ffffff"
//! text = "#0f172a"
//! muted = "#64748b"
//! surface = "#f8fafc"
//! border = "#e2e8f0"
//!
//! [colors.dark]               # applied while <html class="dark">
//! primary = "#a78bfa"
//! accent = "#f472b6"
//! background = "#0b1120"
//! text = "#e2e8f0"
//! muted = "#94a3b8"
//! surface = "#111827"
//! border = "#1f2937"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::gesture::{DEFAULT_REQUIRED_CLICKS, DEFAULT_WINDOW_MS};
use crate::i18n::Language;
use crate::visibility::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity shown in the page chrome.
    pub site: SiteInfo,
    /// Interaction tuning.
    pub behavior: BehaviorConfig,
    /// Palettes for the light and dark themes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.logo.trim().is_empty() {
            return Err(ConfigError::Validation("site.logo must not be empty".into()));
        }
        if !self.site.base_path.starts_with('/') || !self.site.base_path.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_path must start and end with '/'".into(),
            ));
        }
        if self.behavior.logo_clicks < 2 {
            return Err(ConfigError::Validation(
                "behavior.logo_clicks must be at least 2".into(),
            ));
        }
        if self.behavior.logo_window_ms == 0 {
            return Err(ConfigError::Validation(
                "behavior.logo_window_ms must be positive".into(),
            ));
        }
        let threshold = self.behavior.reveal_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Validation(
                "behavior.reveal_threshold must be in (0, 1]".into(),
            ));
        }
        Ok(())
    }

    /// The subset the browser runtime needs, stamped with the data version.
    pub fn runtime(&self, data_version: impl Into<String>) -> RuntimeConfig {
        RuntimeConfig {
            site: self.site.clone(),
            behavior: self.behavior.clone(),
            data_version: data_version.into(),
        }
    }
}

/// Identity shown in the page chrome (nav, hero, footer, `<title>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Document title.
    pub title: String,
    /// Name shown in the hero banner.
    pub owner: String,
    /// Short logo text in the navigation bar.
    pub logo: String,
    /// One-line pitch under the owner's name.
    pub tagline: String,
    /// Hero portrait, relative to the site root.
    pub profile_image: String,
    /// Footer line.
    pub copyright: String,
    /// URL prefix the site is served under, with leading and trailing `/`.
    pub base_path: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            owner: "Your Name".to_string(),
            logo: "YN".to_string(),
            tagline: "Software Developer".to_string(),
            profile_image: "placeholder.svg".to_string(),
            copyright: "© Your Name. All rights reserved.".to_string(),
            base_path: "/".to_string(),
        }
    }
}

/// Interaction tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Language shown on first load.
    pub default_language: Language,
    /// Logo clicks that open the admin viewer.
    pub logo_clicks: u32,
    /// Maximum gap between those clicks, in milliseconds.
    pub logo_window_ms: u32,
    /// Fraction of a section that must be on screen before it animates in.
    pub reveal_threshold: f64,
    /// Height of the fixed navigation bar, subtracted when jumping to a section.
    pub nav_offset_px: u32,
    /// Render a notice instead of the skeleton when a section fails to load.
    pub show_unavailable: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Ko,
            logo_clicks: DEFAULT_REQUIRED_CLICKS,
            logo_window_ms: DEFAULT_WINDOW_MS,
            reveal_threshold: DEFAULT_THRESHOLD,
            nav_offset_px: 80,
            show_unavailable: false,
        }
    }
}

/// Everything the browser runtime reads from the page at startup.
///
/// Serialized as JSON into `<script type="application/json" id="folio-config">`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub site: SiteInfo,
    pub behavior: BehaviorConfig,
    /// Content fingerprint appended to data URLs to bust caches on redeploy.
    pub data_version: String,
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode palette.
    pub light: Palette,
    /// Dark mode palette.
    pub dark: Palette,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: Palette::default_light(),
            dark: Palette::default_dark(),
        }
    }
}

/// One theme's palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Gradient start, links, highlights.
    pub primary: String,
    /// Gradient end.
    pub accent: String,
    /// Page background.
    pub background: String,
    /// Body text.
    pub text: String,
    /// Secondary text (periods, captions).
    pub muted: String,
    /// Cards and alternating section backgrounds.
    pub surface: String,
    /// Card borders and dividers.
    pub border: String,
}

impl Palette {
    pub fn default_light() -> Self {
        Self {
            primary: "#6d28d9".to_string(),
            accent: "#db2777".to_string(),
            background: "#ffffff".to_string(),
            text: "#0f172a".to_string(),
            muted: "#64748b".to_string(),
            surface: "#f8fafc".to_string(),
            border: "#e2e8f0".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            primary: "#a78bfa".to_string(),
            accent: "#f472b6".to_string(),
            background: "#0b1120".to_string(),
            text: "#e2e8f0".to_string(),
            muted: "#94a3b8".to_string(),
            surface: "#111827".to_string(),
            border: "#1f2937".to_string(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(root = %root.display(), "resolved site config");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Document <title>.
title = "Portfolio"

# Name shown in the hero banner.
owner = "Your Name"

# Logo text in the navigation bar. One click scrolls to the top;
# a quick triple-click opens the admin data viewer.
logo = "YN"

# One-line pitch under your name.
tagline = "Software Developer"

# Hero portrait, relative to the site root (put the file in assets/).
profile_image = "placeholder.svg"

# Footer line.
copyright = "© Your Name. All rights reserved."

# URL prefix the site is served under. For a GitHub Pages project site
# this is "/<repository>/".
base_path = "/"

# ---------------------------------------------------------------------------
# Behavior
# ---------------------------------------------------------------------------
[behavior]
# Language shown on first load: "ko" or "en".
default_language = "ko"

# Logo clicks that open the admin viewer, and the longest gap between them.
logo_clicks = 3
logo_window_ms = 1000

# Fraction of a section that must be on screen before it animates in.
reveal_threshold = 0.1

# Height of the fixed navigation bar, subtracted when jumping to a section.
nav_offset_px = 80

# When a data file fails to load the section keeps its loading skeleton.
# Set to true to show a short "unavailable" notice instead.
show_unavailable = false

# ---------------------------------------------------------------------------
# Colors - Light theme
# ---------------------------------------------------------------------------
[colors.light]
primary = "#6d28d9"
accent = "#db2777"
background = "#ffffff"
text = "#0f172a"
muted = "#64748b"
surface = "#f8fafc"
border = "#e2e8f0"

# ---------------------------------------------------------------------------
# Colors - Dark theme (toggled from the navigation bar)
# ---------------------------------------------------------------------------
[colors.dark]
primary = "#a78bfa"
accent = "#f472b6"
background = "#0b1120"
text = "#e2e8f0"
muted = "#94a3b8"
surface = "#111827"
border = "#1f2937"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

:root.dark {{
{dark}
}}"#,
        light = palette_vars(&colors.light),
        dark = palette_vars(&colors.dark),
    )
}

fn palette_vars(palette: &Palette) -> String {
    [
        ("primary", &palette.primary),
        ("accent", &palette.accent),
        ("bg", &palette.background),
        ("text", &palette.text),
        ("muted", &palette.muted),
        ("surface", &palette.surface),
        ("border", &palette.border),
    ]
    .iter()
    .map(|(name, value)| format!("    --color-{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}
