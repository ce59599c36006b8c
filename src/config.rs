//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a `config.toml` in the content root overrides any subset of
//! them. Presentation only: the hotel's name, contact details and page content
//! live in `site.toml` and the page files, not here.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"       # Copied verbatim to dist/assets/
//!
//! [colors]
//! background = "#fbf8f3"
//! surface = "#ffffff"
//! text = "#1f2a2e"
//! text_muted = "#5f6b6f"
//! accent = "#b8860b"          # Buttons, active dots, star ratings
//! accent_text = "#ffffff"
//! border = "#e6ded2"
//!
//! [theme]
//! heading_font = "Georgia, 'Times New Roman', serif"
//! body_font = "system-ui, sans-serif"
//! max_width = "72rem"
//!
//! [theme.section_padding]
//! size = "8vw"
//! min = "3rem"
//! max = "7rem"
//!
//! [carousels]
//! manual_resets_timer = true  # Arrow/dot clicks restart the countdown
//!
//! [carousels.image_slider]
//! interval_ms = 5000
//! reset_delay_ms = 50
//!
//! [carousels.room_showcase]
//! interval_ms = 4000
//!
//! [carousels.stats]
//! interval_ms = 3000
//!
//! [carousels.testimonials]
//! interval_ms = 5000
//!
//! [carousels.room_cards]
//! interval_ms = 3000
//!
//! [carousels.marquee]
//! interval_ms = 30
//! step_px = 1.0
//! reset_delay_ms = 50
//!
//! [booking]
//! availability_path = "/availability"
//! default_rooms = 1
//! default_adults = 2
//! default_children = 0
//! max_rooms = 5
//! max_guests = 8
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse; override just the values you want:
//!
//! ```toml
//! [carousels.testimonials]
//! interval_ms = 7000
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::carousel::ManualNavigation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
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
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory (relative to the content root) copied to the output root.
    pub assets_dir: String,
    /// Color palette.
    pub colors: ColorConfig,
    /// Typography and spacing.
    pub theme: ThemeConfig,
    /// Timing of every rotating component.
    pub carousels: CarouselsConfig,
    /// Hero search form behavior.
    pub booking: BookingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            colors: ColorConfig::default(),
            theme: ThemeConfig::default(),
            carousels: CarouselsConfig::default(),
            booking: BookingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assets_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "assets_dir must not be empty".into(),
            ));
        }
        self.carousels.validate()?;
        self.booking.validate()?;
        Ok(())
    }
}

/// Color palette, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Page background.
    pub background: String,
    /// Card and panel background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (captions, testimonial authors, stat labels).
    pub text_muted: String,
    /// Brand accent (buttons, active indicators, ratings).
    pub accent: String,
    /// Text drawn on top of the accent color.
    pub accent_text: String,
    /// Border color.
    pub border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#fbf8f3".to_string(),
            surface: "#ffffff".to_string(),
            text: "#1f2a2e".to_string(),
            text_muted: "#5f6b6f".to_string(),
            accent: "#b8860b".to_string(),
            accent_text: "#ffffff".to_string(),
            border: "#e6ded2".to_string(),
        }
    }
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"8vw"`).
    pub size: String,
    /// Minimum bound (e.g. `"3rem"`).
    pub min: String,
    /// Maximum bound (e.g. `"7rem"`).
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Typography and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Font stack for headings.
    pub heading_font: String,
    /// Font stack for body text.
    pub body_font: String,
    /// Maximum width of section content (CSS value).
    pub max_width: String,
    /// Vertical padding of each page section.
    pub section_padding: ClampSize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            heading_font: "Georgia, 'Times New Roman', serif".to_string(),
            body_font: "system-ui, -apple-system, 'Segoe UI', sans-serif".to_string(),
            max_width: "72rem".to_string(),
            section_padding: ClampSize {
                size: "8vw".to_string(),
                min: "3rem".to_string(),
                max: "7rem".to_string(),
            },
        }
    }
}

/// Timer settings for a discrete carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoplayConfig {
    /// Milliseconds between automatic advances.
    pub interval_ms: u64,
}

impl AutoplayConfig {
    fn every(interval_ms: u64) -> Self {
        Self { interval_ms }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Timer settings for a sliding track that loops seamlessly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliderConfig {
    /// Milliseconds between automatic advances.
    pub interval_ms: u64,
    /// How long the transition stays disabled after a wraparound reset.
    pub reset_delay_ms: u64,
}

impl SliderConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Continuous marquee settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarqueeConfig {
    /// Milliseconds between position updates.
    pub interval_ms: u64,
    /// Pixels moved per update.
    pub step_px: f64,
    /// How long the transition stays disabled after a wraparound reset.
    pub reset_delay_ms: u64,
}

/// Carousel timing for every rotating component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselsConfig {
    /// Whether arrow and dot clicks restart the automatic countdown.
    pub manual_resets_timer: bool,
    pub image_slider: SliderConfig,
    pub room_showcase: AutoplayConfig,
    pub stats: AutoplayConfig,
    pub testimonials: AutoplayConfig,
    /// Nested image slider inside each room card.
    pub room_cards: AutoplayConfig,
    pub marquee: MarqueeConfig,
}

impl Default for CarouselsConfig {
    fn default() -> Self {
        Self {
            manual_resets_timer: true,
            image_slider: SliderConfig {
                interval_ms: 5000,
                reset_delay_ms: 50,
            },
            room_showcase: AutoplayConfig::every(4000),
            stats: AutoplayConfig::every(3000),
            testimonials: AutoplayConfig::every(5000),
            room_cards: AutoplayConfig::every(3000),
            marquee: MarqueeConfig {
                interval_ms: 30,
                step_px: 1.0,
                reset_delay_ms: 50,
            },
        }
    }
}

impl CarouselsConfig {
    pub fn manual_navigation(&self) -> ManualNavigation {
        ManualNavigation::from_reset_flag(self.manual_resets_timer)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("image_slider", self.image_slider.interval_ms),
            ("room_showcase", self.room_showcase.interval_ms),
            ("stats", self.stats.interval_ms),
            ("testimonials", self.testimonials.interval_ms),
            ("room_cards", self.room_cards.interval_ms),
            ("marquee", self.marquee.interval_ms),
        ];
        for (name, interval) in intervals {
            if interval == 0 {
                return Err(ConfigError::Validation(format!(
                    "carousels.{name}.interval_ms must be greater than 0"
                )));
            }
        }
        if !(self.marquee.step_px.is_finite() && self.marquee.step_px > 0.0) {
            return Err(ConfigError::Validation(
                "carousels.marquee.step_px must be a positive number".into(),
            ));
        }
        Ok(())
    }
}

/// Hero search form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingConfig {
    /// Route the search form navigates to.
    pub availability_path: String,
    pub default_rooms: u32,
    pub default_adults: u32,
    pub default_children: u32,
    /// Upper bound of the rooms selector.
    pub max_rooms: u32,
    /// Upper bound of the adults and children selectors.
    pub max_guests: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            availability_path: "/availability".to_string(),
            default_rooms: 1,
            default_adults: 2,
            default_children: 0,
            max_rooms: 5,
            max_guests: 8,
        }
    }
}

impl BookingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.availability_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "booking.availability_path must start with '/'".into(),
            ));
        }
        if self.default_rooms == 0 || self.default_rooms > self.max_rooms {
            return Err(ConfigError::Validation(
                "booking.default_rooms must be between 1 and booking.max_rooms".into(),
            ));
        }
        if self.default_adults == 0 || self.default_adults > self.max_guests {
            return Err(ConfigError::Validation(
                "booking.default_adults must be between 1 and booking.max_guests".into(),
            ));
        }
        if self.default_children > self.max_guests {
            return Err(ConfigError::Validation(
                "booking.default_children must not exceed booking.max_guests".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
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

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
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
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# resort-site configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Directory (relative to the content root) copied verbatim to dist/ under the same name.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#fbf8f3"
surface = "#ffffff"       # Cards and panels
text = "#1f2a2e"
text_muted = "#5f6b6f"    # Captions, authors, stat labels
accent = "#b8860b"        # Buttons, active dots, star ratings
accent_text = "#ffffff"   # Text on accent backgrounds
border = "#e6ded2"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
heading_font = "Georgia, 'Times New Roman', serif"
body_font = "system-ui, -apple-system, 'Segoe UI', sans-serif"
max_width = "72rem"

# Vertical padding of each page section, as CSS clamp(min, size, max).
[theme.section_padding]
size = "8vw"
min = "3rem"
max = "7rem"

# ---------------------------------------------------------------------------
# Carousels
# ---------------------------------------------------------------------------
[carousels]
# When true, clicking an arrow or a dot restarts the automatic countdown.
# When false, the timer keeps its rhythm regardless of clicks.
manual_resets_timer = true

# Full-width image slider. Loops seamlessly: after the last slide it snaps
# back to the first with the transition disabled for reset_delay_ms.
[carousels.image_slider]
interval_ms = 5000
reset_delay_ms = 50

# One room shown at a time.
[carousels.room_showcase]
interval_ms = 4000

# Rotating highlight over the stats strip.
[carousels.stats]
interval_ms = 3000

# Guest testimonials.
[carousels.testimonials]
interval_ms = 5000

# Image slider nested inside each room card.
[carousels.room_cards]
interval_ms = 3000

# Feature banner marquee: moves step_px every interval_ms.
[carousels.marquee]
interval_ms = 30
step_px = 1.0
reset_delay_ms = 50

# ---------------------------------------------------------------------------
# Booking search form
# ---------------------------------------------------------------------------
[booking]
# Route the search form navigates to, with the fields as query parameters.
availability_path = "/availability"
default_rooms = 1
default_adults = 2
default_children = 0
max_rooms = 5
max_guests = 8
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-accent: {accent};
    --color-accent-text: {accent_text};
    --color-border: {border};
}}"#,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        accent = colors.accent,
        accent_text = colors.accent_text,
        border = colors.border,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --font-heading: {heading_font};
    --font-body: {body_font};
    --max-width: {max_width};
    --section-padding: {section_padding};
}}"#,
        heading_font = theme.heading_font,
        body_font = theme.body_font,
        max_width = theme.max_width,
        section_padding = theme.section_padding.to_css(),
    )
}
