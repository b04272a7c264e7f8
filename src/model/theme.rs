//! Table colors
//!
//! Three hex colors overlaid on fixed defaults. Presentation only.

use ratatui::style::Color;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const DEFAULT_PRIMARY: &str = "#000000";
pub const DEFAULT_BACKGROUND: &str = "#bfcedd";
pub const DEFAULT_ACCENT: &str = "#3c56e7";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("invalid color '{0}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}

/// Optional overrides as they appear in config or on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    #[serde(alias = "primaryColor", skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(alias = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(alias = "accentColor", skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
}

impl ThemeOverrides {
    /// Fields set in `other` win over fields set in `self`
    pub fn merged_with(mut self, other: ThemeOverrides) -> Self {
        if other.primary_color.is_some() {
            self.primary_color = other.primary_color;
        }
        if other.background_color.is_some() {
            self.background_color = other.background_color;
        }
        if other.accent_color.is_some() {
            self.accent_color = other.accent_color;
        }
        self
    }
}

/// Resolved colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Text and borders
    pub primary: Color,
    /// Alternate rows and page buttons
    pub background: Color,
    /// Active page button, sort indicator and title underline
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x00, 0x00, 0x00),
            background: Color::Rgb(0xbf, 0xce, 0xdd),
            accent: Color::Rgb(0x3c, 0x56, 0xe7),
        }
    }
}

impl Theme {
    pub fn from_overrides(overrides: &ThemeOverrides) -> Result<Self, ThemeError> {
        let mut theme = Theme::default();
        if let Some(hex) = &overrides.primary_color {
            theme.primary = parse_hex_color(hex)?;
        }
        if let Some(hex) = &overrides.background_color {
            theme.background = parse_hex_color(hex)?;
        }
        if let Some(hex) = &overrides.accent_color {
            theme.accent = parse_hex_color(hex)?;
        }
        Ok(theme)
    }
}

/// `#RRGGBB` with an optional trailing alpha byte
static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})(?:[0-9a-fA-F]{2})?$").unwrap()
});

/// Parse `#RRGGBB` or `#RRGGBBAA`; alpha is dropped
pub fn parse_hex_color(hex: &str) -> Result<Color, ThemeError> {
    let invalid = || ThemeError::InvalidColor(hex.to_string());
    let caps = HEX_COLOR_REGEX.captures(hex.trim()).ok_or_else(invalid)?;

    let channel = |i: usize| {
        caps.get(i)
            .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
            .ok_or_else(invalid)
    };
    Ok(Color::Rgb(channel(1)?, channel(2)?, channel(3)?))
}
