//! Shared plain data types
//!
//! The preference enums carry their own durable string forms: `as_str` is the
//! exact text written to storage and `parse` accepts exactly that text back.
//! Anything else stored under those keys is treated as absent.

use crate::constants::prefs;

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse the durable string form; anything unrecognized is `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Durable string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Editor font family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
}

impl FontFamily {
    /// Parse the durable string form; anything unrecognized is `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sans" => Some(FontFamily::Sans),
            "serif" => Some(FontFamily::Serif),
            "mono" => Some(FontFamily::Mono),
            _ => None,
        }
    }

    /// Durable string form
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Sans => "sans",
            FontFamily::Serif => "serif",
            FontFamily::Mono => "mono",
        }
    }
}

/// User-adjustable display settings
///
/// `font_size` is always within `[FONT_SIZE_MIN, FONT_SIZE_MAX]`; the
/// preference store clamps on both read and write so the invariant holds in
/// storage as well as in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub font_family: FontFamily,
    pub font_size: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_family: FontFamily::Sans,
            font_size: prefs::FONT_SIZE_DEFAULT,
        }
    }
}

/// Viewport point the animated theme reveal expands from
///
/// Typically the location of the control that triggered the theme change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealOrigin {
    pub x: i32,
    pub y: i32,
}

impl RevealOrigin {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_string_forms_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("blue"), None);
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::parse("Dark"), None);
    }

    #[test]
    fn test_font_family_string_forms_round_trip() {
        for font in [FontFamily::Sans, FontFamily::Serif, FontFamily::Mono] {
            assert_eq!(FontFamily::parse(font.as_str()), Some(font));
        }
        assert_eq!(FontFamily::parse("cursive"), None);
    }

    #[test]
    fn test_preferences_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.font_family, FontFamily::Sans);
        assert_eq!(prefs.font_size, 18);
    }
}
