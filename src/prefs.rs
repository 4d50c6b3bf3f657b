//! Preference store
//!
//! Typed wrapper over the key/value port for the three display settings.
//! Reads never fail: a missing, unreachable or unparseable field degrades to
//! its default, and a stored size outside the accepted range is clamped to
//! the nearest bound rather than silently accepted or discarded. Writes are
//! per-field, so setting the font size never touches the theme key.

use tracing::{info, warn};

use crate::constants::{keys, prefs};
use crate::storage::KeyValueStore;
use crate::types::{FontFamily, Preferences, Theme};

/// Clamp a proposed font size to the accepted range
fn clamp_font_size(size: u32) -> u8 {
    size.clamp(prefs::FONT_SIZE_MIN as u32, prefs::FONT_SIZE_MAX as u32) as u8
}

/// Typed preference access over a key/value store
pub struct PrefStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PrefStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read a raw key, treating storage failure the same as absence
    fn read_key(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = key, error = %e, "Preference key unreadable, using default");
                None
            }
        }
    }

    /// Write a raw key, swallowing storage failure (memory-only mode)
    fn write_key(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key = key, error = %e, "Preference write failed, value kept in memory only");
        }
    }

    /// The stored theme, if the theme key is present and parseable
    ///
    /// Lets the controller distinguish "user chose light" from "nothing
    /// stored" when deciding whether to honor the system dark preference.
    pub fn stored_theme(&self) -> Option<Theme> {
        self.read_key(keys::THEME).and_then(|s| Theme::parse(&s))
    }

    /// Current preferences, with defaults for anything missing or malformed
    pub fn get(&self) -> Preferences {
        let defaults = Preferences::default();

        let theme = self.stored_theme().unwrap_or(defaults.theme);

        let font_family = self
            .read_key(keys::FONT)
            .and_then(|s| FontFamily::parse(&s))
            .unwrap_or(defaults.font_family);

        let font_size = match self.read_key(keys::SIZE) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(size) => {
                    let clamped = clamp_font_size(size);
                    if size != clamped as u32 {
                        warn!(stored = size, clamped = clamped, "Stored font size out of range, clamping");
                    }
                    clamped
                }
                Err(_) => {
                    warn!(stored = %raw, "Stored font size unparseable, using default");
                    defaults.font_size
                }
            },
            None => defaults.font_size,
        };

        Preferences {
            theme,
            font_family,
            font_size,
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.write_key(keys::THEME, theme.as_str());
    }

    pub fn set_font_family(&self, font: FontFamily) {
        self.write_key(keys::FONT, font.as_str());
    }

    /// Persist a font size, clamped to the accepted range
    ///
    /// Returns the value actually stored, so callers reflect the clamped
    /// size rather than the requested one.
    pub fn set_font_size(&self, size: u8) -> u8 {
        let clamped = clamp_font_size(size as u32);
        if clamped != size {
            warn!(requested = size, clamped = clamped, "Requested font size out of range, clamping");
        }
        self.write_key(keys::SIZE, &clamped.to_string());
        clamped
    }

    /// Remove all three preference keys, returning future reads to defaults
    pub fn reset(&self) {
        for key in [keys::THEME, keys::FONT, keys::SIZE] {
            if let Err(e) = self.store.remove(key) {
                warn!(key = key, error = %e, "Failed to remove preference key during reset");
            }
        }
        info!("Preferences reset to defaults");
    }
}
