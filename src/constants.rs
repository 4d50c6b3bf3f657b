//! Application-wide constants
//!
//! This module contains the storage key names, preference bounds and tuning
//! values used throughout the crate, providing a single source of truth for
//! constant values.

/// Durable storage keys
///
/// Each piece of persisted state lives under its own key so that losing or
/// corrupting one key never damages the others.
pub mod keys {
    /// Document text
    pub const CONTENT: &str = "content";

    /// Theme name ("light" or "dark")
    pub const THEME: &str = "theme";

    /// Font family name ("sans", "serif" or "mono")
    pub const FONT: &str = "font";

    /// Font size in pixels, stored as a bare integer string
    pub const SIZE: &str = "size";
}

/// Preference bounds and defaults
pub mod prefs {
    /// Smallest accepted font size in pixels
    pub const FONT_SIZE_MIN: u8 = 14;

    /// Largest accepted font size in pixels
    pub const FONT_SIZE_MAX: u8 = 32;

    /// Font size applied when nothing is stored
    pub const FONT_SIZE_DEFAULT: u8 = 18;
}

/// File-backed storage location
pub mod storage {
    /// Directory under the user config dir holding one file per key
    pub const APP_DIR: &str = "jotpad";
}

/// Theme transition tuning
pub mod transition {
    /// Animated reveal duration in milliseconds
    pub const DURATION_MS: u64 = 500;
}

/// Share-token compression tuning
///
/// Fixed so that encoding the same document always yields the same token.
pub mod codec {
    /// Brotli quality (0-11); mid-range is plenty for note-sized text
    pub const QUALITY: u32 = 5;

    /// Brotli window size exponent
    pub const LG_WINDOW: u32 = 22;

    /// Streaming buffer size in bytes
    pub const BUFFER_SIZE: usize = 4096;
}
