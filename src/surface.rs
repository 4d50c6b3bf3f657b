//! Visual environment port
//!
//! The rendering surface the resolved state is pushed into: in a browser
//! embedding this is the document element (dark class, typography custom
//! properties, the textarea value); headless embeddings can ignore any of
//! it. Capability probes default to "unsupported" so every adapter degrades
//! gracefully without extra code.

use crate::types::{FontFamily, RevealOrigin, Theme};

/// Sink for resolved display state plus optional environment capabilities
///
/// All sink methods are fire-and-forget; the surface has no failure modes it
/// surfaces back to the core.
pub trait Surface {
    /// Switch the visual mode (dark/light class or equivalent)
    fn show_theme(&mut self, theme: Theme);

    /// Set the editor typography family
    fn show_font_family(&mut self, font: FontFamily);

    /// Set the editor typography size in pixels
    fn show_font_size(&mut self, size: u8);

    /// Replace the displayed document text (startup resolution only)
    fn show_content(&mut self, text: &str);

    /// Whether the environment asks for dark mode when no theme is stored
    fn prefers_dark(&self) -> bool {
        false
    }

    /// Whether an animated theme reveal is available
    fn supports_transitions(&self) -> bool {
        false
    }

    /// Start an animated reveal expanding from `origin` over `duration_ms`
    ///
    /// Fire-and-forget: the core never awaits it, and a second reveal issued
    /// mid-animation simply plays on top of the first.
    fn begin_transition(&mut self, _origin: RevealOrigin, _duration_ms: u64) {}
}

/// Surface that ignores everything; the graceful-degradation floor
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn show_theme(&mut self, _theme: Theme) {}
    fn show_font_family(&mut self, _font: FontFamily) {}
    fn show_font_size(&mut self, _size: u8) {}
    fn show_content(&mut self, _text: &str) {}
}

/// Surface that records everything pushed at it, for assertions in tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingSurface {
    pub theme: Option<Theme>,
    pub font_family: Option<FontFamily>,
    pub font_size: Option<u8>,
    pub content: Option<String>,
    pub transitions: Vec<RevealOrigin>,
    pub prefers_dark: bool,
    pub transition_capable: bool,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn show_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn show_font_family(&mut self, font: FontFamily) {
        self.font_family = Some(font);
    }

    fn show_font_size(&mut self, size: u8) {
        self.font_size = Some(size);
    }

    fn show_content(&mut self, text: &str) {
        self.content = Some(text.to_string());
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn supports_transitions(&self) -> bool {
        self.transition_capable
    }

    fn begin_transition(&mut self, origin: RevealOrigin, _duration_ms: u64) {
        self.transitions.push(origin);
    }
}
