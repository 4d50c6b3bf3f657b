//! Sync controller
//!
//! [`Editor`] owns the authoritative document buffer and preferences and is
//! the only code that mutates them. On startup it resolves the three sources
//! of truth (URL fragment, durable storage, defaults) in precedence order;
//! afterwards every edit and preference change flows through it out to the
//! store and the surface. The URL is never written back: share tokens are
//! point-in-time snapshots produced on demand, not live bindings.

use tracing::{debug, info, warn};

use crate::apply;
use crate::clipboard::Clipboard;
use crate::codec;
use crate::constants::keys;
use crate::error::Error;
use crate::prefs::PrefStore;
use crate::storage::KeyValueStore;
use crate::surface::Surface;
use crate::types::{FontFamily, Preferences, RevealOrigin, Theme};

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Resolving,
    Ready,
}

/// The state-synchronization core
pub struct Editor<S: KeyValueStore, C: Clipboard, V: Surface> {
    phase: Phase,
    document: String,
    prefs: Preferences,
    store: S,
    pref_store: PrefStore<S>,
    clipboard: C,
    surface: V,
}

impl<S: KeyValueStore + Clone, C: Clipboard, V: Surface> Editor<S, C, V> {
    /// Wire up an editor over its three collaborators
    ///
    /// The store handle is shared between content persistence and the
    /// preference store; nothing touches any collaborator until [`start`].
    ///
    /// [`start`]: Editor::start
    pub fn new(store: S, clipboard: C, surface: V) -> Self {
        Self {
            phase: Phase::Uninitialized,
            document: String::new(),
            prefs: Preferences::default(),
            pref_store: PrefStore::new(store.clone()),
            store,
            clipboard,
            surface,
        }
    }
}

impl<S: KeyValueStore, C: Clipboard, V: Surface> Editor<S, C, V> {
    /// Resolve startup state and push it at the surface
    ///
    /// `fragment` is the URL fragment (text after `#`), if any. Runs once;
    /// a second call is an embedding bug and is ignored with a warning.
    pub fn start(&mut self, fragment: Option<&str>) {
        if self.phase != Phase::Uninitialized {
            warn!(phase = ?self.phase, "start called more than once, ignoring");
            return;
        }
        self.phase = Phase::Resolving;

        self.document = self.resolve_content(fragment);
        self.prefs = self.resolve_preferences();

        self.phase = Phase::Ready;
        info!(
            chars = self.document.len(),
            theme = self.prefs.theme.as_str(),
            font = self.prefs.font_family.as_str(),
            size = self.prefs.font_size,
            "Editor ready"
        );
        apply::apply_full(&mut self.surface, &self.document, self.prefs);
    }

    /// Content precedence: decodable fragment, then stored content, then empty
    ///
    /// Resolution is read-only; loading a share link never overwrites the
    /// stored draft. The first actual edit after `Ready` persists as usual.
    fn resolve_content(&self, fragment: Option<&str>) -> String {
        if let Some(token) = fragment.filter(|t| !t.is_empty()) {
            match codec::decode(token) {
                Ok(text) => {
                    info!(chars = text.len(), "Resolved document from share token");
                    return text;
                }
                Err(e) => {
                    debug!(error = %e, "Fragment not decodable, falling back to stored content");
                }
            }
        }

        match self.store.get(keys::CONTENT) {
            Ok(Some(saved)) => saved,
            Ok(None) => String::new(),
            Err(e) => {
                warn!(error = %e, "Stored content unreadable, starting empty");
                String::new()
            }
        }
    }

    /// Preferences from the store, honoring the system dark preference only
    /// when the user has never picked a theme. The consultation is read-only;
    /// the theme key stays absent until an explicit choice.
    fn resolve_preferences(&self) -> Preferences {
        let mut prefs = self.pref_store.get();
        if self.pref_store.stored_theme().is_none() && self.surface.prefers_dark() {
            info!("No stored theme, following system dark preference for this session");
            prefs.theme = Theme::Dark;
        }
        prefs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only snapshot of the document buffer
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Read-only snapshot of the active preferences
    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Accept an edited buffer: update in memory, persist under the content
    /// key. A storage failure keeps the session memory-only, never blocks
    /// the edit itself.
    pub fn on_content_change(&mut self, text: &str) {
        self.document.clear();
        self.document.push_str(text);
        if let Err(e) = self.store.set(keys::CONTENT, text) {
            warn!(error = %e, "Failed to persist content, keeping in memory only");
        }
    }

    /// Switch themes with the animated reveal anchored at `origin`
    ///
    /// Idempotent: requesting the current theme writes nothing and runs no
    /// transition.
    pub fn set_theme(&mut self, theme: Theme, origin: RevealOrigin) {
        if theme == self.prefs.theme {
            debug!(theme = theme.as_str(), "Theme unchanged, nothing to do");
            return;
        }
        let from = self.prefs.theme;
        self.prefs.theme = theme;
        self.pref_store.set_theme(theme);
        apply::apply_theme_transition(&mut self.surface, from, theme, origin);
    }

    pub fn set_font_family(&mut self, font: FontFamily) {
        self.prefs.font_family = font;
        self.pref_store.set_font_family(font);
        apply::apply(&mut self.surface, self.prefs);
    }

    /// Set the font size, clamped to the accepted range; the clamped value
    /// is what ends up in memory, storage and on the surface
    pub fn set_font_size(&mut self, size: u8) {
        self.prefs.font_size = self.pref_store.set_font_size(size);
        apply::apply(&mut self.surface, self.prefs);
    }

    /// Clear all stored preferences and re-apply the defaults
    pub fn reset_preferences(&mut self) {
        self.pref_store.reset();
        self.prefs = Preferences::default();
        apply::apply(&mut self.surface, self.prefs);
    }

    /// Compressed snapshot of the current document, for URL construction
    ///
    /// Produced only on demand; editing afterwards diverges the link from
    /// the document, which is intended.
    pub fn share_link(&self) -> String {
        codec::encode(&self.document)
    }

    /// Copy the raw (uncompressed) document text to the clipboard
    pub fn share(&mut self) -> Result<(), Error> {
        self.clipboard.write_text(&self.document)
    }
}
