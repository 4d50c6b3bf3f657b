#![forbid(unsafe_code)]

//! State-synchronization core for a single-page thoughts editor
//!
//! One document buffer, three display preferences (theme, font family, font
//! size) and three sources of truth: the in-memory buffer, a durable
//! key/value store, and an optional compressed URL fragment. The
//! [`Editor`] reconciles them at startup and keeps them consistent on every
//! edit and preference change; a share token snapshotting the document can
//! be produced on demand.
//!
//! Every external collaborator is a port: [`storage::KeyValueStore`] for
//! durable storage, [`surface::Surface`] for the visual environment, and
//! [`clipboard::Clipboard`] for the share target. Stock adapters cover
//! headless and native embeddings; a browser embedding supplies its own.
//! The crate emits `tracing` events but never installs a subscriber.
//!
//! ```
//! use jotpad::{Editor, MemoryClipboard, MemoryStore, NullSurface};
//!
//! let mut editor = Editor::new(MemoryStore::new(), MemoryClipboard::new(), NullSurface);
//! editor.start(None);
//! editor.on_content_change("a first thought");
//! let token = editor.share_link();
//! assert!(!token.is_empty());
//! ```

pub mod apply;
pub mod clipboard;
pub mod codec;
pub mod constants;
pub mod editor;
pub mod error;
pub mod prefs;
pub mod storage;
pub mod surface;
pub mod types;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use editor::{Editor, Phase};
pub use error::Error;
pub use prefs::PrefStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use surface::{NullSurface, Surface};
pub use types::{FontFamily, Preferences, RevealOrigin, Theme};
