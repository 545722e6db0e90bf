//! buttonsmith-core - Style model, markup generation and preset persistence
//!
//! Everything in here is toolkit-free so it can be shared by the web shell
//! and tested on native targets.

pub mod change;
pub mod codegen;
pub mod config;
pub mod palette;
pub mod preset;
pub mod preview;
pub mod storage;
pub mod style;

pub use change::ConfigChange;
pub use codegen::generate_markup;
pub use config::EditorConfig;
pub use preset::{backup_key, PresetError, PresetStore, SavedPreset};
pub use preview::{PreviewMode, PreviewState, PreviewTheme};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use style::{ButtonStyle, SliderRange, StyleBranch, StyleConfig};
