//! Editor configuration

/// localStorage key holding the JSON array of saved presets
pub const DEFAULT_PRESET_KEY: &str = "buttonsmith.presets";

/// How long the "Copied!" indicator stays up
pub const DEFAULT_COPIED_RESET_MS: u64 = 2000;

/// Settings the shell builds once at startup and hands down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    pub preset_storage_key: String,
    pub copied_reset_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            preset_storage_key: DEFAULT_PRESET_KEY.to_string(),
            copied_reset_ms: DEFAULT_COPIED_RESET_MS,
        }
    }
}
