//! Fire-and-forget clipboard writes

use dioxus::prelude::*;
use tracing::{debug, warn};

/// Ask the browser to put `text` on the clipboard. The result is not
/// awaited; a rejected write is swallowed on the JS side.
pub fn write_text(text: &str) {
    let literal = match serde_json::to_string(text) {
        Ok(literal) => literal,
        Err(e) => {
            warn!("Could not encode clipboard text: {e}");
            return;
        }
    };

    debug!("Copying {} bytes to clipboard", text.len());
    let _ = document::eval(&format!(
        "navigator.clipboard.writeText({literal}).catch(() => {{}});"
    ));
}
