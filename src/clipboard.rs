//! Clipboard copy

use eyre::{Context, Result};

/// Copy the raw result text to the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to open system clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write to clipboard")?;
    tracing::debug!(len = text.len(), "copy_text: copied");
    Ok(())
}
