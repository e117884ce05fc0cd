//! Export destination handling: files, stdout, and per-frame templating.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use std::path::PathBuf;

use tracing::info;

use crate::error::ExportError;

/// Token substituted with the frame title in per-frame output mode.
pub const FRAME_PLACEHOLDER: &str = "{frame}";

/// Whether a destination requests one output per frame.
#[must_use]
pub fn has_placeholder(destination: &str) -> bool {
    destination.contains(FRAME_PLACEHOLDER)
}

/// Substitute every placeholder occurrence with the frame title.
#[must_use]
pub fn substitute_frame(destination: &str, title: &str) -> String {
    destination.replace(FRAME_PLACEHOLDER, title)
}

/// Write `content` to the destination path, or to stdout when no destination
/// is given. File content is written verbatim.
///
/// # Errors
///
/// Returns `ExportError::Write` carrying the path when the file write fails.
pub async fn write_output(content: &str, destination: Option<&str>) -> Result<(), ExportError> {
    let Some(path) = destination else {
        println!("{content}");
        return Ok(());
    };

    tokio::fs::write(path, content)
        .await
        .map_err(|source| ExportError::Write {
            path: PathBuf::from(path),
            source,
        })?;
    info!(path = %path, bytes = content.len(), "export written");
    Ok(())
}
