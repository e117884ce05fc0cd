//! Pipeline-level error type for export runs.

use std::path::PathBuf;

use crate::api::ApiError;
use crate::inline::InlineError;

/// Errors that abort an export run.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// One or more requested frame titles matched no frame on the board.
    #[error("{missing} requested frame title(s) matched no frame on the board")]
    MissingFrames { missing: usize },

    /// A frame selection value named no usable title.
    #[error("a frame title must not be empty")]
    EmptyFrameTitle,

    /// The output path contains the per-frame placeholder but no frame names
    /// were given.
    #[error("output path contains {{frame}} but no frame names were given")]
    PlaceholderWithoutFrames,

    /// A board service request failed.
    #[error("board request failed: {0}")]
    Api(#[from] ApiError),

    /// SVG inlining failed.
    #[error("svg inlining failed: {0}")]
    Inline(#[from] InlineError),

    /// The object graph could not be serialized as JSON.
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The export output could not be written.
    #[error("write to {} failed: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
