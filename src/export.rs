//! Export orchestration: frame selection, format dispatch, and destination
//! writes.
//!
//! Two output shapes share one frame-resolution step. SVG export renders the
//! board (or the selected frames) through the board service and then inlines
//! every external image reference. JSON export resolves the object graph and
//! serializes it compactly. A destination containing the `{frame}`
//! placeholder switches to per-frame mode: one resolve/export/write cycle
//! per requested title, strictly in sequence.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use clap::ValueEnum;
use tracing::info;

use crate::api::BoardClient;
use crate::error::ExportError;
use crate::graph;
use crate::inline::ImageInliner;
use crate::output;

/// Output format for an export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Self-contained SVG document with all images embedded.
    #[default]
    Svg,
    /// Compact JSON array of board objects.
    Json,
}

/// One requested export run.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Frame titles to export; `None` exports the whole board.
    pub frames: Option<Vec<String>>,
    /// Output format.
    pub format: ExportFormat,
    /// Destination path, possibly containing `{frame}`; `None` writes to
    /// stdout.
    pub destination: Option<String>,
}

/// Normalize raw frame selection values into the job's title list. Each
/// value names one title or several comma-separated ones; empty segments
/// produced by the split are dropped. No values at all means the whole
/// board.
///
/// # Errors
///
/// Returns `ExportError::EmptyFrameTitle` for a value that names no usable
/// title (an empty string, or commas only); an explicit selection never
/// falls back to the whole board.
pub fn requested_frames(values: &[String]) -> Result<Option<Vec<String>>, ExportError> {
    let mut titles = Vec::new();
    for value in values {
        let segments: Vec<&str> = value.split(',').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Err(ExportError::EmptyFrameTitle);
        }
        titles.extend(segments.into_iter().map(str::to_owned));
    }
    if titles.is_empty() {
        Ok(None)
    } else {
        Ok(Some(titles))
    }
}

/// Run an export job to completion.
///
/// # Errors
///
/// Returns `ExportError::PlaceholderWithoutFrames` before any request is
/// made when the destination contains `{frame}` but the job names no
/// frames. Resolution, fetch, inlining, serialization, and write failures
/// propagate.
pub async fn run_export(
    client: &BoardClient,
    inliner: &ImageInliner,
    job: &ExportJob,
) -> Result<(), ExportError> {
    match &job.destination {
        Some(destination) if output::has_placeholder(destination) => {
            let Some(names) = job.frames.as_deref().filter(|names| !names.is_empty()) else {
                return Err(ExportError::PlaceholderWithoutFrames);
            };
            for name in names {
                let content =
                    export_content(client, inliner, Some(std::slice::from_ref(name)), job.format)
                        .await?;
                let path = output::substitute_frame(destination, name);
                output::write_output(&content, Some(&path)).await?;
                info!(frame = %name, "frame exported");
            }
            Ok(())
        }
        _ => {
            let content =
                export_content(client, inliner, job.frames.as_deref(), job.format).await?;
            output::write_output(&content, job.destination.as_deref()).await
        }
    }
}

/// Produce one export payload for the given frame scope.
async fn export_content(
    client: &BoardClient,
    inliner: &ImageInliner,
    names: Option<&[String]>,
    format: ExportFormat,
) -> Result<String, ExportError> {
    let frames = match names {
        Some(names) => Some(graph::resolve_frames(client, names).await?),
        None => None,
    };

    match format {
        ExportFormat::Svg => {
            let frame_ids: Vec<String> = frames
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|frame| frame.id.clone())
                .collect();
            let markup = client.board_svg(&frame_ids).await?;
            Ok(inliner.inline_images(&markup).await?)
        }
        ExportFormat::Json => {
            let objects = graph::resolve_graph(client, frames.as_deref()).await?;
            Ok(serde_json::to_string(&objects)?)
        }
    }
}
