//! Frame selection and object graph resolution.
//!
//! Frames are selected by title from a single type-filtered query. The JSON
//! export graph is the concatenation of the requested frames, their direct
//! children, and the members of any child that is a grouping container, in
//! that order. Children and members are fetched in one batched call each, so
//! a frame-scoped export costs exactly two dependent requests after the
//! frame query. The same object may appear more than once; nothing here
//! deduplicates.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use std::collections::HashMap;

use tracing::warn;

use crate::api::{BoardClient, BoardObject, ObjectFilter, TYPE_FRAME};
use crate::error::ExportError;

/// Resolve frame titles to frame objects.
///
/// Titles are processed in request order. A title matching several frames
/// contributes all of them in the board's return order; each occurrence of a
/// repeated title resolves independently.
///
/// # Errors
///
/// Returns `ExportError::MissingFrames` with the count of unmatched titles
/// if any title matches nothing; no partial result is produced. Board
/// request failures propagate as `ExportError::Api`.
pub async fn resolve_frames(
    client: &BoardClient,
    names: &[String],
) -> Result<Vec<BoardObject>, ExportError> {
    let frames = client.board_objects(&ObjectFilter::by_type(TYPE_FRAME)).await?;

    let mut selected = Vec::new();
    let mut missing = 0_usize;
    for name in names {
        let matched: Vec<BoardObject> = frames
            .iter()
            .filter(|frame| frame.title.as_deref() == Some(name.as_str()))
            .cloned()
            .collect();
        if matched.is_empty() {
            warn!(title = %name, "no frame with this title on the board");
            missing += 1;
            continue;
        }
        selected.extend(matched);
    }

    if missing > 0 {
        return Err(ExportError::MissingFrames { missing });
    }
    Ok(selected)
}

/// Resolve the object graph for JSON export.
///
/// With no frame scope, returns every object on the board in the service's
/// natural order. With a frame scope, returns the frames, then their direct
/// children, then the members of every child that is a grouping container.
///
/// # Errors
///
/// Board request failures propagate as `ExportError::Api`.
pub async fn resolve_graph(
    client: &BoardClient,
    frames: Option<&[BoardObject]>,
) -> Result<Vec<BoardObject>, ExportError> {
    let Some(frames) = frames else {
        return Ok(client.board_objects(&ObjectFilter::all()).await?);
    };

    let child_ids: Vec<String> = frames
        .iter()
        .flat_map(|frame| frame.children_ids.as_deref().unwrap_or_default())
        .cloned()
        .collect();
    let frame_children = fetch_in_order(client, &child_ids).await?;

    let item_ids: Vec<String> = frame_children
        .iter()
        .filter(|child| child.is_group())
        .flat_map(|group| group.items_ids.as_deref().unwrap_or_default())
        .cloned()
        .collect();
    let group_children = fetch_in_order(client, &item_ids).await?;

    let mut objects = frames.to_vec();
    objects.extend(frame_children);
    objects.extend(group_children);
    Ok(objects)
}

/// Titles of all frames on the board, in board order. Untitled frames are
/// omitted.
///
/// # Errors
///
/// Board request failures propagate as `ExportError::Api`.
pub async fn list_frame_titles(client: &BoardClient) -> Result<Vec<String>, ExportError> {
    let frames = client.board_objects(&ObjectFilter::by_type(TYPE_FRAME)).await?;
    Ok(frames
        .into_iter()
        .filter_map(|frame| frame.title)
        .filter(|title| !title.is_empty())
        .collect())
}

/// Batched id fetch, re-sequenced into requested order. The service's return
/// order for an id query is not contractual, so the response is reordered
/// client-side; ids the service did not return are skipped. The query is
/// issued even for an empty id list.
async fn fetch_in_order(
    client: &BoardClient,
    ids: &[String],
) -> Result<Vec<BoardObject>, ExportError> {
    let fetched = client.board_objects(&ObjectFilter::by_ids(ids)).await?;
    let by_id: HashMap<&str, &BoardObject> = fetched
        .iter()
        .map(|object| (object.id.as_str(), object))
        .collect();
    Ok(ids
        .iter()
        .filter_map(|id| by_id.get(id.as_str()).map(|object| (*object).clone()))
        .collect())
}
