//! Board object model: the wire records returned by the board service.
//!
//! Objects arrive as flat JSON records. This tool interprets a small set of
//! fields (`id`, `type`, `title`, `childrenIds`, `itemsIds`); everything else
//! is an open set that varies by object type. Unknown fields are captured in
//! `extra` via serde flatten so a JSON export reproduces the full record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Type tag for frame containers.
pub const TYPE_FRAME: &str = "frame";
/// Type tag for grouping containers.
pub const TYPE_GROUP: &str = "group";

/// A board object as returned by the board service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardObject {
    /// Unique identifier within the board.
    pub id: String,
    /// Object type tag (`frame`, `group`, `shape`, `image`, ...). Open set.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable title; used to select frames for export.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Ordered ids of the objects contained in this frame.
    #[serde(rename = "childrenIds", skip_serializing_if = "Option::is_none")]
    pub children_ids: Option<Vec<String>>,
    /// Ordered ids of the members of this grouping container.
    #[serde(rename = "itemsIds", skip_serializing_if = "Option::is_none")]
    pub items_ids: Option<Vec<String>>,
    /// Remaining wire fields, preserved verbatim for export.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BoardObject {
    /// Whether this object is a frame container.
    #[must_use]
    pub fn is_frame(&self) -> bool {
        self.kind == TYPE_FRAME
    }

    /// Whether this object is a grouping container.
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.kind == TYPE_GROUP
    }
}
