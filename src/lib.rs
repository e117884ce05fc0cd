//! Board export tool: self-contained SVG snapshots and JSON object graphs.
//!
//! Exports visual content from a remote whiteboard service. SVG export
//! fetches the board's vector rendering and rewrites every external image
//! reference into an embedded `data:` URI, so the result opens offline.
//! JSON export resolves the frame/child/group object graph and serializes
//! the flattened record list. Both pipelines run strictly sequentially; the
//! only concurrency is cooperative suspension on network and file awaits.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`api`] | Board service HTTP client and the object model |
//! | [`inline`] | SVG parsing and image reference inlining |
//! | [`graph`] | Frame selection and object graph resolution |
//! | [`export`] | Export dispatch: format, scope, per-frame mode |
//! | [`output`] | Destination writes and `{frame}` templating |
//! | [`error`] | Pipeline error type |

pub mod api;
pub mod error;
pub mod export;
pub mod graph;
pub mod inline;
pub mod output;
