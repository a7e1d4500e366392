//! paint-core: raster snapshots and the bounded undo/redo history over them.
//!
//! Design rules:
//! - Snapshots are immutable; every state change produces a new one.
//! - The undo sequence is never empty once a history exists.
//! - Both sequences are capped at the same depth; overflow evicts the oldest entry.
//! - Any commit discards the redo branch.

pub mod history;
pub mod snapshot;
pub mod surface;

pub use history::{History, HistoryConfig, HistoryError, DEFAULT_MAX_DEPTH};
pub use snapshot::{Snapshot, SnapshotError};
pub use surface::Surface;
