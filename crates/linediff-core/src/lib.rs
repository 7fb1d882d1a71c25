//! Linediff Core - line-oriented diff engine
//!
//! This library classifies the lines of two versions of a document as
//! added, removed or unchanged, and presents the result as structured rows,
//! change counts or a marker-prefixed text block.

pub mod change;
pub mod diff;
pub mod summary;

pub use change::{DiffLine, LineKind};
pub use diff::{diff, render_side_by_side, Algorithm, DiffEngine, DiffResult};
pub use summary::{summarize, DiffSummary};
