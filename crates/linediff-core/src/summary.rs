//! Change counts derived from a diff

use crate::change::LineKind;
use crate::diff::DiffResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts of each line kind in a [`DiffResult`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
    /// `additions + deletions`
    pub total_changes: usize,
    pub has_changes: bool,
}

/// Fold a diff into its change counts in a single pass
pub fn summarize(result: &DiffResult) -> DiffSummary {
    let mut summary = DiffSummary::default();
    for line in result {
        match line.kind {
            LineKind::Added => summary.additions += 1,
            LineKind::Removed => summary.deletions += 1,
            LineKind::Unchanged => summary.unchanged += 1,
        }
    }
    summary.total_changes = summary.additions + summary.deletions;
    summary.has_changes = summary.total_changes > 0;
    summary
}

impl From<&DiffResult> for DiffSummary {
    fn from(result: &DiffResult) -> Self {
        summarize(result)
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_changes {
            write!(f, "+{} -{}", self.additions, self.deletions)
        } else {
            f.write_str("no changes")
        }
    }
}
