//! Line classification engine

use crate::change::{DiffLine, LineKind};
use crate::summary::{summarize, DiffSummary};
use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};
use std::collections::HashSet;
use tracing::debug;

/// Strategy used to decide which lines are added, removed or unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Walk both documents in lockstep and classify lines by whether their
    /// content occurs anywhere in the other document.
    ///
    /// Duplicate lines are matched by content only, so a repeated line can be
    /// reported as unchanged even when it moved.
    #[default]
    ContentSet,
    /// Conventional longest-common-subsequence line diff
    Myers,
}

/// Result of a diff operation: rows in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffResult {
    pub lines: Vec<DiffLine>,
}

impl DiffResult {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffLine> {
        self.lines.iter()
    }

    /// Get only the added and removed rows
    pub fn changes(&self) -> impl Iterator<Item = &DiffLine> {
        self.lines.iter().filter(|l| l.is_change())
    }

    pub fn summary(&self) -> DiffSummary {
        summarize(self)
    }

    /// Marker-prefixed text block, identical to [`render_side_by_side`] for
    /// the same inputs
    pub fn render(&self) -> String {
        let rows: Vec<String> = self.lines.iter().map(DiffLine::render).collect();
        join_rows(&rows)
    }
}

impl FromIterator<DiffLine> for DiffResult {
    fn from_iter<I: IntoIterator<Item = DiffLine>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DiffResult {
    type Item = DiffLine;
    type IntoIter = std::vec::IntoIter<DiffLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a DiffLine;
    type IntoIter = std::slice::Iter<'a, DiffLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// The main diff engine
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine {
    algorithm: Algorithm,
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Compute diff between two strings
    pub fn diff_strings(&self, original: &str, modified: &str) -> DiffResult {
        let old_lines = split_lines(original);
        let new_lines = split_lines(modified);
        let mut lines: Vec<DiffLine> = Vec::with_capacity(old_lines.len().max(new_lines.len()));

        self.classify(&old_lines, &new_lines, |kind, content, old, new| {
            let seq = lines.len() + 1;
            let line = match (kind, old, new) {
                (LineKind::Unchanged, Some(o), Some(n)) => DiffLine::unchanged(seq, o, n, content),
                (LineKind::Removed, Some(o), _) => DiffLine::removed(seq, o, content),
                (LineKind::Added, _, Some(n)) => DiffLine::added(seq, n, content),
                _ => return,
            };
            lines.push(line);
        });

        debug!(rows = lines.len(), "diff complete");
        DiffResult { lines }
    }

    /// Classify both texts again and fold the rows straight into a
    /// marker-prefixed text block
    pub fn render_side_by_side(&self, original: &str, modified: &str) -> String {
        let old_lines = split_lines(original);
        let new_lines = split_lines(modified);
        let mut rows = Vec::with_capacity(old_lines.len().max(new_lines.len()));

        self.classify(&old_lines, &new_lines, |kind, content, _, _| {
            rows.push(format!("{}{}", kind.marker(), content));
        });

        join_rows(&rows)
    }

    fn classify<'a, F>(&self, original: &[&'a str], modified: &[&'a str], emit: F)
    where
        F: FnMut(LineKind, &'a str, Option<usize>, Option<usize>),
    {
        debug!(
            algorithm = ?self.algorithm,
            original_lines = original.len(),
            modified_lines = modified.len(),
            "classifying lines"
        );
        match self.algorithm {
            Algorithm::ContentSet => classify_content_set(original, modified, emit),
            Algorithm::Myers => classify_myers(original, modified, emit),
        }
    }
}

/// Compute diff between two strings with the default engine
pub fn diff(original: &str, modified: &str) -> DiffResult {
    DiffEngine::new().diff_strings(original, modified)
}

/// Render two strings as a `+`/`-`/` ` prefixed block with the default engine
pub fn render_side_by_side(original: &str, modified: &str) -> String {
    DiffEngine::new().render_side_by_side(original, modified)
}

/// Split on `'\n'`. A trailing newline ends the last line instead of
/// starting an empty one, and the empty string has no lines.
fn split_lines(text: &str) -> Vec<&str> {
    text.split_terminator('\n').collect()
}

/// Join rows with newlines, dropping whitespace-only rows at either edge.
/// Marker rows for changes always contain `+` or `-`, so they are never dropped.
fn join_rows(rows: &[String]) -> String {
    let is_blank = |row: &String| row.trim().is_empty();
    let Some(start) = rows.iter().position(|r| !is_blank(r)) else {
        return String::new();
    };
    let end = rows.iter().rposition(|r| !is_blank(r)).map_or(start, |i| i + 1);
    rows[start..end].join("\n")
}

fn classify_content_set<'a, F>(original: &[&'a str], modified: &[&'a str], mut emit: F)
where
    F: FnMut(LineKind, &'a str, Option<usize>, Option<usize>),
{
    let original_set: HashSet<&str> = original.iter().copied().collect();
    let modified_set: HashSet<&str> = modified.iter().copied().collect();

    // Membership is by content only; every occurrence of a shared line is matchable
    let removed: HashSet<&str> = original
        .iter()
        .copied()
        .filter(|line| !modified_set.contains(line))
        .collect();
    let added: HashSet<&str> = modified
        .iter()
        .copied()
        .filter(|line| !original_set.contains(line))
        .collect();

    let mut i = 0;
    let mut j = 0;
    while i < original.len() || j < modified.len() {
        let old = original.get(i).copied();
        let new = modified.get(j).copied();

        match (old, new) {
            (Some(o), Some(n)) if o == n => {
                emit(LineKind::Unchanged, o, Some(i + 1), Some(j + 1));
                i += 1;
                j += 1;
            }
            (Some(o), _) if removed.contains(o) => {
                emit(LineKind::Removed, o, Some(i + 1), None);
                i += 1;
            }
            (_, Some(n)) if added.contains(n) => {
                emit(LineKind::Added, n, None, Some(j + 1));
                j += 1;
            }
            _ => {
                // Both lines exist elsewhere in the other document
                if let Some(o) = old {
                    emit(LineKind::Removed, o, Some(i + 1), None);
                    i += 1;
                }
                if let Some(n) = new {
                    emit(LineKind::Added, n, None, Some(j + 1));
                    j += 1;
                }
            }
        }
    }
}

fn classify_myers<'a, F>(original: &[&'a str], modified: &[&'a str], mut emit: F)
where
    F: FnMut(LineKind, &'a str, Option<usize>, Option<usize>),
{
    let text_diff = TextDiff::from_slices(original, modified);

    for change in text_diff.iter_all_changes() {
        match (change.tag(), change.old_index(), change.new_index()) {
            (ChangeTag::Equal, Some(i), Some(j)) => {
                emit(LineKind::Unchanged, original[i], Some(i + 1), Some(j + 1));
            }
            (ChangeTag::Delete, Some(i), _) => {
                emit(LineKind::Removed, original[i], Some(i + 1), None);
            }
            (ChangeTag::Insert, _, Some(j)) => {
                emit(LineKind::Added, modified[j], None, Some(j + 1));
            }
            _ => {}
        }
    }
}
