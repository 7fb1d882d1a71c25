//! Line representation for diff output

use serde::{Deserialize, Serialize};

/// How a line was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Line only exists in the modified document
    Added,
    /// Line only exists in the original document
    Removed,
    /// Line is present in both documents
    Unchanged,
}

impl LineKind {
    /// Two-character marker used by the side-by-side rendering
    pub fn marker(self) -> &'static str {
        match self {
            LineKind::Added => "+ ",
            LineKind::Removed => "- ",
            LineKind::Unchanged => "  ",
        }
    }

    /// Check if this is an actual change (not just context)
    pub fn is_change(self) -> bool {
        self != LineKind::Unchanged
    }
}

/// One row of a diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: LineKind,
    /// Line text without its trailing newline
    pub content: String,
    /// 1-based position in the diff output
    pub sequence_index: usize,
    /// 1-based line number in the original document (Unchanged and Removed)
    pub original_line_number: Option<usize>,
    /// 1-based line number in the modified document (Unchanged and Added)
    pub new_line_number: Option<usize>,
}

impl DiffLine {
    pub fn added(sequence_index: usize, new_line: usize, content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Added,
            content: content.into(),
            sequence_index,
            original_line_number: None,
            new_line_number: Some(new_line),
        }
    }

    pub fn removed(sequence_index: usize, original_line: usize, content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Removed,
            content: content.into(),
            sequence_index,
            original_line_number: Some(original_line),
            new_line_number: None,
        }
    }

    pub fn unchanged(
        sequence_index: usize,
        original_line: usize,
        new_line: usize,
        content: impl Into<String>,
    ) -> Self {
        Self {
            kind: LineKind::Unchanged,
            content: content.into(),
            sequence_index,
            original_line_number: Some(original_line),
            new_line_number: Some(new_line),
        }
    }

    pub fn is_change(&self) -> bool {
        self.kind.is_change()
    }

    /// Render as a single side-by-side row (marker followed by content)
    pub fn render(&self) -> String {
        format!("{}{}", self.kind.marker(), self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_line_numbers() {
        let added = DiffLine::added(1, 4, "foo");
        assert_eq!(added.kind, LineKind::Added);
        assert_eq!(added.original_line_number, None);
        assert_eq!(added.new_line_number, Some(4));

        let removed = DiffLine::removed(2, 7, "bar");
        assert_eq!(removed.kind, LineKind::Removed);
        assert_eq!(removed.original_line_number, Some(7));
        assert_eq!(removed.new_line_number, None);

        let unchanged = DiffLine::unchanged(3, 1, 2, "baz");
        assert_eq!(unchanged.original_line_number, Some(1));
        assert_eq!(unchanged.new_line_number, Some(2));
        assert!(!unchanged.is_change());
    }

    #[test]
    fn test_render_uses_marker() {
        assert_eq!(DiffLine::added(1, 1, "x").render(), "+ x");
        assert_eq!(DiffLine::removed(1, 1, "x").render(), "- x");
        assert_eq!(DiffLine::unchanged(1, 1, 1, "x").render(), "  x");
        assert_eq!(DiffLine::added(1, 1, "").render(), "+ ");
    }

    #[test]
    fn test_serializes_to_json() {
        let line = DiffLine::removed(1, 3, "let x = 1;");
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["kind"], "Removed");
        assert_eq!(json["original_line_number"], 3);
        assert!(json["new_line_number"].is_null());
    }
}
