//! Printing diffs in the selected format

use crate::config::{ColorMode, OutputFormat};
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use linediff_core::{DiffEngine, DiffResult, DiffSummary};
use serde::Serialize;
use std::io::IsTerminal;

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: DiffSummary,
    lines: &'a DiffResult,
}

/// Resolve `auto` against the current stdout and `NO_COLOR`
pub fn use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}

/// Render the comparison of `original` and `modified` for printing
pub fn render(
    engine: &DiffEngine,
    format: OutputFormat,
    original: &str,
    modified: &str,
    result: &DiffResult,
    color: bool,
) -> Result<String> {
    match format {
        OutputFormat::SideBySide => {
            let text = engine.render_side_by_side(original, modified);
            if color {
                crossterm::style::force_color_output(true);
                Ok(colorize(&text))
            } else {
                Ok(text)
            }
        }
        OutputFormat::Summary => Ok(render_summary(&result.summary())),
        OutputFormat::Json => {
            let report = JsonReport {
                summary: result.summary(),
                lines: result,
            };
            serde_json::to_string_pretty(&report).context("render json")
        }
    }
}

fn render_summary(summary: &DiffSummary) -> String {
    format!(
        "{} additions, {} deletions, {} unchanged ({})",
        summary.additions, summary.deletions, summary.unchanged, summary
    )
}

fn colorize(text: &str) -> String {
    text.split('\n')
        .map(|row| {
            if row.starts_with("+ ") {
                row.green().to_string()
            } else if row.starts_with("- ") {
                row.red().to_string()
            } else {
                row.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_plain(format: OutputFormat, old: &str, new: &str) -> String {
        let engine = DiffEngine::new();
        let result = engine.diff_strings(old, new);
        render(&engine, format, old, new, &result, false).unwrap()
    }

    #[test]
    fn test_side_by_side_plain() {
        assert_eq!(
            render_plain(OutputFormat::SideBySide, "a\nb", "a\nc"),
            "  a\n- b\n+ c"
        );
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            render_plain(OutputFormat::Summary, "a\nb", "a\nc\nd"),
            "2 additions, 1 deletions, 1 unchanged (+2 -1)"
        );
        assert_eq!(
            render_plain(OutputFormat::Summary, "a", "a"),
            "0 additions, 0 deletions, 1 unchanged (no changes)"
        );
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value =
            serde_json::from_str(&render_plain(OutputFormat::Json, "a", "b")).unwrap();

        assert_eq!(json["summary"]["additions"], 1);
        assert_eq!(json["summary"]["deletions"], 1);
        assert_eq!(json["lines"].as_array().unwrap().len(), 2);
        assert_eq!(json["lines"][0]["kind"], "Removed");
        assert_eq!(json["lines"][1]["sequence_index"], 2);
    }

    #[test]
    fn test_colorize_only_touches_changes() {
        crossterm::style::force_color_output(true);
        let colored = colorize("  a\n- b\n+ c");
        let rows: Vec<&str> = colored.split('\n').collect();

        assert_eq!(rows[0], "  a");
        assert!(rows[1].contains("- b") && rows[1] != "- b");
        assert!(rows[2].contains("+ c") && rows[2] != "+ c");
    }

    #[test]
    fn test_explicit_color_modes() {
        assert!(use_color(ColorMode::Always));
        assert!(!use_color(ColorMode::Never));
    }
}
