// piifw/src/ui/diff_viewer.rs
//! Line diff between the original input and its redacted form.
//!
//! Removed lines (the original PII-bearing text) are printed in the
//! `diff_removed` color and their replacements in `diff_added`.

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::Write;

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

pub fn print_diff<W: Write>(
    original: &str,
    redacted: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    let patch = create_patch(original, redacted);
    let header = "--- Diff Analysis ---";
    if supports_color {
        writeln!(writer, "{}", header.color(color_for(ThemeEntry::DiffHeader, theme_map)))?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    let mut changed = false;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    changed = true;
                    write_line(writer, "- ", s, ThemeEntry::DiffRemoved, theme_map, supports_color)?;
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    write_line(writer, "+ ", s, ThemeEntry::DiffAdded, theme_map, supports_color)?;
                }
                DiffLine::Context(s) => {
                    write!(writer, "  {}", s)?;
                    ensure_newline(writer, s)?;
                }
            }
        }
    }

    if !changed {
        writeln!(writer, "No changes detected.")?;
    }
    Ok(())
}

fn write_line<W: Write>(
    writer: &mut W,
    marker: &str,
    text: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    let body = text.trim_end_matches('\n');
    if supports_color {
        writeln!(writer, "{}", format!("{}{}", marker, body).color(color_for(entry, theme_map)))?;
    } else {
        writeln!(writer, "{}{}", marker, body)?;
    }
    Ok(())
}

fn ensure_newline<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    if !text.ends_with('\n') {
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn diff_marks_changed_lines() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_diff(
            "keep\nmail john@test.com\n",
            "keep\nmail [EMAIL]\n",
            &mut buf,
            &theme,
            false,
        )
        .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("- mail john@test.com\n"));
        assert!(out.contains("+ mail [EMAIL]\n"));
        assert!(out.contains("  keep\n"));
    }

    #[test]
    fn identical_input_reports_no_changes() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_diff("same\n", "same\n", &mut buf, &theme, false).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("No changes detected."));
    }
}
