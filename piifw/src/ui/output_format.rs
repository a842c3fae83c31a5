//! Colored status messages for stderr.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let line = format!("{}{}", prefix, msg);
    if supports_color {
        writeln!(writer, "{}", line.color(color_for(entry, theme_map)))
    } else {
        writeln!(writer, "{}", line)
    }
}

pub fn print_info_message<W: Write>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Info, theme_map, supports_color)
}

pub fn print_success_message<W: Write>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Success, theme_map, supports_color)
}

pub fn print_warn_message<W: Write>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_message(writer, "Warning: ", msg, ThemeEntry::Warn, theme_map, supports_color)
}

pub fn print_error_message<W: Write>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_message(writer, "Error: ", msg, ThemeEntry::Error, theme_map, supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_output_has_prefix_and_no_escapes() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_error_message(&mut buf, "boom", &theme, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: boom\n");
    }

    #[test]
    fn colored_output_contains_escape_codes() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_warn_message(&mut buf, "careful", &theme, true).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("Warning: careful"));
    }
}
