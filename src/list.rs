//! Line-structure rules: leading indentation dots, ordered-list numbers,
//! and the two bullet markers.
//!
//! The rules run sequentially over each line in a fixed order (indent,
//! numbers, `-`, `+`). They all anchor at the start of the line and consume
//! the prefix they match, so at most one of them fires in practice.

use crate::{
    charmap::{apply_style, Style},
    config::Config,
};

/// Rewrite a leading run of two or more `.` followed by one whitespace
/// character into the indent glyph repeated once per dot, plus a space.
/// Anything else passes through. Shared with fenced-block styling.
pub(crate) fn rewrite_indent_dots(line: &str, indent: &str) -> String {
    let dots = line.bytes().take_while(|&b| b == b'.').count();
    if dots < 2 {
        return line.to_string();
    }
    match line[dots..].chars().next() {
        Some(c) if c.is_whitespace() => {
            let rest = &line[dots + c.len_utf8()..];
            format!("{} {rest}", indent.repeat(dots))
        }
        _ => line.to_string(),
    }
}

/// `^(\s*)(\d+)\.\s` — style the number of an ordered-list marker, keeping
/// the leading whitespace and normalizing the separator to `. `.
fn rewrite_ordered_marker(line: &str) -> String {
    let ws_end = line
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len());
    let digits_len = line[ws_end..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return line.to_string();
    }

    let digits_end = ws_end + digits_len;
    let after_dot = match line[digits_end..].strip_prefix('.') {
        Some(rest) => rest,
        None => return line.to_string(),
    };
    match after_dot.chars().next() {
        Some(c) if c.is_whitespace() => {
            let number = apply_style(&line[ws_end..digits_end], Style::ListNumbers);
            format!(
                "{}{number}. {}",
                &line[..ws_end],
                &after_dot[c.len_utf8()..]
            )
        }
        _ => line.to_string(),
    }
}

/// `^(\s*)<marker>\s` — swap a bullet marker for its glyph, keeping the
/// leading whitespace.
fn rewrite_bullet(line: &str, marker: char, glyph: &str) -> String {
    let ws_end = line
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len());
    let after_marker = match line[ws_end..].strip_prefix(marker) {
        Some(rest) => rest,
        None => return line.to_string(),
    };
    match after_marker.chars().next() {
        Some(c) if c.is_whitespace() => format!(
            "{}{glyph} {}",
            &line[..ws_end],
            &after_marker[c.len_utf8()..]
        ),
        _ => line.to_string(),
    }
}

/// Apply all line-structure rules to one line, in their fixed order.
pub(crate) fn rewrite_line(line: &str, config: &Config) -> String {
    let line = rewrite_indent_dots(line, &config.indent);
    let line = rewrite_ordered_marker(&line);
    let line = rewrite_bullet(&line, '-', &config.list_bullet);
    rewrite_bullet(&line, '+', &config.list_bullet_max)
}
