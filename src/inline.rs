//! Inline emphasis resolution for a single line.
//!
//! The legacy pipeline this reproduces was a fixed sequence of global regex
//! substitutions, each feeding the next. Every pattern's content classes
//! excluded the delimiter character, so a segment always runs to the *first*
//! delimiter occurrence and a failed match restarts one character later.
//! That makes each pass expressible as a bounded left-to-right scan with no
//! backtracking, which is what [`apply_pattern`] does.
//!
//! Pass order matters and is part of the contract: the mixed bold/italic
//! patterns run before the plain ones so their outer delimiters are not
//! consumed early, and code spans run last so backticked text survives the
//! emphasis passes untouched. Styled output contains no `*` or `` ` ``, so
//! later passes never re-match earlier output.

use crate::charmap::{apply_style, Style};

/// One delimited segment of an inline pattern: content up to the next
/// delimiter, then `close` delimiter characters.
struct Segment {
    style: Style,
    /// Minimum content length. The affix segments of the mixed patterns
    /// accept empty content; every core segment requires at least one
    /// character.
    min_len: usize,
    close: usize,
}

/// An inline pattern: an opening delimiter run followed by one or more
/// [`Segment`]s.
struct Pattern {
    delim: char,
    open: usize,
    segments: &'static [Segment],
}

/// The ordered passes. Indexes mirror the legacy substitution order:
/// `**X*Y*Z**`, `*X**Y**Z*`, `***X***`, `**X**`, `*X*`, then `` `X` ``.
const PASSES: &[Pattern] = &[
    Pattern {
        delim: '*',
        open: 2,
        segments: &[
            Segment { style: Style::Bold, min_len: 0, close: 1 },
            Segment { style: Style::BoldItalic, min_len: 1, close: 1 },
            Segment { style: Style::Bold, min_len: 0, close: 2 },
        ],
    },
    Pattern {
        delim: '*',
        open: 1,
        segments: &[
            Segment { style: Style::Italic, min_len: 0, close: 2 },
            Segment { style: Style::BoldItalic, min_len: 1, close: 2 },
            Segment { style: Style::Italic, min_len: 0, close: 1 },
        ],
    },
    Pattern {
        delim: '*',
        open: 3,
        segments: &[Segment { style: Style::BoldItalic, min_len: 1, close: 3 }],
    },
    Pattern {
        delim: '*',
        open: 2,
        segments: &[Segment { style: Style::Bold, min_len: 1, close: 2 }],
    },
    Pattern {
        delim: '*',
        open: 1,
        segments: &[Segment { style: Style::Italic, min_len: 1, close: 1 }],
    },
    Pattern {
        delim: '`',
        open: 1,
        segments: &[Segment { style: Style::Code, min_len: 1, close: 1 }],
    },
];

/// Resolve all inline emphasis in `line`, which must not contain `\n`.
/// Unmatched delimiters stay literal.
pub(crate) fn rewrite_inline(line: &str) -> String {
    PASSES
        .iter()
        .fold(line.to_string(), |text, pattern| apply_pattern(&text, pattern))
}

/// One global, non-overlapping, left-to-right pass of `pattern` over `line`.
fn apply_pattern(line: &str, pattern: &Pattern) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == pattern.delim {
            if let Some((end, replacement)) = match_at(&chars, i, pattern) {
                out.push_str(&replacement);
                i = end;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Try to match `pattern` starting exactly at `start`. Returns the index one
/// past the match and the styled replacement text.
fn match_at(chars: &[char], start: usize, pattern: &Pattern) -> Option<(usize, String)> {
    let mut pos = start;
    for _ in 0..pattern.open {
        if chars.get(pos) != Some(&pattern.delim) {
            return None;
        }
        pos += 1;
    }

    let mut styled = String::new();
    for segment in pattern.segments {
        let content_start = pos;
        while pos < chars.len() && chars[pos] != pattern.delim {
            pos += 1;
        }
        if pos - content_start < segment.min_len {
            return None;
        }
        for _ in 0..segment.close {
            if chars.get(pos) != Some(&pattern.delim) {
                return None;
            }
            pos += 1;
        }
        let content: String = chars[content_start..pos - segment.close].iter().collect();
        styled.push_str(&apply_style(&content, segment.style));
    }
    Some((pos, styled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        let line = "no markers here, just words. 2 + 2";
        assert_eq!(rewrite_inline(line), line);
    }

    #[test]
    fn bold_italic_and_code_spans() {
        assert_eq!(rewrite_inline("hello *world*"), "hello 𝘸𝘰𝘳𝘭𝘥");
        assert_eq!(rewrite_inline("**hello**"), "𝗵𝗲𝗹𝗹𝗼");
        assert_eq!(rewrite_inline("***hi***"), "𝙝𝙞");
        assert_eq!(rewrite_inline("`let x = 1;`"), "𝚕𝚎𝚝 𝚡 = 𝟷;");
    }

    #[test]
    fn mixed_bold_with_italic_core() {
        assert_eq!(rewrite_inline("**bold*core*bold**"), "𝗯𝗼𝗹𝗱𝙘𝙤𝙧𝙚𝗯𝗼𝗹𝗱");
    }

    #[test]
    fn mixed_italic_with_bold_core() {
        assert_eq!(rewrite_inline("*it**core**it*"), "𝘪𝘵𝙘𝙤𝙧𝙚𝘪𝘵");
    }

    #[test]
    fn mixed_pattern_accepts_empty_affixes() {
        assert_eq!(rewrite_inline("**a*b***"), "𝗮𝙗");
    }

    #[test]
    fn stray_delimiters_stay_literal() {
        assert_eq!(rewrite_inline("*alone"), "*alone");
        assert_eq!(rewrite_inline("2 * 3 = 6"), "2 * 3 = 6");
        assert_eq!(rewrite_inline("``"), "``");
    }

    // Pinned pass-order artifacts for degenerate asterisk runs. These are
    // not "intended" semantics, only what the ordered passes yield.
    #[test]
    fn degenerate_runs_follow_pass_order() {
        assert_eq!(rewrite_inline("**a**b**"), "𝗮b**");
    }

    #[test]
    fn code_span_inside_bold_is_styled_bold_first() {
        // The bold pass consumes the outer markers before the backtick pass
        // runs, so the backticks end up wrapping already-bold glyphs.
        assert_eq!(rewrite_inline("**`code`**"), "𝗰𝗼𝗱𝗲");
    }

    #[test]
    fn emphasis_inside_inline_code_is_still_resolved() {
        // Only fenced blocks are protected; single backticks are processed
        // after the emphasis passes and do not shield their content.
        assert_eq!(rewrite_inline("`*not emph*`"), "𝘯𝘰𝘵 𝘦𝘮𝘱𝘩");
    }
}
