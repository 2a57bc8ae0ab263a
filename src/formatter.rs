use itertools::Itertools;

use super::*;
use crate::{fence, inline, list};

impl GlyphFormatter {
    /// Format a social-text input.
    ///
    /// The pipeline runs in four fixed phases: code fences are cut out and
    /// replaced by placeholder tokens, inline emphasis is resolved per line,
    /// line-structure markers (lists, indentation) are rewritten per line,
    /// and finally the styled fence contents are swapped back in. Lines
    /// holding a placeholder are skipped by both per-line phases so fenced
    /// content is never reinterpreted.
    ///
    /// Never fails: input without any markers comes back unchanged.
    ///
    /// ```rust
    /// # use glyphmark::GlyphFormatter;
    /// let formatter = GlyphFormatter::default();
    /// assert_eq!(formatter.format("**hello**"), "𝗵𝗲𝗹𝗹𝗼");
    /// assert_eq!(formatter.format("no markers"), "no markers");
    /// ```
    pub fn format(&self, input: &str) -> String {
        tracing::trace!(len = input.len(), "formatting input");
        let (text, blocks) = fence::extract(input, &self.config);

        let text = text
            .split('\n')
            .map(|line| match line.contains(fence::PLACEHOLDER_PREFIX) {
                true => line.to_string(),
                false => inline::rewrite_inline(line),
            })
            .join("\n");

        let text = text
            .split('\n')
            .map(|line| match line.contains(fence::PLACEHOLDER_PREFIX) {
                true => line.to_string(),
                false => list::rewrite_line(line, &self.config),
            })
            .join("\n");

        fence::restore(text, blocks)
    }
}
