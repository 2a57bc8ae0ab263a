//! Extraction and restoration of triple-backtick code fences.
//!
//! Fenced content must never be mistaken for emphasis markers, so it is cut
//! out before any inline pass runs and swapped for a reserved placeholder
//! token. The styled content comes back in a final restoration step.

use crate::{
    charmap::{self, Style},
    config::Config,
    list,
};

/// Prefix of the reserved placeholder token, `__MULTILINE_CODE_<index>__`.
///
/// Known limitation: a user who types this exact token shape gets it
/// swallowed by restoration. There is no runtime collision detection; the
/// token shape is simply reserved.
pub(crate) const PLACEHOLDER_PREFIX: &str = "__MULTILINE_CODE_";

/// A code fence lifted out of the working text, keyed by the index embedded
/// in its placeholder token. Consumed exactly once during restoration.
#[derive(Debug)]
pub(crate) struct ProtectedBlock {
    index: usize,
    content: String,
}

impl ProtectedBlock {
    pub(crate) fn placeholder(&self) -> String {
        format!("{PLACEHOLDER_PREFIX}{}__", self.index)
    }
}

/// Replace every ``` fence pair in `text` with a placeholder token and
/// return the styled fence contents alongside. Pairing is non-greedy: each
/// opening fence closes at the nearest following ```. An unclosed trailing
/// fence is left in the text verbatim.
pub(crate) fn extract(text: &str, config: &Config) -> (String, Vec<ProtectedBlock>) {
    let mut out = String::with_capacity(text.len());
    let mut blocks = Vec::new();
    let mut search = 0;

    while let Some(open) = text[search..].find("```").map(|rel| search + rel) {
        let content_start = open + 3;
        let Some(close) = text[content_start..].find("```").map(|rel| content_start + rel) else {
            break;
        };

        let block = ProtectedBlock {
            index: blocks.len(),
            content: style_block(&text[content_start..close], config),
        };
        tracing::trace!(index = block.index, "extracted code fence");
        out.push_str(&text[search..open]);
        out.push_str(&block.placeholder());
        blocks.push(block);
        search = close + 3;
    }

    out.push_str(&text[search..]);
    (out, blocks)
}

/// Trim the fence content, rewrite leading dot-runs into indentation glyphs
/// per line, and style the whole block as code.
fn style_block(content: &str, config: &Config) -> String {
    let indented: Vec<String> = content
        .trim()
        .split('\n')
        .map(|line| list::rewrite_indent_dots(line, &config.indent))
        .collect();
    charmap::apply_style(&indented.join("\n"), Style::Code)
}

/// Swap each placeholder token back for its styled content. Only the first
/// occurrence of a token is replaced, mirroring one-shot consumption.
pub(crate) fn restore(text: String, blocks: Vec<ProtectedBlock>) -> String {
    blocks.into_iter().fold(text, |acc, block| {
        acc.replacen(&block.placeholder(), &block.content, 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_restores_a_fence() {
        let config = Config::default();
        let (text, blocks) = extract("before\n```\nfn main() {}\n```\nafter", &config);
        assert_eq!(text, "before\n__MULTILINE_CODE_0__\nafter");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "𝚏𝚗 𝚖𝚊𝚒𝚗() {}");

        let restored = restore(text, blocks);
        assert_eq!(restored, "before\n𝚏𝚗 𝚖𝚊𝚒𝚗() {}\nafter");
    }

    #[test]
    fn pairs_fences_non_greedily() {
        let config = Config::default();
        let (text, blocks) = extract("```a```mid```b```", &config);
        assert_eq!(text, "__MULTILINE_CODE_0__mid__MULTILINE_CODE_1__");
        assert_eq!(blocks[0].content, "𝚊");
        assert_eq!(blocks[1].content, "𝚋");
    }

    #[test]
    fn unclosed_fence_is_left_verbatim() {
        let config = Config::default();
        let input = "text\n```\nnot closed";
        let (text, blocks) = extract(input, &config);
        assert_eq!(text, input);
        assert!(blocks.is_empty());
    }

    #[test]
    fn dot_indentation_inside_fence() {
        let config = Config::default();
        let (_, blocks) = extract("```\n.. step one\n```", &config);
        assert_eq!(blocks[0].content, "\u{2003}\u{2003} 𝚜𝚝𝚎𝚙 𝚘𝚗𝚎");
    }
}
