//! Fake rich text for plain-text contexts. [glyphmark] turns Markdown-like
//! shorthand into Unicode look-alike glyphs (bold, italic, monospace, list
//! markers) that survive pasting into social platforms with no markup
//! support.
//!
//! [glyphmark]: index.html
//!
//! # Getting Started
//!
//! ```rust
//! use glyphmark::format_text;
//!
//! assert_eq!(format_text("**bold** and *italic*"), "𝗯𝗼𝗹𝗱 and 𝘪𝘵𝘢𝘭𝘪𝘤");
//! assert_eq!(format_text("- first\n- second"), "• first\n• second");
//! ```
//!
//! Triple-backtick fences are protected: their content is styled as
//! monospace and never reinterpreted as emphasis or list markers.
//!
//! ```rust
//! use glyphmark::format_text;
//!
//! let input = "```\n*not emphasis*\n```";
//! assert_eq!(format_text(input), "*𝚗𝚘𝚝 𝚎𝚖𝚙𝚑𝚊𝚜𝚒𝚜*");
//! ```
//!
//! # Using the [GlyphFormatter]
//!
//! The formatter struct gives you control over the marker glyphs.
//!
//! ```rust
//! use glyphmark::GlyphFormatter;
//!
//! let mut formatter = GlyphFormatter::default();
//! formatter.list_bullet("→");
//! assert_eq!(formatter.format("- item"), "→ item");
//! ```

mod builder;
mod charmap;
mod config;
mod fence;
mod formatter;
mod inline;
mod list;
pub mod platform;
#[cfg(test)]
mod test;

pub use builder::GlyphFormatter;
pub use charmap::{apply_style, apply_style_named, ParseStyleError, Style};
pub use config::Config;

/// Format a social-text snippet with the default glyphs.
///
/// This is the whole pipeline: fence protection, inline emphasis, list and
/// indentation markers, fence restoration. It never fails; text without any
/// markers passes through unchanged.
///
/// ```rust
/// # use glyphmark::format_text;
/// let post = "Launch day!\n1. read the docs\n2. ship it\n`cargo publish`";
/// assert_eq!(
///     format_text(post),
///     "Launch day!\n𝟭. read the docs\n𝟮. ship it\n𝚌𝚊𝚛𝚐𝚘 𝚙𝚞𝚋𝚕𝚒𝚜𝚑",
/// );
/// ```
pub fn format_text(input: &str) -> String {
    GlyphFormatter::default().format(input)
}

/// Format a social-text snippet with custom marker glyphs.
///
/// ```rust
/// # use glyphmark::{format_text_with_config, Config};
/// let config = Config {
///     list_bullet: "▸".into(),
///     ..Default::default()
/// };
/// assert_eq!(format_text_with_config("- item", config), "▸ item");
/// ```
pub fn format_text_with_config(input: &str, config: Config) -> String {
    tracing::trace!(?config);
    GlyphFormatter::with_config(config).format(input)
}
