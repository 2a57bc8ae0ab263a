//! The character substitution tables and the primitive that applies them.
//!
//! Every style maps plain ASCII letters (and digits where Unicode provides
//! them) onto look-alike code points from the Mathematical Alphanumeric
//! Symbols block, so the output reads as rich text in plain-text contexts.
//! The tables are static and immutable for the process lifetime.

use std::{borrow::Cow, fmt, str::FromStr};

const SOURCE_ALPHANUMERIC: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const SOURCE_ALPHABETIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BOLD_GLYPHS: &str =
    "𝗔𝗕𝗖𝗗𝗘𝗙𝗚𝗛𝗜𝗝𝗞𝗟𝗠𝗡𝗢𝗣𝗤𝗥𝗦𝗧𝗨𝗩𝗪𝗫𝗬𝗭𝗮𝗯𝗰𝗱𝗲𝗳𝗴𝗵𝗶𝗷𝗸𝗹𝗺𝗻𝗼𝗽𝗾𝗿𝘀𝘁𝘂𝘃𝘄𝘅𝘆𝘇𝟬𝟭𝟮𝟯𝟰𝟱𝟲𝟳𝟴𝟵";
// No italic digit forms exist in Unicode; digits pass through unstyled.
const ITALIC_GLYPHS: &str =
    "𝘈𝘉𝘊𝘋𝘌𝘍𝘎𝘏𝘐𝘑𝘒𝘓𝘔𝘕𝘖𝘗𝘘𝘙𝘚𝘛𝘜𝘝𝘞𝘟𝘠𝘡𝘢𝘣𝘤𝘥𝘦𝘧𝘨𝘩𝘪𝘫𝘬𝘭𝘮𝘯𝘰𝘱𝘲𝘳𝘴𝘵𝘶𝘷𝘸𝘹𝘺𝘻";
const BOLD_ITALIC_GLYPHS: &str =
    "𝘼𝘽𝘾𝘿𝙀𝙁𝙂𝙃𝙄𝙅𝙆𝙇𝙈𝙉𝙊𝙋𝙌𝙍𝙎𝙏𝙐𝙑𝙒𝙓𝙔𝙕𝙖𝙗𝙘𝙙𝙚𝙛𝙜𝙝𝙞𝙟𝙠𝙡𝙢𝙣𝙤𝙥𝙦𝙧𝙨𝙩𝙪𝙫𝙬𝙭𝙮𝙯";
const CODE_GLYPHS: &str =
    "𝙰𝙱𝙲𝙳𝙴𝙵𝙶𝙷𝙸𝙹𝙺𝙻𝙼𝙽𝙾𝙿𝚀𝚁𝚂𝚃𝚄𝚅𝚆𝚇𝚈𝚉𝚊𝚋𝚌𝚍𝚎𝚏𝚐𝚑𝚒𝚓𝚔𝚕𝚖𝚗𝚘𝚙𝚚𝚛𝚜𝚝𝚞𝚟𝚠𝚡𝚢𝚣𝟶𝟷𝟸𝟹𝟺𝟻𝟼𝟽𝟾𝟿";

/// The ten list-number glyphs, indexed by their ASCII digit value.
const LIST_NUMBER_GLYPHS: &str = "𝟬𝟭𝟮𝟯𝟰𝟱𝟲𝟳𝟴𝟵";

/// Default glyph for `-` bullets.
pub const LIST_BULLET: &str = "•";
/// Default glyph for `+` bullets.
pub const LIST_BULLET_MAX: &str = "●";
/// Default indentation glyph, repeated once per leading dot. An em space
/// survives copy-paste into social platforms where leading ASCII spaces
/// are often collapsed.
pub const INDENT: &str = "\u{2003}";

/// A parallel pair of strings: `source` holds the plain ASCII characters and
/// `styled` the look-alike glyph at the same character position.
struct GlyphTable {
    source: &'static str,
    styled: &'static str,
}

impl GlyphTable {
    /// `source` is pure ASCII, so the byte index of a hit equals its
    /// character index into `styled`.
    fn lookup(&self, c: char) -> Option<char> {
        let index = self.source.find(c)?;
        self.styled.chars().nth(index)
    }

    fn map(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.lookup(c).unwrap_or(c))
            .collect()
    }
}

const BOLD: GlyphTable = GlyphTable {
    source: SOURCE_ALPHANUMERIC,
    styled: BOLD_GLYPHS,
};
const ITALIC: GlyphTable = GlyphTable {
    source: SOURCE_ALPHABETIC,
    styled: ITALIC_GLYPHS,
};
const BOLD_ITALIC: GlyphTable = GlyphTable {
    source: SOURCE_ALPHABETIC,
    styled: BOLD_ITALIC_GLYPHS,
};
const CODE: GlyphTable = GlyphTable {
    source: SOURCE_ALPHANUMERIC,
    styled: CODE_GLYPHS,
};

/// A named character style backed by one of the static glyph tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Sans-serif bold letters and digits.
    Bold,
    /// Sans-serif italic letters. Digits pass through.
    Italic,
    /// Sans-serif bold italic letters. Digits pass through.
    BoldItalic,
    /// Monospace letters and digits.
    Code,
    /// Bold digit glyphs for ordered-list markers.
    ListNumbers,
    /// The fixed `-` bullet glyph. Ignores its input text.
    ListBullet,
    /// The fixed `+` bullet glyph. Ignores its input text.
    ListBulletMax,
    /// The fixed indentation glyph. Ignores its input text.
    Indent,
}

/// Error returned when a style key does not name any configured style.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseStyleError {
    key: String,
}

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown style key `{}`", self.key)
    }
}

impl std::error::Error for ParseStyleError {}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bold" => Ok(Style::Bold),
            "italic" => Ok(Style::Italic),
            "boldItalic" => Ok(Style::BoldItalic),
            "code" => Ok(Style::Code),
            "listNumbers" => Ok(Style::ListNumbers),
            "listBullet" => Ok(Style::ListBullet),
            "listBulletMax" => Ok(Style::ListBulletMax),
            "indent" => Ok(Style::Indent),
            _ => Err(ParseStyleError { key: s.to_string() }),
        }
    }
}

/// Rewrite `text` with the glyph table for `style`.
///
/// Characters without an entry in the table pass through unchanged, which
/// keeps punctuation, whitespace, and non-Latin scripts intact. The marker
/// styles ([`Style::ListBullet`], [`Style::ListBulletMax`], [`Style::Indent`])
/// ignore `text` entirely and return their fixed glyph.
///
/// ```rust
/// use glyphmark::{apply_style, Style};
///
/// assert_eq!(apply_style("ABC", Style::Bold), "𝗔𝗕𝗖");
/// assert_eq!(apply_style("a-1", Style::Italic), "𝘢-1");
/// assert_eq!(apply_style("anything", Style::ListBullet), "•");
/// ```
pub fn apply_style(text: &str, style: Style) -> String {
    match style {
        Style::ListBullet => LIST_BULLET.to_string(),
        Style::ListBulletMax => LIST_BULLET_MAX.to_string(),
        Style::Indent => INDENT.to_string(),
        Style::ListNumbers => text
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => LIST_NUMBER_GLYPHS
                    .chars()
                    .nth(d as usize)
                    .unwrap_or(c),
                None => c,
            })
            .collect(),
        Style::Bold => BOLD.map(text),
        Style::Italic => ITALIC.map(text),
        Style::BoldItalic => BOLD_ITALIC.map(text),
        Style::Code => CODE.map(text),
    }
}

/// String-keyed variant of [`apply_style`] for callers that carry style
/// names as data (e.g. a UI inserting a single glyph for a toolbar action).
///
/// An unknown key is a no-op, not an error: the input is returned unchanged.
///
/// ```rust
/// use glyphmark::apply_style_named;
///
/// assert_eq!(apply_style_named("hi", "boldItalic"), "𝙝𝙞");
/// assert_eq!(apply_style_named("hi", "sparkle"), "hi");
/// ```
pub fn apply_style_named<'a>(text: &'a str, key: &str) -> Cow<'a, str> {
    match key.parse::<Style>() {
        Ok(style) => apply_style(text, style).into(),
        Err(_) => text.into(),
    }
}
