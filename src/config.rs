use std::borrow::Cow;

use crate::charmap;

/// Formatting options. Only the fixed marker glyphs are configurable; the
/// letter substitution tables are static data and shared by every formatter.
#[derive(Clone, Debug)]
pub struct Config {
    /// Glyph substituted for a leading `- `.
    pub list_bullet: Cow<'static, str>,
    /// Glyph substituted for a leading `+ `.
    pub list_bullet_max: Cow<'static, str>,
    /// Glyph repeated once per dot of a leading `..` indentation run.
    pub indent: Cow<'static, str>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_bullet: charmap::LIST_BULLET.into(),
            list_bullet_max: charmap::LIST_BULLET_MAX.into(),
            indent: charmap::INDENT.into(),
        }
    }
}

impl Config {
    /// Internal setter for config options. Used for testing
    #[cfg(test)]
    pub(crate) fn set(&mut self, field: &str, value: &str) {
        match field {
            "list_bullet" => self.list_bullet = value.to_string().into(),
            "list_bullet_max" => self.list_bullet_max = value.to_string().into(),
            "indent" => self.indent = value.to_string().into(),
            _ => panic!("unknown configuration {field}"),
        }
    }
}
