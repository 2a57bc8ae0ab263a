use std::borrow::Cow;

use super::*;

/// Used to format social-text inputs.
///
/// Holds the marker-glyph [`Config`] and nothing else; formatting is pure,
/// takes `&self`, and a single formatter can be shared freely across
/// callers.
#[derive(Clone, Debug, Default)]
pub struct GlyphFormatter {
    pub(crate) config: Config,
}

impl GlyphFormatter {
    /// Create a [`GlyphFormatter`] with a custom [`Config`].
    ///
    /// ```rust
    /// # use glyphmark::{Config, GlyphFormatter};
    /// let formatter = GlyphFormatter::with_config(Config {
    ///     list_bullet: "▸".into(),
    ///     ..Default::default()
    /// });
    /// assert_eq!(formatter.format("- item"), "▸ item");
    /// ```
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Configure the glyph substituted for `- ` list markers.
    pub fn list_bullet(&mut self, glyph: impl Into<Cow<'static, str>>) -> &mut Self {
        self.config.list_bullet = glyph.into();
        self
    }

    /// Configure the glyph substituted for `+ ` list markers.
    pub fn list_bullet_max(&mut self, glyph: impl Into<Cow<'static, str>>) -> &mut Self {
        self.config.list_bullet_max = glyph.into();
        self
    }

    /// Configure the glyph repeated for `..` indentation runs.
    pub fn indent(&mut self, glyph: impl Into<Cow<'static, str>>) -> &mut Self {
        self.config.indent = glyph.into();
        self
    }
}
