//! Character budgets for the social platforms the formatter targets.
//!
//! Styled output is plain text, so the only compatibility question is
//! whether it fits a platform's character limit. Counting uses extended
//! grapheme clusters: the styled glyphs live outside the BMP, and a UTF-16
//! code-unit count (what a browser's `length` reports) would charge each of
//! them twice.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

/// Words-per-minute rate used by [`reading_time`].
const READING_SPEED: u64 = 180;

/// Which character limit of a platform to check against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// The post/body limit.
    Posts,
    /// The profile-bio limit.
    Bio,
}

/// A social platform and its character limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Platform {
    /// Display name.
    pub name: &'static str,
    /// Maximum characters in a post.
    pub post_limit: usize,
    /// Maximum characters in a profile bio.
    pub bio_limit: usize,
}

impl Platform {
    /// The limit for the given [`Field`].
    pub fn limit(&self, field: Field) -> usize {
        match field {
            Field::Posts => self.post_limit,
            Field::Bio => self.bio_limit,
        }
    }
}

/// The known platforms and their published limits.
pub const PLATFORMS: &[Platform] = &[
    Platform { name: "X/Twitter", post_limit: 280, bio_limit: 160 },
    Platform { name: "LinkedIn", post_limit: 3000, bio_limit: 220 },
    Platform { name: "Instagram", post_limit: 2160, bio_limit: 150 },
    Platform { name: "Facebook", post_limit: 63206, bio_limit: 101 },
    Platform { name: "Threads", post_limit: 500, bio_limit: 150 },
    Platform { name: "Discord", post_limit: 2000, bio_limit: 190 },
    Platform { name: "Reddit", post_limit: 40000, bio_limit: 200 },
    Platform { name: "TikTok", post_limit: 2200, bio_limit: 80 },
    Platform { name: "YouTube", post_limit: 5000, bio_limit: 1000 },
    Platform { name: "Mastodon", post_limit: 500, bio_limit: 500 },
];

/// How well a text fits across all known platforms, as rounded percentages
/// of platforms whose limit accommodates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compatibility {
    /// Percent of platforms whose post limit fits the text.
    pub posts: u8,
    /// Percent of platforms whose bio limit fits the text.
    pub bio: u8,
    /// Rounded mean of the two.
    pub general: u8,
}

/// Count the extended grapheme clusters of `text`.
///
/// ```rust
/// # use glyphmark::platform::char_count;
/// assert_eq!(char_count("𝗵𝗲𝗹𝗹𝗼"), 5);
/// ```
pub fn char_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Whether `text` fits within `platform`'s limit for `field`.
pub fn fits(text: &str, platform: &Platform, field: Field) -> bool {
    char_count(text) <= platform.limit(field)
}

/// Compute the [`Compatibility`] of `text` across all known platforms.
pub fn compatibility(text: &str) -> Compatibility {
    let count = char_count(text);
    let percentage = |field: Field| {
        let fitting = PLATFORMS
            .iter()
            .filter(|platform| count <= platform.limit(field))
            .count();
        fitting as f64 / PLATFORMS.len() as f64 * 100.0
    };

    let posts = percentage(Field::Posts);
    let bio = percentage(Field::Bio);
    tracing::trace!(count, posts, bio, "computed compatibility");
    Compatibility {
        posts: posts.round() as u8,
        bio: bio.round() as u8,
        general: ((posts + bio) / 2.0).round() as u8,
    }
}

/// Estimated reading time of `text` at 180 words per minute.
pub fn reading_time(text: &str) -> Duration {
    let words = text.split_whitespace().count() as u64;
    Duration::from_secs(words * 60 / READING_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_glyphs_count_once() {
        assert_eq!(char_count("𝗯𝗼𝗹𝗱 and plain"), 14);
        assert_eq!(char_count(""), 0);
    }

    #[test]
    fn empty_text_fits_everywhere() {
        let compat = compatibility("");
        assert_eq!(compat, Compatibility { posts: 100, bio: 100, general: 100 });
    }

    #[test]
    fn three_hundred_chars_fit_most_posts_few_bios() {
        let text = "x".repeat(300);
        // Posts: everything but X/Twitter (280) fits. Bios: only YouTube
        // (1000) and Mastodon (500) fit.
        let compat = compatibility(&text);
        assert_eq!(compat, Compatibility { posts: 90, bio: 20, general: 55 });
    }

    #[test]
    fn per_platform_fit() {
        let twitter = &PLATFORMS[0];
        let text = "y".repeat(281);
        assert!(!fits(&text, twitter, Field::Posts));
        assert!(fits(&text[..280], twitter, Field::Posts));
    }

    #[test]
    fn reading_time_at_reading_speed() {
        assert_eq!(reading_time(&"word ".repeat(180)), Duration::from_secs(60));
        assert_eq!(reading_time(&"word ".repeat(90)), Duration::from_secs(30));
        assert_eq!(reading_time(""), Duration::from_secs(0));
    }
}
