//! CLI for the glyphmark formatter: reads Markdown-like shorthand from a
//! file or stdin and writes the Unicode-styled text to stdout.

use std::{
    io::Read,
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use glyphmark::{
    platform::{self, Field},
    Config, GlyphFormatter,
};

/// Style social-media posts with Unicode look-alike glyphs.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Input file (defaults to stdin)
    input: Option<PathBuf>,

    /// Glyph for `-` list bullets
    #[arg(long)]
    bullet: Option<String>,

    /// Glyph for `+` list bullets
    #[arg(long)]
    bullet_max: Option<String>,

    /// Glyph repeated for `..` indentation
    #[arg(long)]
    indent: Option<String>,

    /// Also print the per-platform character-limit report
    #[arg(long)]
    compat: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let input = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let mut config = Config::default();
    if let Some(bullet) = cli.bullet {
        config.list_bullet = bullet.into();
    }
    if let Some(bullet_max) = cli.bullet_max {
        config.list_bullet_max = bullet_max.into();
    }
    if let Some(indent) = cli.indent {
        config.indent = indent.into();
    }

    let output = GlyphFormatter::with_config(config).format(&input);
    println!("{output}");

    if cli.compat {
        let count = platform::char_count(&output);
        let compat = platform::compatibility(&output);
        let reading = platform::reading_time(&output);
        eprintln!();
        eprintln!(
            "{count} characters, ~{}s read, fits {}% of post limits, {}% of bio limits",
            reading.as_secs(),
            compat.posts,
            compat.bio,
        );
        for p in platform::PLATFORMS {
            let posts = if platform::fits(&output, p, Field::Posts) { "ok" } else { "over" };
            let bio = if platform::fits(&output, p, Field::Bio) { "ok" } else { "over" };
            eprintln!(
                "  {:<10} posts {posts:>4} ({}), bio {bio:>4} ({})",
                p.name, p.post_limit, p.bio_limit,
            );
        }
    }

    Ok(())
}
