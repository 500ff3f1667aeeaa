//! Show a single post

use anyhow::Result;
use std::io::Write;

use crate::content::MarkdownRenderer;
use crate::helpers::{display_date, post_url, tag_url};
use crate::Site;

/// Print one post's metadata, and its rendered body when `html` is set
pub fn run(site: &Site, slug: &str, html: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_post(site, slug, html, &mut out)
}

pub fn write_post<W: Write>(site: &Site, slug: &str, html: bool, out: &mut W) -> Result<()> {
    let Some(post) = site.loader().get(slug) else {
        anyhow::bail!("Post not found: {}", slug);
    };

    let date = display_date(
        post.published_at.as_ref(),
        &post.date,
        &site.config.date_format,
    );

    writeln!(out, "{}", post.title)?;
    writeln!(out, "  date:         {}", date)?;
    writeln!(out, "  reading time: {}", post.reading_time())?;
    writeln!(out, "  description:  {}", post.description)?;
    writeln!(out, "  url:          {}", post_url(&site.config, &post.slug))?;
    writeln!(out, "  source:       {}", post.source.display())?;
    if !post.tags.is_empty() {
        writeln!(out, "  tags:")?;
        for tag in &post.tags {
            writeln!(out, "    {} -> {}", tag, tag_url(&site.config, tag))?;
        }
    }

    if html {
        let renderer = MarkdownRenderer::from_config(&site.config.highlight);
        writeln!(out)?;
        write!(out, "{}", renderer.render(&post.body))?;
    }

    Ok(())
}
