//! List site content

use anyhow::Result;
use std::io::Write;

use crate::content::PostMeta;
use crate::helpers::display_date;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_listing(site, content_type, &mut out)
}

/// Write the listing for `content_type` to `out`
pub fn write_listing<W: Write>(site: &Site, content_type: &str, out: &mut W) -> Result<()> {
    let loader = site.loader();

    match content_type {
        "post" | "posts" => {
            let posts = loader.list_all();
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in &posts {
                writeln!(out, "  {}", post_line(site, post))?;
            }
        }
        "tag" | "tags" => {
            let tags = loader.tag_index();
            writeln!(out, "Tags ({}):", tags.len())?;
            for (tag, slugs) in tags.iter() {
                writeln!(out, "  {} ({})", tag, slugs.len())?;
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}

fn post_line(site: &Site, post: &PostMeta) -> String {
    let date = display_date(
        post.published_at.as_ref(),
        &post.date,
        &site.config.date_format,
    );
    let mut line = format!("{} - {} ({}) [{}]", date, post.title, post.reading_time, post.slug);
    if !post.tags.is_empty() {
        line.push_str(&format!(" #{}", post.tags.join(" #")));
    }
    line
}
