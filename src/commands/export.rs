//! Export post and tag data for static pages
//!
//! Layout under the public directory:
//!
//! ```text
//! site.json             site title, author and home URL
//! posts.json            every post summary, newest first
//! posts/<slug>.json     summary plus rendered HTML body
//! tags.json             tags, most used first
//! tags/<tag-file>.json  summaries of the posts carrying the tag
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::content::{MarkdownRenderer, PostMeta};
use crate::helpers::{full_url_for, post_url, tag_url, url_for};
use crate::Site;

/// What an export wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub posts: usize,
    pub tags: usize,
}

#[derive(Serialize)]
struct SiteEntry<'a> {
    title: &'a str,
    description: &'a str,
    author: &'a str,
    language: &'a str,
    home: String,
    url: String,
    posts: usize,
    tags: usize,
}

#[derive(Serialize)]
struct PostEntry<'a> {
    #[serde(flatten)]
    meta: &'a PostMeta,
    url: String,
}

#[derive(Serialize)]
struct PostPage<'a> {
    #[serde(flatten)]
    meta: &'a PostMeta,
    url: String,
    html: String,
}

#[derive(Serialize)]
struct TagEntry<'a> {
    name: &'a str,
    count: usize,
    url: String,
    file: String,
    posts: &'a [String],
}

/// Export the site's content to its public directory
pub fn run(site: &Site) -> Result<ExportSummary> {
    let start = std::time::Instant::now();

    let index = site.loader().index();
    tracing::info!("Loaded {} posts from {:?}", index.len(), site.posts_dir);

    let out = &site.public_dir;
    fs::create_dir_all(out).with_context(|| format!("Failed to create {:?}", out))?;
    reset_dir(&out.join("posts"))?;
    reset_dir(&out.join("tags"))?;

    let renderer = MarkdownRenderer::from_config(&site.config.highlight);
    let config = &site.config;

    let metas = index.list_all();
    let entries: Vec<PostEntry> = metas
        .iter()
        .map(|meta| PostEntry {
            meta,
            url: post_url(config, &meta.slug),
        })
        .collect();
    write_json(&out.join("posts.json"), &entries)?;

    for (post, meta) in index.posts().iter().zip(&metas) {
        let page = PostPage {
            meta,
            url: post_url(config, &post.slug),
            html: renderer.render(&post.body),
        };
        write_json(&out.join("posts").join(format!("{}.json", post.slug)), &page)?;
        tracing::debug!("Exported post {}", post.slug);
    }

    let tag_index = index.tag_index();
    let mut used_files = HashSet::new();
    let mut tag_entries = Vec::with_capacity(tag_index.len());

    for (tag, slugs) in tag_index.iter() {
        let file = tag_file_name(tag, &mut used_files);
        let tagged: Vec<&PostEntry> = entries.iter().filter(|e| e.meta.has_tag(tag)).collect();
        write_json(&out.join("tags").join(format!("{}.json", file)), &tagged)?;

        tag_entries.push(TagEntry {
            name: tag,
            count: slugs.len(),
            url: tag_url(config, tag),
            file,
            posts: slugs,
        });
    }
    write_json(&out.join("tags.json"), &tag_entries)?;

    let site_entry = SiteEntry {
        title: &config.title,
        description: &config.description,
        author: &config.author,
        language: &config.language,
        home: url_for(config, ""),
        url: full_url_for(config, ""),
        posts: index.len(),
        tags: tag_index.len(),
    };
    write_json(&out.join("site.json"), &site_entry)?;

    let summary = ExportSummary {
        posts: index.len(),
        tags: tag_index.len(),
    };

    tracing::info!(
        "Exported {} posts and {} tags in {:.2}s",
        summary.posts,
        summary.tags,
        start.elapsed().as_secs_f64()
    );

    Ok(summary)
}

/// File stem for a tag's listing, unique within one export
fn tag_file_name(tag: &str, used: &mut HashSet<String>) -> String {
    let mut base = slug::slugify(tag);
    if base.is_empty() {
        base = "tag".to_string();
    }

    let mut candidate = base.clone();
    let mut n = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{}-{}", base, n);
        n += 1;
    }
    candidate
}

fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).with_context(|| format!("Failed to remove {:?}", dir))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_file_names_are_unique() {
        let mut used = HashSet::new();
        assert_eq!(tag_file_name("Rust", &mut used), "rust");
        assert_eq!(tag_file_name("rust", &mut used), "rust-2");
        assert_eq!(tag_file_name("RUST!", &mut used), "rust-3");
        assert_eq!(tag_file_name("!!!", &mut used), "tag");
    }

    #[test]
    fn test_export_empty_site() {
        let tmp = tempfile::TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let summary = run(&site).unwrap();
        assert_eq!(summary, ExportSummary { posts: 0, tags: 0 });

        let posts = fs::read_to_string(site.public_dir.join("posts.json")).unwrap();
        assert_eq!(posts.trim(), "[]");
        let tags = fs::read_to_string(site.public_dir.join("tags.json")).unwrap();
        assert_eq!(tags.trim(), "[]");
    }
}
