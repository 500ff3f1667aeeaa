//! Post models

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use super::reading::{ReadingTime, DEFAULT_WORDS_PER_MINUTE};

/// A fully loaded blog post
#[derive(Debug, Clone)]
pub struct Post {
    /// File base name without extension; lookup key and URL segment
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date as authored
    pub date: String,

    /// Parsed publication date, `None` when the authored value is not a date
    pub published_at: Option<DateTime<Utc>>,

    /// Summary shown in listings
    pub description: String,

    /// Tags in authoring order
    pub tags: Vec<String>,

    /// Raw markdown after the front-matter
    pub body: String,

    /// File the post was loaded from
    pub source: PathBuf,

    words_per_minute: usize,
}

impl Post {
    /// Create a post with an empty body and no tags
    pub fn new(slug: String, title: String, date: String, description: String) -> Self {
        let published_at = super::frontmatter::parse_date_string(&date);
        Self {
            slug,
            title,
            date,
            published_at,
            description,
            tags: Vec::new(),
            body: String::new(),
            source: PathBuf::new(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }

    pub(crate) fn with_words_per_minute(mut self, words_per_minute: usize) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    /// Reading time, computed from the current body
    pub fn reading_time(&self) -> ReadingTime {
        ReadingTime::estimate(&self.body, self.words_per_minute)
    }

    /// Whether the post carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Summary of the post without its body
    pub fn meta(&self) -> PostMeta {
        PostMeta {
            slug: self.slug.clone(),
            title: self.title.clone(),
            date: self.date.clone(),
            published_at: self.published_at,
            description: self.description.clone(),
            tags: self.tags.clone(),
            reading_time: self.reading_time(),
        }
    }
}

/// Listing view of a post: every field except the body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub description: String,
    pub tags: Vec<String>,
    pub reading_time: ReadingTime,
}

impl PostMeta {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Sort newest first.
///
/// Posts whose date does not parse compare equal to each other and come after
/// every dated post. The sort is stable, so equal dates keep discovery order.
pub fn sort_newest_first<T, F>(items: &mut [T], published_at: F)
where
    F: Fn(&T) -> Option<DateTime<Utc>>,
{
    items.sort_by(|a, b| published_at(b).cmp(&published_at(a)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: &str) -> Post {
        Post::new(
            slug.to_string(),
            slug.to_uppercase(),
            date.to_string(),
            String::new(),
        )
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![
            post("a", "2024-01-01"),
            post("b", "2024-02-01"),
            post("c", "2023-12-31"),
        ];
        sort_newest_first(&mut posts, |p| p.published_at);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["b", "a", "c"]);
    }

    #[test]
    fn test_undated_posts_sort_last_in_discovery_order() {
        let mut posts = vec![
            post("x", "not a date"),
            post("a", "2024-01-01"),
            post("y", "soon"),
            post("b", "2024-01-01"),
        ];
        sort_newest_first(&mut posts, |p| p.published_at);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "b", "x", "y"]);
    }

    #[test]
    fn test_reading_time_follows_body() {
        let mut p = post("a", "2024-01-01");
        p.body = vec!["w"; 250].join(" ");
        assert_eq!(p.reading_time().to_string(), "2 min read");
        p.body = "short".to_string();
        assert_eq!(p.reading_time().to_string(), "1 min read");
    }

    #[test]
    fn test_meta_serialization() {
        let mut p = post("hello", "2024-01-01");
        p.tags = vec!["x".to_string()];
        let value = serde_json::to_value(p.meta()).unwrap();
        assert_eq!(value["slug"], "hello");
        assert_eq!(value["readingTime"], "1 min read");
        assert_eq!(value["tags"][0], "x");
        assert!(value.get("body").is_none());
    }
}
