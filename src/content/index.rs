//! In-memory views over loaded posts

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use super::{Post, PostMeta};

/// Tag name to the slugs of the posts carrying it.
///
/// Ordered by descending post count; tags with the same count keep the order
/// in which they were first seen walking the posts newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TagIndex {
    tags: IndexMap<String, Vec<String>>,
}

impl TagIndex {
    /// Build from posts already sorted newest first
    pub fn build(posts: &[Post]) -> Self {
        let mut tags: IndexMap<String, Vec<String>> = IndexMap::new();

        for post in posts {
            for tag in &post.tags {
                let slugs = tags.entry(tag.clone()).or_default();
                if !slugs.contains(&post.slug) {
                    slugs.push(post.slug.clone());
                }
            }
        }

        tags.sort_by(|_, a, _, b| b.len().cmp(&a.len()));

        Self { tags }
    }

    /// Slugs tagged with `tag`
    pub fn get(&self, tag: &str) -> Option<&[String]> {
        self.tags.get(tag).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tags.iter().map(|(t, s)| (t.as_str(), s.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Posts loaded once for a whole build
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    posts: Vec<Post>,
    by_slug: HashMap<String, usize>,
}

impl ContentIndex {
    /// Index posts that are already sorted newest first
    pub fn new(posts: Vec<Post>) -> Self {
        let by_slug = posts
            .iter()
            .enumerate()
            .map(|(i, p)| (p.slug.clone(), i))
            .collect();
        Self { posts, by_slug }
    }

    /// All posts, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.by_slug.get(slug).map(|&i| &self.posts[i])
    }

    pub fn list_all(&self) -> Vec<PostMeta> {
        self.posts.iter().map(Post::meta).collect()
    }

    pub fn list_by_tag(&self, tag: &str) -> Vec<PostMeta> {
        self.posts
            .iter()
            .filter(|p| p.has_tag(tag))
            .map(Post::meta)
            .collect()
    }

    /// Every distinct tag, alphabetically
    pub fn tags(&self) -> Vec<String> {
        let tags: BTreeSet<&String> = self.posts.iter().flat_map(|p| &p.tags).collect();
        tags.into_iter().cloned().collect()
    }

    pub fn tag_index(&self) -> TagIndex {
        TagIndex::build(&self.posts)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
