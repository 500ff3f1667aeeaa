//! Content loader - discovers and parses posts from the posts directory
//!
//! Every query re-scans the directory. Failures stay inside the loader:
//! listings skip files that do not load and lookups report `None`.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::index::{ContentIndex, TagIndex};
use super::post::sort_newest_first;
use super::reading::DEFAULT_WORDS_PER_MINUTE;
use super::{ContentError, FrontMatter, Post, PostMeta};

/// Extensions tried when resolving an identifier, in precedence order
pub const EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Loads posts from a directory of markdown files
#[derive(Debug, Clone)]
pub struct ContentLoader {
    posts_dir: PathBuf,
    words_per_minute: usize,
}

impl ContentLoader {
    /// Create a loader over `posts_dir`
    pub fn new<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }

    /// Override the reading speed used for reading time estimates
    pub fn with_words_per_minute(mut self, words_per_minute: usize) -> Self {
        self.words_per_minute = words_per_minute.max(1);
        self
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// All identifiers in the posts directory, sorted by file name.
    ///
    /// An identifier present as both `.mdx` and `.md` is listed once.
    pub fn list_identifiers(&self) -> Vec<String> {
        if !self.posts_dir.is_dir() {
            tracing::debug!("Posts directory {:?} does not exist", self.posts_dir);
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut slugs = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(slug) = identifier_of(path) {
                if seen.insert(slug.clone()) {
                    slugs.push(slug);
                }
            }
        }

        slugs
    }

    /// Load the post for `slug`, or `None` when it does not resolve
    pub fn get(&self, slug: &str) -> Option<Post> {
        match self.try_get(slug) {
            Ok(post) => Some(post),
            Err(e) if e.is_not_found() => {
                tracing::debug!("Post '{}' not found: {}", slug, e);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to load post '{}': {}", slug, e);
                None
            }
        }
    }

    /// Load the post for `slug`, reporting why it failed.
    ///
    /// `.mdx` is tried before `.md`; the first file that loads wins. When no
    /// candidate loads, the error from the last existing file is returned.
    pub fn try_get(&self, slug: &str) -> Result<Post, ContentError> {
        validate_identifier(slug)?;

        let mut last_err = ContentError::NotFound(slug.to_string());
        for ext in EXTENSIONS {
            let path = self.posts_dir.join(format!("{}.{}", slug, ext));
            match self.load_post(&path, slug) {
                Ok(post) => return Ok(post),
                Err(e) => {
                    tracing::debug!("Could not load {:?}: {}", path, e);
                    if !e.is_not_found() || last_err.is_not_found() {
                        last_err = e;
                    }
                }
            }
        }

        if last_err.is_not_found() {
            return Err(ContentError::NotFound(slug.to_string()));
        }
        Err(last_err)
    }

    /// Summaries of every loadable post, newest first
    pub fn list_all(&self) -> Vec<PostMeta> {
        self.load_all().iter().map(Post::meta).collect()
    }

    /// Summaries of posts tagged `tag`, newest first
    pub fn list_by_tag(&self, tag: &str) -> Vec<PostMeta> {
        self.list_all()
            .into_iter()
            .filter(|p| p.has_tag(tag))
            .collect()
    }

    /// Every distinct tag, alphabetically
    pub fn list_tags(&self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .load_all()
            .into_iter()
            .flat_map(|p| p.tags)
            .collect();
        tags.into_iter().collect()
    }

    /// Tags with the posts carrying them, most used first
    pub fn tag_index(&self) -> TagIndex {
        TagIndex::build(&self.load_all())
    }

    /// Scan once and keep the result for repeated queries
    pub fn index(&self) -> ContentIndex {
        ContentIndex::new(self.load_all())
    }

    /// Load every identifier, skipping the ones that fail, newest first
    pub(crate) fn load_all(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .list_identifiers()
            .iter()
            .filter_map(|slug| self.get(slug))
            .collect();

        sort_newest_first(&mut posts, |p| p.published_at);

        posts
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path, slug: &str) -> Result<Post, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let date = fm
            .date()
            .map(str::to_string)
            .ok_or(ContentError::MissingField("date"))?;
        let description = fm
            .description()
            .map(str::to_string)
            .ok_or(ContentError::MissingField("description"))?;
        let title = fm.title.ok_or(ContentError::MissingField("title"))?;

        if super::frontmatter::parse_date_string(&date).is_none() {
            tracing::debug!("Post '{}' has an unparsable date {:?}", slug, date);
        }

        let mut post = Post::new(slug.to_string(), title, date, description)
            .with_words_per_minute(self.words_per_minute);
        post.tags = fm.tags;
        post.body = body.to_string();
        post.source = path.to_path_buf();

        Ok(post)
    }
}

/// Identifier for a content file, if it has a recognised extension
fn identifier_of(path: &Path) -> Option<String> {
    let ext = path.extension().and_then(|e| e.to_str())?;
    if !EXTENSIONS.contains(&ext) {
        return None;
    }
    let stem = path.file_stem().and_then(|s| s.to_str())?;
    validate_identifier(stem).ok()?;
    Some(stem.to_string())
}

/// Reject identifiers that would escape the posts directory
fn validate_identifier(slug: &str) -> Result<(), ContentError> {
    let invalid = slug.is_empty()
        || slug == "."
        || slug == ".."
        || slug.contains(['/', '\\', '\0']);
    if invalid {
        return Err(ContentError::InvalidIdentifier(slug.to_string()));
    }
    Ok(())
}
