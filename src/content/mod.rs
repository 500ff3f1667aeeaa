//! Content module - discovers posts, parses front-matter and indexes them

mod error;
mod frontmatter;
pub mod index;
pub mod loader;
mod markdown;
mod post;
pub mod reading;

pub use error::ContentError;
pub use frontmatter::{parse_date_string, FrontMatter};
pub use index::{ContentIndex, TagIndex};
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use post::{sort_newest_first, Post, PostMeta};
pub use reading::ReadingTime;
