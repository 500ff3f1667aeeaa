//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/posts/hello") // -> "/blog/posts/hello"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else if config.trailing_slash {
        format!("{}/{}/", root, path)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// URL of a post page
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &format!("posts/{}", encode_segment(slug)))
}

/// URL of a tag page. Tags are used verbatim, only escaped.
pub fn tag_url(config: &SiteConfig, tag: &str) -> String {
    url_for(
        config,
        &format!("{}/{}", config.tag_dir.trim_matches('/'), encode_segment(tag)),
    )
}

/// Percent-encode one path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.github.io".to_string(),
            root: "/hwiwoong_log/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/blog"), "/hwiwoong_log/blog");
        assert_eq!(url_for(&config, ""), "/hwiwoong_log/");
    }

    #[test]
    fn test_url_for_trailing_slash() {
        let mut config = test_config();
        config.trailing_slash = true;
        assert_eq!(url_for(&config, "about"), "/hwiwoong_log/about/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "posts/a"),
            "https://example.github.io/hwiwoong_log/posts/a"
        );
    }

    #[test]
    fn test_post_and_tag_urls() {
        let config = test_config();
        assert_eq!(post_url(&config, "post-a"), "/hwiwoong_log/posts/post-a");
        assert_eq!(tag_url(&config, "next js"), "/hwiwoong_log/tags/next%20js");
        assert_eq!(tag_url(&config, "a/b"), "/hwiwoong_log/tags/a%2Fb");
        assert_eq!(tag_url(&config, "회고"), "/hwiwoong_log/tags/%ED%9A%8C%EA%B3%A0");
    }
}
