//! Reading time estimate

use serde::{Serialize, Serializer};
use std::fmt;

/// Average reading speed used when none is configured
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Estimated minutes needed to read a body of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadingTime {
    minutes: usize,
}

impl ReadingTime {
    /// Estimate from a markdown body: `ceil(words / words_per_minute)`.
    ///
    /// Words are runs of non-whitespace. An empty body still counts as one
    /// minute so every post shows a non-zero estimate.
    pub fn estimate(body: &str, words_per_minute: usize) -> Self {
        let words = count_words(body).max(1);
        let minutes = words.div_ceil(words_per_minute.max(1));
        Self { minutes }
    }

    pub fn minutes(&self) -> usize {
        self.minutes
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

impl Serialize for ReadingTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Count whitespace-separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_rounds_up() {
        assert_eq!(ReadingTime::estimate(&words(1), 200).minutes(), 1);
        assert_eq!(ReadingTime::estimate(&words(200), 200).minutes(), 1);
        assert_eq!(ReadingTime::estimate(&words(201), 200).minutes(), 2);
        assert_eq!(ReadingTime::estimate(&words(400), 200).minutes(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(ReadingTime::estimate(&words(400), 200).to_string(), "2 min read");
    }

    #[test]
    fn test_empty_body_is_one_minute() {
        assert_eq!(ReadingTime::estimate("", 200).to_string(), "1 min read");
        assert_eq!(ReadingTime::estimate(" \n\t ", 200).to_string(), "1 min read");
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(count_words("  one\n\n two\tthree   "), 3);
    }

    #[test]
    fn test_idempotent() {
        let body = words(523);
        assert_eq!(
            ReadingTime::estimate(&body, 200).to_string(),
            ReadingTime::estimate(&body, 200).to_string()
        );
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&ReadingTime::estimate("a b c", 200)).unwrap();
        assert_eq!(json, "\"1 min read\"");
    }
}
