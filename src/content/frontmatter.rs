//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::ContentError;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter block of a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str), ContentError> {
        let rest = &content[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        // An empty block closes immediately: "---\n---"
        let (yaml_content, remaining) = if let Some(after) = rest.strip_prefix("---") {
            ("", after)
        } else if let Some(end_pos) = rest.find("\n---") {
            (&rest[..end_pos], &rest[end_pos + 4..])
        } else {
            return Ok((FrontMatter::default(), content));
        };
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        // A `---` thematic break followed by prose is not front-matter
        if !has_yaml_structure(yaml_content) {
            return Ok((FrontMatter::default(), content));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)
            .map_err(|e| ContentError::FrontMatter(e.to_string()))?;

        Ok((fm, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str), ContentError> {
        if let Some(rest) = content.strip_prefix(";;;") {
            if let Some(end_pos) = rest.find(";;;") {
                let json_content = &rest[..end_pos];
                let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

                let fm: FrontMatter = serde_json::from_str(json_content)
                    .map_err(|e| ContentError::FrontMatter(e.to_string()))?;

                return Ok((fm, remaining));
            }
        }

        if content.starts_with('{') {
            let mut stream = serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();
            return match stream.next() {
                Some(Ok(fm)) => {
                    let remaining = content[stream.byte_offset()..].trim_start_matches(['\n', '\r']);
                    Ok((fm, remaining))
                }
                Some(Err(e)) => Err(ContentError::FrontMatter(e.to_string())),
                None => Err(ContentError::FrontMatter(
                    "unterminated JSON front-matter".to_string(),
                )),
            };
        }

        Err(ContentError::FrontMatter(
            "unterminated JSON front-matter".to_string(),
        ))
    }

    /// Publication date, `date` winning over `publishedAt`
    pub fn date(&self) -> Option<&str> {
        self.date
            .as_deref()
            .or(self.published_at.as_deref())
            .filter(|d| !d.trim().is_empty())
    }

    /// Summary text, `description` winning over `summary`
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().or(self.summary.as_deref())
    }
}

/// At least one line must read like `key: value`
fn has_yaml_structure(yaml_content: &str) -> bool {
    yaml_content.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = &trimmed[..colon_pos];
        let is_valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp");
        if !is_valid_key {
            return false;
        }
        let after_colon = &trimmed[colon_pos + 1..];
        after_colon.is_empty() || after_colon.starts_with(' ')
    })
}

/// Parse a date string in various formats. Values without an offset are UTC.
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let offset_formats = ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S %z"];
    for fmt in offset_formats {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}
