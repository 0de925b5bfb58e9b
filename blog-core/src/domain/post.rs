use std::convert::Infallible;
use std::str::FromStr;

use chrono::NaiveDate;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Opaque post identifier. Dashboard posts get timestamp-derived ids, the
/// sample datasets use short numeric strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for PostId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

impl Author {
    /// First letter of every space-separated part of the name.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Publication details only the public detail page knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    pub author: Author,
    pub publish_date: NaiveDate,
    pub reading_time: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("Post {{ id: {}, title: {} }}", id, title)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub image: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PostMeta>,
}

impl Post {
    pub fn new(
        id: PostId,
        title: String,
        content: String,
        image: String,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            image,
            tags,
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: PostMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Body split into paragraphs on blank lines, each trimmed.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(
            PostId::from("7"),
            "Title".into(),
            "First part.\n\n    Second part.\n\n".into(),
            "/img.svg".into(),
            vec!["a".into()],
        )
    }

    #[test]
    fn initials_take_first_letter_of_each_name_part() {
        let author = Author {
            name: "Jane Doe".into(),
            avatar: String::new(),
        };
        assert_eq!(author.initials(), "JD");
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        assert_eq!(sample().paragraphs(), vec!["First part.", "Second part."]);
    }

    #[test]
    fn post_without_meta_serializes_without_meta_field() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "7");
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn display_shows_id_and_title() {
        assert_eq!(sample().to_string(), "Post { id: 7, title: Title }");
    }
}
