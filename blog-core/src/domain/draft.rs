use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::post::Post;

/// Unsaved form representation of a post. `tags` is the raw comma-separated
/// text exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub image: String,
    pub tags: String,
}

/// Names the editable fields of a [`Draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Content,
    Image,
    Tags,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [Self::Title, Self::Content, Self::Image, Self::Tags];

    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::Image => "image",
            Self::Tags => "tags",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl FromStr for DraftField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}

impl Draft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        image: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            image: image.into(),
            tags: tags.into(),
        }
    }

    /// Mirrors an existing post into form fields.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            image: post.image.clone(),
            tags: post.tags.join(", "),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Content => &self.content,
            DraftField::Image => &self.image,
            DraftField::Tags => &self.tags,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Content => &mut self.content,
            DraftField::Image => &mut self.image,
            DraftField::Tags => &mut self.tags,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Every field is required by the form; whitespace counts as a value.
    pub fn validate(&self) -> Result<(), DomainError> {
        match DraftField::ALL.into_iter().find(|f| self.field(*f).is_empty()) {
            Some(missing) => Err(DomainError::MissingField(missing.name())),
            None => Ok(()),
        }
    }

    pub fn tag_list(&self) -> Vec<String> {
        split_tags(&self.tags)
    }
}

/// Splits on commas and trims every piece. Order is kept, duplicates and
/// empty pieces are not dropped.
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',').map(|tag| tag.trim().to_string()).collect()
}
