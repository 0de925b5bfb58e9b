use thiserror::Error;

use crate::domain::post::PostId;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("post not found: {0}")]
    PostNotFound(PostId),
    #[error("field `{0}` is required")]
    MissingField(&'static str),
    #[error("unknown field `{0}`, expected title, content, image or tags")]
    UnknownField(String),
    #[error("no page at `{0}`")]
    UnknownRoute(String),
}
