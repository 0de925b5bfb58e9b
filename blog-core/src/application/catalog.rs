use serde::Serialize;

use crate::data::post_repository::{InMemoryPostRepository, PostRepository};
use crate::data::sample;
use crate::domain::post::{Post, PostId};

/// Characters kept in a card excerpt.
pub const EXCERPT_CHARS: usize = 100;

/// Card data for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub tags: Vec<String>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            excerpt: excerpt(&post.content),
            image: post.image.clone(),
            tags: post.tags.clone(),
        }
    }
}

/// Result of a detail lookup. A miss is a page to render, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Post),
    NotFound(PostId),
}

/// First [`EXCERPT_CHARS`] characters, cut wherever that lands.
pub fn excerpt(content: &str) -> String {
    content.chars().take(EXCERPT_CHARS).collect()
}

/// Read-only side of the site: the home listing and the detail page, each
/// over its own dataset.
#[derive(Debug, Clone)]
pub struct Catalog<R: PostRepository = InMemoryPostRepository> {
    listing: R,
    articles: R,
}

impl Catalog {
    pub fn sample() -> Self {
        Self::new(
            InMemoryPostRepository::with_posts(sample::recent_posts()),
            InMemoryPostRepository::with_posts(sample::published_posts()),
        )
    }
}

impl<R: PostRepository> Catalog<R> {
    pub fn new(listing: R, articles: R) -> Self {
        Self { listing, articles }
    }

    pub fn list_summaries(&self) -> Vec<PostSummary> {
        self.listing.list().iter().map(PostSummary::from).collect()
    }

    pub fn find_by_id(&self, id: &PostId) -> Lookup {
        match self.articles.find_by_id(id) {
            Some(post) => Lookup::Found(post),
            None => Lookup::NotFound(id.clone()),
        }
    }
}
