use crate::data::post_repository::PostRepository;
use crate::domain::draft::Draft;
use crate::domain::{error::DomainError, post::Post, post::PostId};
use crate::infrastructure::ids::{IdGenerator, TimestampIdGenerator};
use tracing::{instrument, warn};

/// CRUD over an injected repository. Update and delete report whether a post
/// matched instead of failing on unknown ids.
#[derive(Debug, Clone)]
pub struct PostService<R: PostRepository, G: IdGenerator = TimestampIdGenerator> {
    repo: R,
    ids: G,
}

impl<R> PostService<R, TimestampIdGenerator>
where
    R: PostRepository,
{
    pub fn new(repo: R) -> Self {
        Self::with_ids(repo, TimestampIdGenerator::new())
    }
}

impl<R, G> PostService<R, G>
where
    R: PostRepository,
    G: IdGenerator,
{
    pub fn with_ids(repo: R, ids: G) -> Self {
        Self { repo, ids }
    }

    pub fn list_posts(&self) -> Vec<Post> {
        self.repo.list()
    }

    pub fn get_post(&self, id: &PostId) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| DomainError::PostNotFound(id.clone()))
    }

    /// The post to load into the editor, if it still exists.
    pub fn begin_edit(&self, id: &PostId) -> Option<Post> {
        self.repo.find_by_id(id)
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn create_post(&mut self, draft: &Draft) -> Post {
        let mut id = self.ids.next_id();
        while self.repo.contains(&id) {
            id = self.ids.next_id();
        }

        let post = Post::new(
            id,
            draft.title.clone(),
            draft.content.clone(),
            draft.image.clone(),
            draft.tag_list(),
        );
        self.repo.create(post)
    }

    #[instrument(skip(self, draft))]
    pub fn update_post(&mut self, id: &PostId, draft: &Draft) -> bool {
        let matched = self.repo.update_post(id, draft).is_some();
        if !matched {
            warn!(post_id = %id, "update ignored, no such post");
        }
        matched
    }

    #[instrument(skip(self))]
    pub fn delete_post(&mut self, id: &PostId) -> bool {
        let matched = self.repo.delete_post(id);
        if !matched {
            warn!(post_id = %id, "delete ignored, no such post");
        }
        matched
    }
}
