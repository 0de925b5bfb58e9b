use crate::domain::draft::Draft;
use crate::domain::post::{Post, PostId};
use tracing::{debug, info};

/// Ordered post storage. Insertion order is the listing order.
pub trait PostRepository {
    fn list(&self) -> Vec<Post>;
    fn find_by_id(&self, id: &PostId) -> Option<Post>;
    fn create(&mut self, post: Post) -> Post;
    /// Applies the draft to the matching post in place. `None` when no post
    /// has this id.
    fn update_post(&mut self, id: &PostId, update: &Draft) -> Option<Post>;
    /// `false` when no post has this id.
    fn delete_post(&mut self, id: &PostId) -> bool;

    fn contains(&self, id: &PostId) -> bool {
        self.find_by_id(id).is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPostRepository {
    posts: Vec<Post>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

impl PostRepository for InMemoryPostRepository {
    fn list(&self) -> Vec<Post> {
        self.posts.clone()
    }

    fn find_by_id(&self, id: &PostId) -> Option<Post> {
        self.posts.iter().find(|p| &p.id == id).cloned()
    }

    fn create(&mut self, post: Post) -> Post {
        info!(post_id = %post.id, "post created");
        self.posts.push(post.clone());
        post
    }

    fn update_post(&mut self, id: &PostId, update: &Draft) -> Option<Post> {
        let post = self.posts.iter_mut().find(|p| &p.id == id)?;
        post.title = update.title.clone();
        post.content = update.content.clone();
        post.image = update.image.clone();
        post.tags = update.tag_list();

        info!(post_id = %id, "post updated");
        Some(post.clone())
    }

    fn delete_post(&mut self, id: &PostId) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| &p.id != id);
        let deleted = self.posts.len() != before;

        if deleted {
            info!(post_id = %id, "post deleted");
        } else {
            debug!(post_id = %id, "nothing to delete");
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str) -> Post {
        Post::new(
            PostId::from(id),
            format!("title {id}"),
            "content".into(),
            "/img.svg".into(),
            vec!["tag".into()],
        )
    }

    fn repo() -> InMemoryPostRepository {
        InMemoryPostRepository::with_posts(vec![post("1"), post("2"), post("3")])
    }

    fn ids(repo: &InMemoryPostRepository) -> Vec<String> {
        repo.list().into_iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn create_appends_to_the_end() {
        let mut repo = repo();
        repo.create(post("9"));
        assert_eq!(ids(&repo), vec!["1", "2", "3", "9"]);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut repo = repo();
        let draft = Draft::new("new", "body", "/new.svg", "a, b");
        let updated = repo.update_post(&PostId::from("2"), &draft).unwrap();

        assert_eq!(updated.id, PostId::from("2"));
        assert_eq!(updated.tags, vec!["a", "b"]);
        assert_eq!(ids(&repo), vec!["1", "2", "3"]);
        assert_eq!(repo.list()[1].title, "new");
    }

    #[test]
    fn update_of_missing_id_changes_nothing() {
        let mut repo = repo();
        let before = repo.list();
        assert!(
            repo.update_post(&PostId::from("42"), &Draft::new("x", "x", "x", "x"))
                .is_none()
        );
        assert_eq!(repo.list(), before);
    }

    #[test]
    fn delete_removes_only_the_match() {
        let mut repo = repo();
        assert!(repo.delete_post(&PostId::from("2")));
        assert_eq!(ids(&repo), vec!["1", "3"]);
        assert!(!repo.delete_post(&PostId::from("2")));
        assert_eq!(ids(&repo), vec!["1", "3"]);
    }
}
