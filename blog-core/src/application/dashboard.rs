use tracing::debug;

use crate::application::editor::{Editor, Submission};
use crate::application::post_service::PostService;
use crate::data::post_repository::{InMemoryPostRepository, PostRepository};
use crate::data::sample;
use crate::domain::draft::DraftField;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostId};
use crate::infrastructure::ids::{IdGenerator, TimestampIdGenerator};

/// Everything a user can do on the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    Input(DraftField, String),
    Edit(PostId),
    CancelEdit,
    Submit,
    /// Sent only after the user confirmed the deletion.
    Delete(PostId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardOutcome {
    FieldChanged,
    EditStarted(Post),
    EditCancelled,
    Created(Post),
    /// `matched` is false when the edited post was gone by submit time.
    Updated { id: PostId, matched: bool },
    Deleted { id: PostId, matched: bool },
    /// Edit requested for an id that is not in the list.
    Ignored,
}

/// Dashboard page state: the post list plus the editor form.
#[derive(Debug, Clone)]
pub struct Dashboard<
    R: PostRepository = InMemoryPostRepository,
    G: IdGenerator = TimestampIdGenerator,
> {
    posts: PostService<R, G>,
    editor: Editor,
}

impl Dashboard {
    /// Dashboard pre-filled with the sample posts.
    pub fn seeded() -> Self {
        Self::new(PostService::new(InMemoryPostRepository::with_posts(
            sample::dashboard_seed(),
        )))
    }

    pub fn empty() -> Self {
        Self::new(PostService::new(InMemoryPostRepository::new()))
    }
}

impl<R, G> Dashboard<R, G>
where
    R: PostRepository,
    G: IdGenerator,
{
    pub fn new(posts: PostService<R, G>) -> Self {
        Self {
            posts,
            editor: Editor::new(),
        }
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.list_posts()
    }

    pub fn service(&self) -> &PostService<R, G> {
        &self.posts
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Applies one event. Only a submit with an empty field fails, and it
    /// leaves both the list and the form untouched.
    pub fn dispatch(&mut self, event: DashboardEvent) -> Result<DashboardOutcome, DomainError> {
        debug!(?event, "dashboard event");
        let outcome = match event {
            DashboardEvent::Input(field, value) => {
                self.editor.set(field, value);
                DashboardOutcome::FieldChanged
            }
            DashboardEvent::Edit(id) => match self.posts.begin_edit(&id) {
                Some(post) => {
                    self.editor.begin(&post);
                    DashboardOutcome::EditStarted(post)
                }
                None => DashboardOutcome::Ignored,
            },
            DashboardEvent::CancelEdit => {
                self.editor.cancel();
                DashboardOutcome::EditCancelled
            }
            DashboardEvent::Submit => match self.editor.submit()? {
                Submission::Create(draft) => {
                    DashboardOutcome::Created(self.posts.create_post(&draft))
                }
                Submission::Update(id, draft) => {
                    let matched = self.posts.update_post(&id, &draft);
                    DashboardOutcome::Updated { id, matched }
                }
            },
            DashboardEvent::Delete(id) => {
                let matched = self.posts.delete_post(&id);
                DashboardOutcome::Deleted { id, matched }
            }
        };
        Ok(outcome)
    }
}
