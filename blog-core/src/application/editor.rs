//! Form state for the dashboard editor.
//!
//! The editor is either idle (a submit creates a post) or editing a post by
//! id (a submit updates it). It never touches a repository itself:
//! [`Editor::submit`] hands back a [`Submission`] for the caller to apply.

use crate::domain::draft::{Draft, DraftField};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    Editing(PostId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(Draft),
    Update(PostId, Draft),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    state: EditorState,
    draft: Draft,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing(&self) -> Option<&PostId> {
        match &self.state {
            EditorState::Editing(id) => Some(id),
            EditorState::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing().is_some()
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Loads the post into the form and remembers its id.
    pub fn begin(&mut self, post: &Post) {
        self.draft = Draft::from_post(post);
        self.state = EditorState::Editing(post.id.clone());
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Validates the form and resets it. On a validation error the form is
    /// left as it was.
    pub fn submit(&mut self) -> Result<Submission, DomainError> {
        self.draft.validate()?;
        let Editor { state, draft } = std::mem::take(self);
        Ok(match state {
            EditorState::Idle => Submission::Create(draft),
            EditorState::Editing(id) => Submission::Update(id, draft),
        })
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Blog"
        } else {
            "Add New Blog"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Blog"
        } else {
            "Add Blog"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post::new(
            PostId::from("5"),
            "Title".into(),
            "Body".into(),
            "/i.svg".into(),
            vec!["a".into(), "b".into()],
        )
    }

    #[test]
    fn idle_submit_creates_and_resets() {
        let mut editor = Editor::new();
        editor.set(DraftField::Title, "A");
        editor.set(DraftField::Content, "c");
        editor.set(DraftField::Image, "i");
        editor.set(DraftField::Tags, "x,y");

        let submission = editor.submit().unwrap();
        assert_eq!(submission, Submission::Create(Draft::new("A", "c", "i", "x,y")));
        assert_eq!(editor, Editor::new());
    }

    #[test]
    fn begin_mirrors_post_and_switches_labels() {
        let mut editor = Editor::new();
        assert_eq!(editor.heading(), "Add New Blog");
        editor.begin(&post());

        assert_eq!(editor.state(), &EditorState::Editing(PostId::from("5")));
        assert_eq!(editor.draft().tags, "a, b");
        assert_eq!(editor.heading(), "Edit Blog");
        assert_eq!(editor.submit_label(), "Update Blog");
    }

    #[test]
    fn editing_submit_updates_and_returns_to_idle() {
        let mut editor = Editor::new();
        editor.begin(&post());
        editor.set(DraftField::Title, "B");

        let submission = editor.submit().unwrap();
        assert_eq!(
            submission,
            Submission::Update(PostId::from("5"), Draft::new("B", "Body", "/i.svg", "a, b"))
        );
        assert_eq!(editor.state(), &EditorState::Idle);
        assert!(editor.draft().is_empty());
    }

    #[test]
    fn cancel_clears_reference_and_fields() {
        let mut editor = Editor::new();
        editor.begin(&post());
        editor.cancel();
        assert_eq!(editor, Editor::new());
    }

    #[test]
    fn invalid_submit_keeps_the_form() {
        let mut editor = Editor::new();
        editor.begin(&post());
        editor.set(DraftField::Image, "");

        assert!(matches!(
            editor.submit(),
            Err(DomainError::MissingField("image"))
        ));
        assert!(editor.is_editing());
        assert_eq!(editor.draft().title, "Title");
    }
}
