//! In-memory blog: the dashboard's post list and editor, and the read-only
//! home and detail views over their own sample data.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod site;

pub use application::catalog::{Catalog, EXCERPT_CHARS, Lookup, PostSummary, excerpt};
pub use application::dashboard::{Dashboard, DashboardEvent, DashboardOutcome};
pub use application::editor::{Editor, EditorState, Submission};
pub use application::post_service::PostService;
pub use data::post_repository::{InMemoryPostRepository, PostRepository};
pub use domain::draft::{Draft, DraftField, split_tags};
pub use domain::error::DomainError;
pub use domain::post::{Author, Post, PostId, PostMeta};
pub use infrastructure::ids::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
pub use site::Page;
