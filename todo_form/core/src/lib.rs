//! Core domain models and form workflow for the todo form.
pub mod fixtures;
pub mod render;
pub mod todo;
pub mod user;
pub mod workflow;

pub use fixtures::{FixtureError, FixtureStore};
pub use render::{OwnerView, TodoEntry, render_list};
pub use todo::{Todo, TodoId, TodoRecord};
pub use user::{User, UserId};
pub use workflow::{Event, FieldErrors, ValidationError, WorkflowState};
