//! Framework-agnostic view model for the todo list.

use crate::todo::{Todo, TodoId};

pub const TODO_CLASS: &str = "TodoInfo";
pub const COMPLETED_TODO_CLASS: &str = "TodoInfo TodoInfo--completed";

/// How the owner of a todo is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerView {
    /// Owner name linking to their mail address.
    Known { name: String, href: String },
    /// The todo references a user that does not exist.
    Missing,
}

/// One rendered row of the todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEntry {
    pub id: TodoId,
    pub title: String,
    pub class: &'static str,
    pub owner: OwnerView,
}

impl From<&Todo> for TodoEntry {
    fn from(todo: &Todo) -> Self {
        let owner = match &todo.user {
            Some(user) => OwnerView::Known {
                name: user.name.clone(),
                href: format!("mailto:{}", user.email),
            },
            None => OwnerView::Missing,
        };

        TodoEntry {
            id: todo.id,
            title: todo.title.clone(),
            class: if todo.completed {
                COMPLETED_TODO_CLASS
            } else {
                TODO_CLASS
            },
            owner,
        }
    }
}

/// One entry per todo, in list order.
pub fn render_list(todos: &[Todo]) -> Vec<TodoEntry> {
    todos.iter().map(TodoEntry::from).collect()
}
