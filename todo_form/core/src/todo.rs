use crate::user::{User, UserId};
use serde::{Deserialize, Serialize};

/// Identifier of a todo, unique within one workflow session.
pub type TodoId = u32;

/// Id handed out when there are no todos to take the maximum of.
pub const FIRST_TODO_ID: TodoId = 1;

/// A todo as it appears in the fixtures, before its owner is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// A todo joined with its owning user.
///
/// `user` is `None` when `user_id` does not match any known user. Seed data
/// may produce that; todos created through the workflow never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
    pub user: Option<User>,
}

impl Todo {
    /// Joins a raw record with the user it references, if any.
    pub fn from_record(record: TodoRecord, user: Option<User>) -> Self {
        Todo {
            id: record.id,
            user_id: record.user_id,
            title: record.title,
            completed: record.completed,
            user,
        }
    }
}

/// Next id to assign: one past the largest id in `todos`, or [`FIRST_TODO_ID`]
/// for an empty list. `None` once the largest id is [`TodoId::MAX`].
pub fn next_todo_id(todos: &[Todo]) -> Option<TodoId> {
    match todos.iter().map(|todo| todo.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(FIRST_TODO_ID),
    }
}
