//! Read-only fixture data the form is seeded with.
//!
//! The store is built once at start-up and never mutated afterwards. Lookups
//! that miss return `None` rather than failing; only loading can fail.

use crate::todo::{Todo, TodoId, TodoRecord};
use crate::user::{User, UserId};
use std::collections::HashSet;
use thiserror::Error;

const EMBEDDED_USERS: &str = include_str!("../fixtures/users.json");
const EMBEDDED_TODOS: &str = include_str!("../fixtures/todos.json");

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Invalid users fixture: {0}")]
    InvalidUsers(#[source] serde_json::Error),
    #[error("Invalid todos fixture: {0}")]
    InvalidTodos(#[source] serde_json::Error),
    #[error("User id 0 is reserved for \"no user selected\"")]
    ReservedUserId,
    #[error("Duplicate user id {0}")]
    DuplicateUserId(UserId),
    #[error("Duplicate todo id {0}")]
    DuplicateTodoId(TodoId),
}

/// Users and raw todos, in fixture order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureStore {
    users: Vec<User>,
    todos: Vec<TodoRecord>,
}

impl FixtureStore {
    /// Builds a store from already-parsed records, checking id uniqueness.
    ///
    /// A todo whose `user_id` matches no user is accepted; it renders with a
    /// missing owner.
    pub fn new(users: Vec<User>, todos: Vec<TodoRecord>) -> Result<Self, FixtureError> {
        let mut seen_users = HashSet::new();
        for user in &users {
            if user.id == 0 {
                return Err(FixtureError::ReservedUserId);
            }
            if !seen_users.insert(user.id) {
                return Err(FixtureError::DuplicateUserId(user.id));
            }
        }

        let mut seen_todos = HashSet::new();
        for todo in &todos {
            if !seen_todos.insert(todo.id) {
                return Err(FixtureError::DuplicateTodoId(todo.id));
            }
        }

        tracing::info!(
            users = users.len(),
            todos = todos.len(),
            "Fixture store loaded"
        );
        Ok(FixtureStore { users, todos })
    }

    /// Parses both fixtures from JSON arrays.
    pub fn from_json(users_json: &str, todos_json: &str) -> Result<Self, FixtureError> {
        let users = serde_json::from_str(users_json).map_err(FixtureError::InvalidUsers)?;
        let todos = serde_json::from_str(todos_json).map_err(FixtureError::InvalidTodos)?;
        Self::new(users, todos)
    }

    /// The fixtures compiled into the binary.
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_json(EMBEDDED_USERS, EMBEDDED_TODOS)
    }

    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    pub fn list_todos(&self) -> &[TodoRecord] {
        &self.todos
    }

    pub fn find_user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Raw todos joined with their owners, in fixture order.
    pub fn joined_todos(&self) -> Vec<Todo> {
        self.todos
            .iter()
            .map(|record| {
                let user = self.find_user_by_id(record.user_id).cloned();
                Todo::from_record(record.clone(), user)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: TodoId, user_id: UserId) -> TodoRecord {
        TodoRecord {
            id,
            user_id,
            title: format!("Todo {id}"),
            completed: false,
        }
    }

    #[test]
    fn test_embedded_fixtures_load() {
        let store = FixtureStore::embedded().unwrap();

        assert_eq!(store.list_users().len(), 10);
        assert_eq!(store.list_todos().len(), 15);
        assert_eq!(store.list_users()[0].name, "Leanne Graham");
    }

    #[test]
    fn test_embedded_todos_all_resolve_to_users() {
        let store = FixtureStore::embedded().unwrap();

        let joined = store.joined_todos();

        assert!(joined.iter().all(|todo| todo.user.is_some()));
    }

    #[test]
    fn test_find_user_by_id() {
        let store = FixtureStore::embedded().unwrap();

        let user = store.find_user_by_id(2).unwrap();

        assert_eq!(user.name, "Ervin Howell");
        assert_eq!(store.find_user_by_id(0), None);
        assert_eq!(store.find_user_by_id(999), None);
    }

    #[test]
    fn test_joined_todos_preserve_order_and_mark_dangling_owner() {
        // Arrange
        let users = vec![User::new(1, "Leanne Graham")];
        let todos = vec![record(2, 1), record(1, 42), record(3, 1)];
        let store = FixtureStore::new(users, todos).unwrap();

        // Act
        let joined = store.joined_todos();

        // Assert
        let ids: Vec<TodoId> = joined.iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(joined[0].user.as_ref().map(|u| u.id), Some(1));
        assert_eq!(joined[1].user, None, "user 42 does not exist");
        assert_eq!(joined[1].user_id, 42);
    }

    #[test]
    fn test_duplicate_user_id_is_rejected() {
        let users = vec![User::new(1, "A"), User::new(1, "B")];

        let result = FixtureStore::new(users, vec![]);

        assert!(matches!(result, Err(FixtureError::DuplicateUserId(1))));
    }

    #[test]
    fn test_duplicate_todo_id_is_rejected() {
        let users = vec![User::new(1, "A")];
        let todos = vec![record(5, 1), record(5, 1)];

        let result = FixtureStore::new(users, todos);

        assert!(matches!(result, Err(FixtureError::DuplicateTodoId(5))));
    }

    #[test]
    fn test_user_id_zero_is_rejected() {
        let result = FixtureStore::new(vec![User::new(0, "Nobody")], vec![]);

        assert!(matches!(result, Err(FixtureError::ReservedUserId)));
    }

    #[test]
    fn test_malformed_json_reports_which_fixture() {
        let users = FixtureStore::from_json("not json", "[]");
        let todos = FixtureStore::from_json("[]", r#"[{ "id": "one" }]"#);

        assert!(matches!(users, Err(FixtureError::InvalidUsers(_))));
        assert!(matches!(todos, Err(FixtureError::InvalidTodos(_))));
    }
}
