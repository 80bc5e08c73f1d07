use serde::{Deserialize, Serialize};

/// Identifier of a [`User`]. Fixture ids are always greater than zero.
pub type UserId = u32;

/// A named entity that can own todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        User {
            id,
            name: name.into(),
            username: String::new(),
            email: String::new(),
        }
    }
}
