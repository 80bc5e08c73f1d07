//! The add-todo form as a reducer: every event consumes the current state
//! and returns the next one.

use crate::fixtures::FixtureStore;
use crate::todo::{Todo, next_todo_id};
use crate::user::{User, UserId};
use thiserror::Error;

/// Value the user select control reports while its placeholder is shown.
pub const NO_USER_SELECTED: &str = "0";

/// Input problems found on submit. The display text is what the form shows
/// next to the offending field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please choose a user")]
    MissingUser,
    #[error("Please enter a title")]
    MissingTitle,
    /// The largest todo id is already taken, so nothing more can be added.
    #[error("No more todos can be added")]
    TodoLimitReached,
}

/// Error currently shown next to each field, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<ValidationError>,
    pub user: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.user.is_none()
    }
}

/// Something the user did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TitleChanged(String),
    UserChanged(Option<UserId>),
    Submitted,
}

impl Event {
    /// Maps the raw value of the user select control to an event.
    /// The placeholder value and anything that is not an id mean no user.
    pub fn user_selected(value: &str) -> Self {
        let id = value.trim().parse::<UserId>().ok().filter(|id| *id != 0);
        Event::UserChanged(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowState {
    pub title: String,
    pub selected_user: Option<UserId>,
    pub errors: FieldErrors,
    pub todos: Vec<Todo>,
}

impl WorkflowState {
    /// Empty form over the fixture todos joined with their owners.
    pub fn new(store: &FixtureStore) -> Self {
        WorkflowState {
            title: String::new(),
            selected_user: None,
            errors: FieldErrors::default(),
            todos: store.joined_todos(),
        }
    }

    pub fn apply(mut self, event: Event, store: &FixtureStore) -> Self {
        match event {
            Event::TitleChanged(title) => {
                self.title = title;
                self.errors.title = None;
                self
            }
            Event::UserChanged(user) => {
                self.selected_user = user;
                self.errors.user = None;
                self
            }
            Event::Submitted => self.submit(store),
        }
    }

    /// Runs both field checks. A selected id the store cannot resolve counts
    /// as no selection.
    pub fn validate<'s>(&self, store: &'s FixtureStore) -> Result<&'s User, FieldErrors> {
        let owner = self
            .selected_user
            .and_then(|id| store.find_user_by_id(id));

        let errors = FieldErrors {
            title: self
                .title
                .trim()
                .is_empty()
                .then_some(ValidationError::MissingTitle),
            user: owner.is_none().then_some(ValidationError::MissingUser),
        };

        match owner {
            Some(user) if errors.is_empty() => Ok(user),
            _ => Err(errors),
        }
    }

    fn submit(mut self, store: &FixtureStore) -> Self {
        let owner = match self.validate(store) {
            Ok(owner) => owner,
            Err(errors) => {
                self.errors = errors;
                return self;
            }
        };

        let Some(id) = next_todo_id(&self.todos) else {
            tracing::warn!("Todo ids exhausted, not adding todo");
            self.errors.title = Some(ValidationError::TodoLimitReached);
            return self;
        };

        // The title is stored as typed; only the emptiness check trims.
        let todo = Todo {
            id,
            user_id: owner.id,
            title: std::mem::take(&mut self.title),
            completed: false,
            user: Some(owner.clone()),
        };
        tracing::debug!(todo_id = todo.id, user_id = todo.user_id, "Todo added");

        self.todos.push(todo);
        self.selected_user = None;
        self.errors = FieldErrors::default();
        self
    }
}
