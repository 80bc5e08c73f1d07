//! Client-side state for the add-todo form.
//!
//! The form state lives in one signal owned by the root view. Components
//! never write it directly; they dispatch workflow events through
//! [`UseWorkflow`].

use dioxus::prelude::*;
use todo_form_core::{Event, FixtureStore, User, WorkflowState};

/// Creates the workflow state for this session, seeded from `store`.
pub fn use_workflow(store: FixtureStore) -> UseWorkflow {
    let inner = use_signal(move || {
        let state = WorkflowState::new(&store);
        WorkflowEntry { store, state }
    });
    UseWorkflow { inner }
}

struct WorkflowEntry {
    store: FixtureStore,
    state: WorkflowState,
}

/// Handle to the session's workflow state.
#[derive(Copy, Clone)]
pub struct UseWorkflow {
    inner: Signal<WorkflowEntry>,
}

impl UseWorkflow {
    /// Gets a cloned state snapshot.
    pub fn state(&self) -> WorkflowState {
        self.inner.read().state.clone()
    }

    /// Users offered by the owner select, in fixture order.
    pub fn users(&self) -> Vec<User> {
        self.inner.read().store.list_users().to_vec()
    }

    /// Runs `event` through the workflow and stores the resulting state.
    pub fn dispatch(&mut self, event: Event) {
        let mut inner = self.inner.write();
        let next = inner.state.clone().apply(event, &inner.store);
        inner.state = next;
    }
}
