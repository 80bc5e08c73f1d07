use crate::components::{FieldError, TodoList};
use crate::state::use_workflow;
use dioxus::prelude::*;
use todo_form_core::workflow::NO_USER_SELECTED;
use todo_form_core::{Event, FixtureStore};

/// The add-todo form followed by the list of all todos.
///
/// The form's `action` is never followed: submit is always handled in place.
#[component]
pub fn AddTodoForm(store: FixtureStore) -> Element {
    let mut workflow = use_workflow(store);
    let state = workflow.state();
    let users = workflow.users();
    let selected = state
        .selected_user
        .map_or_else(|| NO_USER_SELECTED.to_string(), |id| id.to_string());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        workflow.dispatch(Event::Submitted);
    };

    let handle_title = move |evt: FormEvent| {
        workflow.dispatch(Event::TitleChanged(evt.value()));
    };

    let handle_user = move |evt: FormEvent| {
        workflow.dispatch(Event::user_selected(&evt.value()));
    };

    rsx! {
        div { class: "App",
            h1 { "Add todo form" }

            form { action: "/api/todos", method: "POST", onsubmit: handle_submit,
                div { class: "field",
                    label { r#for: "title", "Title: " }
                    input {
                        id: "title",
                        name: "title",
                        r#type: "text",
                        "data-cy": "titleInput",
                        placeholder: "do homework",
                        value: "{state.title}",
                        oninput: handle_title,
                    }
                    FieldError { error: state.errors.title }
                }

                div { class: "field",
                    label { r#for: "user", "User: " }
                    select {
                        id: "user",
                        name: "user",
                        "data-cy": "userSelect",
                        value: "{selected}",
                        onchange: handle_user,
                        option { value: NO_USER_SELECTED, disabled: true, "Choose a user" }
                        {users.iter().map(|user| rsx! {
                            option { key: "{user.id}", value: "{user.id}", "{user.name}" }
                        })}
                    }
                    FieldError { error: state.errors.user }
                }

                button { r#type: "submit", "data-cy": "submitButton", "Add" }
            }

            TodoList { todos: state.todos.clone() }
        }
    }
}
