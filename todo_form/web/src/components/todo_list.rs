use crate::components::TodoInfo;
use dioxus::prelude::*;
use todo_form_core::{render_list, Todo};

/// Renders every todo in list order
#[component]
pub fn TodoList(todos: Vec<Todo>) -> Element {
    let entries = render_list(&todos);

    rsx! {
        section { class: "TodoList",
            {entries.into_iter().map(|entry| {
                let id = entry.id;
                rsx! {
                    TodoInfo { key: "{id}", entry: entry }
                }
            })}
        }
    }
}
