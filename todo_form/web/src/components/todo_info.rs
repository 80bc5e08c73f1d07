use crate::components::UserInfo;
use dioxus::prelude::*;
use todo_form_core::TodoEntry;

/// A single todo with its title and owner
#[component]
pub fn TodoInfo(entry: TodoEntry) -> Element {
    rsx! {
        article { "data-id": "{entry.id}", class: "{entry.class}",
            h2 { class: "TodoInfo__title", "{entry.title}" }
            UserInfo { owner: entry.owner.clone() }
        }
    }
}
