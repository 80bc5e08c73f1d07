use dioxus::prelude::*;

/// Banner shown instead of the form when the app cannot start
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "notification is-danger",
            p { "{message}" }
        }
    }
}
