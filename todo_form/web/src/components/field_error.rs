use dioxus::prelude::*;
use todo_form_core::ValidationError;

/// Inline error text next to a form field. Renders nothing when the field is valid.
#[component]
pub fn FieldError(error: Option<ValidationError>) -> Element {
    rsx! {
        if let Some(error) = error {
            span { class: "error", "{error}" }
        }
    }
}
