use dioxus::prelude::*;
use todo_form_core::OwnerView;

#[component]
pub fn UserInfo(owner: OwnerView) -> Element {
    match owner {
        OwnerView::Known { name, href } => rsx! {
            a { class: "UserInfo", href: "{href}", "{name}" }
        },
        OwnerView::Missing => rsx! {
            span { class: "UserInfo UserInfo--missing", "Unknown user" }
        },
    }
}
