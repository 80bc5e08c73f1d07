use dioxus::prelude::*;

mod components;
mod config;
mod state;
mod views;

use components::ErrorMessage;
use views::AddTodoForm;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Root component. Loads the fixtures once and hands them to the form.
#[component]
fn App() -> Element {
    let fixtures = use_hook(|| {
        config::load_fixtures().map_err(|err| {
            tracing::error!("Failed to start: {err:#}");
            format!("{err:#}")
        })
    });

    let body = match fixtures {
        Ok(store) => rsx! { AddTodoForm { store: store } },
        Err(message) => rsx! { ErrorMessage { message: message } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {body}
    }
}
