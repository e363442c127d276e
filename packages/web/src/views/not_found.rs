use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Page not found" }
                p { class: "auth-subtitle", "Nothing lives at /{path}." }
                Link { class: "auth-link", to: Route::Dashboard {}, "Back to the dashboard" }
            }
        }
    }
}
