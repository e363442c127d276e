use dioxus::prelude::*;

/// Page header: title on the left, actions on the right.
#[component]
pub fn Navbar(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "navbar",
            h1 { class: "navbar-title", "{title}" }
            div {
                class: "navbar-actions",
                {children}
            }
        }
    }
}
