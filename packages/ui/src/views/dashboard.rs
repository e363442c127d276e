use api::models::DashboardSummary;
use dioxus::prelude::*;

use crate::app::use_app;
use crate::components::Spinner;
use crate::Navbar;

#[component]
pub fn DashboardView(on_navigate: EventHandler<&'static str>) -> Element {
    let app = use_app();

    let summary = use_resource(move || async move {
        match app.client().dashboard().await {
            Ok(summary) => Some(summary),
            Err(e) => {
                app.report(&e);
                None
            }
        }
    });

    let greeting = format!("Welcome, {}", app.session.read().display_name());

    rsx! {
        Navbar { title: "Dashboard" }
        p { class: "page-subtitle", "{greeting}" }

        {match summary.read().clone() {
            None => rsx! { Spinner {} },
            Some(None) => rsx! {
                p { class: "page-subtitle", "Dashboard figures are unavailable right now." }
            },
            Some(Some(summary)) => rsx! {
                div {
                    class: "stat-grid",
                    for (label, value, path) in cards(&summary) {
                        button {
                            key: "{label}",
                            class: "stat-card",
                            onclick: move |_| on_navigate.call(path),
                            span { class: "stat-value", "{value}" }
                            span { class: "stat-label", "{label}" }
                        }
                    }
                }
            },
        }}
    }
}

fn cards(summary: &DashboardSummary) -> [(&'static str, u64, &'static str); 6] {
    [
        ("Children", summary.children, "/users"),
        ("Caretakers", summary.caretakers, "/users"),
        ("Bedrooms", summary.bed_rooms, "/bedrooms"),
        ("Donations", summary.donations, "/donations"),
        ("Events", summary.events, "/events"),
        ("Inventory items", summary.inventories, "/inventory"),
    ]
}
