use dioxus::prelude::*;
use store::PageNav;

use crate::icons::{FaAngleLeft, FaAngleRight, FaAnglesLeft, FaAnglesRight};
use crate::Icon;

const PAGE_SIZES: [u32; 4] = [10, 25, 50, 100];

/// First/prev/next/last controls with a "21 to 30 of 47" label.
#[component]
pub fn Pagination(
    range_label: String,
    can_prev: bool,
    can_next: bool,
    per_page: u32,
    on_navigate: EventHandler<PageNav>,
    on_per_page: EventHandler<u32>,
) -> Element {
    rsx! {
        div {
            class: "pagination",
            div {
                class: "pagination-size",
                span { "Rows per page" }
                select {
                    class: "input input-sm",
                    value: "{per_page}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(size) = evt.value().parse() {
                            on_per_page.call(size);
                        }
                    },
                    for size in PAGE_SIZES {
                        option { key: "{size}", value: "{size}", selected: size == per_page, "{size}" }
                    }
                }
            }
            span { class: "pagination-range", "{range_label}" }
            div {
                class: "pagination-buttons",
                button {
                    class: "btn btn-ghost",
                    title: "First page",
                    disabled: !can_prev,
                    onclick: move |_| on_navigate.call(PageNav::First),
                    Icon { icon: FaAnglesLeft, width: 12, height: 12 }
                }
                button {
                    class: "btn btn-ghost",
                    title: "Previous page",
                    disabled: !can_prev,
                    onclick: move |_| on_navigate.call(PageNav::Prev),
                    Icon { icon: FaAngleLeft, width: 12, height: 12 }
                }
                button {
                    class: "btn btn-ghost",
                    title: "Next page",
                    disabled: !can_next,
                    onclick: move |_| on_navigate.call(PageNav::Next),
                    Icon { icon: FaAngleRight, width: 12, height: 12 }
                }
                button {
                    class: "btn btn-ghost",
                    title: "Last page",
                    disabled: !can_next,
                    onclick: move |_| on_navigate.call(PageNav::Last),
                    Icon { icon: FaAnglesRight, width: 12, height: 12 }
                }
            }
        }
    }
}
