use api::models::RegionLevel;
use dioxus::prelude::*;
use store::{AddressPair, LevelFetch, Side};

use crate::app::{use_app, AppContext};
use crate::components::{Input, Label, Select, SelectOption};

/// Load the options for `fetch` and feed them back into the pair.
pub fn spawn_region_fetch(app: AppContext, mut pair: Signal<AddressPair>, side: Side, fetch: LevelFetch) {
    spawn(async move {
        let result = app
            .client()
            .regions(fetch.level, fetch.parent_id.as_deref())
            .await;
        let completion = pair.write().complete(side, &fetch, result);
        if let Some(err) = completion.error() {
            app.report(&err);
        }
    });
}

/// Street input plus the four cascading region selects for one side of a pair.
#[component]
pub fn AddressFields(
    pair: Signal<AddressPair>,
    side: Side,
    id_prefix: String,
    street: String,
    on_street: EventHandler<String>,
) -> Element {
    let app = use_app();
    let editable = pair.read().is_editable(side);

    let on_select = move |(level, id): (RegionLevel, String)| {
        let mut pair = pair;
        let region = pair.read().side(side).level(level).find(&id);
        let fetch = pair.write().select(side, level, region);
        if let Some(fetch) = fetch {
            spawn_region_fetch(app, pair, side, fetch);
        }
    };

    let levels: Vec<_> = RegionLevel::ALL
        .into_iter()
        .map(|level| {
            let guard = pair.read();
            let selector = guard.side(side);
            let state = selector.level(level);
            let options: Vec<SelectOption> = state
                .options()
                .into_iter()
                .map(|o| SelectOption::new(o.value, o.label))
                .collect();
            let value = state.selected.as_ref().map(|r| r.id.clone()).unwrap_or_default();
            let enabled = editable && selector.is_enabled(level);
            (level, options, value, enabled, state.loading)
        })
        .collect();

    rsx! {
        div {
            class: "address-fields",
            div {
                class: "form-field",
                Label { html_for: "{id_prefix}-street", "Street" }
                Input {
                    id: "{id_prefix}-street",
                    value: street,
                    disabled: !editable,
                    oninput: move |v| on_street.call(v),
                }
            }
            div {
                class: "form-grid",
                for (level, options, value, enabled, loading) in levels {
                    div {
                        key: "{level.label()}",
                        class: "form-field",
                        Label { html_for: "{id_prefix}-{level.label()}", "{level.label()}" }
                        Select {
                            id: "{id_prefix}-{level.label()}",
                            value,
                            options,
                            placeholder: format!("Select {}", level.label().to_lowercase()),
                            disabled: !enabled,
                            loading,
                            onchange: move |id: String| on_select((level, id)),
                        }
                    }
                }
            }
        }
    }
}
