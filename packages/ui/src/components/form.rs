use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, #[props(default)] required: bool, children: Element) -> Element {
    rsx! {
        label {
            class: "form-label",
            r#for: "{html_for}",
            {children}
            if required {
                span { class: "form-required", " *" }
            }
        }
    }
}

/// Inline validation message under an input.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "field-error", "{message}" }
        },
        None => rsx! {},
    }
}

#[component]
pub fn Input(
    id: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    #[props(default)] class: String,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: if invalid { "input input-invalid {class}" } else { "input {class}" },
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            disabled,
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

#[component]
pub fn TextArea(
    id: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = 3)] rows: u32,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "input",
            rows: "{rows}",
            disabled,
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

#[component]
pub fn Checkbox(id: String, checked: bool, onchange: EventHandler<bool>, children: Element) -> Element {
    rsx! {
        label {
            class: "checkbox",
            r#for: "{id}",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            {children}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[component]
pub fn Select(
    id: String,
    value: String,
    options: Vec<SelectOption>,
    onchange: EventHandler<String>,
    /// Label of the empty first entry.
    #[props(default = "Select...".to_string())]
    placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] invalid: bool,
) -> Element {
    rsx! {
        div {
            class: "select-wrapper",
            select {
                id: "{id}",
                class: if invalid { "input input-invalid" } else { "input" },
                disabled: disabled || loading,
                value: "{value}",
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                option { value: "", "{placeholder}" }
                for opt in options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
            if loading {
                span { class: "select-loading", "Loading..." }
            }
        }
    }
}

/// Free-text search input. Debouncing is left to the caller.
#[component]
pub fn SearchBox(
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
) -> Element {
    rsx! {
        div {
            class: "search-box",
            crate::Icon { icon: crate::icons::FaMagnifyingGlass, width: 14, height: 14 }
            input {
                class: "input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

/// Label, control and inline error stacked in one grid cell.
#[component]
pub fn FormField(
    label: String,
    html_for: String,
    #[props(default)] required: bool,
    error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            Label { html_for, required, "{label}" }
            {children}
            FieldError { message: error }
        }
    }
}
