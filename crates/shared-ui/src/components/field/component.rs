use dioxus::prelude::*;

/// Labelled text input with an optional validation message underneath.
#[component]
pub fn FormField(
    id: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "form-field",
            "data-invalid": if error.is_some() { "true" } else { "false" },
            label { class: "form-field-label", r#for: "{id}", "{label}" }
            input {
                class: "form-field-input",
                id: "{id}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(err) = &error {
                div { class: "form-field-error", "{err}" }
            }
        }
    }
}
