use dioxus::prelude::*;

/// An indeterminate loading spinner with an optional caption underneath.
#[component]
pub fn Spinner(
    #[props(default)] caption: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "spinner-wrap", None, false),
        Attribute::new("role", "status", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div { class: "spinner", aria_hidden: "true" }
            if let Some(text) = caption {
                p { class: "spinner-caption", "{text}" }
            }
        }
    }
}
