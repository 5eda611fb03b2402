use dioxus::prelude::*;

// live search field: every keystroke is handed to on_filter, there is no submit step
#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    id: &'static str,
    value: String,
    placeholder: &'static str,
    on_filter: EventHandler<String>,
    #[props(default)]
    status: String,
}

#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let on_filter = props.on_filter;
    let status = props.status.clone();

    rsx! {
        div {
            class: "search-bar",
            div {
                class: "search-input",
                style: "flex: 1;",
                input {
                    id: "{props.id}",
                    class: "form-input",
                    style: "width: 100%;",
                    r#type: "search",
                    placeholder: "{props.placeholder}",
                    value: "{props.value}",
                    oninput: move |event| on_filter.call(event.value()),
                }
            }

            if !status.is_empty() {
                span {
                    class: "search-status",
                    "{status}"
                }
            }
        }
    }
}
