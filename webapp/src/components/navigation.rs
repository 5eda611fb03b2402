use dioxus::prelude::*;
use tracing::debug;

use common::{
    tabs::{Tab, TabState},
    theme::Theme,
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    tab: Tab,
    tabs: Signal<TabState>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let tab = props.tab;
    let mut tabs = props.tabs;

    rsx! {
        button {
            r#type: "button",
            class: if tabs.read().is_active(tab) { "nav-link active" } else { "nav-link" },
            "data-tab": tab.id(),
            onclick: move |_| {
                debug!(tab = tab.id(), "switching tab");
                tabs.write().select(tab);
            },
            "{tab.label()}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    theme: Signal<Theme>,
    tabs: Signal<TabState>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut theme = props.theme;
    let tabs = props.tabs;

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    span { style: "font-weight: 600; font-size: 1.25rem;", "Design System" }
                }

                nav { class: "nav-links",
                    for tab in Tab::ALL {
                        NavBarButton { key: "{tab.id()}", tab, tabs }
                    }
                }

                button {
                    id: "themeToggle",
                    r#type: "button",
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| {
                        let next = theme().toggled();
                        debug!(?next, "toggling theme");
                        theme.set(next);
                    },
                    "{theme().toggle_label()}"
                }
            }
        }
    }
}
