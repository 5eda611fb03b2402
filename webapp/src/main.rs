#![allow(non_snake_case)]
use std::sync::Arc;

use dioxus::prelude::*;
use gloo_console::error as console_error;
use tracing::{Level, error, info};

use api::tokens::{TokenNode, get_tokens};
use common::{AppliedTokens, config::read_config, inbox::Inbox, tabs::TabState, theme::Theme};

mod components;
use components::navigation::NavBar;

mod inbox;

mod last_updated;
use last_updated::LastUpdatedFooter;

mod sections;
use sections::SectionPanels;

mod dom;
mod style;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the page state, owned here and handed down as props
#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    pub theme: Signal<Theme>,
    pub tabs: Signal<TabState>,
    pub tokens: Signal<AppliedTokens>,
    pub inbox: Signal<Inbox>,
}

#[component]
pub fn App() -> Element {
    // compiled in, so this only fails on a bad build
    let config = use_context_provider(|| read_config().expect("embedded showcase.toml is valid"));

    let state = AppState {
        theme: use_signal(Theme::default),
        tabs: use_signal(TabState::default),
        tokens: use_signal(|| AppliedTokens::new(TokenNode::Ignored)),
        inbox: use_signal(Inbox::default),
    };

    // sections render from the empty document until the fetch lands
    let mut tokens = state.tokens;
    use_future(move || {
        let config = Arc::clone(&config);
        async move {
            let tree = match get_tokens(&config.tokens_url).await {
                Ok(tree) => {
                    info!(url = %config.tokens_url, "loaded token document");
                    tree
                }
                Err(err) => {
                    error!(%err, "failed to load token document, rendering without it");
                    console_error!(format!("Failed to load {}: {err}", config.tokens_url));
                    TokenNode::Ignored
                }
            };

            tokens.set(AppliedTokens::new(tree));
        }
    });

    let theme_css = (state.theme)().vars().to_css(":root");
    let applied = state.tokens.read();
    let token_css = applied.vars.to_css(":root");

    rsx! {
        style { "{style::SHOWCASE_STYLES}" }
        style { id: "theme-variables", "{theme_css}" }
        style { id: "token-variables", "{token_css}" }
        for (id, css) in applied.sheets.iter() {
            style { key: "{id}", id: "{id}", "{css}" }
        }

        div { class: "page",
            NavBar { theme: state.theme, tabs: state.tabs }
            main { class: "page-content",
                SectionPanels { state }
            }
            LastUpdatedFooter {}
        }
    }
}
