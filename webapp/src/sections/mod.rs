use dioxus::prelude::*;

use crate::{AppState, inbox::InboxPanel};
use common::tabs::Tab;

mod colors;
use colors::ColorSection;

mod radius;
use radius::RadiusSection;

mod shadows;
use shadows::ShadowSection;

mod spacing;
use spacing::SpacingSection;

mod typography;
use typography::TypographySection;

// one <section> per tab; only the active one is displayed, the rest stay mounted so
// switching back does not lose the inbox draft or the open typography groups
#[derive(Clone, PartialEq, Props)]
pub struct SectionPanelsProps {
    state: AppState,
}

#[component]
pub fn SectionPanels(props: SectionPanelsProps) -> Element {
    let state = props.state;
    let tabs = (state.tabs)();
    let tokens = state.tokens;

    rsx! {
        for tab in Tab::ALL {
            section {
                key: "{tab.id()}",
                id: tab.id(),
                class: tabs.class_for(tab),
                h2 { class: "section-title", "{tab.label()}" }
                {
                    match tab {
                        Tab::Typography => rsx! { TypographySection { tokens } },
                        Tab::Colors => rsx! { ColorSection { tokens } },
                        Tab::Spacing => rsx! { SpacingSection { tokens } },
                        Tab::Radius => rsx! { RadiusSection { tokens } },
                        Tab::Shadows => rsx! { ShadowSection { tokens } },
                        Tab::Inbox => rsx! { InboxPanel { inbox: state.inbox } },
                    }
                }
            }
        }
    }
}
