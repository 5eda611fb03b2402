use dioxus::prelude::*;

use common::{AppliedTokens, sections::shadows::shadow_cards};

#[derive(Clone, PartialEq, Props)]
pub struct ShadowSectionProps {
    tokens: Signal<AppliedTokens>,
}

#[component]
pub fn ShadowSection(props: ShadowSectionProps) -> Element {
    let cards = shadow_cards(&props.tokens.read().vars);

    rsx! {
        div { id: "shadowGrid", class: "grid-demo",
            for card in cards {
                div { key: "{card.class}", class: "shadow-swatch {card.class}",
                    div { class: "mono", "{card.class}" }
                    div { class: "label", "{card.label}" }
                    div { class: "label mono shadow-value", "{card.resolved}" }
                }
            }
        }
    }
}
