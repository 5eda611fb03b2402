use dioxus::prelude::*;

use common::{AppliedTokens, sections::radius::radius_cards};

#[derive(Clone, PartialEq, Props)]
pub struct RadiusSectionProps {
    tokens: Signal<AppliedTokens>,
}

#[component]
pub fn RadiusSection(props: RadiusSectionProps) -> Element {
    let tokens = props.tokens.read();
    let cards = radius_cards(&tokens.tree, &tokens.vars);

    rsx! {
        div { id: "radiusGrid", class: "grid-demo",
            if cards.is_empty() {
                div { class: "empty-state", "The token document has no radius group" }
            }
            for card in cards {
                div { key: "{card.class}",
                    div { class: "{card.class}", style: "{card.preview_style}" }
                    div { class: "mono", style: "margin-top:10px", ".{card.class}" }
                    div { class: "label mono", "{card.label}" }
                }
            }
        }
    }
}
