use dioxus::prelude::*;

use common::{AppliedTokens, sections::spacing::spacing_rows};

#[derive(Clone, PartialEq, Props)]
pub struct SpacingSectionProps {
    tokens: Signal<AppliedTokens>,
}

#[component]
pub fn SpacingSection(props: SpacingSectionProps) -> Element {
    let rows = spacing_rows(&props.tokens.read().vars);

    rsx! {
        div { id: "spacingList",
            for row in rows {
                div { key: "{row.key}", class: "space-row",
                    div { class: "space-label",
                        div { class: "mono space-key", "{row.key}" }
                        div { class: "mono space-px", "{row.px}" }
                    }
                    div { class: "space-track",
                        div { class: "space-bar", style: "{row.bar_style}" }
                    }
                    div { class: "mono space-meta", "{row.resolved}" }
                }
            }
        }
    }
}
