use dioxus::prelude::*;

use common::{
    AppliedTokens,
    sections::swatches::{Swatch, SwatchGroup, SwatchStatus, palette_groups, swatch_groups},
};

#[derive(Clone, PartialEq, Props)]
struct SwatchCardProps {
    swatch: Swatch,
}

#[component]
fn SwatchCard(props: SwatchCardProps) -> Element {
    let swatch = props.swatch;
    let label_class = match swatch.status {
        SwatchStatus::Valid => "label mono",
        SwatchStatus::Invalid | SwatchStatus::Missing => "label mono missing",
    };

    rsx! {
        div { class: "color-card",
            div {
                class: "color-swatch",
                style: "background: {swatch.background};",
            }
            div { class: "color-meta",
                div { class: "mono color-name", "{swatch.name}" }
                div { class: label_class, "{swatch.label}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SwatchGroupsProps {
    groups: Vec<SwatchGroup>,
}

#[component]
fn SwatchGroups(props: SwatchGroupsProps) -> Element {
    rsx! {
        for group in props.groups {
            div { key: "{group.title}", class: "color-group",
                div { class: "mono color-group-title", "{group.title}" }
                div { class: "grid-demo",
                    for swatch in group.swatches {
                        SwatchCard { key: "{swatch.name}", swatch }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ColorSectionProps {
    tokens: Signal<AppliedTokens>,
}

#[component]
pub fn ColorSection(props: ColorSectionProps) -> Element {
    let groups = swatch_groups(&props.tokens.read().vars);

    rsx! {
        div { id: "colorSwatchMount",
            SwatchGroups { groups }
        }

        h3 { class: "subsection-title", "Seed palette" }
        div { id: "seedPalette",
            SwatchGroups { groups: palette_groups() }
        }
    }
}
