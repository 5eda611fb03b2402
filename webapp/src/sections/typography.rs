use dioxus::prelude::*;

use common::{
    AppliedTokens,
    sections::typography::{MetaRow, SAMPLE_TEXT, SPECIMEN_TEXT, TypeRow, is_missing, type_sections},
    seed::TYPE_SPECIMENS,
};

#[derive(Clone, PartialEq, Props)]
struct MetaGridProps {
    rows: Vec<MetaRow>,
}

#[component]
fn MetaGrid(props: MetaGridProps) -> Element {
    rsx! {
        div { class: "typo-meta",
            for row in props.rows {
                div { class: "mono typo-k", "{row.key}" }
                div { class: if is_missing(&row) { "mono missing" } else { "mono" }, "{row.value}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct TypeRowViewProps {
    row: TypeRow,
}

#[component]
fn TypeRowView(props: TypeRowViewProps) -> Element {
    let row = props.row;

    rsx! {
        div { class: "typo-row",
            div { class: "typo-left",
                h4 { "{row.size_label}" }
                div { class: "typo-blurb", "{row.blurb}" }
            }
            div { class: "typo-right",
                div {
                    class: "mono",
                    style: "display:flex; justify-content:space-between; gap:12px;",
                    div { ".{row.class}" }
                    div { style: "color: var(--color-muted);", "Tokens" }
                }
                div { class: "{row.class} typo-sample", "{SAMPLE_TEXT}" }
                MetaGrid { rows: row.metrics }
                MetaGrid { rows: row.tokens }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TypographySectionProps {
    tokens: Signal<AppliedTokens>,
}

#[component]
pub fn TypographySection(props: TypographySectionProps) -> Element {
    let sections = type_sections(&props.tokens.read().vars);

    rsx! {
        div { id: "typographyMount",
            div { class: "typo-sections",
                for section in sections {
                    details { key: "{section.title}", class: "typo-details", open: section.open,
                        summary { class: "typo-summary",
                            div { class: "typo-summary-left",
                                div { class: "typo-title", "{section.title}" }
                                div { class: "label mono typo-count", "{section.count_label}" }
                            }
                            div { class: "label mono", style: "color: var(--color-muted);", "Click to expand" }
                        }
                        div { class: "typo-body",
                            for row in section.rows {
                                TypeRowView { key: "{row.class}", row }
                            }
                        }
                    }
                }
            }

            h3 { class: "subsection-title", "Specimens" }
            div { id: "typeSpecimens", class: "typo-specimens",
                for class in TYPE_SPECIMENS {
                    div { key: "{class}", class: "style-row",
                        div { class: "style-name mono", ".{class}" }
                        div { class: "{class}", "{SPECIMEN_TEXT}" }
                    }
                }
            }
        }
    }
}
