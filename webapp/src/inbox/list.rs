use dioxus::prelude::*;

use common::inbox::{ConversationEntry, Inbox};

#[derive(Clone, PartialEq, Props)]
struct ConversationListEntryProps {
    inbox: Signal<Inbox>,
    entry: ConversationEntry,
}

#[component]
fn ConversationListEntry(props: ConversationListEntryProps) -> Element {
    let mut inbox = props.inbox;
    let entry = props.entry;
    let index = entry.index;

    rsx! {
        div {
            class: if entry.active { "conversation active" } else { "conversation" },
            onclick: move |_| {
                inbox.write().select(index);
            },
            div { class: "avatar", "{entry.avatar}" }
            div { class: "conversation-info",
                div { class: "conversation-name", "{entry.name}" }
                div { class: "conversation-preview", "{entry.preview}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ConversationListProps {
    inbox: Signal<Inbox>,
}

#[component]
pub fn ConversationList(props: ConversationListProps) -> Element {
    let inbox = props.inbox;
    let entries = inbox.read().list();

    rsx! {
        div { id: "conversationList", class: "conversation-list",
            if entries.is_empty() {
                div { class: "empty-state", "No conversations match your search" }
            }
            for entry in entries {
                ConversationListEntry { key: "{entry.index}", inbox, entry }
            }
        }
    }
}
