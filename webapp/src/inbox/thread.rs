use dioxus::prelude::*;
use tracing::debug;

use crate::dom::scroll_to_bottom;
use common::inbox::Inbox;

const THREAD_ID: &str = "chatMessages";

fn send_draft(mut inbox: Signal<Inbox>, mut draft: Signal<String>) {
    let text = draft();
    if inbox.write().send(&text) {
        draft.set(String::new());
    } else {
        debug!("nothing to send");
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ThreadProps {
    inbox: Signal<Inbox>,
}

#[component]
pub fn Thread(props: ThreadProps) -> Element {
    let inbox = props.inbox;
    let mut draft = use_signal(String::new);

    // keep the newest message in view after a selection or a send
    use_effect(move || {
        let _shown = inbox.read().selected().map(|convo| convo.messages.len());
        scroll_to_bottom(THREAD_ID);
    });

    let selected = inbox.read().selected().cloned();
    let convo = match selected {
        Some(convo) => convo,
        None => {
            return rsx! {
                div { class: "chat-pane",
                    div { class: "empty-state", "No conversation selected" }
                }
            };
        }
    };

    rsx! {
        div { class: "chat-pane",
            div { id: "chatHeader", class: "chat-header",
                div { style: "display:flex;align-items:center;gap:12px;flex:1;",
                    div { class: "avatar", "{convo.avatar}" }
                    div {
                        div { style: "font-weight:600;", "{convo.name}" }
                        div { style: "font-size:12px;color:var(--muted);", "{convo.phone_label()}" }
                    }
                }
                div { style: "display:flex;gap:8px;",
                    button { r#type: "button", class: "btn btn-primary btn-sm", "Follow" }
                    button { r#type: "button", class: "btn btn-primary btn-sm", "Block" }
                }
            }

            div { id: THREAD_ID, class: "chat-messages",
                for (idx, message) in convo.messages.iter().enumerate() {
                    div { key: "{idx}", class: message.direction.css_class(), "{message.text}" }
                }
            }

            div { class: "chat-composer",
                input {
                    id: "chatInput",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Type a message",
                    value: "{draft}",
                    oninput: move |event| draft.set(event.value()),
                    onkeydown: move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            send_draft(inbox, draft);
                        }
                    },
                }
                button {
                    id: "sendBtn",
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: move |_| send_draft(inbox, draft),
                    "Send"
                }
            }
        }
    }
}
