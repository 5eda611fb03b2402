use dioxus::prelude::*;
use tracing::debug;

use crate::components::search_bar::SearchBar;
use common::inbox::Inbox;

mod list;
use list::ConversationList;

mod thread;
use thread::Thread;

// the messaging demo: searchable conversation list on the left, the selected thread
// on the right
//
// everything lives in the Inbox signal owned by the root component, so the list preview
// and the thread stay in step after a send
#[derive(Clone, PartialEq, Props)]
pub struct InboxPanelProps {
    inbox: Signal<Inbox>,
}

#[component]
pub fn InboxPanel(props: InboxPanelProps) -> Element {
    let mut inbox = props.inbox;

    let filter = inbox.read().filter().to_owned();
    let shown = inbox.read().visible().len();
    let total = inbox.read().conversations().len();

    rsx! {
        div { class: "inbox",
            div { class: "inbox-sidebar",
                SearchBar {
                    id: "conversationSearch",
                    value: filter,
                    placeholder: "Search by name or phone",
                    status: format!("{shown} of {total}"),
                    on_filter: move |text: String| {
                        debug!(filter = %text, "filtering conversations");
                        inbox.write().set_filter(&text);
                    },
                }
                ConversationList { inbox }
            }
            Thread { inbox }
        }
    }
}
