use tracing::debug;

use crate::seed;

pub const NO_PHONE: &str = "N/A";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Incoming => "message incoming",
            Self::Outgoing => "message outgoing",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub direction: Direction,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    pub name: String,
    pub avatar: String,
    pub phone: Option<String>,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn preview(&self) -> &str {
        self.messages.last().map(|m| m.text.as_str()).unwrap_or("")
    }

    pub fn phone_label(&self) -> &str {
        self.phone.as_deref().unwrap_or(NO_PHONE)
    }

    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self
                .phone
                .as_deref()
                .is_some_and(|phone| phone.to_lowercase().contains(needle))
    }
}

// one row of the conversation list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationEntry {
    pub index: usize,
    pub name: String,
    pub avatar: String,
    pub preview: String,
    pub active: bool,
}

// the list/detail demo
//
// conversations only ever grow (send appends), so an index handed out by list() stays
// valid for the lifetime of the inbox
#[derive(Clone, Debug, PartialEq)]
pub struct Inbox {
    conversations: Vec<Conversation>,
    active: usize,
    filter: String,
}

impl Default for Inbox {
    fn default() -> Self {
        Inbox::new(seed::conversations())
    }
}

impl Inbox {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Inbox {
            conversations,
            active: 0,
            filter: String::new(),
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    // indices of the conversations passing the current filter, in seed order
    pub fn visible(&self) -> Vec<usize> {
        let needle = self.filter.trim().to_lowercase();

        self.conversations
            .iter()
            .enumerate()
            .filter(|(_, c)| c.matches(&needle))
            .map(|(idx, _)| idx)
            .collect()
    }

    // if the selection drops out of the results, the first result takes over; with no
    // results the selection is left alone and selected() reports nothing
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_owned();

        let visible = self.visible();
        if !visible.contains(&self.active) {
            if let Some(&first) = visible.first() {
                debug!(from = self.active, to = first, "selection filtered out");
                self.active = first;
            }
        }
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.conversations.len() {
            return false;
        }

        self.active = index;
        true
    }

    pub fn selected(&self) -> Option<&Conversation> {
        if self.visible().contains(&self.active) {
            self.conversations.get(self.active)
        } else {
            None
        }
    }

    pub fn list(&self) -> Vec<ConversationEntry> {
        self.visible()
            .into_iter()
            .map(|index| {
                let c = &self.conversations[index];
                ConversationEntry {
                    index,
                    name: c.name.clone(),
                    avatar: c.avatar.clone(),
                    preview: c.preview().to_owned(),
                    active: index == self.active,
                }
            })
            .collect()
    }

    // appends an outgoing message to the selected conversation
    //
    // blank text, or nothing selected, leaves everything untouched
    pub fn send(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.selected().is_none() {
            return false;
        }

        let active = self.active;
        self.conversations[active].messages.push(Message {
            direction: Direction::Outgoing,
            text: text.to_owned(),
        });

        debug!(conversation = active, "appended outgoing message");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(inbox: &Inbox) -> Vec<String> {
        inbox.list().into_iter().map(|e| e.name).collect()
    }

    #[test]
    fn seeded_inbox_starts_on_the_first_conversation() {
        let inbox = Inbox::default();

        assert_eq!(inbox.conversations().len(), 3);
        assert_eq!(inbox.active_index(), 0);
        assert_eq!(inbox.selected().unwrap().name, "Poppyseed the Chicken");
        assert_eq!(
            names(&inbox),
            vec!["Poppyseed the Chicken", "Woolvolio the Sheep", "Milkita the Cow"]
        );
    }

    #[test]
    fn filtering_by_name_reselects_the_first_result() {
        let mut inbox = Inbox::default();
        inbox.set_filter("wool");

        assert_eq!(names(&inbox), vec!["Woolvolio the Sheep"]);
        assert_eq!(inbox.active_index(), 1);
        assert_eq!(inbox.selected().unwrap().name, "Woolvolio the Sheep");
        assert!(inbox.list()[0].active);
    }

    #[test]
    fn filtering_is_case_insensitive_and_matches_phone_numbers() {
        let mut inbox = Inbox::default();

        inbox.set_filter("  THE ");
        assert_eq!(inbox.visible(), vec![0, 1, 2]);

        inbox.set_filter("555) 5");
        assert_eq!(names(&inbox), vec!["Milkita the Cow"]);

        inbox.set_filter("(555)");
        assert_eq!(inbox.visible(), vec![0, 1, 2]);
    }

    #[test]
    fn filtering_keeps_a_visible_selection() {
        let mut inbox = Inbox::default();
        inbox.select(2);
        inbox.set_filter("e");

        assert_eq!(inbox.active_index(), 2);
    }

    #[test]
    fn no_matches_leaves_nothing_selected() {
        let mut inbox = Inbox::default();
        inbox.set_filter("zebra");

        assert!(inbox.list().is_empty());
        assert!(inbox.selected().is_none());
        assert!(!inbox.send("hello"));

        inbox.set_filter("");
        assert_eq!(inbox.selected().unwrap().name, "Poppyseed the Chicken");
    }

    #[test]
    fn selecting_shows_that_thread_in_order() {
        let mut inbox = Inbox::default();

        assert!(inbox.select(0));
        let selected = inbox.selected().unwrap();
        let thread: Vec<(Direction, &str)> = selected
            .messages
            .iter()
            .map(|m| (m.direction, m.text.as_str()))
            .collect();

        assert_eq!(
            thread,
            vec![
                (
                    Direction::Outgoing,
                    "Hi Hubert, Grayscale here! We love your resume and would love to schedule time for a phone screen."
                ),
                (Direction::Incoming, "Sounds good! I'll find a time. Chat soon"),
            ]
        );
        assert_eq!(selected.phone_label(), "(555) 123-4567");
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut inbox = Inbox::default();

        assert!(!inbox.select(7));
        assert_eq!(inbox.active_index(), 0);
    }

    #[test]
    fn blank_messages_are_not_sent() {
        let mut inbox = Inbox::default();
        let before = inbox.clone();

        assert!(!inbox.send(""));
        assert!(!inbox.send("   \t"));
        assert_eq!(inbox, before);
    }

    #[test]
    fn sending_appends_one_outgoing_message() {
        let mut inbox = Inbox::default();
        inbox.select(1);

        assert!(inbox.send("hello"));

        let convo = &inbox.conversations()[1];
        assert_eq!(convo.messages.len(), 2);
        assert_eq!(
            convo.messages.last(),
            Some(&Message {
                direction: Direction::Outgoing,
                text: String::from("hello"),
            })
        );
        assert_eq!(inbox.list()[1].preview, "hello");
        assert_eq!(inbox.conversations()[0].messages.len(), 2);
    }

    #[test]
    fn missing_phone_is_labelled() {
        let convo = Conversation {
            name: String::from("Nobody"),
            avatar: String::from("NB"),
            phone: None,
            messages: vec![],
        };

        assert_eq!(convo.phone_label(), NO_PHONE);
        assert_eq!(convo.preview(), "");
    }
}
