// top level sections, in document order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Typography,
    Colors,
    Spacing,
    Radius,
    Shadows,
    Inbox,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Typography,
        Tab::Colors,
        Tab::Spacing,
        Tab::Radius,
        Tab::Shadows,
        Tab::Inbox,
    ];

    // section id and the data-tab attribute of its button
    pub fn id(self) -> &'static str {
        match self {
            Self::Typography => "type",
            Self::Colors => "colors",
            Self::Spacing => "spacing",
            Self::Radius => "radius",
            Self::Shadows => "shadows",
            Self::Inbox => "inbox",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Typography => "Typography",
            Self::Colors => "Colors",
            Self::Spacing => "Spacing",
            Self::Radius => "Radius",
            Self::Shadows => "Shadows",
            Self::Inbox => "Inbox",
        }
    }
}

// exactly one tab is active at any time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabState {
    active: Tab,
}

impl Default for TabState {
    fn default() -> Self {
        TabState {
            active: Tab::ALL[0],
        }
    }
}

impl TabState {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    // class for both the section and its nav button
    pub fn class_for(&self, tab: Tab) -> &'static str {
        if self.is_active(tab) { "active" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tab_starts_active() {
        let tabs = TabState::default();

        assert_eq!(tabs.active(), Tab::Typography);
        assert_eq!(tabs.class_for(Tab::Typography), "active");
    }

    #[test]
    fn selecting_moves_the_single_active_tab() {
        let mut tabs = TabState::default();
        tabs.select(Tab::Inbox);

        let active: Vec<Tab> = Tab::ALL.into_iter().filter(|t| tabs.is_active(*t)).collect();
        assert_eq!(active, vec![Tab::Inbox]);
        assert_eq!(tabs.class_for(Tab::Typography), "");
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = Tab::ALL.iter().map(|t| t.id()).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), Tab::ALL.len());
    }
}
