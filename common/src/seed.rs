// static sample data shipped with the page
//
// the palette and the swatch ramps (sections::swatches) were authored separately and do
// not agree on ramp names; both are reproduced as written
use crate::inbox::{Conversation, Direction, Message};

pub struct PaletteGroup {
    pub title: &'static str,
    pub colors: &'static [(&'static str, &'static str)],
}

pub const PALETTE: [PaletteGroup; 6] = [
    PaletteGroup {
        title: "Neutral",
        colors: &[
            ("neutral-white", "#ffffff"),
            ("neutral-very-light", "#F3F4F7"),
            ("neutral-light", "#DADEE8"),
            ("neutral-medium", "#7884A5"),
            ("neutral-dark", "#525C7A"),
            ("neutral-very-dark", "#313749"),
            ("neutral-black", "#101218"),
        ],
    },
    PaletteGroup {
        title: "Primary",
        colors: &[
            ("primary-lightest", "#010100"),
            ("primary-very-light", "#010100"),
            ("primary-super-light", "#010100"),
            ("primary-light", "#010100"),
            ("primary-medium", "#010100"),
            ("primary-dark", "#010100"),
            ("primary-very-dark", "#010100"),
            ("primary-darkest", "#16173C"),
        ],
    },
    PaletteGroup {
        title: "Green",
        colors: &[
            ("green-lightest", "#EFFBF1"),
            ("green-very-light", "#BFEDC6"),
            ("green-light", "#7FDC8D"),
            ("green-medium", "#3FCA54"),
            ("green-dark", "#2CA03D"),
            ("green-very-dark", "#1A6025"),
            ("green-darkest", "#0D3012"),
        ],
    },
    PaletteGroup {
        title: "Yellow",
        colors: &[
            ("yellow-lightest", "#FFF9EB"),
            ("yellow-very-light", "#FFEDC2"),
            ("yellow-light", "#FFD770"),
            ("yellow-medium", "#FFC533"),
            ("yellow-dark", "#E0A100"),
            ("yellow-very-dark", "#B88400"),
            ("yellow-darkest", "#6B4D01"),
        ],
    },
    PaletteGroup {
        title: "Red",
        colors: &[
            ("red-lightest", "#FDEDF1"),
            ("red-very-light", "#F7B6C7"),
            ("red-light", "#ED5A81"),
            ("red-medium", "#E5245B"),
            ("red-dark", "#A4133C"),
            ("red-very-dark", "#6E0D28"),
            ("red-darkest", "#370613"),
        ],
    },
    PaletteGroup {
        title: "Assorted",
        colors: &[
            ("dark-blue", "#0F172A"),
            ("off-white", "#f9fafb"),
            ("disabled-field", "#f8fafc"),
            ("light-gray", "#FAFAFA"),
            ("gray-tag", "#dfe0e2"),
        ],
    },
];

// classes shown in the specimen strip; the -bold variants have no generated utility
pub const TYPE_SPECIMENS: [&str; 12] = [
    "text-display-lg",
    "text-display-md",
    "text-display-sm",
    "text-headline-lg",
    "text-headline-lg-bold",
    "text-headline-md",
    "text-headline-md-bold",
    "text-headline-sm",
    "text-headline-sm-bold",
    "text-title-lg",
    "text-title-lg-bold",
    "text-body-md",
];

fn message(direction: Direction, text: &str) -> Message {
    Message {
        direction,
        text: text.to_owned(),
    }
}

pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            name: String::from("Poppyseed the Chicken"),
            avatar: String::from("PC"),
            phone: Some(String::from("(555) 123-4567")),
            messages: vec![
                message(
                    Direction::Outgoing,
                    "Hi Hubert, Grayscale here! We love your resume and would love to schedule time for a phone screen.",
                ),
                message(Direction::Incoming, "Sounds good! I'll find a time. Chat soon"),
            ],
        },
        Conversation {
            name: String::from("Woolvolio the Sheep"),
            avatar: String::from("WS"),
            phone: Some(String::from("(555) 987-6543")),
            messages: vec![message(
                Direction::Incoming,
                "System Message: Reengagement work...",
            )],
        },
        Conversation {
            name: String::from("Milkita the Cow"),
            avatar: String::from("MC"),
            phone: Some(String::from("(555) 555-1212")),
            messages: vec![message(
                Direction::Incoming,
                "Woohoo! Looking forward to it! -Les",
            )],
        },
    ]
}
