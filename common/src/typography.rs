// the type scale: five categories, three sizes each
//
// every class and variable name is spelled out in the table below, so nothing downstream
// builds a property name out of string fragments

pub const FONT_FAMILY_PRIMARY: &str = "--Font-Family-Primary";
pub const FONT_FAMILY_ACCENT: &str = "--Font-Family-Accent";

pub const ACCENT_CLASS: &str = "text-display-md-accent";

// fallbacks baked into the generated utilities
pub const DEFAULT_FONT_WEIGHT: &str = "400";
pub const DEFAULT_FONT_STYLE: &str = "normal";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeCategory {
    Display,
    Headline,
    Title,
    Body,
    Label,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeSize {
    Lg,
    Md,
    Sm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeTokens {
    pub class: &'static str,
    pub font_size: &'static str,
    pub line_height: &'static str,
    pub letter_spacing: &'static str,
    pub font_weight: &'static str,
    pub font_style: &'static str,
}

impl TypeCategory {
    pub const ALL: [TypeCategory; 5] = [
        TypeCategory::Display,
        TypeCategory::Headline,
        TypeCategory::Title,
        TypeCategory::Body,
        TypeCategory::Label,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Display => "Display",
            Self::Headline => "Headline",
            Self::Title => "Title",
            Self::Body => "Body",
            Self::Label => "Label",
        }
    }

    // only the first group starts expanded
    pub fn open_by_default(self) -> bool {
        self == Self::Display
    }

    pub fn blurb(self, size: TypeSize) -> &'static str {
        use TypeSize::*;

        match (self, size) {
            (Self::Display, Lg) => "Hero headlines, landing page top sections, big moments.",
            (Self::Display, Md) => "Section headers for major pages, feature callouts.",
            (Self::Display, Sm) => "Compact hero headers, cards with strong emphasis.",
            (Self::Headline, Lg) => "Primary page headings and high-level content sections.",
            (Self::Headline, Md) => "Secondary headers in pages, panels, and modals.",
            (Self::Headline, Sm) => "Card titles, list section headers, dense UIs.",
            (Self::Title, Lg) => "Component titles, modal titles, content grouping.",
            (Self::Title, Md) => "Default component title for most surfaces.",
            (Self::Title, Sm) => "Compact titles for tight layouts and small cards.",
            (Self::Body, Lg) => "Long-form reading, marketing body copy.",
            (Self::Body, Md) => "Default body text for product UI.",
            (Self::Body, Sm) => "Dense UI, helper text, secondary content.",
            (Self::Label, Lg) => "Form labels, table headers, emphasized microcopy.",
            (Self::Label, Md) => "Default label size for controls and metadata.",
            (Self::Label, Sm) => "Tags, badges, captions, tiny metadata.",
        }
    }
}

impl TypeSize {
    pub const ALL: [TypeSize; 3] = [TypeSize::Lg, TypeSize::Md, TypeSize::Sm];

    pub fn label(self) -> &'static str {
        match self {
            Self::Lg => "LG",
            Self::Md => "MD",
            Self::Sm => "SM",
        }
    }
}

macro_rules! type_scale {
    ($( ($category:ident, $size:ident, $key:literal) ),* $(,)?) => {
        pub fn type_tokens(category: TypeCategory, size: TypeSize) -> TypeTokens {
            match (category, size) {
                $(
                    (TypeCategory::$category, TypeSize::$size) => TypeTokens {
                        class: concat!("text-", $key),
                        font_size: concat!("--Font-Size-", $key),
                        line_height: concat!("--Line-Height-", $key),
                        letter_spacing: concat!("--Letter-Spacing-", $key),
                        font_weight: concat!("--Font-Weight-", $key),
                        font_style: concat!("--Font-Style-", $key),
                    },
                )*
            }
        }
    };
}

type_scale! {
    (Display, Lg, "display-lg"),
    (Display, Md, "display-md"),
    (Display, Sm, "display-sm"),
    (Headline, Lg, "headline-lg"),
    (Headline, Md, "headline-md"),
    (Headline, Sm, "headline-sm"),
    (Title, Lg, "title-lg"),
    (Title, Md, "title-md"),
    (Title, Sm, "title-sm"),
    (Body, Lg, "body-lg"),
    (Body, Md, "body-md"),
    (Body, Sm, "body-sm"),
    (Label, Lg, "label-lg"),
    (Label, Md, "label-md"),
    (Label, Sm, "label-sm"),
}

// the accent specimen reuses the display-md metrics with its own family
pub fn accent_tokens() -> TypeTokens {
    TypeTokens {
        class: ACCENT_CLASS,
        ..type_tokens(TypeCategory::Display, TypeSize::Md)
    }
}

pub fn all_type_tokens() -> impl Iterator<Item = (TypeCategory, TypeSize, TypeTokens)> {
    TypeCategory::ALL.into_iter().flat_map(|category| {
        TypeSize::ALL
            .into_iter()
            .map(move |size| (category, size, type_tokens(category, size)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_keyed_by_category_and_size() {
        let tokens = type_tokens(TypeCategory::Label, TypeSize::Md);

        assert_eq!(tokens.class, "text-label-md");
        assert_eq!(tokens.line_height, "--Line-Height-label-md");
        assert_eq!(tokens.letter_spacing, "--Letter-Spacing-label-md");
        assert_eq!(tokens.font_weight, "--Font-Weight-label-md");
    }

    #[test]
    fn every_class_is_unique() {
        let mut classes: Vec<&str> = all_type_tokens().map(|(_, _, t)| t.class).collect();
        classes.sort();
        classes.dedup();

        assert_eq!(classes.len(), 15);
    }

    #[test]
    fn accent_shares_display_md_metrics() {
        let accent = accent_tokens();

        assert_eq!(accent.class, ACCENT_CLASS);
        assert_eq!(accent.font_size, "--Font-Size-display-md");
    }
}
