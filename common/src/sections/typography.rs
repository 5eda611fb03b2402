use crate::typography::{
    DEFAULT_FONT_STYLE, DEFAULT_FONT_WEIGHT, FONT_FAMILY_PRIMARY, TypeCategory, TypeSize,
    TypeTokens, type_tokens,
};
use crate::vars::{MISSING, StyleVars};

pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog — 1234567890";
// used by the flat specimen strip under the scale
pub const SPECIMEN_TEXT: &str = "The quick brown fox jumps over the lazy dog";

#[derive(Clone, Debug, PartialEq)]
pub struct MetaRow {
    pub key: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeRow {
    pub size_label: &'static str,
    pub blurb: &'static str,
    pub class: &'static str,
    // what the sample actually renders with, fallbacks included
    pub metrics: Vec<MetaRow>,
    // "<variable> → <resolved value>"
    pub tokens: Vec<MetaRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeSection {
    pub category: TypeCategory,
    pub title: &'static str,
    pub open: bool,
    pub count_label: String,
    pub rows: Vec<TypeRow>,
}

fn meta(key: &'static str, value: String) -> MetaRow {
    MetaRow { key, value }
}

fn token_row(key: &'static str, vars: &StyleVars, name: &str) -> MetaRow {
    meta(key, format!("{name} → {}", vars.display(name)))
}

fn or_default(vars: &StyleVars, name: &str, default: &str) -> String {
    vars.resolve(name).unwrap_or_else(|| String::from(default))
}

fn type_row(vars: &StyleVars, category: TypeCategory, size: TypeSize, tokens: TypeTokens) -> TypeRow {
    TypeRow {
        size_label: size.label(),
        blurb: category.blurb(size),
        class: tokens.class,
        metrics: vec![
            meta("font-family", vars.display(FONT_FAMILY_PRIMARY)),
            meta("font-size", vars.display(tokens.font_size)),
            meta("line-height", vars.display(tokens.line_height)),
            meta("letter-spacing", vars.display(tokens.letter_spacing)),
            meta("font-weight", or_default(vars, tokens.font_weight, DEFAULT_FONT_WEIGHT)),
            meta("font-style", or_default(vars, tokens.font_style, DEFAULT_FONT_STYLE)),
        ],
        tokens: vec![
            token_row("token family", vars, FONT_FAMILY_PRIMARY),
            token_row("token size", vars, tokens.font_size),
            token_row("token line-height", vars, tokens.line_height),
            token_row("token letter-spacing", vars, tokens.letter_spacing),
        ],
    }
}

pub fn type_sections(vars: &StyleVars) -> Vec<TypeSection> {
    TypeCategory::ALL
        .into_iter()
        .map(|category| TypeSection {
            category,
            title: category.title(),
            open: category.open_by_default(),
            count_label: format!("{} styles", TypeSize::ALL.len()),
            rows: TypeSize::ALL
                .into_iter()
                .map(|size| type_row(vars, category, size, type_tokens(category, size)))
                .collect(),
        })
        .collect()
}

pub fn is_missing(row: &MetaRow) -> bool {
    row.value.ends_with(MISSING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_sections_of_three_rows() {
        let sections = type_sections(&StyleVars::new());

        assert_eq!(sections.len(), 5);
        assert!(sections.iter().all(|s| s.rows.len() == 3));
        assert!(sections[0].open);
        assert!(sections[1..].iter().all(|s| !s.open));
        assert_eq!(sections[3].title, "Body");
        assert_eq!(sections[3].count_label, "3 styles");
        assert_eq!(sections[3].rows[1].class, "text-body-md");
    }

    #[test]
    fn tokens_show_resolved_values_or_placeholders() {
        let mut vars = StyleVars::new();
        vars.set("--Font-Family-Primary", "Inter, sans-serif");
        vars.set("--Font-Size-title-lg", "22px");

        let sections = type_sections(&vars);
        let row = &sections[2].rows[0];

        assert_eq!(row.tokens[0].value, "--Font-Family-Primary → Inter, sans-serif");
        assert_eq!(row.tokens[1].value, "--Font-Size-title-lg → 22px");
        assert_eq!(row.tokens[2].value, "--Line-Height-title-lg → (missing)");
        assert!(is_missing(&row.tokens[2]));
        assert!(!is_missing(&row.tokens[1]));
    }

    #[test]
    fn weight_and_style_fall_back_like_the_utilities() {
        let row = &type_sections(&StyleVars::new())[0].rows[0];

        assert_eq!(row.metrics[4].value, "400");
        assert_eq!(row.metrics[5].value, "normal");
        assert_eq!(row.metrics[1].value, MISSING);
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut vars = StyleVars::new();
        vars.set("--Font-Size-display-lg", "57px");

        assert_eq!(type_sections(&vars), type_sections(&vars));
    }
}
