use tracing::debug;

use crate::sections::radius::{RADIUS_UTILITIES, radius_class, radius_leaves};
use crate::sections::shadows::SHADOWS;
use crate::typography::{
    DEFAULT_FONT_STYLE, DEFAULT_FONT_WEIGHT, FONT_FAMILY_ACCENT, FONT_FAMILY_PRIMARY, TypeTokens,
    accent_tokens, all_type_tokens,
};
use api::tokens::TokenNode;

pub const TYPOGRAPHY_SHEET: &str = "typo-utilities";
pub const RADIUS_SHEET: &str = "radius-utilities";
pub const SHADOW_SHEET: &str = "shadow-utilities";

// generated style blocks, keyed by a stable id
//
// injecting under an id that is already present replaces that block in place, so the
// injectors can run on every token reload without piling up duplicates
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UtilitySheets {
    sheets: Vec<(&'static str, String)>,
}

impl UtilitySheets {
    pub fn new() -> Self {
        UtilitySheets { sheets: Vec::new() }
    }

    pub fn inject(&mut self, id: &'static str, css: String) {
        match self.sheets.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, current)) => *current = css,
            None => self.sheets.push((id, css)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.sheets
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, css)| css.as_str())
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.sheets.iter().map(|(id, css)| (*id, css.as_str()))
    }
}

fn type_rule(tokens: &TypeTokens, family: Option<&str>) -> String {
    let family = family
        .map(|family| format!("font-family:var({family});"))
        .unwrap_or_default();

    format!(
        ".{}{{{family}font-size:var({});line-height:var({});letter-spacing:var({});font-weight:var({}, {DEFAULT_FONT_WEIGHT});font-style:var({}, {DEFAULT_FONT_STYLE});}}",
        tokens.class,
        tokens.font_size,
        tokens.line_height,
        tokens.letter_spacing,
        tokens.font_weight,
        tokens.font_style,
    )
}

pub fn typography_css() -> String {
    let primary: Vec<String> = all_type_tokens()
        .map(|(_, _, tokens)| format!(".{}", tokens.class))
        .collect();

    let mut lines = vec![format!(
        "{}{{font-family:var({FONT_FAMILY_PRIMARY});}}",
        primary.join(",")
    )];

    lines.extend(all_type_tokens().map(|(_, _, tokens)| type_rule(&tokens, None)));
    lines.push(type_rule(&accent_tokens(), Some(FONT_FAMILY_ACCENT)));

    lines.join("\n")
}

// the fixed utilities, plus one rule for any radius key the token document adds
pub fn radius_css(tree: &TokenNode) -> String {
    let mut lines: Vec<String> = RADIUS_UTILITIES
        .iter()
        .map(|(class, var, fallback)| format!(".{class} {{ border-radius: var({var}, {fallback}); }}"))
        .collect();

    for (key, leaf) in radius_leaves(tree) {
        let class = radius_class(key);
        if RADIUS_UTILITIES.iter().any(|(known, _, _)| *known == class) {
            continue;
        }

        let rule = match leaf.value.as_deref().filter(|v| !v.trim().is_empty()) {
            Some(value) => format!(".{class} {{ border-radius: var({}, {value}); }}", leaf.css_var),
            None => format!(".{class} {{ border-radius: var({}); }}", leaf.css_var),
        };
        lines.push(rule);
    }

    lines.join("\n")
}

pub fn shadow_css() -> String {
    SHADOWS
        .iter()
        .map(|(class, var, _)| format!(".{class} {{ box-shadow: var({var}); }}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn inject_typography(sheets: &mut UtilitySheets) {
    sheets.inject(TYPOGRAPHY_SHEET, typography_css());
}

pub fn inject_radius(sheets: &mut UtilitySheets, tree: &TokenNode) {
    sheets.inject(RADIUS_SHEET, radius_css(tree));
}

pub fn inject_shadows(sheets: &mut UtilitySheets) {
    sheets.inject(SHADOW_SHEET, shadow_css());
}

pub fn inject_all(sheets: &mut UtilitySheets, tree: &TokenNode) {
    inject_typography(sheets);
    inject_shadows(sheets);
    inject_radius(sheets, tree);

    debug!(sheets = sheets.len(), "injected utility sheets");
}
