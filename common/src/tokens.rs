use tracing::{Level, debug, instrument};

use crate::vars::StyleVars;
use api::tokens::TokenNode;

// variables some token exports leave out, and the values the utilities expect
const BACKFILLS: [(&str, &str); 2] = [
    ("--Line-Height-label-md", "16px"),
    ("--Letter-Spacing-label-md", "0.4px"),
];

// (variable, legacy value, replacement)
const LEGACY_REWRITES: [(&str, &str, &str); 1] = [("--radius-full", "100%", "9999px")];

// semantic aliases the page chrome relies on, only installed when nothing else set them
const ALIASES: [(&str, &str); 3] = [
    ("--color-bg", "var(--neutral-white, #ffffff)"),
    ("--color-text", "var(--neutral-black)"),
    ("--color-border", "var(--neutral-light)"),
];

// install every non-empty leaf of the tree as a style variable, then patch up the
// handful of variables the rest of the page depends on
#[instrument(level = Level::DEBUG, skip_all)]
pub fn apply_tokens(tree: &TokenNode, vars: &mut StyleVars) {
    let mut applied = 0usize;

    for leaf in tree.leaves() {
        match leaf.value.as_deref() {
            Some(value) if !value.is_empty() => {
                vars.set(leaf.css_var.as_str(), value);
                applied += 1;
            }
            _ => {}
        }
    }

    debug!(applied, "applied token leaves");

    backfill(vars);
}

fn backfill(vars: &mut StyleVars) {
    for (name, value) in BACKFILLS {
        if vars.is_blank(name) {
            debug!(name, value, "backfilling variable");
            vars.set(name, value);
        }
    }

    for (name, legacy, replacement) in LEGACY_REWRITES {
        if vars.get(name).is_some_and(|value| value.trim() == legacy) {
            debug!(name, legacy, replacement, "rewriting legacy value");
            vars.set(name, replacement);
        }
    }

    for (name, value) in ALIASES {
        if vars.is_blank(name) {
            vars.set(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(json: &str) -> TokenNode {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn non_empty_leaves_are_applied() {
        let tokens = tree(
            r##"{
                "color": {
                    "white": { "cssVar": "--neutral-white", "value": "#ffffff" },
                    "black": { "cssVar": "--neutral-black", "value": "#101218" }
                },
                "space": { "4": { "cssVar": "--space-4", "value": "16px" } }
            }"##,
        );

        let mut vars = StyleVars::new();
        apply_tokens(&tokens, &mut vars);

        assert_eq!(vars.get("--neutral-white"), Some("#ffffff"));
        assert_eq!(vars.get("--neutral-black"), Some("#101218"));
        assert_eq!(vars.get("--space-4"), Some("16px"));
    }

    #[test]
    fn leaves_inside_arrays_are_applied() {
        let tokens = tree(
            r##"{ "shadow": [ { "cssVar": "--shadow-sm", "value": "0 1px 2px #000" } ] }"##,
        );

        let mut vars = StyleVars::new();
        apply_tokens(&tokens, &mut vars);

        assert_eq!(vars.get("--shadow-sm"), Some("0 1px 2px #000"));
    }

    #[test]
    fn empty_and_null_leaves_are_skipped() {
        let tokens = tree(
            r#"{
                "a": { "cssVar": "--space-1", "value": "" },
                "b": { "cssVar": "--space-2", "value": null },
                "c": { "cssVar": "--space-3" }
            }"#,
        );

        let mut vars = StyleVars::new();
        vars.set("--space-1", "4px");
        apply_tokens(&tokens, &mut vars);

        assert_eq!(vars.get("--space-1"), Some("4px"));
        assert_eq!(vars.get("--space-2"), None);
        assert_eq!(vars.get("--space-3"), None);
    }

    #[test]
    fn label_md_metrics_are_backfilled() {
        let mut vars = StyleVars::new();
        apply_tokens(&TokenNode::Ignored, &mut vars);

        assert_eq!(vars.get("--Line-Height-label-md"), Some("16px"));
        assert_eq!(vars.get("--Letter-Spacing-label-md"), Some("0.4px"));
    }

    #[test]
    fn backfills_do_not_override_tokens() {
        let tokens = tree(
            r#"{ "lh": { "cssVar": "--Line-Height-label-md", "value": "18px" } }"#,
        );

        let mut vars = StyleVars::new();
        apply_tokens(&tokens, &mut vars);

        assert_eq!(vars.get("--Line-Height-label-md"), Some("18px"));
    }

    #[test]
    fn legacy_radius_full_is_rewritten() {
        let tokens = tree(r#"{ "radius": { "full": { "cssVar": "--radius-full", "value": "100%" } } }"#);

        let mut vars = StyleVars::new();
        apply_tokens(&tokens, &mut vars);

        assert_eq!(vars.get("--radius-full"), Some("9999px"));
    }

    #[test]
    fn aliases_only_fill_gaps() {
        let tokens = tree(r##"{ "bg": { "cssVar": "--color-bg", "value": "#000000" } }"##);

        let mut vars = StyleVars::new();
        apply_tokens(&tokens, &mut vars);

        assert_eq!(vars.get("--color-bg"), Some("#000000"));
        assert_eq!(vars.get("--color-text"), Some("var(--neutral-black)"));
        assert_eq!(vars.get("--color-border"), Some("var(--neutral-light)"));
    }
}
