use crate::vars::StyleVars;
use api::tokens::{TokenLeaf, TokenNode};

pub const RADIUS_GROUP: &str = "radius";

// the radius utilities that always exist: (class, variable, fallback)
pub const RADIUS_UTILITIES: [(&str, &str, &str); 8] = [
    ("rounded-none", "--radius-none", "0px"),
    ("rounded-sm", "--radius-sm", "2px"),
    ("rounded", "--radius", "4px"),
    ("rounded-md", "--radius-md", "6px"),
    ("rounded-lg", "--radius-lg", "8px"),
    ("rounded-xl", "--radius-xl", "12px"),
    ("rounded-2xl", "--radius-2xl", "16px"),
    ("rounded-full", "--radius-full", "9999px"),
];

// previews cycle through these so neighbouring cards are distinguishable
pub const PREVIEW_COLORS: [&str; 6] = [
    "--primary-medium",
    "--green-medium",
    "--yellow-medium",
    "--red-medium",
    "--primary-dark",
    "--green-dark",
];

#[derive(Clone, Debug, PartialEq)]
pub struct RadiusCard {
    pub class: String,
    pub preview_style: String,
    // "<variable> → <resolved value>"
    pub label: String,
}

// the `default` key maps onto the bare utility
pub fn radius_class(key: &str) -> String {
    match key {
        "default" => String::from("rounded"),
        _ => format!("rounded-{key}"),
    }
}

// every leaf directly under the tree's radius group, in document order
pub fn radius_leaves(tree: &TokenNode) -> Vec<(&str, &TokenLeaf)> {
    tree.group(RADIUS_GROUP)
        .map(TokenNode::children)
        .unwrap_or_default()
        .iter()
        .filter_map(|(key, node)| match node {
            TokenNode::Leaf(leaf) => Some((key.as_str(), leaf)),
            _ => None,
        })
        .collect()
}

pub fn radius_cards(tree: &TokenNode, vars: &StyleVars) -> Vec<RadiusCard> {
    radius_leaves(tree)
        .into_iter()
        .zip(PREVIEW_COLORS.iter().cycle())
        .map(|((key, leaf), color)| RadiusCard {
            class: radius_class(key),
            preview_style: format!("width: 200px; height: 200px; background: var({color});"),
            label: format!("{} → {}", leaf.css_var, vars.display(&leaf.css_var)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::apply_tokens;

    fn tree() -> TokenNode {
        serde_json::from_str(
            r#"{ "radius": {
                "none": { "cssVar": "--radius-none", "value": "0px" },
                "default": { "cssVar": "--radius", "value": "4px" },
                "lg": { "cssVar": "--radius-lg", "value": "" },
                "notes": "ignored",
                "full": { "cssVar": "--radius-full", "value": "100%" }
            } }"#,
        )
        .unwrap()
    }

    #[test]
    fn cards_follow_document_order() {
        let tokens = tree();
        let mut vars = StyleVars::new();
        apply_tokens(&tokens, &mut vars);

        let cards = radius_cards(&tokens, &vars);
        let classes: Vec<&str> = cards.iter().map(|c| c.class.as_str()).collect();

        assert_eq!(classes, vec!["rounded-none", "rounded", "rounded-lg", "rounded-full"]);
        assert_eq!(cards[3].label, "--radius-full → 9999px");
        assert_eq!(cards[2].label, "--radius-lg → (missing)");
        assert!(cards[1].preview_style.contains("var(--green-medium)"));
    }

    #[test]
    fn tree_without_radius_renders_nothing() {
        assert!(radius_cards(&TokenNode::Ignored, &StyleVars::new()).is_empty());
    }

    #[test]
    fn rendering_is_idempotent() {
        let tokens = tree();
        let vars = StyleVars::new();

        assert_eq!(radius_cards(&tokens, &vars), radius_cards(&tokens, &vars));
    }
}
