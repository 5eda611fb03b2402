use crate::vars::StyleVars;

// (utility class, variable, caption)
pub const SHADOWS: [(&str, &str, &str); 6] = [
    ("shadow-sm", "--shadow-sm", "subtle"),
    ("shadow", "--shadow", "default"),
    ("shadow-md", "--shadow-md", "medium"),
    ("shadow-lg", "--shadow-lg", "large"),
    ("shadow-xl", "--shadow-xl", "xl"),
    ("shadow-2xl", "--shadow-2xl", "2xl"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct ShadowCard {
    pub class: &'static str,
    pub label: &'static str,
    pub resolved: String,
}

pub fn shadow_cards(vars: &StyleVars) -> Vec<ShadowCard> {
    SHADOWS
        .iter()
        .map(|&(class, css_var, label)| ShadowCard {
            class,
            label,
            resolved: vars.display(css_var),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_card_per_shadow_class() {
        let mut vars = StyleVars::new();
        vars.set("--shadow-md", "0 4px 6px rgba(0, 0, 0, 0.1)");

        let cards = shadow_cards(&vars);

        assert_eq!(cards.len(), 6);
        assert_eq!(cards[2].class, "shadow-md");
        assert_eq!(cards[2].resolved, "0 4px 6px rgba(0, 0, 0, 0.1)");
        assert_eq!(cards, shadow_cards(&vars));
    }
}
