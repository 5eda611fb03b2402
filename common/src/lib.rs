pub mod color;
pub mod commit;
pub mod config;
pub mod inbox;
pub mod sections;
pub mod seed;
pub mod tabs;
pub mod theme;
pub mod tokens;
pub mod typography;
pub mod utilities;
pub mod vars;

use api::tokens::TokenNode;

use crate::{
    tokens::apply_tokens,
    utilities::{UtilitySheets, inject_all},
    vars::StyleVars,
};

// everything the page derives from one token document
//
// rebuilt from scratch on every load; nothing mutates it afterwards
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppliedTokens {
    pub tree: TokenNode,
    pub vars: StyleVars,
    pub sheets: UtilitySheets,
}

impl AppliedTokens {
    pub fn new(tree: TokenNode) -> Self {
        let mut vars = StyleVars::new();
        apply_tokens(&tree, &mut vars);

        let mut sheets = UtilitySheets::new();
        inject_all(&mut sheets, &tree);

        AppliedTokens { tree, vars, sheets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_still_gets_backfills_and_utilities() {
        let applied = AppliedTokens::new(TokenNode::Ignored);

        assert_eq!(applied.vars.get("--Line-Height-label-md"), Some("16px"));
        assert_eq!(applied.vars.get("--color-bg"), Some("var(--neutral-white, #ffffff)"));
        assert_eq!(applied.vars.resolve("--color-bg").as_deref(), Some("#ffffff"));
        assert_eq!(applied.sheets.len(), 3);
    }
}
