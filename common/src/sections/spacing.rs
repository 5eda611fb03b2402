use crate::vars::StyleVars;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpacingEntry {
    pub key: &'static str,
    pub css_var: &'static str,
    pub px: &'static str,
}

macro_rules! spacing {
    ($( ($key:literal, $var:literal, $px:literal) ),* $(,)?) => {
        [$( SpacingEntry { key: $key, css_var: $var, px: $px } ),*]
    };
}

pub const SPACING: [SpacingEntry; 34] = spacing![
    ("0", "--space-0", "0"),
    ("0.5", "--space-0_5", "2px"),
    ("1", "--space-1", "4px"),
    ("1.5", "--space-1_5", "6px"),
    ("2", "--space-2", "8px"),
    ("2.5", "--space-2_5", "10px"),
    ("3", "--space-3", "12px"),
    ("3.5", "--space-3_5", "14px"),
    ("4", "--space-4", "16px"),
    ("5", "--space-5", "20px"),
    ("6", "--space-6", "24px"),
    ("7", "--space-7", "28px"),
    ("8", "--space-8", "32px"),
    ("9", "--space-9", "36px"),
    ("10", "--space-10", "40px"),
    ("11", "--space-11", "44px"),
    ("12", "--space-12", "48px"),
    ("14", "--space-14", "56px"),
    ("16", "--space-16", "64px"),
    ("20", "--space-20", "80px"),
    ("24", "--space-24", "96px"),
    ("28", "--space-28", "112px"),
    ("32", "--space-32", "128px"),
    ("36", "--space-36", "144px"),
    ("40", "--space-40", "160px"),
    ("44", "--space-44", "176px"),
    ("48", "--space-48", "192px"),
    ("52", "--space-52", "208px"),
    ("56", "--space-56", "224px"),
    ("60", "--space-60", "240px"),
    ("64", "--space-64", "256px"),
    ("72", "--space-72", "288px"),
    ("80", "--space-80", "320px"),
    ("96", "--space-96", "384px"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct SpacingRow {
    pub key: &'static str,
    pub px: &'static str,
    // inline style for the bar, tracks the live variable
    pub bar_style: String,
    // what the variable resolves to right now
    pub resolved: String,
}

pub fn spacing_rows(vars: &StyleVars) -> Vec<SpacingRow> {
    SPACING
        .iter()
        .map(|entry| SpacingRow {
            key: entry.key,
            px: entry.px,
            bar_style: format!("width: var({});", entry.css_var),
            resolved: vars.display(entry.css_var),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::MISSING;

    #[test]
    fn rows_follow_the_static_scale() {
        let mut vars = StyleVars::new();
        vars.set("--space-4", "16px");

        let rows = spacing_rows(&vars);

        assert_eq!(rows.len(), SPACING.len());
        assert_eq!(rows[8].key, "4");
        assert_eq!(rows[8].bar_style, "width: var(--space-4);");
        assert_eq!(rows[8].resolved, "16px");
        assert_eq!(rows[0].resolved, MISSING);
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut vars = StyleVars::new();
        vars.set("--space-0_5", "2px");

        assert_eq!(spacing_rows(&vars), spacing_rows(&vars));
    }
}
