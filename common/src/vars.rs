use std::collections::BTreeMap;

// placeholder shown wherever a variable has no usable value
pub const MISSING: &str = "(missing)";

// references deeper than this are treated as a cycle
const MAX_REFERENCE_DEPTH: usize = 16;

// the set of custom properties installed on the document root
//
// the page used to write these straight onto document.documentElement; instead the root
// component owns one of these and every section reads it explicitly
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleVars {
    vars: BTreeMap<String, String>,
}

impl StyleVars {
    pub fn new() -> Self {
        StyleVars {
            vars: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).is_none_or(|value| value.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // the value the variable currently resolves to, with every var() reference substituted
    //
    // like a computed custom property, a reference to an unset variable without a fallback
    // poisons the whole value
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.resolve_at(name, 0)
    }

    pub fn display(&self, name: &str) -> String {
        self.resolve(name).unwrap_or_else(|| String::from(MISSING))
    }

    pub fn to_css(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in self.iter() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('}');
        css
    }

    fn resolve_at(&self, name: &str, depth: usize) -> Option<String> {
        if depth > MAX_REFERENCE_DEPTH {
            return None;
        }

        let raw = self.get(name)?.trim();
        if raw.is_empty() {
            return None;
        }

        self.substitute(raw, depth).filter(|value| !value.is_empty())
    }

    fn substitute(&self, text: &str, depth: usize) -> Option<String> {
        let mut out = String::new();
        let mut rest = text;

        while let Some(start) = rest.find("var(") {
            out.push_str(&rest[..start]);

            let args_start = start + "var(".len();
            let close = args_start + matching_paren(&rest[args_start..])?;
            let args = &rest[args_start..close];

            let (reference, fallback) = match top_level_comma(args) {
                Some(idx) => (args[..idx].trim(), Some(args[idx + 1..].trim())),
                None => (args.trim(), None),
            };

            let value = match (self.resolve_at(reference, depth + 1), fallback) {
                (Some(value), _) => value,
                (None, Some(fallback)) => self.substitute(fallback, depth + 1)?,
                (None, None) => return None,
            };

            out.push_str(&value);
            rest = &rest[close + 1..];
        }

        out.push_str(rest);
        Some(out.trim().to_owned())
    }
}

// byte offset of the paren closing an already-opened one
fn matching_paren(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (idx, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

fn top_level_comma(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some(idx),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_resolve_trimmed() {
        let mut vars = StyleVars::new();
        vars.set("--space-4", "  16px ");

        assert_eq!(vars.resolve("--space-4").as_deref(), Some("16px"));
        assert_eq!(vars.display("--space-5"), MISSING);
    }

    #[test]
    fn references_and_fallbacks_are_substituted() {
        let mut vars = StyleVars::new();
        vars.set("--neutral-light", "#DADEE8");
        vars.set("--color-border", "var(--neutral-light)");
        vars.set("--color-bg", "var(--neutral-white, #ffffff)");
        vars.set("--shadow", "0 1px 2px var(--shadow-color, rgba(0, 0, 0, 0.1))");

        assert_eq!(vars.resolve("--color-border").as_deref(), Some("#DADEE8"));
        assert_eq!(vars.resolve("--color-bg").as_deref(), Some("#ffffff"));
        assert_eq!(
            vars.resolve("--shadow").as_deref(),
            Some("0 1px 2px rgba(0, 0, 0, 0.1)")
        );
    }

    #[test]
    fn unresolvable_references_are_missing() {
        let mut vars = StyleVars::new();
        vars.set("--color-text", "var(--neutral-black)");
        vars.set("--a", "var(--b)");
        vars.set("--b", "var(--a)");
        vars.set("--blank", "   ");

        assert_eq!(vars.resolve("--color-text"), None);
        assert_eq!(vars.resolve("--a"), None);
        assert_eq!(vars.display("--blank"), MISSING);
        assert!(vars.is_blank("--blank"));
        assert!(vars.is_blank("--unset"));
    }

    #[test]
    fn css_block_lists_every_variable() {
        let mut vars = StyleVars::new();
        vars.set("--b", "2px");
        vars.set("--a", "1px");

        assert_eq!(vars.to_css(":root"), ":root {\n  --a: 1px;\n  --b: 2px;\n}");
    }
}
