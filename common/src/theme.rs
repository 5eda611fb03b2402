use crate::vars::StyleVars;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    // text for the toggle button, i.e. where a click takes you
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }

    // (variable, light, dark)
    const PAIRS: [(&'static str, &'static str, &'static str); 7] = [
        ("--bg", "#ffffff", "#0f172a"),
        ("--text", "#111827", "#f8fafc"),
        ("--border", "#e5e7eb", "#1f2937"),
        ("--muted", "#6b7280", "#94a3b8"),
        ("--surface", "#f9fafb", "#020617"),
        ("--incoming", "#f3f4ff", "#1f1f2b"),
        ("--outgoing", "#dbeafe", "#26264c"),
    ];

    // the chrome variables for this theme; token variables are never touched
    pub fn vars(self) -> StyleVars {
        let mut vars = StyleVars::new();
        for (name, light, dark) in Self::PAIRS {
            vars.set(
                name,
                match self {
                    Self::Light => light,
                    Self::Dark => dark,
                },
            );
        }
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_every_chrome_variable() {
        let light = Theme::default().vars();
        let dark = Theme::default().toggled().vars();

        assert_eq!(light.get("--bg"), Some("#ffffff"));
        assert_eq!(dark.get("--bg"), Some("#0f172a"));
        assert_eq!(light.len(), dark.len());
        assert!(light.iter().zip(dark.iter()).all(|(l, d)| l.0 == d.0 && l.1 != d.1));
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggle_label(), "Dark mode");
    }
}
