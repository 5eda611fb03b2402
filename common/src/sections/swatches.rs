use crate::color::is_css_color;
use crate::seed::PALETTE;
use crate::vars::{MISSING, StyleVars};

pub const INVALID: &str = "(invalid)";
pub const TRANSPARENT: &str = "transparent";

pub struct SwatchGroupDef {
    pub title: &'static str,
    pub vars: &'static [&'static str],
}

// ramps run lightest to darkest; neutrals end in white/black instead of lightest/darkest
pub const SWATCH_GROUPS: [SwatchGroupDef; 6] = [
    SwatchGroupDef {
        title: "Neutrals",
        vars: &[
            "--neutral-white",
            "--neutral-extra-light",
            "--neutral-very-light",
            "--neutral-light",
            "--neutral-medium",
            "--neutral-dark",
            "--neutral-very-dark",
            "--neutral-black",
        ],
    },
    SwatchGroupDef {
        title: "Primary",
        vars: &[
            "--primary-lightest",
            "--primary-extra-light",
            "--primary-very-light",
            "--primary-light",
            "--primary-medium",
            "--primary-dark",
            "--primary-very-dark",
            "--primary-darkest",
        ],
    },
    SwatchGroupDef {
        title: "Green",
        vars: &[
            "--green-lightest",
            "--green-extra-light",
            "--green-very-light",
            "--green-light",
            "--green-medium",
            "--green-dark",
            "--green-very-dark",
            "--green-darkest",
        ],
    },
    SwatchGroupDef {
        title: "Yellow",
        vars: &[
            "--yellow-lightest",
            "--yellow-extra-light",
            "--yellow-very-light",
            "--yellow-light",
            "--yellow-medium",
            "--yellow-dark",
            "--yellow-very-dark",
            "--yellow-darkest",
        ],
    },
    SwatchGroupDef {
        title: "Red",
        vars: &[
            "--red-lightest",
            "--red-extra-light",
            "--red-very-light",
            "--red-light",
            "--red-medium",
            "--red-dark",
            "--red-very-dark",
            "--red-darkest",
        ],
    },
    SwatchGroupDef {
        title: "Assorted",
        vars: &[
            "--dark-blue",
            "--off-white",
            "--disabled-field",
            "--light-gray",
            "--gray-tag",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwatchStatus {
    Valid,
    Invalid,
    Missing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    pub name: &'static str,
    pub label: String,
    pub background: String,
    pub status: SwatchStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwatchGroup {
    pub title: &'static str,
    pub swatches: Vec<Swatch>,
}

// invalid or missing values never reach the preview, it falls back to transparent
fn swatch(name: &'static str, value: Option<String>, paint: impl FnOnce() -> String) -> Swatch {
    match value {
        Some(value) if is_css_color(&value) => Swatch {
            name,
            label: value,
            background: paint(),
            status: SwatchStatus::Valid,
        },
        Some(_) => Swatch {
            name,
            label: String::from(INVALID),
            background: String::from(TRANSPARENT),
            status: SwatchStatus::Invalid,
        },
        None => Swatch {
            name,
            label: String::from(MISSING),
            background: String::from(TRANSPARENT),
            status: SwatchStatus::Missing,
        },
    }
}

// one card per variable of every ramp, read from the applied tokens
pub fn swatch_groups(vars: &StyleVars) -> Vec<SwatchGroup> {
    SWATCH_GROUPS
        .iter()
        .map(|group| SwatchGroup {
            title: group.title,
            swatches: group
                .vars
                .iter()
                .map(|&name| swatch(name, vars.resolve(name), || format!("var({name})")))
                .collect(),
        })
        .collect()
}

// the literal seed palette, independent of the token document
pub fn palette_groups() -> Vec<SwatchGroup> {
    PALETTE
        .iter()
        .map(|group| SwatchGroup {
            title: group.title,
            swatches: group
                .colors
                .iter()
                .map(|&(name, value)| {
                    let value = Some(value.trim().to_owned()).filter(|v| !v.is_empty());
                    let paint = value.clone().unwrap_or_default();
                    swatch(name, value, move || paint)
                })
                .collect(),
        })
        .collect()
}
