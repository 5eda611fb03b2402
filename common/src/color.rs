use std::sync::LazyLock;

use regex::Regex;

// whether a string would be accepted as a css <color> by a browser's style parser
//
// this mirrors what assigning to `style.color` accepts closely enough for swatch previews:
// hex notation, named and system colors, keywords, the functional notations (including
// relative `from` colors), `color-mix()` and `light-dark()`
pub fn is_css_color(value: &str) -> bool {
    is_color(&value.trim().to_ascii_lowercase())
}

// expects trimmed, lowercased input
fn is_color(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }

    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    if KEYWORDS.contains(&value)
        || NAMED_COLORS.binary_search(&value).is_ok()
        || SYSTEM_COLORS.binary_search(&value).is_ok()
    {
        return true;
    }

    if let Some(args) = function_args(value, "light-dark") {
        return is_light_dark(args);
    }

    if let Some(args) = function_args(value, "color-mix") {
        return is_color_mix(args);
    }

    if let Some(caps) = RELATIVE_COLOR.captures(value) {
        return caps.get(1).is_some_and(|rest| is_relative(rest.as_str()));
    }

    COLOR_FUNCTIONS.iter().any(|re| re.is_match(value))
}

// the text between `name(` and the matching final `)`
fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

// splits on `sep` outside of parentheses; None when the parentheses don't balance
fn split_top_level(args: &str, sep: impl Fn(char) -> bool) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, c) in args.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            c if depth == 0 && sep(c) => {
                parts.push(args[start..idx].trim());
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }

    parts.push(args[start..].trim());
    Some(parts)
}

fn is_light_dark(args: &str) -> bool {
    match split_top_level(args, |c| c == ',').as_deref() {
        Some([light, dark]) => is_color(light) && is_color(dark),
        _ => false,
    }
}

// color-mix(in <space> [<hue method>], <color> [<pct>], <color> [<pct>])
fn is_color_mix(args: &str) -> bool {
    let parts = match split_top_level(args, |c| c == ',') {
        Some(parts) if parts.len() == 3 => parts,
        _ => return false,
    };

    COLOR_SPACE.is_match(parts[0]) && parts[1..].iter().all(|part| is_mix_component(part))
}

fn is_mix_component(part: &str) -> bool {
    let tokens = match split_top_level(part, char::is_whitespace) {
        Some(tokens) => tokens.into_iter().filter(|t| !t.is_empty()).collect::<Vec<_>>(),
        None => return false,
    };

    match tokens.as_slice() {
        [color] => is_color(color),
        [first, second] if PERCENTAGE.is_match(second) => is_color(first),
        [first, second] if PERCENTAGE.is_match(first) => is_color(second),
        _ => false,
    }
}

// `<origin color> <channel expressions>`; channels can be keywords or calc(), so only
// their presence is checked
fn is_relative(rest: &str) -> bool {
    let tokens = match split_top_level(rest, char::is_whitespace) {
        Some(tokens) => tokens.into_iter().filter(|t| !t.is_empty()).collect::<Vec<_>>(),
        None => return false,
    };

    match tokens.split_first() {
        Some((origin, channels)) => is_color(origin) && !channels.is_empty(),
        None => false,
    }
}

const KEYWORDS: [&str; 7] = [
    "transparent",
    "currentcolor",
    "inherit",
    "initial",
    "unset",
    "revert",
    "revert-layer",
];

// sorted, for binary_search
const SYSTEM_COLORS: [&str; 42] = [
    "accentcolor", "accentcolortext", "activeborder", "activecaption", "activetext",
    "appworkspace", "background", "buttonborder", "buttonface", "buttonhighlight",
    "buttonshadow", "buttontext", "canvas", "canvastext", "captiontext", "field", "fieldtext",
    "graytext", "highlight", "highlighttext", "inactiveborder", "inactivecaption",
    "inactivecaptiontext", "infobackground", "infotext", "linktext", "mark", "marktext", "menu",
    "menutext", "scrollbar", "selecteditem", "selecteditemtext", "threeddarkshadow",
    "threedface", "threedhighlight", "threedlightshadow", "threedshadow", "visitedtext",
    "window", "windowframe", "windowtext",
];

const NUMBER: &str = r"[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:e[+-]?\d+)?";

static RELATIVE_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:rgba?|hsla?|hwb|(?:ok)?lab|(?:ok)?lch|color)\(\s*from\s+(.+)\)$")
        .expect("relative color pattern compiles")
});

static COLOR_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^in\s+[a-z][a-z0-9-]*(?:\s+(?:shorter|longer|increasing|decreasing)\s+hue)?$")
        .expect("color space pattern compiles")
});

static PERCENTAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{NUMBER}%$")).expect("percentage pattern compiles")
});

static COLOR_FUNCTIONS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let channel = format!(r"(?:{NUMBER}%?|none)");
    let hue = format!(r"(?:{NUMBER}(?:deg|rad|grad|turn)?|none)");

    let legacy = |name: &str, first: &str| {
        format!(r"^{name}\(\s*{first}\s*,\s*{channel}\s*,\s*{channel}\s*(?:,\s*{channel}\s*)?\)$")
    };
    let modern = |name: &str, first: &str| {
        format!(r"^{name}\(\s*{first}\s+{channel}\s+{channel}\s*(?:/\s*{channel}\s*)?\)$")
    };

    [
        legacy("rgba?", &channel),
        modern("rgba?", &channel),
        legacy("hsla?", &hue),
        modern("hsla?", &hue),
        modern("hwb", &hue),
        modern("(?:ok)?lab", &channel),
        modern("(?:ok)?lch", &channel),
        String::from(r"^color\(\s*[a-z][a-z0-9-]*(?:\s+[^()\s]+){3}\s*(?:/\s*[^()\s]+\s*)?\)$"),
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

// sorted, for binary_search
const NAMED_COLORS: [&str; 148] = [
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_are_sorted() {
        assert!(NAMED_COLORS.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(SYSTEM_COLORS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_color_function_compiles() {
        assert_eq!(COLOR_FUNCTIONS.len(), 8);
    }

    #[test]
    fn accepts_common_notations() {
        for value in [
            "#fff",
            "#FFFFFF",
            "#101218cc",
            "  #DADEE8 ",
            "RebeccaPurple",
            "transparent",
            "currentColor",
            "rgb(255, 0, 0)",
            "rgba(0,0,0,0.05)",
            "rgb(0 0 0 / 50%)",
            "hsl(210deg 40% 96%)",
            "hsla(210, 40%, 96%, .5)",
            "oklch(70% 0.1 250)",
            "color(display-p3 1 0.5 0)",
            "Canvas",
            "buttontext",
            "light-dark(#fff, #000)",
            "light-dark(white, rgb(0 0 0))",
            "color-mix(in srgb, red 50%, blue)",
            "color-mix(in oklch longer hue, 30% hsl(210 40% 96%), blue)",
            "rgb(from red r g b)",
            "hsl(from rgb(0 0 0) h s calc(l + 20%))",
        ] {
            assert!(is_css_color(value), "{value} should be a color");
        }
    }

    #[test]
    fn rejects_garbage() {
        for value in [
            "",
            "   ",
            "notacolor",
            "#ggg",
            "#12345",
            "rgb()",
            "rgb(1, 2)",
            "rgb(red, green, blue)",
            "light-dark(#fff)",
            "color-mix(srgb, red, blue)",
            "color-mix(in srgb, red 50%)",
            "rgb(from notacolor r g b)",
            "rgb(from red)",
            "(missing)",
            "16px",
        ] {
            assert!(!is_css_color(value), "{value} should not be a color");
        }
    }
}
