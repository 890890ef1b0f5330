//! Guards for values written into generated stylesheet text.
//!
//! Inline style properties are set one by one and cannot leak into other
//! rules, but the placeholder rule is raw CSS text built from a theme value
//! that came over the network. A color is accepted only in one of these forms:
//! `#rgb`/`#rgba`/`#rrggbb`/`#rrggbbaa`, a CSS color function (`rgb()`,
//! `hsl()`, `hwb()`, `lab()`, `lch()`, `oklab()`, `oklch()`, `color()`) in
//! either comma or space syntax with an optional `/ alpha`, or a bare keyword
//! such as `white`.

/// Why a color was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnsafeColor {
    #[error("empty color value")]
    Empty,
    #[error("color contains forbidden text '{0}'")]
    Forbidden(String),
    #[error("malformed hex color '{0}'")]
    BadHex(String),
    #[error("malformed color function '{0}'")]
    BadFunction(String),
    #[error("unrecognized color '{0}'")]
    Unrecognized(String),
}

/// Characters that would end a declaration or open markup.
const FORBIDDEN_CHARS: [char; 7] = [';', '{', '}', '<', '>', '"', '\\'];

/// Substrings that make a value active instead of a plain color.
const FORBIDDEN_WORDS: [&str; 6] = [
    "url(",
    "expression(",
    "javascript:",
    "@import",
    "behavior:",
    "-moz-binding",
];

const MAX_KEYWORD_LEN: usize = 32;

/// Check that `value` is a plain CSS color, safe to embed in a rule.
pub fn validate_css_color(value: &str) -> Result<(), UnsafeColor> {
    let value = value.trim();
    if value.is_empty() {
        return Err(UnsafeColor::Empty);
    }

    if let Some(ch) = value.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        return Err(UnsafeColor::Forbidden(ch.to_string()));
    }
    let lower = value.to_ascii_lowercase();
    if let Some(word) = FORBIDDEN_WORDS.iter().find(|w| lower.contains(**w)) {
        return Err(UnsafeColor::Forbidden((*word).to_string()));
    }

    if let Some(digits) = value.strip_prefix('#') {
        let valid = matches!(digits.len(), 3 | 4 | 6 | 8)
            && digits.chars().all(|c| c.is_ascii_hexdigit());
        return if valid {
            Ok(())
        } else {
            Err(UnsafeColor::BadHex(value.to_string()))
        };
    }

    if let Some((name, rest)) = lower.split_once('(') {
        return check_function(name, rest, value);
    }

    if value.len() <= MAX_KEYWORD_LEN && value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Ok(());
    }

    Err(UnsafeColor::Unrecognized(value.to_string()))
}

/// Turn a bot identity into something usable inside a class selector.
///
/// ASCII letters, digits, `-` and `_` pass through; anything else becomes `_`.
pub fn css_identifier(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Color functions whose arguments are plain numbers, keywords or `none`.
const COLOR_FUNCTIONS: [&str; 10] = [
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color",
];

/// Units allowed on a numeric argument.
const ARG_UNITS: [&str; 5] = ["%", "deg", "grad", "rad", "turn"];

fn check_function(name: &str, rest: &str, original: &str) -> Result<(), UnsafeColor> {
    let bad = || UnsafeColor::BadFunction(original.to_string());

    let name = name.trim();
    if !COLOR_FUNCTIONS.contains(&name) {
        return Err(bad());
    }
    let args = rest.strip_suffix(')').ok_or_else(bad)?;
    if args.contains(['(', ')']) {
        return Err(bad());
    }

    // `rgb(1, 2, 3)`, `rgb(1 2 3)` and `rgb(1 2 3 / 50%)` all tokenize alike.
    let tokens: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    let (min, max) = if name == "color" { (4, 5) } else { (3, 4) };
    if tokens.len() < min || tokens.len() > max {
        return Err(bad());
    }
    if args.matches('/').count() > 1 {
        return Err(bad());
    }

    let valid_arg = |token: &str| {
        if token == "none" {
            return true;
        }
        let number = ARG_UNITS
            .iter()
            .find_map(|unit| token.strip_suffix(unit))
            .unwrap_or(token);
        number.parse::<f64>().is_ok()
    };
    // `color()` opens with a color space name, e.g. `display-p3`.
    let (space, numbers) = if name == "color" {
        (Some(tokens[0]), &tokens[1..])
    } else {
        (None, &tokens[..])
    };
    let space_ok = space.map_or(true, |s| {
        s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    if space_ok && numbers.iter().all(|t| valid_arg(*t)) {
        Ok(())
    } else {
        Err(bad())
    }
}
