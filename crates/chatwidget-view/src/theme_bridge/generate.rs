//! Stylesheet generation for the input placeholder.

use super::sanitize::{css_identifier, validate_css_color, UnsafeColor};

const PLACEHOLDER_OPACITY: &str = "0.7";

/// Vendor spellings of the placeholder pseudo-element.
const PLACEHOLDER_PSEUDOS: [&str; 4] = [
    "::placeholder",
    "::-webkit-input-placeholder",
    "::-moz-placeholder",
    ":-ms-input-placeholder",
];

/// Class carried by one widget's input, scoping its placeholder rule.
pub fn input_class(bot: &str) -> String {
    format!("chat-input-{}", css_identifier(bot))
}

/// Stylesheet id of one widget's placeholder rule.
pub fn placeholder_style_id(bot: &str) -> String {
    format!("placeholder-style-{}", css_identifier(bot))
}

/// Generate the placeholder rule for inputs carrying `class`.
///
/// Returns an error if `color` fails sanitization.
pub fn generate_placeholder_css(class: &str, color: &str) -> Result<String, UnsafeColor> {
    validate_css_color(color)?;
    Ok(placeholder_rules(class, color.trim()))
}

/// Placeholder rule that takes its color from the input element itself.
pub fn generate_inherited_placeholder_css(class: &str) -> String {
    placeholder_rules(class, "inherit")
}

fn placeholder_rules(class: &str, color: &str) -> String {
    let mut css = String::new();
    for pseudo in PLACEHOLDER_PSEUDOS {
        css.push_str(&format!(
            ".{class}{pseudo} {{\n  color: {color} !important;\n  opacity: {PLACEHOLDER_OPACITY};\n}}\n"
        ));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_scoped_by_bot() {
        assert_eq!(input_class("support"), "chat-input-support");
        assert_eq!(placeholder_style_id("support"), "placeholder-style-support");
    }

    #[test]
    fn odd_bot_names_stay_valid_selectors() {
        assert_eq!(input_class("help desk"), "chat-input-help_desk");
        assert_eq!(placeholder_style_id("help desk"), "placeholder-style-help_desk");
    }

    #[test]
    fn placeholder_css_covers_all_vendor_pseudos() {
        let css = generate_placeholder_css("chat-input-support", "#123456").unwrap();
        assert!(css.contains(".chat-input-support::placeholder {"));
        assert!(css.contains(".chat-input-support::-webkit-input-placeholder {"));
        assert!(css.contains(".chat-input-support::-moz-placeholder {"));
        assert!(css.contains(".chat-input-support:-ms-input-placeholder {"));
        assert_eq!(css.matches("color: #123456 !important;").count(), 4);
        assert_eq!(css.matches("opacity: 0.7;").count(), 4);
    }

    #[test]
    fn placeholder_css_rejects_injection() {
        let result = generate_placeholder_css("chat-input-x", "red; } body { color: evil");
        assert!(result.is_err());
    }

    #[test]
    fn inherited_placeholder_css() {
        let css = generate_inherited_placeholder_css("chat-input-x");
        assert_eq!(css.matches("color: inherit !important;").count(), 4);
    }

    #[test]
    fn placeholder_css_accepts_keyword() {
        let css = generate_placeholder_css("chat-input-x", "black").unwrap();
        assert!(css.contains("color: black !important;"));
    }
}
