//! Bot identity resolution from the embedding script reference.

use chatwidget_common::BotIdentity;
use tracing::debug;

/// Query parameter on the script URL that names the bot.
pub const BOT_QUERY_PARAM: &str = "bot";

/// Resolve which bot this widget represents from its script source URL.
///
/// Reads the first `bot` query parameter. A missing or empty parameter is a
/// valid case and yields the default identity.
pub fn resolve_bot_identity(script_src: &str) -> BotIdentity {
    match query_param(script_src, BOT_QUERY_PARAM) {
        Some(name) if !name.is_empty() => BotIdentity::new(name),
        _ => {
            debug!(script_src, "no bot parameter on script source, using default");
            BotIdentity::default()
        }
    }
}

/// First value of `name` in the query string of `url`, form-decoded.
fn query_param(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| form_decode(key) == name)
        .map(|(_, value)| form_decode(value))
}

fn form_decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_bot_parameter() {
        let bot = resolve_bot_identity("http://127.0.0.1:5000/static/widget.js?bot=support");
        assert_eq!(bot.as_str(), "support");
    }

    #[test]
    fn missing_query_uses_default() {
        let bot = resolve_bot_identity("http://127.0.0.1:5000/static/widget.js");
        assert_eq!(bot.as_str(), "default_bot");
    }

    #[test]
    fn missing_parameter_uses_default() {
        let bot = resolve_bot_identity("/static/widget.js?theme=dark&v=2");
        assert_eq!(bot.as_str(), "default_bot");
    }

    #[test]
    fn empty_parameter_uses_default() {
        let bot = resolve_bot_identity("/static/widget.js?bot=");
        assert_eq!(bot.as_str(), "default_bot");
    }

    #[test]
    fn first_occurrence_wins() {
        let bot = resolve_bot_identity("/widget.js?v=1&bot=sales&bot=support");
        assert_eq!(bot.as_str(), "sales");
    }

    #[test]
    fn value_is_form_decoded() {
        let bot = resolve_bot_identity("/widget.js?bot=help%20desk");
        assert_eq!(bot.as_str(), "help desk");
        let bot = resolve_bot_identity("/widget.js?bot=help+desk");
        assert_eq!(bot.as_str(), "help desk");
    }

    #[test]
    fn fragment_is_ignored() {
        let bot = resolve_bot_identity("/widget.js?bot=faq#section");
        assert_eq!(bot.as_str(), "faq");
    }

    #[test]
    fn empty_source_uses_default() {
        assert_eq!(resolve_bot_identity("").as_str(), "default_bot");
    }
}
