use std::path::PathBuf;

use clap::Parser;

/// Headless host for the embeddable chat widget.
///
/// Embeds one widget, then types every stdin line into it. `/toggle` opens
/// or closes the panel, `/transcript` prints the conversation, `/quit` exits.
#[derive(Parser, Debug)]
#[command(name = "chatwidget", version, about)]
pub struct Args {
    /// Source URL of the embedding script; its `bot` query parameter picks the bot.
    #[arg(long, default_value = "http://127.0.0.1:5000/static/widget.js")]
    pub script_src: String,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Open the chat panel once the widget is ready.
    #[arg(long)]
    pub open: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["chatwidget"]);
        assert_eq!(args.script_src, "http://127.0.0.1:5000/static/widget.js");
        assert!(args.config.is_none());
        assert!(!args.open);
    }

    #[test]
    fn all_flags() {
        let args = Args::parse_from([
            "chatwidget",
            "--script-src",
            "https://cdn.example.com/widget.js?bot=support",
            "--config",
            "/tmp/widget.toml",
            "--log-level",
            "debug",
            "--open",
        ]);
        assert!(args.script_src.ends_with("bot=support"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/widget.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.open);
    }
}
