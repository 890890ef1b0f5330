//! Stdin-driven host loop.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, warn};

use chatwidget_common::{Result, Role, WidgetEvent};
use chatwidget_runtime::{ChatWidget, UserAction};

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Transcript,
    Quit,
    /// Type the text into the input field and press Enter.
    Say(String),
}

pub fn parse_line(line: &str) -> Command {
    match line.trim() {
        "/toggle" => Command::Toggle,
        "/transcript" => Command::Transcript,
        "/quit" => Command::Quit,
        _ => Command::Say(line.to_string()),
    }
}

pub fn format_entry(role: Role, text: &str) -> String {
    match role {
        Role::User => format!("you: {text}"),
        Role::Bot => format!("bot: {text}"),
    }
}

/// Start `widget` and feed it stdin until EOF or `/quit`.
pub async fn run(widget: ChatWidget, open: bool) -> Result<()> {
    let mut events = widget.subscribe();
    widget.run().await?;
    if open {
        widget.dispatch(UserAction::ToggleClicked).await?;
    }
    drain_events(&mut events);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Command::Quit => break,
            Command::Toggle => widget.dispatch(UserAction::ToggleClicked).await?,
            Command::Transcript => {
                for (role, text) in widget.transcript() {
                    println!("{}", format_entry(role, &text));
                }
            }
            Command::Say(text) => {
                widget.dispatch(UserAction::InputChanged(text)).await?;
                widget
                    .dispatch(UserAction::KeyDown("Enter".into()))
                    .await?;
            }
        }
        drain_events(&mut events);
    }

    debug!("stdin closed");
    Ok(())
}

/// Print what the widget announced since the last call.
fn drain_events(events: &mut broadcast::Receiver<WidgetEvent>) {
    loop {
        match events.try_recv() {
            Ok(WidgetEvent::MessageAppended {
                role: Role::Bot,
                text,
            }) => println!("{}", format_entry(Role::Bot, &text)),
            Ok(WidgetEvent::PanelToggled { open }) => {
                println!("[panel {}]", if open { "open" } else { "closed" })
            }
            Ok(_) => {}
            Err(TryRecvError::Lagged(skipped)) => warn!(skipped, "console fell behind widget events"),
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
}
