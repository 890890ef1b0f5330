pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, WidgetError};
pub use events::{EventBus, WidgetEvent};
pub use id::{new_correlation_id, BotIdentity, SessionId, DEFAULT_BOT_IDENTITY};
pub use types::{Message, Role, ViewState};

pub type Result<T> = std::result::Result<T, WidgetError>;
