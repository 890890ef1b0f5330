//! Class names and fixed layout styles.
//!
//! Only theme-independent properties live here; everything color or font
//! related is written by `apply_theme`.

pub const USER_MESSAGE_CLASS: &str = "user-message";
pub const BOT_CONTAINER_CLASS: &str = "bot-message-container";
pub const BOT_MESSAGE_CLASS: &str = "bot-message";
pub const TYPING_CLASS: &str = "typing-indicator";
pub const AVATAR_CLASS: &str = "bot-avatar";

pub const PANEL_HIDDEN: &str = "none";
pub const PANEL_SHOWN: &str = "flex";

pub const TOGGLE_BUTTON: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "20px"),
    ("right", "20px"),
    ("z-index", "9999"),
    ("padding", "10px 16px"),
    ("border-radius", "25px"),
    ("border", "none"),
    ("color", "white"),
    ("font-weight", "600"),
    ("cursor", "pointer"),
    ("font-size", "14px"),
];

pub const PANEL: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "70px"),
    ("right", "20px"),
    ("width", "320px"),
    ("height", "400px"),
    ("border", "1px solid #ccc"),
    ("display", PANEL_HIDDEN),
    ("flex-direction", "column"),
    ("z-index", "9999"),
    ("padding", "10px"),
    ("font-size", "14px"),
    ("border-radius", "10px"),
    ("overflow", "hidden"),
];

pub const MESSAGE_LIST: &[(&str, &str)] = &[
    ("flex", "1"),
    ("overflow-y", "auto"),
    ("margin-bottom", "10px"),
    ("display", "flex"),
    ("flex-direction", "column"),
    ("gap", "8px"),
    ("scrollbar-width", "none"),
];

pub const INPUT_ROW: &[(&str, &str)] = &[("display", "flex")];

pub const INPUT: &[(&str, &str)] = &[
    ("flex", "1"),
    ("padding", "8px"),
    ("font-size", "14px"),
    ("border-radius", "4px"),
    ("border-style", "solid"),
    ("border-width", "1px"),
    ("outline", "none"),
];

pub const SEND_BUTTON: &[(&str, &str)] = &[
    ("margin-left", "6px"),
    ("padding", "8px 14px"),
    ("font-weight", "600"),
    ("border", "none"),
    ("color", "white"),
    ("border-radius", "4px"),
    ("cursor", "pointer"),
    ("font-size", "14px"),
];

pub const BUBBLE: &[(&str, &str)] = &[
    ("padding", "8px 12px"),
    ("border-radius", "12px"),
    ("white-space", "pre-wrap"),
    ("font-size", "14px"),
    ("line-height", "1.3"),
];

pub const USER_BUBBLE: &[(&str, &str)] = &[
    ("max-width", "80%"),
    ("align-self", "flex-end"),
    ("margin-left", "auto"),
];

pub const BOT_CONTAINER: &[(&str, &str)] = &[
    ("display", "flex"),
    ("align-items", "flex-start"),
    ("gap", "8px"),
    ("align-self", "flex-start"),
    ("max-width", "85%"),
];

pub const BOT_BUBBLE: &[(&str, &str)] = &[("flex", "1")];

pub const AVATAR: &[(&str, &str)] = &[
    ("width", "32px"),
    ("height", "32px"),
    ("border-radius", "50%"),
    ("flex-shrink", "0"),
    ("margin-top", "2px"),
    ("object-fit", "cover"),
];

pub const TYPING_TEXT: &[(&str, &str)] = &[
    ("font-style", "italic"),
    ("font-size", "13px"),
    ("padding", "8px 12px"),
    ("border-radius", "12px"),
];
