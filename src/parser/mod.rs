//! Parsing of user-authored keyboard definitions.
//!
//! Custom keyboards are written in YAML; keys use short attribute
//! expressions such as `character(q)` or `percentage(0.13)`.

pub mod custom_keyboard;
pub mod expression;

// Re-export commonly used functions
pub use custom_keyboard::{parse_custom_keyboards, parse_custom_keyboards_str};
pub use expression::{parse_attribute, parse_key_action, parse_keyboard_type, parse_width_unit};
